use sandbox::config::SandboxConfig;
use sandbox::objects::{BodyType, ObjectId, Shape, SimObject, SpecError, Vector2d};
use sandbox::sensing::{
    ComplexSensor, ContactPhase, EventRegistry, RegistryError, RobotGuid, SensorError,
    SensorEvent, SensorIdentifier, SensorSpec, SensorValue, Stimulus,
};
use serde_json::json;

use crate::testing::{build_sensor, given_sensor};

mod testing;

fn feed(registry: &mut EventRegistry, robot: &str, sensor: &SensorIdentifier, stimulus: Stimulus) {
    registry
        .dispatch(&RobotGuid::from(robot), sensor, &SensorEvent::new(stimulus))
        .unwrap();
}

fn value(registry: &EventRegistry, robot: &str, sensor: &SensorIdentifier) -> SensorValue {
    registry.get_value(&RobotGuid::from(robot), sensor).unwrap()
}

fn rejection(
    registry: &mut EventRegistry,
    robot: &str,
    sensor: &SensorIdentifier,
    stimulus: Stimulus,
) -> Option<RegistryError> {
    registry
        .dispatch(&RobotGuid::from(robot), sensor, &SensorEvent::new(stimulus))
        .err()
}

fn assert_analog(value: SensorValue, expected: f32) {
    let actual = value.analog().unwrap();
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_distance_reports_proportional_voltage() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "DistanceSensor", "channel": 2}),
    );

    feed(&mut registry, "robot-1", &sensor, Stimulus::Distance(Some(0.3)));

    assert_eq!(sensor, SensorIdentifier::from("DistanceSensor-2"));
    assert_analog(value(&registry, "robot-1", &sensor), 1.0);
}

#[test]
fn test_distance_saturates_beyond_range_and_when_nothing_in_view() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "DistanceSensor", "channel": 2, "maxRange": 2.0}),
    );

    feed(&mut registry, "robot-1", &sensor, Stimulus::Distance(Some(3.0)));
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Analog(5.0));

    feed(&mut registry, "robot-1", &sensor, Stimulus::Distance(Some(1.0)));
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Analog(2.5));

    feed(&mut registry, "robot-1", &sensor, Stimulus::Distance(None));
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Analog(5.0));
}

#[test]
fn test_distance_below_min_range_reads_zero() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "DistanceSensor", "channel": 2, "minRange": 0.25}),
    );

    feed(&mut registry, "robot-1", &sensor, Stimulus::Distance(Some(0.125)));

    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Analog(0.0));
}

#[test]
fn test_distance_uses_configured_full_scale() {
    let config = SandboxConfig {
        max_voltage: 3.0,
        ..SandboxConfig::default()
    };
    let spec = SensorSpec::from_value(json!({"type": "DistanceSensor", "channel": 0})).unwrap();
    let sensor = spec.build(ObjectId(1), RobotGuid::from("robot-1"), &config).unwrap();
    let mut registry = EventRegistry::new();
    let identifier = sensor.identifier();
    sensor
        .register_with_event_system(&RobotGuid::from("robot-1"), &mut registry)
        .unwrap();

    feed(&mut registry, "robot-1", &identifier, Stimulus::Distance(Some(0.75)));

    assert_eq!(
        value(&registry, "robot-1", &identifier),
        SensorValue::Analog(1.5)
    );
}

#[test]
fn test_distance_noise_stays_within_amplitude() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "DistanceSensor", "channel": 2, "noise": 0.25}),
    );

    for _ in 0..50 {
        feed(&mut registry, "robot-1", &sensor, Stimulus::Distance(Some(0.75)));
        let voltage = value(&registry, "robot-1", &sensor).analog().unwrap();
        assert!((2.25..=2.75).contains(&voltage), "{}", voltage);

        feed(&mut registry, "robot-1", &sensor, Stimulus::Distance(None));
        let voltage = value(&registry, "robot-1", &sensor).analog().unwrap();
        assert!((4.75..=5.0).contains(&voltage), "{}", voltage);
    }
}

#[test]
fn test_distance_rejects_non_physical_distance() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "DistanceSensor", "channel": 2}),
    );

    for distance in [-0.5, f32::NAN, f32::INFINITY] {
        let error = rejection(
            &mut registry,
            "robot-1",
            &sensor,
            Stimulus::Distance(Some(distance)),
        );
        assert!(
            matches!(
                error,
                Some(RegistryError::Sensor(SensorError::InvalidStimulus { .. }))
            ),
            "{:?}",
            error
        );
    }
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Empty);
}

#[test]
fn test_distance_detection_cone() {
    let sensor = build_sensor(
        "robot-1",
        json!({
            "type": "DistanceSensor",
            "channel": 2,
            "maxRange": 1.0,
            "fieldOfView": 0.5,
            "mountPoint": {"x": 0.1, "y": 0.0}
        }),
    );

    assert_eq!(sensor.body_specs().position, [0.1, 0.0]);
    assert_eq!(sensor.body_specs().body_type, BodyType::Dynamic);
    let fixture = sensor.fixture_def().unwrap();
    assert!(fixture.is_sensor);
    match &fixture.shape {
        Shape::Polygon { vertices } => {
            assert_eq!(vertices.len(), 3);
            assert_eq!(vertices[0], [0.0, 0.0]);
            for vertex in &vertices[1..] {
                let reach = (vertex[0] * vertex[0] + vertex[1] * vertex[1]).sqrt();
                assert!((reach - 1.0).abs() < 1e-5);
                assert!((vertex[1].atan2(vertex[0]).abs() - 0.25).abs() < 1e-5);
            }
        }
        other => panic!("expected detection cone, got {:?}", other),
    }
    assert_eq!(sensor.fixture_defs().len(), 1);
}

#[test]
fn test_contact_follows_overlapping_bodies() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "ContactSensor", "channel": 1}),
    );
    let begin = Stimulus::Contact(ContactPhase::Begin);
    let end = Stimulus::Contact(ContactPhase::End);

    feed(&mut registry, "robot-1", &sensor, begin);
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Digital(true));
    feed(&mut registry, "robot-1", &sensor, begin);
    feed(&mut registry, "robot-1", &sensor, end);
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Digital(true));
    feed(&mut registry, "robot-1", &sensor, end);
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Digital(false));
    feed(&mut registry, "robot-1", &sensor, end);
    feed(&mut registry, "robot-1", &sensor, begin);
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Digital(true));
}

#[test]
fn test_inverted_contact() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "ContactSensor", "channel": 1, "inverted": true}),
    );

    feed(&mut registry, "robot-1", &sensor, Stimulus::Contact(ContactPhase::End));
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Digital(true));

    feed(&mut registry, "robot-1", &sensor, Stimulus::Contact(ContactPhase::Begin));
    assert_eq!(value(&registry, "robot-1", &sensor), SensorValue::Digital(false));
}

#[test]
fn test_contact_plate_is_sensor_fixture() {
    let sensor = build_sensor(
        "robot-1",
        json!({
            "type": "ContactSensor",
            "channel": 1,
            "plate": {"x": 0.5, "y": 0.25},
            "mountPoint": {"x": 0.0, "y": 0.5}
        }),
    );

    assert_eq!(sensor.body_specs().position, [0.0, 0.5]);
    let fixture = sensor.fixture_def().unwrap();
    assert!(fixture.is_sensor);
    assert_eq!(fixture.shape, Shape::rect([0.25, 0.125]));
}

#[test]
fn test_gyro_reports_heading_in_degrees() {
    let mut registry = EventRegistry::new();
    let sensor = given_sensor(&mut registry, "robot-1", json!({"type": "Gyro", "channel": 0}));

    feed(
        &mut registry,
        "robot-1",
        &sensor,
        Stimulus::Angle(std::f32::consts::FRAC_PI_2),
    );
    assert_analog(value(&registry, "robot-1", &sensor), 90.0);

    feed(
        &mut registry,
        "robot-1",
        &sensor,
        Stimulus::Angle(3.0 * std::f32::consts::PI),
    );
    assert_analog(value(&registry, "robot-1", &sensor), 540.0);

    feed(&mut registry, "robot-1", &sensor, Stimulus::Angle(-std::f32::consts::PI));
    assert_analog(value(&registry, "robot-1", &sensor), -180.0);
}

#[test]
fn test_gyro_has_no_fixture() {
    let sensor = build_sensor("robot-1", json!({"type": "Gyro", "channel": 0}));

    assert!(sensor.fixture_def().is_none());
    assert!(sensor.fixture_defs().is_empty());
}

#[test]
fn test_sensor_rejects_foreign_stimulus() {
    let mut registry = EventRegistry::new();
    let gyro = given_sensor(&mut registry, "robot-1", json!({"type": "Gyro", "channel": 0}));
    let contact = given_sensor(
        &mut registry,
        "robot-1",
        json!({"type": "ContactSensor", "channel": 1}),
    );

    assert_eq!(
        rejection(&mut registry, "robot-1", &gyro, Stimulus::Distance(None)),
        Some(RegistryError::Sensor(SensorError::UnexpectedStimulus {
            sensor: gyro.clone(),
            stimulus: "distance".to_string(),
        }))
    );
    assert_eq!(
        rejection(&mut registry, "robot-1", &contact, Stimulus::Angle(1.0)),
        Some(RegistryError::Sensor(SensorError::UnexpectedStimulus {
            sensor: contact.clone(),
            stimulus: "angle".to_string(),
        }))
    );
    assert!(rejection(&mut registry, "robot-1", &gyro, Stimulus::Angle(f32::NAN)).is_some());
}

#[test]
fn test_sensor_spec_defaults() {
    let spec = SensorSpec::from_value(json!({"type": "DistanceSensor", "channel": 7})).unwrap();

    match spec {
        SensorSpec::DistanceSensor(distance) => {
            assert_eq!(distance.base.channel, 7);
            assert_eq!(distance.min_range, 0.0);
            assert_eq!(distance.max_range, 1.5);
            assert_eq!(distance.noise, 0.0);
            assert_eq!(distance.mount_point, Vector2d::new(0.0, 0.0));
        }
        other => panic!("expected distance sensor, got {:?}", other),
    }
}

#[test]
fn test_sensor_spec_rejections() {
    assert_eq!(
        SensorSpec::from_value(json!({"type": "Lidar", "channel": 1})),
        Err(SpecError::UnknownType {
            type_name: "Lidar".to_string()
        })
    );
    assert!(matches!(
        SensorSpec::from_value(json!({"type": "Gyro"})),
        Err(SpecError::Malformed { .. })
    ));
    assert!(matches!(
        SensorSpec::from_value(json!({"type": "Gyro", "channel": -1})),
        Err(SpecError::Malformed { .. })
    ));
    assert_eq!(
        SensorSpec::from_value(json!({
            "type": "DistanceSensor",
            "channel": 1,
            "minRange": 2.0,
            "maxRange": 1.0
        })),
        Err(SpecError::InvalidGeometry {
            type_name: "DistanceSensor".to_string(),
            field: "minRange".to_string(),
            value: 2.0,
        })
    );
}

#[test]
fn test_sensor_spec_rejects_fields_of_other_sensors() {
    assert_eq!(
        SensorSpec::from_value(json!({"type": "Gyro", "channel": 0, "inverted": true})),
        Err(SpecError::Malformed {
            type_name: "Gyro".to_string(),
            reason: "unexpected field 'inverted'".to_string(),
        })
    );
    assert_eq!(
        SensorSpec::from_value(json!({"type": "ContactSensor", "channel": 1, "maxRange": 2.0})),
        Err(SpecError::Malformed {
            type_name: "ContactSensor".to_string(),
            reason: "unexpected field 'maxRange'".to_string(),
        })
    );
}

#[test]
fn test_distance_sensor_rejects_negative_full_scale() {
    let config = SandboxConfig {
        max_voltage: -1.0,
        ..SandboxConfig::default()
    };
    let spec = SensorSpec::from_value(json!({"type": "DistanceSensor", "channel": 2, "noise": 0.1}))
        .unwrap();

    let error = spec.build(ObjectId(1), RobotGuid::from("robot-1"), &config).err();

    assert_eq!(
        error,
        Some(SpecError::InvalidGeometry {
            type_name: "config".to_string(),
            field: "maxVoltage".to_string(),
            value: -1.0,
        })
    );
}
