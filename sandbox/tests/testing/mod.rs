use std::collections::HashMap;
use std::fmt::Debug;

use sandbox::api::Event;
use sandbox::config::SandboxConfig;
use sandbox::objects::{ObjectId, SimObjectSpec};
use sandbox::robots::RobotSpec;
use sandbox::sensing::{
    ComplexSensor, EventRegistry, RegistryError, RobotGuid, SensorEvent, SensorIdentifier,
    SensorSpec, SensorStimulus, SensorValue, Stimulus,
};
use sandbox::{Sandbox, SandboxError};
use serde_json::Value;

pub const NORMAL_TICK: f32 = 0.02;

pub fn stimulus(robot: &str, sensor: &str, stimulus: Stimulus) -> SensorStimulus {
    SensorStimulus {
        robot: RobotGuid::from(robot),
        sensor: SensorIdentifier::from(sensor),
        event: SensorEvent::new(stimulus),
    }
}

pub fn assert_debug_eq<T: Debug>(actual: T, expected: T) {
    let actual = format!("{:?}", actual);
    let expected = format!("{:?}", expected);
    assert_eq!(actual, expected);
}

pub struct SandboxTestScenario {
    pub sandbox: Sandbox,
    objects: HashMap<String, ObjectId>,
    current_result: Result<Vec<Event>, SandboxError>,
}

impl SandboxTestScenario {
    pub fn new() -> Self {
        Self::with_config(SandboxConfig::default())
    }

    pub fn with_config(config: SandboxConfig) -> Self {
        SandboxTestScenario {
            sandbox: Sandbox::new(config).unwrap(),
            objects: Default::default(),
            current_result: Ok(vec![]),
        }
    }

    pub fn object(&self, name: &str) -> ObjectId {
        *self.objects.get(name).unwrap()
    }

    pub fn robot(&self, guid: &str) -> RobotGuid {
        RobotGuid::from(guid)
    }

    pub fn sensor(&self, identifier: &str) -> SensorIdentifier {
        SensorIdentifier::from(identifier)
    }

    pub fn given_object(mut self, name: &str, spec: Value) -> Self {
        let spec = SimObjectSpec::from_value(spec).unwrap();
        let (id, _) = self.sandbox.add_object(spec).unwrap();
        self.objects.insert(name.to_string(), id);
        self
    }

    pub fn given_robot(mut self, guid: &str, spec: Value) -> Self {
        let spec = RobotSpec::from_value(spec).unwrap();
        self.sandbox.add_robot(RobotGuid::from(guid), &spec).unwrap();
        self
    }

    pub fn when_add_object(mut self, name: &str, spec: Value) -> Self {
        self.current_result = match SimObjectSpec::from_value(spec) {
            Ok(spec) => self.sandbox.add_object(spec).map(|(id, events)| {
                self.objects.insert(name.to_string(), id);
                events
            }),
            Err(error) => Err(error.into()),
        };
        self
    }

    pub fn when_remove_object(mut self, name: &str) -> Self {
        let id = self.object(name);
        self.current_result = self.sandbox.remove_object(id);
        self
    }

    pub fn when_add_robot(mut self, guid: &str, spec: Value) -> Self {
        self.current_result = match RobotSpec::from_value(spec) {
            Ok(spec) => self.sandbox.add_robot(RobotGuid::from(guid), &spec),
            Err(error) => Err(error.into()),
        };
        self
    }

    pub fn when_remove_robot(mut self, guid: &str) -> Self {
        self.current_result = self.sandbox.remove_robot(&RobotGuid::from(guid));
        self
    }

    pub fn when_update(mut self, stimuli: Vec<SensorStimulus>) -> Self {
        self.current_result = Ok(self.sandbox.update(NORMAL_TICK, &stimuli));
        self
    }

    pub fn then_events<F>(self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        let expected_events = expected_events(&self);
        match &self.current_result {
            Ok(events) => assert_debug_eq(events, &expected_events),
            Err(error) => panic!("expected events, got {:?}", error),
        }
        self
    }

    pub fn then_error<F>(self, expected_error: F) -> Self
    where
        F: FnOnce(&Self) -> SandboxError,
    {
        let expected_error = expected_error(&self);
        match &self.current_result {
            Ok(events) => panic!("expected error, got events {:?}", events),
            Err(error) => assert_eq!(error, &expected_error),
        }
        self
    }

    pub fn then_value(self, guid: &str, sensor: &str, expected: SensorValue) -> Self {
        let value = self
            .sandbox
            .read_sensor(&RobotGuid::from(guid), &SensorIdentifier::from(sensor));
        assert_eq!(value, Ok(expected));
        self
    }

    pub fn then_analog(self, guid: &str, channel: u32, expected: f32) -> Self {
        let value = self.sandbox.read(&RobotGuid::from(guid), channel).unwrap();
        let actual = value.analog().unwrap();
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {} on channel {}, got {}",
            expected,
            channel,
            actual
        );
        self
    }

    pub fn then_read_error(self, guid: &str, sensor: &str, expected: RegistryError) -> Self {
        let value = self
            .sandbox
            .read_sensor(&RobotGuid::from(guid), &SensorIdentifier::from(sensor));
        assert_eq!(value, Err(SandboxError::Registry(expected)));
        self
    }

    pub fn then_objects_count(self, expected: usize) -> Self {
        assert_eq!(self.sandbox.objects.objects.len(), expected);
        self
    }
}

pub fn build_sensor(robot: &str, spec: Value) -> Box<dyn ComplexSensor> {
    let spec = SensorSpec::from_value(spec).unwrap();
    spec.build(ObjectId(100), RobotGuid::from(robot), &SandboxConfig::default())
        .unwrap()
}

pub fn given_sensor(registry: &mut EventRegistry, robot: &str, spec: Value) -> SensorIdentifier {
    let sensor = build_sensor(robot, spec);
    let identifier = sensor.identifier();
    sensor
        .register_with_event_system(&RobotGuid::from(robot), registry)
        .unwrap();
    identifier
}
