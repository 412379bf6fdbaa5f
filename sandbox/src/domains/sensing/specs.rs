use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SandboxConfig;
use crate::objects::validation::{
    discriminant, ensure_fields, ensure_finite, ensure_non_negative, ensure_positive,
};
use crate::objects::{ObjectId, SpecError, Vector2d};
use crate::sensing::{
    ComplexSensor, ContactSensor, DistanceSensor, Gyro, RobotGuid, SensorIdentifier,
};

pub const DEFAULT_MAX_RANGE: f32 = 1.5;
pub const DEFAULT_FIELD_OF_VIEW: f32 = 0.26;
pub const DEFAULT_PLATE: Vector2d = Vector2d { x: 0.05, y: 0.01 };

/// I/O channel the sensor is wired to, the part every sensor spec shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexSensorSpec {
    pub channel: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceSensorSpec {
    #[serde(flatten)]
    pub base: ComplexSensorSpec,
    #[serde(default)]
    pub min_range: f32,
    #[serde(default = "default_max_range")]
    pub max_range: f32,
    #[serde(default)]
    pub noise: f32,
    #[serde(default)]
    pub mount_point: Vector2d,
    #[serde(default = "default_field_of_view")]
    pub field_of_view: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSensorSpec {
    #[serde(flatten)]
    pub base: ComplexSensorSpec,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub mount_point: Vector2d,
    #[serde(default = "default_plate")]
    pub plate: Vector2d,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GyroSpec {
    #[serde(flatten)]
    pub base: ComplexSensorSpec,
}

fn default_max_range() -> f32 {
    DEFAULT_MAX_RANGE
}

fn default_field_of_view() -> f32 {
    DEFAULT_FIELD_OF_VIEW
}

fn default_plate() -> Vector2d {
    DEFAULT_PLATE
}

pub const SENSOR_TYPES: [&str; 3] = ["DistanceSensor", "ContactSensor", "Gyro"];

fn sensor_fields(sensor_type: &str) -> &'static [&'static str] {
    match sensor_type {
        "DistanceSensor" => &[
            "channel",
            "minRange",
            "maxRange",
            "noise",
            "mountPoint",
            "fieldOfView",
        ],
        "ContactSensor" => &["channel", "inverted", "mountPoint", "plate"],
        _ => &["channel"],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SensorSpec {
    DistanceSensor(DistanceSensorSpec),
    ContactSensor(ContactSensorSpec),
    Gyro(GyroSpec),
}

impl SensorSpec {
    pub fn from_value(value: Value) -> Result<Self, SpecError> {
        let type_name = discriminant(&value)?;
        if !SENSOR_TYPES.contains(&type_name.as_str()) {
            return Err(SpecError::UnknownType { type_name });
        }
        ensure_fields(&type_name, &value, sensor_fields(&type_name))?;
        let spec: SensorSpec =
            serde_json::from_value(value).map_err(|error| SpecError::Malformed {
                type_name,
                reason: error.to_string(),
            })?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn sensor_type(&self) -> &'static str {
        match self {
            SensorSpec::DistanceSensor(_) => "DistanceSensor",
            SensorSpec::ContactSensor(_) => "ContactSensor",
            SensorSpec::Gyro(_) => "Gyro",
        }
    }

    pub fn channel(&self) -> u32 {
        match self {
            SensorSpec::DistanceSensor(spec) => spec.base.channel,
            SensorSpec::ContactSensor(spec) => spec.base.channel,
            SensorSpec::Gyro(spec) => spec.base.channel,
        }
    }

    pub fn identifier(&self) -> SensorIdentifier {
        SensorIdentifier::new(self.sensor_type(), self.channel())
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        let name = self.sensor_type();
        match self {
            SensorSpec::DistanceSensor(spec) => {
                ensure_non_negative(name, "minRange", spec.min_range)?;
                ensure_positive(name, "maxRange", spec.max_range)?;
                if spec.min_range >= spec.max_range {
                    return Err(SpecError::InvalidGeometry {
                        type_name: name.to_string(),
                        field: "minRange".to_string(),
                        value: spec.min_range,
                    });
                }
                ensure_non_negative(name, "noise", spec.noise)?;
                ensure_positive(name, "fieldOfView", spec.field_of_view)?;
                ensure_finite(name, "mountPoint.x", spec.mount_point.x)?;
                ensure_finite(name, "mountPoint.y", spec.mount_point.y)
            }
            SensorSpec::ContactSensor(spec) => {
                ensure_positive(name, "plate.x", spec.plate.x)?;
                ensure_positive(name, "plate.y", spec.plate.y)?;
                ensure_finite(name, "mountPoint.x", spec.mount_point.x)?;
                ensure_finite(name, "mountPoint.y", spec.mount_point.y)
            }
            SensorSpec::Gyro(_) => Ok(()),
        }
    }

    /// Constructs the sensor described by this spec, owned by `robot`.
    pub fn build(
        &self,
        id: ObjectId,
        robot: RobotGuid,
        config: &SandboxConfig,
    ) -> Result<Box<dyn ComplexSensor>, SpecError> {
        self.validate()?;
        config.validate()?;
        let sensor: Box<dyn ComplexSensor> = match self {
            SensorSpec::DistanceSensor(spec) => {
                Box::new(DistanceSensor::new(id, robot, spec, config))
            }
            SensorSpec::ContactSensor(spec) => Box::new(ContactSensor::new(id, robot, spec)),
            SensorSpec::Gyro(spec) => Box::new(Gyro::new(id, robot, spec)),
        };
        Ok(sensor)
    }
}
