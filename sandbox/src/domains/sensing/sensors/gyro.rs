use crate::objects::{BodyDef, BodyType, ObjectId};
use crate::sensing::{
    ComplexSensor, GyroSpec, RobotGuid, SensorCore, SensorError, SensorValue, Stimulus,
};

/// Heading sensor, reports the chassis angle in degrees without wrapping.
pub struct Gyro {
    core: SensorCore,
}

impl Gyro {
    pub const SENSOR_TYPE: &'static str = "Gyro";

    pub fn new(id: ObjectId, robot: RobotGuid, spec: &GyroSpec) -> Self {
        let body = BodyDef::new(BodyType::Dynamic, [0.0, 0.0]);
        Self {
            core: SensorCore::new(id, Self::SENSOR_TYPE, robot, spec.base.channel, body, None),
        }
    }
}

impl ComplexSensor for Gyro {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SensorCore {
        &mut self.core
    }

    fn convert(&mut self, stimulus: &Stimulus) -> Result<SensorValue, SensorError> {
        match stimulus {
            Stimulus::Angle(angle) if angle.is_finite() => {
                Ok(SensorValue::Analog(angle.to_degrees()))
            }
            Stimulus::Angle(angle) => Err(SensorError::InvalidStimulus {
                sensor: self.identifier(),
                reason: format!("angle {} is not finite", angle),
            }),
            other => Err(SensorError::UnexpectedStimulus {
                sensor: self.identifier(),
                stimulus: other.kind().to_string(),
            }),
        }
    }
}

crate::sensor_object!(Gyro);
