use crate::math::VectorMath;
use crate::objects::{BodyDef, BodyType, FixtureDef, ObjectId, Shape};
use crate::sensing::{
    ComplexSensor, ContactPhase, ContactSensorSpec, RobotGuid, SensorCore, SensorError,
    SensorValue, Stimulus,
};

/// Digital switch closed while anything touches its plate.
pub struct ContactSensor {
    core: SensorCore,
    inverted: bool,
    contacts: u32,
}

impl ContactSensor {
    pub const SENSOR_TYPE: &'static str = "ContactSensor";

    pub fn new(id: ObjectId, robot: RobotGuid, spec: &ContactSensorSpec) -> Self {
        let body = BodyDef::new(BodyType::Dynamic, spec.mount_point.into());
        let plate = Shape::rect(<[f32; 2]>::from(spec.plate).mul(0.5));
        let core = SensorCore::new(
            id,
            Self::SENSOR_TYPE,
            robot,
            spec.base.channel,
            body,
            Some(FixtureDef::sensor(plate)),
        );
        Self {
            core,
            inverted: spec.inverted,
            contacts: 0,
        }
    }
}

impl ComplexSensor for ContactSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SensorCore {
        &mut self.core
    }

    fn convert(&mut self, stimulus: &Stimulus) -> Result<SensorValue, SensorError> {
        match stimulus {
            Stimulus::Contact(ContactPhase::Begin) => self.contacts += 1,
            // end events can outnumber begins when the plate spawns inside another body
            Stimulus::Contact(ContactPhase::End) => {
                self.contacts = self.contacts.saturating_sub(1)
            }
            other => {
                return Err(SensorError::UnexpectedStimulus {
                    sensor: self.identifier(),
                    stimulus: other.kind().to_string(),
                })
            }
        }
        let pressed = self.contacts > 0;
        Ok(SensorValue::Digital(pressed != self.inverted))
    }
}

crate::sensor_object!(ContactSensor);
