use crate::config::SandboxConfig;
use crate::math::{Random, VectorMath};
use crate::objects::{BodyDef, BodyType, FixtureDef, ObjectId, Shape};
use crate::sensing::{
    ComplexSensor, DistanceSensorSpec, RobotGuid, SensorCore, SensorError, SensorValue, Stimulus,
};

/// Analog range finder.
///
/// Reports a voltage proportional to the distance of the nearest target in its
/// detection cone, saturating at full scale when nothing is within range.
pub struct DistanceSensor {
    core: SensorCore,
    min_range: f32,
    max_range: f32,
    max_voltage: f32,
    noise: f32,
    random: Random,
}

impl DistanceSensor {
    pub const SENSOR_TYPE: &'static str = "DistanceSensor";

    pub fn new(
        id: ObjectId,
        robot: RobotGuid,
        spec: &DistanceSensorSpec,
        config: &SandboxConfig,
    ) -> Self {
        let body = BodyDef::new(BodyType::Dynamic, spec.mount_point.into());
        let half_angle = spec.field_of_view * 0.5;
        let reach = [spec.max_range, 0.0];
        let cone = Shape::Polygon {
            vertices: vec![[0.0, 0.0], reach.rotate(-half_angle), reach.rotate(half_angle)],
        };
        let core = SensorCore::new(
            id,
            Self::SENSOR_TYPE,
            robot,
            spec.base.channel,
            body,
            Some(FixtureDef::sensor(cone)),
        );
        Self {
            core,
            min_range: spec.min_range,
            max_range: spec.max_range,
            max_voltage: config.max_voltage,
            noise: spec.noise,
            random: Random::new(config.noise_seed ^ id.0 as u64),
        }
    }

    fn voltage(&self, distance: Option<f32>) -> Result<f32, SensorError> {
        match distance {
            None => Ok(self.max_voltage),
            Some(distance) if !distance.is_finite() || distance < 0.0 => {
                Err(SensorError::InvalidStimulus {
                    sensor: self.identifier(),
                    reason: format!("distance {} is not a physical range", distance),
                })
            }
            Some(distance) if distance < self.min_range => Ok(0.0),
            Some(distance) => Ok(distance.min(self.max_range) / self.max_range * self.max_voltage),
        }
    }
}

impl ComplexSensor for DistanceSensor {
    fn core(&self) -> &SensorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SensorCore {
        &mut self.core
    }

    fn convert(&mut self, stimulus: &Stimulus) -> Result<SensorValue, SensorError> {
        let distance = match stimulus {
            Stimulus::Distance(distance) => *distance,
            other => {
                return Err(SensorError::UnexpectedStimulus {
                    sensor: self.identifier(),
                    stimulus: other.kind().to_string(),
                })
            }
        };
        let mut voltage = self.voltage(distance)?;
        if self.noise > 0.0 {
            voltage = (voltage + self.random.jitter(self.noise)).clamp(0.0, self.max_voltage);
        }
        Ok(SensorValue::Analog(voltage))
    }
}

crate::sensor_object!(DistanceSensor);
