use crate::objects::{BodyDef, FixtureDef, ObjectId, SimObject};
use crate::sensing::{
    EventRegistry, RegistryError, RobotGuid, Sensing, SensorError, SensorEvent, SensorIdentifier,
    SensorValue, Stimulus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub enum SensorState {
    Constructed,
    Registered,
    Receiving,
    Deregistered,
}

/// State every sensor carries regardless of its type.
///
/// Fields are private: the reported value can only move through
/// [`ComplexSensor::on_sensor_event`], never be injected from outside.
pub struct SensorCore {
    id: ObjectId,
    object_type: String,
    sensor_type: String,
    channel: u32,
    robot: RobotGuid,
    value: SensorValue,
    state: SensorState,
    body: BodyDef,
    fixtures: Vec<FixtureDef>,
}

impl SensorCore {
    pub fn new(
        id: ObjectId,
        sensor_type: &str,
        robot: RobotGuid,
        channel: u32,
        body: BodyDef,
        fixture: Option<FixtureDef>,
    ) -> Self {
        Self {
            id,
            object_type: format!("ComplexSensor-{}", sensor_type),
            sensor_type: sensor_type.to_string(),
            channel,
            robot,
            value: SensorValue::Empty,
            state: SensorState::Constructed,
            body,
            fixtures: fixture.into_iter().collect(),
        }
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    #[inline]
    pub fn sensor_type(&self) -> &str {
        &self.sensor_type
    }

    #[inline]
    pub fn channel(&self) -> u32 {
        self.channel
    }

    #[inline]
    pub fn robot(&self) -> &RobotGuid {
        &self.robot
    }

    #[inline]
    pub fn state(&self) -> SensorState {
        self.state
    }

    #[inline]
    pub fn body(&self) -> &BodyDef {
        &self.body
    }

    #[inline]
    pub fn fixtures(&self) -> &[FixtureDef] {
        &self.fixtures
    }

    pub fn identifier(&self) -> SensorIdentifier {
        SensorIdentifier::new(&self.sensor_type, self.channel)
    }

    pub(crate) fn ensure_attached(&self) -> Result<(), SensorError> {
        match self.state {
            SensorState::Constructed => Err(SensorError::NotRegistered {
                sensor: self.identifier(),
            }),
            SensorState::Deregistered => Err(SensorError::Deregistered {
                sensor: self.identifier(),
            }),
            SensorState::Registered | SensorState::Receiving => Ok(()),
        }
    }

    /// Returns whether the reported value changed.
    pub(crate) fn set_value(&mut self, value: SensorValue) -> bool {
        self.state = SensorState::Receiving;
        let changed = self.value != value;
        self.value = value;
        changed
    }

    pub(crate) fn attach(&mut self) {
        self.state = SensorState::Registered;
    }

    pub(crate) fn detach(&mut self) {
        self.state = SensorState::Deregistered;
    }

    pub(crate) fn current(&self) -> SensorValue {
        self.value
    }
}

/// Physical-feedback device that turns physics stimuli into channel values.
///
/// Implementors only provide [`ComplexSensor::convert`]: the rule mapping a
/// raw stimulus to what the hardware would put on its wire. Lifecycle checks
/// and storage of the converted value are handled by the provided methods.
pub trait ComplexSensor: SimObject {
    fn core(&self) -> &SensorCore;

    fn core_mut(&mut self) -> &mut SensorCore;

    fn convert(&mut self, stimulus: &Stimulus) -> Result<SensorValue, SensorError>;

    fn sensor_type(&self) -> &str {
        self.core().sensor_type()
    }

    fn channel(&self) -> u32 {
        self.core().channel()
    }

    fn identifier(&self) -> SensorIdentifier {
        self.core().identifier()
    }

    fn robot_guid(&self) -> &RobotGuid {
        self.core().robot()
    }

    fn state(&self) -> SensorState {
        self.core().state()
    }

    /// Current converted reading, rejected for sensors outside a registry.
    fn value(&self) -> Result<SensorValue, SensorError> {
        self.core().ensure_attached()?;
        Ok(self.core().current())
    }

    fn body_specs(&self) -> &BodyDef {
        self.core().body()
    }

    fn fixture_def(&self) -> Option<&FixtureDef> {
        self.core().fixtures().first()
    }

    /// Returns whether the reported value changed.
    fn on_sensor_event(&mut self, event: &SensorEvent) -> Result<bool, SensorError> {
        self.core().ensure_attached()?;
        let value = self.convert(&event.value)?;
        Ok(self.core_mut().set_value(value))
    }
}

impl dyn ComplexSensor {
    /// Attaches this sensor to `registry` under `robot`.
    pub fn register_with_event_system(
        self: Box<Self>,
        robot: &RobotGuid,
        registry: &mut EventRegistry,
    ) -> Result<Vec<Sensing>, RegistryError> {
        let register = registry.register_complex_sensor(robot, self)?;
        Ok(register())
    }
}

/// Implements [`SimObject`] for a sensor by delegating to its [`SensorCore`].
#[macro_export]
macro_rules! sensor_object {
    ($sensor:ty) => {
        impl $crate::objects::SimObject for $sensor {
            fn id(&self) -> $crate::objects::ObjectId {
                $crate::sensing::ComplexSensor::core(self).id()
            }

            fn object_type(&self) -> &str {
                $crate::sensing::ComplexSensor::core(self).object_type()
            }

            fn body_def(&self) -> &$crate::objects::BodyDef {
                $crate::sensing::ComplexSensor::core(self).body()
            }

            fn fixture_defs(&self) -> &[$crate::objects::FixtureDef] {
                $crate::sensing::ComplexSensor::core(self).fixtures()
            }
        }
    };
}
