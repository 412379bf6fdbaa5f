use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Hardware-facing reading of a sensor.
///
/// Analog sensors report a voltage-equivalent number, digital sensors a
/// HIGH (`true`) / LOW (`false`) level. A freshly registered sensor reports
/// [`SensorValue::Empty`] until its first stimulus.
#[derive(Debug, Default, Clone, Copy, PartialEq, bincode::Encode, bincode::Decode)]
pub enum SensorValue {
    #[default]
    Empty,
    Analog(f32),
    Digital(bool),
}

impl SensorValue {
    pub fn analog(&self) -> Option<f32> {
        match self {
            SensorValue::Analog(value) => Some(*value),
            _ => None,
        }
    }

    pub fn digital(&self) -> Option<bool> {
        match self {
            SensorValue::Digital(high) => Some(*high),
            _ => None,
        }
    }
}

impl Serialize for SensorValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SensorValue::Empty => serializer.serialize_map(Some(0))?.end(),
            SensorValue::Analog(value) => serializer.serialize_f32(*value),
            SensorValue::Digital(high) => serializer.serialize_bool(*high),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "lowercase")]
pub enum ContactPhase {
    Begin,
    End,
}

/// Raw physics-domain observation delivered to a sensor.
///
/// JSON form is `{"distance": 0.3}`, `{"distance": null}` (nothing in range),
/// `{"contact": "begin"}` or `{"angle": 1.57}`.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(rename_all = "camelCase")]
pub enum Stimulus {
    Distance(Option<f32>),
    Contact(ContactPhase),
    Angle(f32),
}

impl Stimulus {
    pub fn kind(&self) -> &'static str {
        match self {
            Stimulus::Distance(_) => "distance",
            Stimulus::Contact(_) => "contact",
            Stimulus::Angle(_) => "angle",
        }
    }
}

/// `{ "value": ... }` envelope shared by stimuli and readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexSensorValue<T> {
    pub value: T,
}

impl<T> ComplexSensorValue<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

pub type SensorEvent = ComplexSensorValue<Stimulus>;

pub type SensorReading = ComplexSensorValue<SensorValue>;
