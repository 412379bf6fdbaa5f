use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sensing::{ComplexSensor, SensorEvent, SensorValue};

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct RobotGuid(pub String);

impl RobotGuid {
    pub fn new(guid: impl Into<String>) -> Self {
        Self(guid.into())
    }

    pub fn random() -> Self {
        let value: u64 = rand::thread_rng().gen();
        Self(format!("robot-{:016x}", value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RobotGuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RobotGuid {
    fn from(guid: &str) -> Self {
        Self(guid.to_string())
    }
}

/// Robot-scoped sensor address, `{sensor_type}-{channel}`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct SensorIdentifier(pub String);

impl SensorIdentifier {
    pub fn new(sensor_type: &str, channel: u32) -> Self {
        Self(format!("{}-{}", sensor_type, channel))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SensorIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SensorIdentifier {
    fn from(identifier: &str) -> Self {
        Self(identifier.to_string())
    }
}

/// Addressing table from robot and sensor identity to sensor instances.
///
/// Owned by a simulation session. Holds no sensor logic: dispatch only resolves
/// the target and hands the stimulus over.
#[derive(Default)]
pub struct EventRegistry {
    pub(crate) robots: HashMap<RobotGuid, HashMap<SensorIdentifier, Box<dyn ComplexSensor>>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stimulus addressed to one sensor, as produced by the physics engine adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorStimulus {
    pub robot: RobotGuid,
    pub sensor: SensorIdentifier,
    pub event: SensorEvent,
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Sensing {
    SensorRegistered {
        robot: RobotGuid,
        sensor: SensorIdentifier,
        channel: u32,
    },
    SensorValueChanged {
        robot: RobotGuid,
        sensor: SensorIdentifier,
        value: SensorValue,
    },
    SensorFaulted {
        robot: RobotGuid,
        sensor: SensorIdentifier,
        error: RegistryError,
    },
    SensorDeregistered {
        robot: RobotGuid,
        sensor: SensorIdentifier,
    },
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum SensorError {
    NotRegistered {
        sensor: SensorIdentifier,
    },
    Deregistered {
        sensor: SensorIdentifier,
    },
    UnexpectedStimulus {
        sensor: SensorIdentifier,
        stimulus: String,
    },
    InvalidStimulus {
        sensor: SensorIdentifier,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum RegistryError {
    DuplicateSensor {
        robot: RobotGuid,
        sensor: SensorIdentifier,
    },
    AlreadyRegistered {
        robot: RobotGuid,
        sensor: SensorIdentifier,
    },
    ChannelTaken {
        robot: RobotGuid,
        channel: u32,
        occupant: SensorIdentifier,
    },
    RobotMismatch {
        robot: RobotGuid,
        owner: RobotGuid,
        sensor: SensorIdentifier,
    },
    RobotNotFound {
        robot: RobotGuid,
    },
    SensorNotFound {
        robot: RobotGuid,
        sensor: SensorIdentifier,
    },
    Sensor(SensorError),
}

impl From<SensorError> for RegistryError {
    fn from(error: SensorError) -> Self {
        Self::Sensor(error)
    }
}
