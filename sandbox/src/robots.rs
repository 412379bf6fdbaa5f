use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::objects::{ObjectId, SimObjectSpec, SpecError};
use crate::sensing::{RobotGuid, SensorIdentifier, SensorSpec};

/// Declarative robot: an optional chassis body and the sensors wired to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobotSpec {
    pub name: String,
    pub body: Option<SimObjectSpec>,
    pub sensors: Vec<SensorSpec>,
}

impl RobotSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            sensors: vec![],
        }
    }

    pub fn with_sensor(mut self, sensor: SensorSpec) -> Self {
        self.sensors.push(sensor);
        self
    }

    pub fn with_body(mut self, body: SimObjectSpec) -> Self {
        self.body = Some(body);
        self
    }

    /// Parses nested specs one by one so a bad slot reports its own type.
    pub fn from_value(value: Value) -> Result<Self, SpecError> {
        let malformed = |reason: &str| SpecError::Malformed {
            type_name: "robot".to_string(),
            reason: reason.to_string(),
        };
        let mut value = match value {
            Value::Object(map) => map,
            _ => return Err(malformed("robot must be an object")),
        };
        let name = match value.remove("name") {
            Some(Value::String(name)) => name,
            None => String::new(),
            Some(_) => return Err(malformed("name must be a string")),
        };
        let body = match value.remove("body") {
            Some(Value::Null) | None => None,
            Some(body) => Some(SimObjectSpec::from_value(body)?),
        };
        let sensors = match value.remove("sensors") {
            Some(Value::Array(sensors)) => sensors
                .into_iter()
                .map(SensorSpec::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![],
            Some(_) => return Err(malformed("sensors must be an array")),
        };
        let spec = Self {
            name,
            body,
            sensors,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Every slot must be valid and own its channel exclusively.
    pub fn validate(&self) -> Result<(), SpecError> {
        if let Some(body) = &self.body {
            body.validate()?;
        }
        let mut identifiers = HashSet::new();
        let mut channels = HashSet::new();
        for sensor in &self.sensors {
            sensor.validate()?;
            let identifier = sensor.identifier();
            if !identifiers.insert(identifier.clone()) || !channels.insert(sensor.channel()) {
                return Err(SpecError::DuplicateSensor {
                    identifier: identifier.0,
                });
            }
        }
        Ok(())
    }
}

/// Robot living in a session: its chassis body and the sensors it registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    pub guid: RobotGuid,
    pub name: String,
    pub chassis: Option<ObjectId>,
    pub sensors: Vec<SensorIdentifier>,
}
