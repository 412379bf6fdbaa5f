use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::api::Event;
use crate::objects::{SimObjectSpec, SpecError};
use crate::robots::RobotSpec;
use crate::sensing::RobotGuid;
use crate::{Sandbox, SandboxError};

/// Field definition: obstacles and robots placed at session start.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub objects: Vec<SimObjectSpec>,
    pub robots: Vec<(RobotGuid, RobotSpec)>,
}

impl FieldSpec {
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> Result<Self, DataError> {
        let mut objects = vec![];
        if let Some(Value::Array(specs)) = value.get_mut("objects").map(Value::take) {
            for spec in specs {
                objects.push(SimObjectSpec::from_value(spec)?);
            }
        }
        let mut robots = vec![];
        if let Some(Value::Array(specs)) = value.get_mut("robots").map(Value::take) {
            for mut spec in specs {
                let guid = match spec.get_mut("guid").map(Value::take) {
                    Some(Value::String(guid)) => Some(RobotGuid::new(guid)),
                    _ => None,
                };
                let robot = RobotSpec::from_value(spec)?;
                let guid = guid.unwrap_or_else(|| {
                    let guid = RobotGuid::random();
                    warn!("Robot '{}' has no guid, assigned {}", robot.name, guid);
                    guid
                });
                robots.push((guid, robot));
            }
        }
        Ok(Self { objects, robots })
    }
}

impl Sandbox {
    pub fn load_field(&mut self, field: &FieldSpec) -> Result<Vec<Event>, DataError> {
        info!(
            "Begin field loading: {} objects, {} robots",
            field.objects.len(),
            field.robots.len()
        );
        let mut events = vec![];
        for spec in &field.objects {
            let (_, created) = self.add_object(spec.clone())?;
            events.extend(created);
        }
        for (guid, spec) in &field.robots {
            events.extend(self.add_robot(guid.clone(), spec)?);
        }
        info!("End field loading");
        Ok(events)
    }

    pub fn load_field_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<Event>, DataError> {
        let text = fs::read_to_string(path)?;
        let field = FieldSpec::from_json(&text)?;
        self.load_field(&field)
    }
}

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Spec(SpecError),
    Sandbox(SandboxError),
}

impl From<std::io::Error> for DataError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<SpecError> for DataError {
    fn from(error: SpecError) -> Self {
        Self::Spec(error)
    }
}

impl From<SandboxError> for DataError {
    fn from(error: SandboxError) -> Self {
        Self::Sandbox(error)
    }
}
