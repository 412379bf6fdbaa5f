use log::info;

pub use domains::*;

use crate::api::Event;
use crate::collections::Sequence;
use crate::config::SandboxConfig;
use crate::objects::{ObjectId, ObjectsDomain, ObjectsError, SimObjectSpec, SpecError};
use crate::robots::{Robot, RobotSpec};
use crate::sensing::{EventRegistry, RegistryError, RobotGuid, SensorIdentifier, SensorValue};

pub mod api;
pub mod collections;
pub mod config;
pub mod data;
mod domains;
pub mod math;
pub mod robots;
mod update;

/// One simulation session.
///
/// Owns every object, the sensor registry and the robots wiring them together.
/// Sessions share nothing, several may run side by side.
pub struct Sandbox {
    pub config: SandboxConfig,
    pub objects: ObjectsDomain,
    pub registry: EventRegistry,
    pub robots: Vec<Robot>,
    pub objects_sequence: Sequence,
    pub ticks: usize,
    pub time: f32,
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Result<Self, SandboxError> {
        config.validate()?;
        Ok(Self {
            objects: ObjectsDomain::new(config.field_size),
            registry: EventRegistry::new(),
            robots: vec![],
            objects_sequence: Sequence::default(),
            ticks: 0,
            time: 0.0,
            config,
        })
    }

    pub fn add_object(&mut self, spec: SimObjectSpec) -> Result<(ObjectId, Vec<Event>), SandboxError> {
        let id = self.objects_sequence.one(ObjectId);
        let create = self.objects.create_object(id, spec)?;
        let events = occur![create(),];
        Ok((id, events))
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Result<Vec<Event>, SandboxError> {
        if self.robots.iter().any(|robot| robot.chassis == Some(id)) {
            return Err(SandboxError::ObjectInUse { id });
        }
        let destroy = self.objects.destroy_object(id)?;
        Ok(occur![destroy(),])
    }

    pub fn add_robot(&mut self, guid: RobotGuid, spec: &RobotSpec) -> Result<Vec<Event>, SandboxError> {
        if self.get_robot(&guid).is_ok() || self.registry.contains_robot(&guid) {
            return Err(SandboxError::RobotAlreadyExists { robot: guid });
        }
        spec.validate()?;
        let mut events = vec![];
        let chassis = match &spec.body {
            Some(body) => {
                let (id, created) = self.add_object(body.clone())?;
                events.extend(created);
                Some(id)
            }
            None => None,
        };
        let mut sensors = vec![];
        for slot in &spec.sensors {
            let id = self.objects_sequence.one(ObjectId);
            let sensor = slot.build(id, guid.clone(), &self.config)?;
            sensors.push(sensor.identifier());
            let registered = sensor.register_with_event_system(&guid, &mut self.registry)?;
            events.extend(occur![registered,]);
        }
        info!(
            "Add robot {} '{}' with {} sensors",
            guid,
            spec.name,
            sensors.len()
        );
        self.robots.push(Robot {
            guid,
            name: spec.name.clone(),
            chassis,
            sensors,
        });
        Ok(events)
    }

    pub fn remove_robot(&mut self, guid: &RobotGuid) -> Result<Vec<Event>, SandboxError> {
        let index = self
            .robots
            .iter()
            .position(|robot| &robot.guid == guid)
            .ok_or_else(|| SandboxError::RobotNotFound {
                robot: guid.clone(),
            })?;
        let mut events = vec![];
        if self.registry.contains_robot(guid) {
            let deregister = self.registry.deregister_robot(guid)?;
            events.extend(occur![deregister(),]);
        }
        let robot = self.robots.remove(index);
        if let Some(chassis) = robot.chassis {
            let destroy = self.objects.destroy_object(chassis)?;
            events.extend(occur![destroy(),]);
        }
        info!("Remove robot {} '{}'", robot.guid, robot.name);
        Ok(events)
    }

    pub fn get_robot(&self, guid: &RobotGuid) -> Result<&Robot, SandboxError> {
        self.robots
            .iter()
            .find(|robot| &robot.guid == guid)
            .ok_or_else(|| SandboxError::RobotNotFound {
                robot: guid.clone(),
            })
    }

    /// Controller-facing read of the sensor wired to `channel`.
    pub fn read(&self, guid: &RobotGuid, channel: u32) -> Result<SensorValue, SandboxError> {
        let sensor = self.registry.find_sensor(guid, channel)?;
        Ok(sensor.value().map_err(RegistryError::from)?)
    }

    pub fn read_sensor(
        &self,
        guid: &RobotGuid,
        sensor: &SensorIdentifier,
    ) -> Result<SensorValue, SandboxError> {
        Ok(self.registry.get_value(guid, sensor)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SandboxError {
    Spec(SpecError),
    Objects(ObjectsError),
    Registry(RegistryError),
    ObjectInUse { id: ObjectId },
    RobotAlreadyExists { robot: RobotGuid },
    RobotNotFound { robot: RobotGuid },
}

impl From<SpecError> for SandboxError {
    fn from(error: SpecError) -> Self {
        Self::Spec(error)
    }
}

impl From<ObjectsError> for SandboxError {
    fn from(error: ObjectsError) -> Self {
        Self::Objects(error)
    }
}

impl From<RegistryError> for SandboxError {
    fn from(error: RegistryError) -> Self {
        Self::Registry(error)
    }
}
