use log::info;

use crate::sensing::{EventRegistry, RegistryError, RobotGuid, Sensing};

impl EventRegistry {
    pub fn deregister_robot(
        &mut self,
        robot: &RobotGuid,
    ) -> Result<impl FnOnce() -> Vec<Sensing> + '_, RegistryError> {
        if !self.robots.contains_key(robot) {
            return Err(RegistryError::RobotNotFound {
                robot: robot.clone(),
            });
        }
        let robot = robot.clone();
        let command = move || {
            let mut sensors: Vec<_> = self
                .robots
                .remove(&robot)
                .map(|sensors| sensors.into_iter().collect())
                .unwrap_or_default();
            sensors.sort_by(|(left, _), (right, _)| left.cmp(right));
            info!("Deregister robot {} with {} sensors", robot, sensors.len());
            sensors
                .into_iter()
                .map(|(identifier, mut sensor)| {
                    sensor.core_mut().detach();
                    Sensing::SensorDeregistered {
                        robot: robot.clone(),
                        sensor: identifier,
                    }
                })
                .collect()
        };
        Ok(command)
    }
}
