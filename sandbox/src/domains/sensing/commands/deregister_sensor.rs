use log::info;

use crate::sensing::{EventRegistry, RegistryError, RobotGuid, Sensing, SensorIdentifier};

impl EventRegistry {
    pub fn deregister_complex_sensor(
        &mut self,
        robot: &RobotGuid,
        sensor: &SensorIdentifier,
    ) -> Result<impl FnOnce() -> Vec<Sensing> + '_, RegistryError> {
        self.get_sensor(robot, sensor)?;
        let robot = robot.clone();
        let sensor = sensor.clone();
        let command = move || {
            let mut events = vec![];
            if let Some(sensors) = self.robots.get_mut(&robot) {
                if let Some(mut removed) = sensors.remove(&sensor) {
                    removed.core_mut().detach();
                    info!("Deregister {} of robot {}", sensor, robot);
                    events.push(Sensing::SensorDeregistered {
                        robot: robot.clone(),
                        sensor,
                    });
                }
                if sensors.is_empty() {
                    self.robots.remove(&robot);
                }
            }
            events
        };
        Ok(command)
    }
}
