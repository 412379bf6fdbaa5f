use crate::sensing::{ComplexSensor, EventRegistry, RegistryError, RobotGuid, SensorIdentifier};

impl EventRegistry {
    /// Sensors of `robot` ordered by identifier.
    pub fn sensors(&self, robot: &RobotGuid) -> Result<Vec<&dyn ComplexSensor>, RegistryError> {
        let sensors = self
            .robots
            .get(robot)
            .ok_or_else(|| RegistryError::RobotNotFound {
                robot: robot.clone(),
            })?;
        let mut sensors: Vec<&dyn ComplexSensor> = sensors
            .values()
            .map(|sensor| -> &dyn ComplexSensor { &**sensor })
            .collect();
        sensors.sort_by_key(|sensor| sensor.identifier());
        Ok(sensors)
    }

    /// Controller-facing lookup, a robot's wiring addresses sensors by channel.
    pub fn find_sensor(
        &self,
        robot: &RobotGuid,
        channel: u32,
    ) -> Result<&dyn ComplexSensor, RegistryError> {
        self.sensors(robot)?
            .into_iter()
            .find(|sensor| sensor.channel() == channel)
            .ok_or_else(|| RegistryError::SensorNotFound {
                robot: robot.clone(),
                sensor: SensorIdentifier(format!("*-{}", channel)),
            })
    }
}
