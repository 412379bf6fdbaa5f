use crate::sensing::{
    ComplexSensor, EventRegistry, RegistryError, RobotGuid, SensorIdentifier, SensorValue,
};

impl EventRegistry {
    pub fn get_sensor(
        &self,
        robot: &RobotGuid,
        sensor: &SensorIdentifier,
    ) -> Result<&dyn ComplexSensor, RegistryError> {
        self.robots
            .get(robot)
            .and_then(|sensors| sensors.get(sensor))
            .map(|sensor| &**sensor)
            .ok_or_else(|| RegistryError::SensorNotFound {
                robot: robot.clone(),
                sensor: sensor.clone(),
            })
    }

    pub(crate) fn get_sensor_mut(
        &mut self,
        robot: &RobotGuid,
        sensor: &SensorIdentifier,
    ) -> Result<&mut Box<dyn ComplexSensor>, RegistryError> {
        self.robots
            .get_mut(robot)
            .and_then(|sensors| sensors.get_mut(sensor))
            .ok_or_else(|| RegistryError::SensorNotFound {
                robot: robot.clone(),
                sensor: sensor.clone(),
            })
    }

    pub fn get_value(
        &self,
        robot: &RobotGuid,
        sensor: &SensorIdentifier,
    ) -> Result<SensorValue, RegistryError> {
        let sensor = self.get_sensor(robot, sensor)?;
        Ok(sensor.value()?)
    }

    pub fn contains_robot(&self, robot: &RobotGuid) -> bool {
        self.robots.contains_key(robot)
    }

    pub fn robots(&self) -> Vec<&RobotGuid> {
        let mut robots: Vec<&RobotGuid> = self.robots.keys().collect();
        robots.sort();
        robots
    }
}
