use log::info;

use crate::sensing::{ComplexSensor, EventRegistry, RegistryError, RobotGuid, Sensing, SensorState};

impl EventRegistry {
    pub fn register_complex_sensor(
        &mut self,
        robot: &RobotGuid,
        mut sensor: Box<dyn ComplexSensor>,
    ) -> Result<impl FnOnce() -> Vec<Sensing> + '_, RegistryError> {
        let identifier = sensor.identifier();
        if sensor.robot_guid() != robot {
            return Err(RegistryError::RobotMismatch {
                robot: robot.clone(),
                owner: sensor.robot_guid().clone(),
                sensor: identifier,
            });
        }
        if sensor.state() != SensorState::Constructed {
            return Err(RegistryError::AlreadyRegistered {
                robot: robot.clone(),
                sensor: identifier,
            });
        }
        if let Some(sensors) = self.robots.get(robot) {
            if sensors.contains_key(&identifier) {
                return Err(RegistryError::DuplicateSensor {
                    robot: robot.clone(),
                    sensor: identifier,
                });
            }
            let channel = sensor.channel();
            if let Some(occupant) = sensors.values().find(|other| other.channel() == channel) {
                return Err(RegistryError::ChannelTaken {
                    robot: robot.clone(),
                    channel,
                    occupant: occupant.identifier(),
                });
            }
        }
        let robot = robot.clone();
        let command = move || {
            let channel = sensor.channel();
            sensor.core_mut().attach();
            info!("Register {} of robot {} on channel {}", identifier, robot, channel);
            self.robots
                .entry(robot.clone())
                .or_default()
                .insert(identifier.clone(), sensor);
            vec![Sensing::SensorRegistered {
                robot,
                sensor: identifier,
                channel,
            }]
        };
        Ok(command)
    }
}
