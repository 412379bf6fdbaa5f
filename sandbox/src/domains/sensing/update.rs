use log::error;

use crate::objects::SimObject;
use crate::sensing::{
    EventRegistry, RegistryError, RobotGuid, Sensing, SensorEvent, SensorIdentifier,
    SensorStimulus,
};

impl EventRegistry {
    pub fn dispatch(
        &mut self,
        robot: &RobotGuid,
        sensor: &SensorIdentifier,
        event: &SensorEvent,
    ) -> Result<Vec<Sensing>, RegistryError> {
        let target = self.get_sensor_mut(robot, sensor)?;
        let changed = target.on_sensor_event(event)?;
        let mut events = vec![];
        if changed {
            events.push(Sensing::SensorValueChanged {
                robot: robot.clone(),
                sensor: sensor.clone(),
                value: target.core().current(),
            });
        }
        Ok(events)
    }

    pub fn dispatch_all(&mut self, stimuli: &[SensorStimulus]) -> Vec<Sensing> {
        let mut events = vec![];
        for stimulus in stimuli {
            match self.dispatch(&stimulus.robot, &stimulus.sensor, &stimulus.event) {
                Ok(changes) => events.extend(changes),
                Err(error) => {
                    error!(
                        "Unable to dispatch {:?} to {} of robot {}, {:?}",
                        stimulus.event.value, stimulus.sensor, stimulus.robot, error
                    );
                    events.push(Sensing::SensorFaulted {
                        robot: stimulus.robot.clone(),
                        sensor: stimulus.sensor.clone(),
                        error,
                    });
                }
            }
        }
        events
    }

    pub fn update(&mut self, elapsed: f32) {
        for sensors in self.robots.values_mut() {
            for sensor in sensors.values_mut() {
                sensor.update(elapsed);
            }
        }
    }
}
