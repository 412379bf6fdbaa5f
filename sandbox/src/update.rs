use crate::api::{Event, SandboxReport};
use crate::sensing::SensorStimulus;
use crate::{occur, Sandbox};

impl Sandbox {
    /// Advances the session one tick.
    ///
    /// Stimuli are dispatched before objects update, so reads made after this
    /// call observe the tick's values.
    pub fn update(&mut self, elapsed: f32, stimuli: &[SensorStimulus]) -> Vec<Event> {
        let sensing_events = self.registry.dispatch_all(stimuli);
        self.registry.update(elapsed);
        self.objects.update(elapsed);
        self.ticks += 1;
        self.time += elapsed;
        occur![sensing_events,]
    }

    /// Runs a fixed tick of `config.tick_duration`.
    pub fn step(&mut self, stimuli: &[SensorStimulus]) -> Vec<Event> {
        let elapsed = self.config.tick_duration;
        self.update(elapsed, stimuli)
    }

    pub fn report(&self, events: Vec<Event>) -> SandboxReport {
        SandboxReport {
            tick: self.ticks,
            time: self.time,
            events,
        }
    }
}
