use serde::{Deserialize, Serialize};

use crate::objects::validation::ensure_positive;
use crate::objects::SpecError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SandboxConfig {
    /// Width and depth of the playing field in metres, centered at origin.
    pub field_size: [f32; 2],
    /// Full scale of analog channels.
    pub max_voltage: f32,
    pub tick_duration: f32,
    pub noise_seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            field_size: [4.0, 4.0],
            max_voltage: 5.0,
            tick_duration: 1.0 / 60.0,
            noise_seed: 42,
        }
    }
}

impl SandboxConfig {
    pub fn validate(&self) -> Result<(), SpecError> {
        ensure_positive("config", "fieldSize.x", self.field_size[0])?;
        ensure_positive("config", "fieldSize.y", self.field_size[1])?;
        ensure_positive("config", "maxVoltage", self.max_voltage)?;
        ensure_positive("config", "tickDuration", self.tick_duration)
    }
}
