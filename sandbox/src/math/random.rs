use nanorand::{Rng, WyRand};

pub struct Random {
    generator: WyRand,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    pub fn generate(&mut self) -> f32 {
        self.generator.generate()
    }

    /// Uniform sample in `[-amplitude, amplitude]`.
    pub fn jitter(&mut self, amplitude: f32) -> f32 {
        amplitude * (2.0 * self.generate() - 1.0)
    }
}
