use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::domain::ports::RandomSource;

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible draws from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        // A poisoned generator is still a valid generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }
}
