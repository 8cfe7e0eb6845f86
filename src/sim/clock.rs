//! Fixed timestep driver
//!
//! Turns variable frame deltas into whole simulation ticks so the game runs at
//! the same speed regardless of display refresh rate.

use super::engine::Engine;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta fed into the accumulator (seconds)
pub const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Feed `elapsed` seconds of wall time, run the ticks it pays for
    ///
    /// Returns how many ticks ran. Leftover time carries into the next call.
    pub fn advance(&mut self, engine: &mut Engine, elapsed: f32) -> u32 {
        if !(elapsed > 0.0) {
            return 0;
        }
        self.accumulator += elapsed.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            engine.tick();
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Drop the backlog rather than spiral
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Time carried over to the next frame
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
