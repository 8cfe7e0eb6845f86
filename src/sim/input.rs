//! Directional input flags
//!
//! Set by key-down/key-up events between ticks, read by the mover.

use serde::{Deserialize, Serialize};

/// Steering direction on the cross axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the track's min edge (left, or up when horizontal)
    Near,
    /// Toward the track's max edge (right, or down when horizontal)
    Far,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value; unknown keys give `None`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowUp" | "a" | "A" | "w" | "W" => Some(Direction::Near),
            "ArrowRight" | "ArrowDown" | "d" | "D" | "s" | "S" => Some(Direction::Far),
            _ => None,
        }
    }
}

/// Held-direction flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub near: bool,
    pub far: bool,
}

impl InputState {
    pub fn press(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Near => self.near = held,
            Direction::Far => self.far = held,
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Near => self.near,
            Direction::Far => self.far,
        }
    }

    /// Release both directions
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
