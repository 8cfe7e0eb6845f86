//! Paturain Racer - a lane-dodging arcade mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `config`: Engine tuning and field geometry
//! - `renderer`: Snapshot to 2D draw list
//! - `audio`: Sound cues for engine events (Web Audio playback on wasm)

pub mod audio;
pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, EngineConfig, Orientation, SpawnPattern};
pub use sim::{Engine, GameEvent, GamePhase, Snapshot};

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one obstacle scroll step per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
