//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod engine;
pub mod input;
pub mod movement;
pub mod scoring;
pub mod spawn;
pub mod state;

pub use clock::FixedStep;
pub use collision::{CollisionReport, aabb_overlap, resolve_collisions};
pub use engine::Engine;
pub use input::{Direction, InputState};
pub use state::{
    GameEvent, GamePhase, Obstacle, ObstacleKind, ObstacleView, Player, Rect, RunState,
    RunSummary, Snapshot, Track,
};
