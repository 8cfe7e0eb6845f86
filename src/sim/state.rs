//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, Orientation};

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No active run, scoreboard shows the previous high score
    Idle,
    /// Active gameplay
    Playing,
    /// Simulation frozen, entities and score retained
    Paused,
    /// Run ended on a hazard
    GameOver,
}

/// Discrete events for audio/UI collaborators, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    /// Player hit a hazard; the run is over
    HazardCollision { score: u64 },
    BonusCollected { reward: u64 },
    SpeedIncreased { speed: f32 },
    /// Emitted alongside `HazardCollision` when the final score beat the record
    NewHighScore { score: u64 },
    Paused,
    Resumed,
}

/// Axis-aligned rectangle, `pos` is the min corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Cross-axis bounds the player and obstacles must stay within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub min: f32,
    pub max: f32,
}

impl Track {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            min: config.track_min,
            max: config.track_max,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Highest min-corner coordinate for something `extent` wide
    #[inline]
    pub fn max_start(&self, extent: f32) -> f32 {
        self.max - extent
    }

    /// True when `[start, start + extent]` lies on the track
    #[inline]
    pub fn contains(&self, start: f32, extent: f32) -> bool {
        start >= self.min && start + extent <= self.max
    }
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    /// Fresh player centred on the track at the configured along position
    pub fn spawn(config: &EngineConfig, track: &Track) -> Self {
        let axis = config.orientation;
        let size = config.player_size();
        let cross = track.min + (track.width() - axis.cross(size)) / 2.0;
        Self {
            rect: Rect {
                pos: axis.compose(cross, config.player_along),
                size,
            },
        }
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ends the run on contact
    Hazard,
    /// Grants bonus points on contact
    Bonus,
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(rect: Rect, kind: ObstacleKind) -> Self {
        Self { rect, kind }
    }

    /// Move along the scroll axis
    #[inline]
    pub fn scroll(&mut self, axis: Orientation, distance: f32) {
        self.rect.pos += axis.along_unit() * distance;
    }
}

/// Per-run counters, rebuilt on every start/reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Ticks survived while Playing
    pub score: u64,
    pub bonus_points: u64,
    /// Scroll speed in units per tick
    pub game_speed: f32,
    /// Ticks since the last hazard spawn
    pub spawn_timer: u32,
    /// Ticks since the last bonus spawn
    pub bonus_spawn_timer: u32,
    /// Playing ticks simulated, including the one that ended the run
    pub ticks: u64,
    /// Total scroll distance (for road marking animation)
    pub distance: f32,
}

impl RunState {
    pub fn new(base_speed: f32) -> Self {
        Self {
            score: 0,
            bonus_points: 0,
            game_speed: base_speed,
            spawn_timer: 0,
            bonus_spawn_timer: 0,
            ticks: 0,
            distance: 0.0,
        }
    }
}

/// Final numbers of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub bonus_points: u64,
    pub ticks: u64,
}

impl RunSummary {
    /// Score plus bonus points
    pub fn total(&self) -> u64 {
        self.score.saturating_add(self.bonus_points)
    }
}

/// Obstacle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

/// Read-only projection of the engine after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub orientation: Orientation,
    /// Visible field size
    pub field: Vec2,
    pub track: Track,
    pub player: Rect,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub bonus_points: u64,
    pub high_score: u64,
    pub game_speed: f32,
    pub distance: f32,
}
