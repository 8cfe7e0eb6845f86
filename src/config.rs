//! Engine configuration
//!
//! Field geometry and difficulty tuning. Every field has a default matching the
//! shipped game, so a JSON blob only needs to name what it overrides.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which screen axis the obstacles scroll along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Obstacles fall down the screen, the player steers left/right
    #[default]
    Vertical,
    /// Obstacles travel left to right, the player steers up/down
    Horizontal,
}

impl Orientation {
    /// Component of `v` on the steering axis
    #[inline]
    pub fn cross(&self, v: Vec2) -> f32 {
        match self {
            Orientation::Vertical => v.x,
            Orientation::Horizontal => v.y,
        }
    }

    /// Component of `v` on the scroll axis
    #[inline]
    pub fn along(&self, v: Vec2) -> f32 {
        match self {
            Orientation::Vertical => v.y,
            Orientation::Horizontal => v.x,
        }
    }

    /// Unit vector pointing in the scroll direction
    #[inline]
    pub fn along_unit(&self) -> Vec2 {
        match self {
            Orientation::Vertical => Vec2::Y,
            Orientation::Horizontal => Vec2::X,
        }
    }

    /// Build a world-space vector from (cross, along) components
    #[inline]
    pub fn compose(&self, cross: f32, along: f32) -> Vec2 {
        match self {
            Orientation::Vertical => Vec2::new(cross, along),
            Orientation::Horizontal => Vec2::new(along, cross),
        }
    }
}

/// How the spawner picks the cross-axis coordinate of a new obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnPattern {
    /// Anywhere on the track
    #[default]
    Uniform,
    /// Centred in one of N equal lanes
    Lanes(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field size must be positive, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },
    #[error("track {min}..{max} does not fit the field cross extent {extent}")]
    TrackOutsideField { min: f32, max: f32, extent: f32 },
    #[error("{what} extent {extent} does not fit a track width of {available}")]
    TooWide {
        what: &'static str,
        extent: f32,
        available: f32,
    },
    #[error("player along position {along} is outside the field")]
    PlayerOutsideField { along: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("speed threshold must be at least 1 tick")]
    ZeroThreshold,
    #[error("lane spawn pattern needs at least one lane")]
    ZeroLanes,
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning and geometry for one engine instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Field ===
    /// Visible field width (world units)
    pub field_width: f32,
    /// Visible field height (world units)
    pub field_height: f32,
    pub orientation: Orientation,
    /// Near edge of the track on the cross axis
    pub track_min: f32,
    /// Far edge of the track on the cross axis
    pub track_max: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Cross-axis distance moved per tick while a direction is held
    pub player_step: f32,
    /// Fixed along-axis position of the player's leading edge
    pub player_along: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub spawn_pattern: SpawnPattern,
    /// Hazard spawn interval at speed 1.0 (ticks)
    pub hazard_interval: f32,
    /// Bonus spawn interval at speed 1.0 (ticks)
    pub bonus_interval: f32,
    /// Points granted per bonus pickup
    pub bonus_reward: u64,

    // === Difficulty ===
    /// Scroll speed at the start of a run (units per tick)
    pub base_speed: f32,
    /// Speed goes up every time the score hits a multiple of this
    pub speed_threshold: u64,
    pub speed_increment: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 600.0,
            orientation: Orientation::Vertical,
            track_min: 50.0,
            track_max: 350.0,

            player_width: 40.0,
            player_height: 60.0,
            player_step: 5.0,
            player_along: 450.0,

            obstacle_width: 40.0,
            obstacle_height: 60.0,
            spawn_pattern: SpawnPattern::Uniform,
            hazard_interval: 60.0,
            bonus_interval: 240.0,
            bonus_reward: 50,

            base_speed: 2.0,
            speed_threshold: 500,
            speed_increment: 0.5,
        }
    }
}

impl EngineConfig {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paturain_racer_config";

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Visible field size as a vector
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    pub fn obstacle_size(&self) -> Vec2 {
        Vec2::new(self.obstacle_width, self.obstacle_height)
    }

    /// Check that the geometry is playable and the tuning is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }

        let axis = self.orientation;
        let field = self.field_size();
        let cross_extent = axis.cross(field);
        if !(self.track_min >= 0.0 && self.track_min < self.track_max)
            || self.track_max > cross_extent
        {
            return Err(ConfigError::TrackOutsideField {
                min: self.track_min,
                max: self.track_max,
                extent: cross_extent,
            });
        }

        for (name, value) in [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_step", self.player_step),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("hazard_interval", self.hazard_interval),
            ("bonus_interval", self.bonus_interval),
            ("base_speed", self.base_speed),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(self.speed_increment >= 0.0 && self.speed_increment.is_finite()) {
            return Err(ConfigError::NonPositive {
                name: "speed_increment",
                value: self.speed_increment,
            });
        }
        if self.speed_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        let track_width = self.track_max - self.track_min;
        let player_cross = axis.cross(self.player_size());
        if player_cross > track_width {
            return Err(ConfigError::TooWide {
                what: "player",
                extent: player_cross,
                available: track_width,
            });
        }

        let obstacle_cross = axis.cross(self.obstacle_size());
        let available = match self.spawn_pattern {
            SpawnPattern::Uniform => track_width,
            SpawnPattern::Lanes(0) => return Err(ConfigError::ZeroLanes),
            SpawnPattern::Lanes(n) => track_width / n as f32,
        };
        if obstacle_cross > available {
            return Err(ConfigError::TooWide {
                what: "obstacle",
                extent: obstacle_cross,
                available,
            });
        }

        let along_extent = axis.along(field);
        let player_along = axis.along(self.player_size());
        if !(self.player_along >= 0.0 && self.player_along + player_along <= along_extent) {
            return Err(ConfigError::PlayerOutsideField {
                along: self.player_along,
            });
        }

        Ok(())
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded engine config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default engine config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl EngineConfig {
    /// Default geometry turned sideways: road along x, steering on y
    pub(crate) fn sideways() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            field_width: 600.0,
            field_height: 400.0,
            player_width: 60.0,
            player_height: 40.0,
            obstacle_width: 60.0,
            obstacle_height: 40.0,
            player_along: 500.0,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = EngineConfig::from_json(r#"{ "bonus_reward": 75, "base_speed": 3.0 }"#)
            .expect("valid config");
        assert_eq!(config.bonus_reward, 75);
        assert_eq!(config.base_speed, 3.0);
        assert_eq!(config.track_min, 50.0);
        assert_eq!(config.speed_threshold, 500);
    }

    #[test]
    fn test_from_json_lanes() {
        let config = EngineConfig::from_json(r#"{ "spawn_pattern": { "Lanes": 3 } }"#)
            .expect("valid config");
        assert_eq!(config.spawn_pattern, SpawnPattern::Lanes(3));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            EngineConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let config = EngineConfig {
            base_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "base_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_track_outside_field() {
        let config = EngineConfig {
            track_max: 450.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TrackOutsideField { .. })
        ));
    }

    #[test]
    fn test_rejects_too_many_lanes() {
        // 300 / 10 = 30 < obstacle width 40
        let config = EngineConfig {
            spawn_pattern: SpawnPattern::Lanes(10),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooWide {
                what: "obstacle",
                ..
            })
        ));

        let config = EngineConfig {
            spawn_pattern: SpawnPattern::Lanes(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroLanes)));
    }

    #[test]
    fn test_horizontal_needs_matching_geometry() {
        assert!(EngineConfig::sideways().validate().is_ok());

        let config = EngineConfig {
            orientation: Orientation::Horizontal,
            ..Default::default()
        };
        // Along extent 400 < player_along 450 + 40
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_orientation_axes() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(Orientation::Vertical.cross(v), 1.0);
        assert_eq!(Orientation::Vertical.along(v), 2.0);
        assert_eq!(Orientation::Horizontal.cross(v), 2.0);
        assert_eq!(Orientation::Horizontal.along(v), 1.0);
        assert_eq!(Orientation::Horizontal.compose(2.0, 1.0), v);
    }
}
