//! Sound cues for engine events
//!
//! The engine only emits events; this maps them to cues. Playback itself is
//! procedural Web Audio in the wasm build.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Engine revs up at the start of a run
    RunStart,
    /// Hit a hazard
    Crash,
    /// Picked up a bonus item
    BonusPickup,
    /// Difficulty step
    SpeedUp,
    /// Final score beat the record
    HighScore,
}

impl SoundEffect {
    /// Cue for an engine event, `None` for events that stay silent
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::RunStarted => Some(SoundEffect::RunStart),
            GameEvent::HazardCollision { .. } => Some(SoundEffect::Crash),
            GameEvent::BonusCollected { .. } => Some(SoundEffect::BonusPickup),
            GameEvent::SpeedIncreased { .. } => Some(SoundEffect::SpeedUp),
            GameEvent::NewHighScore { .. } => Some(SoundEffect::HighScore),
            GameEvent::Paused | GameEvent::Resumed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_cues() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::HazardCollision { score: 10 }),
            Some(SoundEffect::Crash)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::BonusCollected { reward: 50 }),
            Some(SoundEffect::BonusPickup)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::Paused), None);
    }
}
