//! Obstacle spawning
//!
//! Hazards and bonus items each have their own tick counter. The interval
//! shrinks as the game speeds up: `base_interval / game_speed` ticks.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Obstacle, ObstacleKind, Rect, RunState, Track};
use crate::config::{EngineConfig, SpawnPattern};

/// Spawn interval in ticks, `None` when the speed can't produce one
pub fn spawn_interval(base_interval: f32, speed: f32) -> Option<f32> {
    if speed > 0.0 && speed.is_finite() {
        Some(base_interval / speed)
    } else {
        None
    }
}

/// Advance a spawn counter by one tick; true when it fires (and resets)
pub fn step_timer(timer: &mut u32, base_interval: f32, speed: f32) -> bool {
    let Some(interval) = spawn_interval(base_interval, speed) else {
        return false;
    };
    *timer = timer.saturating_add(1);
    if *timer as f32 >= interval {
        *timer = 0;
        true
    } else {
        false
    }
}

/// Build an obstacle just outside the field's far edge
pub fn spawn_obstacle(
    kind: ObstacleKind,
    config: &EngineConfig,
    track: &Track,
    rng: &mut Pcg32,
) -> Obstacle {
    let axis = config.orientation;
    let size = config.obstacle_size();
    let extent = axis.cross(size);

    let cross = match config.spawn_pattern {
        SpawnPattern::Lanes(lanes) if lanes > 0 => {
            let lane_width = track.width() / lanes as f32;
            let lane = rng.random_range(0..lanes);
            track.min + lane as f32 * lane_width + (lane_width - extent) / 2.0
        }
        _ => rng.random_range(track.min..=track.max_start(extent)),
    };
    let along = -axis.along(size);

    Obstacle::new(
        Rect {
            pos: axis.compose(cross, along),
            size,
        },
        kind,
    )
}

/// Run both spawn counters for one tick, returns the number of new obstacles
pub fn run_spawner(
    run: &mut RunState,
    obstacles: &mut Vec<Obstacle>,
    config: &EngineConfig,
    track: &Track,
    rng: &mut Pcg32,
) -> usize {
    let mut spawned = 0;

    if step_timer(&mut run.spawn_timer, config.hazard_interval, run.game_speed) {
        obstacles.push(spawn_obstacle(ObstacleKind::Hazard, config, track, rng));
        spawned += 1;
    }

    if step_timer(&mut run.bonus_spawn_timer, config.bonus_interval, run.game_speed) {
        obstacles.push(spawn_obstacle(ObstacleKind::Bonus, config, track, rng));
        spawned += 1;
    }

    if spawned > 0 {
        log::debug!("Spawned {} obstacle(s), {} active", spawned, obstacles.len());
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_hazard_every_150_ticks_at_speed_2() {
        let mut timer = 0;
        let fired: Vec<u32> = (1..=600)
            .filter(|_| step_timer(&mut timer, 300.0, 2.0))
            .collect();
        assert_eq!(fired, vec![150, 300, 450, 600]);
    }

    #[test]
    fn test_zero_speed_never_spawns() {
        let mut timer = 0;
        for _ in 0..10_000 {
            assert!(!step_timer(&mut timer, 60.0, 0.0));
        }
        assert!(spawn_interval(60.0, f32::NAN).is_none());
        assert!(spawn_interval(60.0, -1.0).is_none());
    }

    #[test]
    fn test_faster_spawns_more_often() {
        let count = |speed: f32| {
            let mut timer = 0;
            (0..1200).filter(|_| step_timer(&mut timer, 60.0, speed)).count()
        };
        assert!(count(4.0) > count(2.0));
        assert_eq!(count(2.0), 40);
    }

    #[test]
    fn test_spawn_inside_track() {
        let config = EngineConfig::default();
        let track = Track::from_config(&config);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let o = spawn_obstacle(ObstacleKind::Hazard, &config, &track, &mut rng);
            assert!(track.contains(o.rect.pos.x, o.rect.size.x));
            assert_eq!(o.rect.pos.y, -config.obstacle_height);
        }
    }

    #[test]
    fn test_spawn_lanes_centred() {
        let config = EngineConfig {
            spawn_pattern: SpawnPattern::Lanes(3),
            ..Default::default()
        };
        let track = Track::from_config(&config);
        let mut rng = Pcg32::seed_from_u64(42);
        // Lanes are 100 wide starting at 50; a 40 wide car sits 30 in
        let lanes = [80.0, 180.0, 280.0];
        for _ in 0..200 {
            let o = spawn_obstacle(ObstacleKind::Bonus, &config, &track, &mut rng);
            assert!(lanes.contains(&o.rect.pos.x), "x={}", o.rect.pos.x);
            assert_eq!(o.kind, ObstacleKind::Bonus);
        }
    }

    #[test]
    fn test_bonus_counter_independent() {
        let config = EngineConfig::default();
        let track = Track::from_config(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut run = RunState::new(2.0);
        let mut obstacles = Vec::new();

        // Hazards every 30 ticks, bonuses every 120 at speed 2
        for _ in 0..120 {
            run_spawner(&mut run, &mut obstacles, &config, &track, &mut rng);
        }
        let hazards = obstacles.iter().filter(|o| o.kind == ObstacleKind::Hazard).count();
        let bonuses = obstacles.iter().filter(|o| o.kind == ObstacleKind::Bonus).count();
        assert_eq!(hazards, 4);
        assert_eq!(bonuses, 1);
        assert_eq!(run.spawn_timer, 0);
        assert_eq!(run.bonus_spawn_timer, 0);
    }
}
