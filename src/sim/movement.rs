//! Per-tick displacement of the player and obstacles

use super::input::InputState;
use super::state::{Obstacle, Player, Track};
use crate::config::Orientation;

/// Steer the player along the cross axis, keeping it on the track
///
/// Both moves are measured from the same starting point, so holding both
/// directions gives the same result regardless of which flag is read first.
pub fn move_player(
    player: &mut Player,
    input: &InputState,
    track: &Track,
    step: f32,
    axis: Orientation,
) {
    let extent = axis.cross(player.rect.size);
    let lo = track.min;
    let hi = track.max_start(extent);
    let cross = axis.cross(player.rect.pos);

    let toward_near = if input.near { step.min(cross - lo).max(0.0) } else { 0.0 };
    let toward_far = if input.far { step.min(hi - cross).max(0.0) } else { 0.0 };

    let cross = (cross + toward_far - toward_near).clamp(lo, hi);
    player.rect.pos = axis.compose(cross, axis.along(player.rect.pos));
}

/// Scroll every obstacle toward the player by `speed`
pub fn advance_obstacles(obstacles: &mut [Obstacle], speed: f32, axis: Orientation) {
    for obstacle in obstacles {
        obstacle.scroll(axis, speed);
    }
}

/// Drop obstacles that scrolled past the trailing edge, returns how many
pub fn prune_exited(obstacles: &mut Vec<Obstacle>, field_along: f32, axis: Orientation) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| axis.along(o.rect.min()) < field_along);
    before - obstacles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::sim::state::{ObstacleKind, Rect};

    fn setup() -> (Player, Track) {
        let config = EngineConfig::default();
        let track = Track::from_config(&config);
        (Player::spawn(&config, &track), track)
    }

    #[test]
    fn test_steer_near_and_far() {
        let (mut player, track) = setup();
        let start = player.rect.pos.x;

        let input = InputState {
            near: true,
            far: false,
        };
        move_player(&mut player, &input, &track, 5.0, Orientation::Vertical);
        assert_eq!(player.rect.pos.x, start - 5.0);
        assert_eq!(player.rect.pos.y, 450.0);

        let input = InputState {
            near: false,
            far: true,
        };
        move_player(&mut player, &input, &track, 5.0, Orientation::Vertical);
        move_player(&mut player, &input, &track, 5.0, Orientation::Vertical);
        assert_eq!(player.rect.pos.x, start + 5.0);
    }

    #[test]
    fn test_both_held_cancels() {
        let (mut player, track) = setup();
        let start = player.rect.pos;
        let input = InputState {
            near: true,
            far: true,
        };
        move_player(&mut player, &input, &track, 5.0, Orientation::Vertical);
        assert_eq!(player.rect.pos, start);
    }

    #[test]
    fn test_both_held_at_edge_moves_off_edge() {
        let (mut player, track) = setup();
        player.rect.pos.x = track.min;
        let input = InputState {
            near: true,
            far: true,
        };
        move_player(&mut player, &input, &track, 5.0, Orientation::Vertical);
        assert_eq!(player.rect.pos.x, track.min + 5.0);
    }

    #[test]
    fn test_stops_at_bounds() {
        let (mut player, track) = setup();
        let input = InputState {
            near: true,
            far: false,
        };
        for _ in 0..100 {
            move_player(&mut player, &input, &track, 7.0, Orientation::Vertical);
        }
        assert_eq!(player.rect.pos.x, track.min);

        let input = InputState {
            near: false,
            far: true,
        };
        for _ in 0..100 {
            move_player(&mut player, &input, &track, 7.0, Orientation::Vertical);
        }
        assert_eq!(player.rect.pos.x, track.max - player.rect.size.x);
    }

    #[test]
    fn test_prune_after_trailing_edge() {
        let mut obstacles = vec![
            Obstacle::new(Rect::new(60.0, 599.0, 40.0, 60.0), ObstacleKind::Hazard),
            Obstacle::new(Rect::new(60.0, 600.0, 40.0, 60.0), ObstacleKind::Bonus),
            Obstacle::new(Rect::new(60.0, -60.0, 40.0, 60.0), ObstacleKind::Hazard),
        ];
        advance_obstacles(&mut obstacles, 0.5, Orientation::Vertical);
        assert_eq!(obstacles[0].rect.pos.y, 599.5);

        let removed = prune_exited(&mut obstacles, 600.0, Orientation::Vertical);
        assert_eq!(removed, 1);
        assert_eq!(obstacles.len(), 2);
        assert!(obstacles.iter().all(|o| o.rect.pos.y < 600.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn player_stays_on_track(
                moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..400),
                step in 0.5f32..40.0,
                axis in prop_oneof![Just(Orientation::Vertical), Just(Orientation::Horizontal)],
            ) {
                let config = match axis {
                    Orientation::Vertical => EngineConfig::default(),
                    Orientation::Horizontal => EngineConfig::sideways(),
                };
                let track = Track::from_config(&config);
                let mut player = Player::spawn(&config, &track);
                let hi = track.max - axis.cross(player.rect.size);
                for (near, far) in moves {
                    let input = InputState { near, far };
                    move_player(&mut player, &input, &track, step, axis);
                    let cross = axis.cross(player.rect.pos);
                    prop_assert!(
                        cross >= track.min && cross <= hi,
                        "{:?} player cross={} left the track", axis, cross
                    );
                    prop_assert_eq!(axis.along(player.rect.pos), config.player_along);
                }
            }

            #[test]
            fn move_is_order_independent(
                cross in 50.0f32..310.0,
                step in 0.5f32..40.0,
            ) {
                let (mut player, track) = setup();
                player.rect.pos.x = cross;
                let mut split = player.clone();

                move_player(&mut player, &InputState { near: true, far: true }, &track, step, Orientation::Vertical);

                // Reading the flags on their own from the same start
                let mut near_only = split.clone();
                move_player(&mut near_only, &InputState { near: true, far: false }, &track, step, Orientation::Vertical);
                move_player(&mut split, &InputState { near: false, far: true }, &track, step, Orientation::Vertical);
                let expected = cross + (split.rect.pos.x - cross) + (near_only.rect.pos.x - cross);

                prop_assert!((player.rect.pos.x - expected).abs() < 1e-3);
            }
        }
    }
}
