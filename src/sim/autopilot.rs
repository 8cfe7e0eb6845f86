//! Demo mode steering
//!
//! Reads a snapshot and picks which direction to hold: dodge the closest hazard
//! bearing down on the player, otherwise drift toward the nearest bonus.

use super::input::InputState;
use super::state::{ObstacleKind, Snapshot};

/// How far ahead of the player (along the scroll axis) hazards are considered
const LOOKAHEAD: f32 = 220.0;
/// Extra clearance on each side of the player when judging a threat
const MARGIN: f32 = 8.0;
/// Dead zone when lining up with a bonus
const ALIGN_TOLERANCE: f32 = 4.0;

pub fn steer(snapshot: &Snapshot) -> InputState {
    let axis = snapshot.orientation;
    let player = snapshot.player;
    let p_cross_min = axis.cross(player.min());
    let p_cross_max = axis.cross(player.max());
    let p_along_min = axis.along(player.min());
    let p_along_max = axis.along(player.max());
    let p_center = axis.cross(player.center());

    // Obstacles still ahead of (or level with) the player, within lookahead
    let ahead = |min_along: f32, max_along: f32| {
        max_along > p_along_min - LOOKAHEAD && min_along < p_along_max
    };

    let threat = snapshot
        .obstacles
        .iter()
        .filter(|o| o.kind == ObstacleKind::Hazard)
        .filter(|o| ahead(axis.along(o.rect.min()), axis.along(o.rect.max())))
        .filter(|o| {
            axis.cross(o.rect.min()) < p_cross_max + MARGIN
                && axis.cross(o.rect.max()) > p_cross_min - MARGIN
        })
        .max_by(|a, b| {
            axis.along(a.rect.max())
                .partial_cmp(&axis.along(b.rect.max()))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(hazard) = threat {
        let h_center = axis.cross(hazard.rect.center());
        let room_near = p_cross_min - snapshot.track.min;
        let room_far = snapshot.track.max - p_cross_max;

        // Go around the side the hazard isn't on, unless that side is a wall
        let go_near = if h_center >= p_center {
            room_near > 0.0 || room_far <= 0.0
        } else {
            room_far <= 0.0 && room_near > 0.0
        };
        return InputState {
            near: go_near,
            far: !go_near,
        };
    }

    let target = snapshot
        .obstacles
        .iter()
        .filter(|o| o.kind == ObstacleKind::Bonus)
        .filter(|o| ahead(axis.along(o.rect.min()), axis.along(o.rect.max())))
        .max_by(|a, b| {
            axis.along(a.rect.max())
                .partial_cmp(&axis.along(b.rect.max()))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(bonus) => {
            let offset = axis.cross(bonus.rect.center()) - p_center;
            InputState {
                near: offset < -ALIGN_TOLERANCE,
                far: offset > ALIGN_TOLERANCE,
            }
        }
        None => InputState::default(),
    }
}
