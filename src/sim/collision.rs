//! Axis-aligned collision detection between the player and obstacles

use super::state::{Obstacle, ObstacleKind, Rect};

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// At least one hazard overlapped the player
    pub hazard_hit: bool,
    /// Bonus items consumed this pass
    pub bonuses: u32,
}

/// Strict AABB overlap: touching edges do not count
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Test the player against every obstacle, removing each one it touches
pub fn resolve_collisions(player: &Rect, obstacles: &mut Vec<Obstacle>) -> CollisionReport {
    let mut report = CollisionReport::default();
    obstacles.retain(|obstacle| {
        if !aabb_overlap(player, &obstacle.rect) {
            return true;
        }
        match obstacle.kind {
            ObstacleKind::Hazard => report.hazard_hit = true,
            ObstacleKind::Bonus => report.bonuses += 1,
        }
        false
    });
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Rect {
        Rect::new(180.0, 450.0, 40.0, 60.0)
    }

    #[test]
    fn test_overlap() {
        let p = player();
        assert!(aabb_overlap(&p, &Rect::new(200.0, 480.0, 40.0, 60.0)));
        assert!(aabb_overlap(&p, &Rect::new(150.0, 400.0, 100.0, 200.0)));
        // Sharing an edge is not an overlap
        assert!(!aabb_overlap(&p, &Rect::new(220.0, 450.0, 40.0, 60.0)));
        assert!(!aabb_overlap(&p, &Rect::new(180.0, 390.0, 40.0, 60.0)));
        // Separated on one axis only
        assert!(!aabb_overlap(&p, &Rect::new(300.0, 460.0, 40.0, 60.0)));
    }

    #[test]
    fn test_bonus_consumed_hazard_flagged() {
        let mut obstacles = vec![
            Obstacle::new(Rect::new(190.0, 440.0, 40.0, 60.0), ObstacleKind::Bonus),
            Obstacle::new(Rect::new(60.0, 100.0, 40.0, 60.0), ObstacleKind::Hazard),
            Obstacle::new(Rect::new(170.0, 470.0, 40.0, 60.0), ObstacleKind::Bonus),
        ];
        let report = resolve_collisions(&player(), &mut obstacles);
        assert_eq!(
            report,
            CollisionReport {
                hazard_hit: false,
                bonuses: 2
            }
        );
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].kind, ObstacleKind::Hazard);
    }

    #[test]
    fn test_hazard_removed_and_full_set_visited() {
        let mut obstacles = vec![
            Obstacle::new(Rect::new(185.0, 455.0, 40.0, 60.0), ObstacleKind::Hazard),
            Obstacle::new(Rect::new(175.0, 445.0, 40.0, 60.0), ObstacleKind::Bonus),
        ];
        let report = resolve_collisions(&player(), &mut obstacles);
        assert!(report.hazard_hit);
        assert_eq!(report.bonuses, 1);
        assert!(obstacles.is_empty());
    }
}
