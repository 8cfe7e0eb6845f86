//! Score, bonus points and the speed curve

use super::state::RunState;

/// One survived tick: bumps the score and applies the speed step when the new
/// score lands on a threshold multiple. Returns true if the speed went up.
pub fn advance_score(run: &mut RunState, threshold: u64, increment: f32) -> bool {
    run.score += 1;
    if threshold > 0 && run.score % threshold == 0 {
        run.game_speed += increment;
        true
    } else {
        false
    }
}

/// Credit `count` bonus pickups, returns the points added (saturating)
pub fn award_bonus(run: &mut RunState, count: u32, reward: u64) -> u64 {
    let points = u64::from(count).saturating_mul(reward);
    run.bonus_points = run.bonus_points.saturating_add(points);
    points
}

/// Raise the record if `score` beats it; true when it did
pub fn record_high_score(high_score: &mut u64, score: u64) -> bool {
    if score > *high_score {
        *high_score = score;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_steps_at_threshold() {
        let mut run = RunState::new(2.0);
        let mut bumps = Vec::new();
        for _ in 0..1500 {
            if advance_score(&mut run, 500, 0.5) {
                bumps.push(run.score);
            }
        }
        assert_eq!(bumps, vec![500, 1000, 1500]);
        assert_eq!(run.game_speed, 3.5);
        assert_eq!(run.score, 1500);
    }

    #[test]
    fn test_award_bonus() {
        let mut run = RunState::new(2.0);
        assert_eq!(award_bonus(&mut run, 1, 50), 50);
        assert_eq!(award_bonus(&mut run, 2, 50), 100);
        assert_eq!(run.bonus_points, 150);
        assert_eq!(run.score, 0);
        assert_eq!(run.game_speed, 2.0);
    }

    #[test]
    fn test_award_bonus_saturates_on_huge_reward() {
        let mut run = RunState::new(2.0);
        assert_eq!(award_bonus(&mut run, 2, u64::MAX), u64::MAX);
        assert_eq!(run.bonus_points, u64::MAX);
        award_bonus(&mut run, 1, 50);
        assert_eq!(run.bonus_points, u64::MAX);
    }

    #[test]
    fn test_high_score_only_rises() {
        let mut high = 1000;
        assert!(record_high_score(&mut high, 1200));
        assert_eq!(high, 1200);
        assert!(!record_high_score(&mut high, 1200));
        assert!(!record_high_score(&mut high, 300));
        assert_eq!(high, 1200);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn one_increment_per_threshold(
                ticks in 1u64..5000,
                threshold in 1u64..700,
            ) {
                let mut run = RunState::new(2.0);
                let mut bumps = 0u64;
                let mut last = 0;
                for _ in 0..ticks {
                    if advance_score(&mut run, threshold, 0.5) {
                        bumps += 1;
                    }
                    prop_assert_eq!(run.score, last + 1);
                    last = run.score;
                }
                prop_assert_eq!(bumps, ticks / threshold);
                let expected = 2.0 + 0.5 * bumps as f32;
                prop_assert!((run.game_speed - expected).abs() < 1e-3);
            }
        }
    }
}
