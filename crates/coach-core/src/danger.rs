//! Danger estimation: mapping a game-state snapshot to a `[0, 1]` scalar.
//!
//! The estimate is intentionally coarse. Two signals contribute:
//!
//! 1. How many enemies are visible right now (capped -- five visible
//!    enemies are not ten times worse than one).
//! 2. How many enemies, visible or hidden, are far ahead of the hero in
//!    levels. This term compounds: each overleveled enemy adds its full
//!    penalty, so a stomped game saturates the estimate quickly.
//!
//! The result feeds the route optimizer's safety filter. A total function:
//! degraded snapshots (empty rosters, zero levels) simply score low.

use coach_types::GameState;

/// Danger contributed per visible enemy.
const VISIBLE_ENEMY_WEIGHT: f64 = 0.2;

/// Cap on the visible-enemy term.
const VISIBLE_TERM_CAP: f64 = 0.5;

/// Danger added for each enemy more than [`OVERLEVEL_MARGIN`] levels ahead.
const OVERLEVEL_PENALTY: f64 = 0.3;

/// Level lead an enemy needs before it counts as overleveled.
const OVERLEVEL_MARGIN: u32 = 3;

/// Estimate the current map danger from a snapshot.
///
/// Returns a scalar in `[0, 1]`, where 1 means maximum danger.
pub fn estimate_danger(state: &GameState) -> f64 {
    let mut danger = 0.0;

    let visible = state.visible_enemy_count();
    if visible > 0 {
        let count = f64::from(u32::try_from(visible).unwrap_or(u32::MAX));
        danger += (count * VISIBLE_ENEMY_WEIGHT).min(VISIBLE_TERM_CAP);
    }

    // One penalty per qualifying enemy; multiple overleveled enemies
    // compound the risk.
    let threshold = state.level.saturating_add(OVERLEVEL_MARGIN);
    for enemy in &state.enemies {
        if enemy.level > threshold {
            danger += OVERLEVEL_PENALTY;
        }
    }

    danger.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use coach_types::EnemyState;

    use super::*;

    fn enemy(name: &str, level: u32, visible: bool) -> EnemyState {
        EnemyState {
            name: name.to_owned(),
            level,
            role: String::from("core"),
            visible,
        }
    }

    fn state_with_enemies(level: u32, enemies: Vec<EnemyState>) -> GameState {
        GameState {
            level,
            enemies,
            ..GameState::default()
        }
    }

    #[test]
    fn empty_snapshot_scores_zero() {
        let state = GameState::default();
        assert!(estimate_danger(&state).abs() < f64::EPSILON);
    }

    #[test]
    fn one_visible_enemy() {
        let state = state_with_enemies(7, vec![enemy("Shadow Fiend", 7, true)]);
        assert!((estimate_danger(&state) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn visible_term_caps_at_half() {
        let enemies = (0..5).map(|i| enemy(&format!("e{i}"), 7, true)).collect();
        let state = state_with_enemies(7, enemies);
        assert!((estimate_danger(&state) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn invisible_enemies_do_not_count_toward_visibility() {
        let state = state_with_enemies(7, vec![enemy("Phantom Assassin", 7, false)]);
        assert!(estimate_danger(&state).abs() < f64::EPSILON);
    }

    #[test]
    fn overleveled_enemy_adds_penalty_even_when_hidden() {
        // Level 11 vs hero 7: lead of 4 > 3 margin.
        let state = state_with_enemies(7, vec![enemy("Earthshaker", 11, false)]);
        assert!((estimate_danger(&state) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn level_lead_of_exactly_three_is_not_overleveled() {
        let state = state_with_enemies(7, vec![enemy("Dark Seer", 10, false)]);
        assert!(estimate_danger(&state).abs() < f64::EPSILON);
    }

    #[test]
    fn overlevel_penalties_compound() {
        let state = state_with_enemies(
            5,
            vec![
                enemy("a", 9, false),
                enemy("b", 10, false),
                enemy("c", 12, false),
            ],
        );
        assert!((estimate_danger(&state) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn estimate_is_clamped_to_one() {
        let enemies = (0..5)
            .map(|i| enemy(&format!("e{i}"), 20, true))
            .collect();
        let state = state_with_enemies(1, enemies);
        // 0.5 visible term + 5 * 0.3 overlevel = 2.0, clamped.
        assert!((estimate_danger(&state) - 1.0).abs() < f64::EPSILON);
    }
}
