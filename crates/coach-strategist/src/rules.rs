//! The local rule-table strategist.
//!
//! Works without any API key: a fixed set of deterministic rules inspects
//! the snapshot's economy, safety, positioning, item, and teamfight
//! signals and emits prioritized tips. Also serves as the fallback when
//! the LLM backend is down.

use coach_types::{AdviceCategory, GameState, StrategyTip};

// ---------------------------------------------------------------------------
// Thresholds (kept as constants so operators can find and tune them)
// ---------------------------------------------------------------------------

/// Baseline gold a hero should hold at minute zero.
const EXPECTED_BASE_GOLD: u32 = 400;

/// Expected gold growth per minute of game time.
const EXPECTED_GOLD_PER_MINUTE: u32 = 30;

/// Fraction of the expected gold below which farm counts as lagging.
const FARM_LAG_FRACTION: f64 = 0.8;

/// Gold bank at which an item purchase is suggested.
const ITEM_GOLD: u32 = 1000;

/// Health fraction below which retreat is urgent.
const LOW_HP_FRACTION: f64 = 0.3;

/// Health fraction below which nearby enemies become threatening.
const ENDANGERED_HP_FRACTION: f64 = 0.6;

/// Visible enemies needed to trigger the crowding warning.
const CROWDING_ENEMIES: usize = 2;

/// Minutes counting as the early game.
const EARLY_GAME_MINUTES: u32 = 10;

/// Minutes during which a carry belongs on a lane.
const CARRY_LANE_MINUTES: u32 = 15;

/// Expected last hits per minute for a farming carry.
const CARRY_LAST_HITS_PER_MINUTE: u32 = 3;

/// Minutes after which an empty inventory warrants a nudge.
const FIRST_ITEM_MINUTES: u32 = 5;

/// Allies needed to call a brewing teamfight.
const TEAMFIGHT_ALLIES: usize = 3;

/// How many tips an analysis returns at most.
const MAX_TIPS: usize = 3;

/// Heroes played as the team's farm-dependent carry.
const CARRY_HEROES: &[&str] = &[
    "Anti-Mage",
    "Phantom Assassin",
    "Juggernaut",
    "Drow Ranger",
];

/// The rule-table strategist.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleStrategist;

impl RuleStrategist {
    /// Create a rule strategist.
    pub const fn new() -> Self {
        Self
    }

    /// Analyze a snapshot and return the top tips, highest priority
    /// first. Deterministic; ties keep rule-evaluation order.
    pub fn analyze(&self, state: &GameState) -> Vec<StrategyTip> {
        let mut tips = Vec::new();
        tips.extend(economy_tips(state));
        tips.extend(safety_tips(state));
        tips.extend(positioning_tips(state));
        tips.extend(item_tips(state));
        tips.extend(teamfight_tips(state));

        tips.sort_by(|a, b| b.priority.cmp(&a.priority));
        tips.truncate(MAX_TIPS);
        tips
    }
}

fn tip(title: &str, advice: &str, category: AdviceCategory, priority: u8) -> StrategyTip {
    StrategyTip {
        title: title.to_owned(),
        advice: advice.to_owned(),
        category,
        priority,
    }
}

/// Gold and farm-rate rules.
fn economy_tips(state: &GameState) -> Vec<StrategyTip> {
    let mut tips = Vec::new();

    let expected = EXPECTED_BASE_GOLD.saturating_add(
        state
            .game_time_min
            .checked_mul(EXPECTED_GOLD_PER_MINUTE)
            .unwrap_or(u32::MAX),
    );
    if f64::from(state.gold) < f64::from(expected) * FARM_LAG_FRACTION {
        tips.push(tip(
            "Farm is lagging",
            "Focus on creeps. Look for a free lane or the jungle",
            AdviceCategory::Farming,
            7,
        ));
    }

    if state.gold >= ITEM_GOLD {
        tips.push(tip(
            "Gold to spend",
            "You can afford a key item. Consider returning to shop",
            AdviceCategory::Item,
            6,
        ));
    }

    tips
}

/// Health and visible-enemy rules.
fn safety_tips(state: &GameState) -> Vec<StrategyTip> {
    let mut tips = Vec::new();
    let hp = state.hp_fraction();

    if hp < LOW_HP_FRACTION {
        tips.push(tip(
            "Low HP!",
            "Retreat to a safe distance and heal up",
            AdviceCategory::Danger,
            9,
        ));
    }

    if state.visible_enemy_count() >= CROWDING_ENEMIES && hp < ENDANGERED_HP_FRACTION {
        tips.push(tip(
            "Enemies closing in",
            "Enemies are near. Back off or call for help",
            AdviceCategory::Danger,
            8,
        ));
    }

    tips
}

/// Game-phase and role positioning rules.
fn positioning_tips(state: &GameState) -> Vec<StrategyTip> {
    let mut tips = Vec::new();

    if state.game_time_min < EARLY_GAME_MINUTES {
        tips.push(tip(
            "Early game",
            "Hold your lane, soak experience and gold for the first item",
            AdviceCategory::Positioning,
            5,
        ));
    }

    // A carry off the farm early shows up as a lagging last-hit count.
    let expected_last_hits = state
        .game_time_min
        .checked_mul(CARRY_LAST_HITS_PER_MINUTE)
        .unwrap_or(u32::MAX);
    if CARRY_HEROES.contains(&state.hero_name.as_str())
        && state.game_time_min < CARRY_LANE_MINUTES
        && state.last_hits < expected_last_hits
    {
        tips.push(tip(
            "Get back to the lane",
            "As the carry you should be farming a lane, not roaming",
            AdviceCategory::Positioning,
            6,
        ));
    }

    tips
}

/// Item purchase rules.
fn item_tips(state: &GameState) -> Vec<StrategyTip> {
    let mut tips = Vec::new();

    if state.game_time_min > FIRST_ITEM_MINUTES && state.items.is_empty() {
        tips.push(tip(
            "Buy your first item",
            "Pick up Power Treads or Brown Boots for mobility",
            AdviceCategory::Item,
            5,
        ));
    }

    tips
}

/// Teamfight readiness rules.
fn teamfight_tips(state: &GameState) -> Vec<StrategyTip> {
    let mut tips = Vec::new();

    if state.allies.len() >= TEAMFIGHT_ALLIES {
        tips.push(tip(
            "Teamfight brewing",
            "Plenty of allies around. Be ready to fight if enemies show",
            AdviceCategory::Objective,
            6,
        ));
    }

    tips
}

#[cfg(test)]
mod tests {
    use coach_types::{AllyState, EnemyState};

    use super::*;

    fn visible_enemy(name: &str) -> EnemyState {
        EnemyState {
            name: name.to_owned(),
            level: 7,
            role: String::from("core"),
            visible: true,
        }
    }

    fn ally(name: &str) -> AllyState {
        AllyState {
            name: name.to_owned(),
            level: 7,
            role: String::from("support"),
            hp_percent: 80,
        }
    }

    #[test]
    fn low_hp_dominates_the_ranking() {
        let state = GameState {
            game_time_min: 15,
            hp: 100,
            max_hp: 500,
            gold: 2000,
            items: vec![String::from("Power Treads")],
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&state);
        let top = tips.first();
        assert!(top.is_some());
        if let Some(top) = top {
            assert_eq!(top.category, AdviceCategory::Danger);
            assert_eq!(top.priority, 9);
        }
    }

    #[test]
    fn lagging_farm_fires_farming_tip() {
        // Minute 20: expected 1000, holding 300 (< 800).
        let state = GameState {
            game_time_min: 20,
            gold: 300,
            hp: 500,
            max_hp: 500,
            items: vec![String::from("Boots")],
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&state);
        assert!(tips.iter().any(|t| t.category == AdviceCategory::Farming));
    }

    #[test]
    fn full_bank_suggests_shopping() {
        let state = GameState {
            game_time_min: 20,
            gold: 1500,
            hp: 500,
            max_hp: 500,
            items: vec![String::from("Boots")],
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&state);
        assert!(tips.iter().any(|t| t.title == "Gold to spend"));
    }

    #[test]
    fn crowding_needs_both_enemies_and_low_hp() {
        let healthy = GameState {
            game_time_min: 20,
            hp: 500,
            max_hp: 500,
            gold: 1000,
            items: vec![String::from("Boots")],
            enemies: vec![visible_enemy("a"), visible_enemy("b")],
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&healthy);
        assert!(tips.iter().all(|t| t.title != "Enemies closing in"));

        let hurt = GameState {
            hp: 250,
            ..healthy
        };
        let tips = RuleStrategist::new().analyze(&hurt);
        assert!(tips.iter().any(|t| t.title == "Enemies closing in"));
    }

    #[test]
    fn roaming_carry_is_sent_back_to_lane() {
        let state = GameState {
            game_time_min: 10,
            hero_name: String::from("Anti-Mage"),
            last_hits: 5,
            hp: 500,
            max_hp: 500,
            gold: 700,
            items: vec![String::from("Boots")],
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&state);
        assert!(tips.iter().any(|t| t.title == "Get back to the lane"));
    }

    #[test]
    fn empty_inventory_after_laning_nudges_an_item() {
        let state = GameState {
            game_time_min: 8,
            hp: 500,
            max_hp: 500,
            gold: 700,
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&state);
        assert!(tips.iter().any(|t| t.title == "Buy your first item"));
    }

    #[test]
    fn grouped_allies_signal_a_fight() {
        let state = GameState {
            game_time_min: 25,
            hp: 500,
            max_hp: 500,
            gold: 900,
            items: vec![String::from("Boots")],
            allies: vec![ally("a"), ally("b"), ally("c"), ally("d")],
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&state);
        assert!(tips.iter().any(|t| t.category == AdviceCategory::Objective));
    }

    #[test]
    fn at_most_three_tips_sorted_by_priority() {
        // A degraded snapshot fires many rules at once.
        let state = GameState {
            game_time_min: 8,
            hero_name: String::from("Anti-Mage"),
            hp: 100,
            max_hp: 500,
            enemies: vec![visible_enemy("a"), visible_enemy("b")],
            allies: vec![ally("a"), ally("b"), ally("c")],
            ..GameState::default()
        };
        let tips = RuleStrategist::new().analyze(&state);
        assert!(tips.len() <= 3);
        for pair in tips.windows(2) {
            if let [a, b] = pair {
                assert!(a.priority >= b.priority);
            }
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let state = GameState {
            game_time_min: 12,
            hp: 200,
            max_hp: 500,
            ..GameState::default()
        };
        let strategist = RuleStrategist::new();
        assert_eq!(strategist.analyze(&state), strategist.analyze(&state));
    }
}
