//! The per-tick game-state snapshot.
//!
//! A [`GameState`] is everything the coach knows about the match at one
//! polling instant. Snapshots are plain immutable records with no identity
//! beyond the tick they were captured in; each poll produces a fresh value.
//!
//! Upstream sources (web APIs, simulations) are unreliable by nature, so
//! every field carries a serde default: a payload missing fields
//! deserializes to zeros and empty rosters instead of failing. The danger
//! estimator and the optimizer are total over such degraded snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::map::MapPoint;

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// A coarse description of the match at one polling instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    /// Elapsed game time in minutes.
    pub game_time_min: u32,
    /// The player's hero name.
    pub hero_name: String,
    /// The hero's minimap position.
    pub hero_position: MapPoint,
    /// The hero's level.
    pub level: u32,
    /// Current hit points.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Unspent gold.
    pub gold: u32,
    /// Item names currently carried.
    pub items: Vec<String>,
    /// Last-hit count.
    pub last_hits: u32,
    /// Deny count.
    pub denies: u32,
    /// Kill count.
    pub kills: u32,
    /// Death count.
    pub deaths: u32,
    /// Assist count.
    pub assists: u32,
    /// The four allied heroes.
    pub allies: Vec<AllyState>,
    /// The five enemy heroes, visible or not.
    pub enemies: Vec<EnemyState>,
    /// Total networth of the player's team.
    pub team_gold: u32,
    /// Total networth of the enemy team.
    pub enemy_gold: u32,
    /// Recent notable match events, newest last.
    pub recent_events: Vec<String>,
    /// When this snapshot was captured.
    pub captured_at: DateTime<Utc>,
}

impl GameState {
    /// Fraction of hit points remaining, in `[0, 1]`.
    ///
    /// A snapshot with `max_hp == 0` (degraded payload) reads as full
    /// health rather than dividing by zero.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 1.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }

    /// Number of enemies currently visible on the map.
    pub fn visible_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.visible).count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            game_time_min: 0,
            hero_name: String::new(),
            hero_position: MapPoint::default(),
            level: 0,
            hp: 0,
            max_hp: 0,
            gold: 0,
            items: Vec::new(),
            last_hits: 0,
            denies: 0,
            kills: 0,
            deaths: 0,
            assists: 0,
            allies: Vec::new(),
            enemies: Vec::new(),
            team_gold: 0,
            enemy_gold: 0,
            recent_events: Vec::new(),
            captured_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rosters
// ---------------------------------------------------------------------------

/// An allied hero as seen in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllyState {
    /// Hero name.
    pub name: String,
    /// Hero level.
    pub level: u32,
    /// Declared role (e.g. "support", "midlane").
    pub role: String,
    /// Remaining hit points as a percentage (0-100).
    pub hp_percent: u32,
}

/// An enemy hero as seen in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyState {
    /// Hero name.
    pub name: String,
    /// Hero level.
    pub level: u32,
    /// Declared role (e.g. "carry", "support").
    pub role: String,
    /// Whether the hero is currently visible on the map.
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_deserializes_to_defaults() {
        let state: Result<GameState, _> = serde_json::from_str("{}");
        assert!(state.is_ok());
        let state = state.unwrap_or_default();
        assert_eq!(state.level, 0);
        assert_eq!(state.gold, 0);
        assert!(state.hero_name.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn partial_payload_keeps_known_fields() {
        let state: Result<GameState, _> = serde_json::from_str(
            r#"{"level": 7, "gold": 2500, "hero_name": "Anti-Mage"}"#,
        );
        assert!(state.is_ok());
        let state = state.unwrap_or_default();
        assert_eq!(state.level, 7);
        assert_eq!(state.gold, 2500);
        assert_eq!(state.hero_name, "Anti-Mage");
        assert_eq!(state.max_hp, 0);
    }

    #[test]
    fn hp_fraction_handles_zero_max() {
        let state = GameState::default();
        assert!((state.hp_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hp_fraction_normal() {
        let state = GameState {
            hp: 450,
            max_hp: 500,
            ..GameState::default()
        };
        assert!((state.hp_fraction() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn visible_enemy_count_filters_invisible() {
        let state = GameState {
            enemies: vec![
                EnemyState {
                    name: String::from("Shadow Fiend"),
                    level: 8,
                    role: String::from("midlane"),
                    visible: true,
                },
                EnemyState {
                    name: String::from("Phantom Assassin"),
                    level: 7,
                    role: String::from("carry"),
                    visible: false,
                },
            ],
            ..GameState::default()
        };
        assert_eq!(state.visible_enemy_count(), 1);
    }
}
