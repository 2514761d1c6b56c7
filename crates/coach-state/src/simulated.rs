//! Seeded synthetic match generator.
//!
//! Fabricates plausible escalating match stats: game time advances one
//! minute per snapshot, the hero levels up and accumulates gold and
//! last-hits, the hero position random-walks across the minimap, and
//! enemy visibility flickers. All randomness flows from a seeded
//! [`SmallRng`], so a fixed seed reproduces the exact same match --
//! nothing downstream may assume any particular distribution.

use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use coach_types::{AllyState, EnemyState, GameState, MapPoint};

/// Map bounds for the hero's random walk.
const MAP_MAX: f64 = 1024.0;

/// Largest per-snapshot hero displacement along one axis.
const WALK_STEP: f64 = 60.0;

/// Level cap for the simulated hero.
const MAX_LEVEL: u32 = 25;

/// The enemy roster of the simulated match: name and declared role.
const ENEMY_ROSTER: &[(&str, &str)] = &[
    ("Phantom Assassin", "carry"),
    ("Shadow Fiend", "midlane"),
    ("Dark Seer", "offlane"),
    ("Crystal Maiden", "support"),
    ("Earthshaker", "support"),
];

/// The allied roster of the simulated match.
const ALLY_ROSTER: &[(&str, &str)] = &[
    ("Rubick", "support"),
    ("Templar Assassin", "midlane"),
    ("Tidehunter", "offlane"),
    ("Shadow Shaman", "support"),
];

/// Items acquired over the course of the simulated match, in order.
const ITEM_PROGRESSION: &[&str] = &[
    "Power Treads",
    "Hand of Midas",
    "Battle Fury",
    "Manta Style",
    "Abyssal Blade",
    "Butterfly",
];

/// Event lines rotated into the snapshot's recent-events list.
const EVENT_POOL: &[&str] = &[
    "You drew First Blood",
    "Anti-Mage took two last hits",
    "Rubick cast Telekinesis on Shadow Fiend",
    "Your team took the Roshan pit",
    "Mid tower is under attack",
];

/// A synthetic match that escalates with every snapshot taken.
#[derive(Debug, Clone)]
pub struct SimulatedMatch {
    rng: SmallRng,
    minutes: u32,
    hero_position: MapPoint,
}

impl SimulatedMatch {
    /// Create a simulated match from a seed.
    ///
    /// The same seed yields the same sequence of snapshots (modulo the
    /// capture timestamps).
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            minutes: 0,
            hero_position: MapPoint::new(420.0, 650.0),
        }
    }

    /// Advance the simulated match by one minute and capture a snapshot.
    pub fn snapshot(&mut self) -> GameState {
        self.minutes = self.minutes.saturating_add(1);
        self.walk_hero();

        let level = self.hero_level();
        let max_hp = 400_u32.saturating_add(level.checked_mul(60).unwrap_or(u32::MAX));
        let half = max_hp.checked_div(2).unwrap_or(0);
        let hp = max_hp.saturating_sub(self.rng.random_range(0..=half));

        let gold = self
            .minutes
            .checked_mul(300)
            .unwrap_or(u32::MAX)
            .saturating_add(self.rng.random_range(0..=200));

        let last_hits = self
            .minutes
            .checked_mul(5)
            .unwrap_or(u32::MAX)
            .saturating_add(self.rng.random_range(0..=3));

        let team_gold = self.minutes.checked_mul(1500).unwrap_or(u32::MAX);
        let enemy_gold = team_gold.saturating_add(self.rng.random_range(0..=700));

        GameState {
            game_time_min: self.minutes,
            hero_name: String::from("Anti-Mage"),
            hero_position: self.hero_position,
            level,
            hp,
            max_hp,
            gold,
            items: self.items(),
            last_hits,
            denies: self.minutes.checked_div(4).unwrap_or(0),
            kills: self.minutes.checked_div(7).unwrap_or(0),
            deaths: self.minutes.checked_div(12).unwrap_or(0),
            assists: self.minutes.checked_div(5).unwrap_or(0),
            allies: self.allies(level),
            enemies: self.enemies(level),
            team_gold,
            enemy_gold,
            recent_events: self.events(),
            captured_at: Utc::now(),
        }
    }

    /// Minutes elapsed in the simulated match so far.
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    fn walk_hero(&mut self) {
        let dx: f64 = self.rng.random_range(-WALK_STEP..=WALK_STEP);
        let dy: f64 = self.rng.random_range(-WALK_STEP..=WALK_STEP);
        self.hero_position = MapPoint::new(
            (self.hero_position.x + dx).clamp(0.0, MAP_MAX),
            (self.hero_position.y + dy).clamp(0.0, MAP_MAX),
        );
    }

    fn hero_level(&self) -> u32 {
        1_u32
            .saturating_add(self.minutes.checked_div(2).unwrap_or(0))
            .min(MAX_LEVEL)
    }

    fn items(&self) -> Vec<String> {
        let owned = usize::try_from(self.minutes.checked_div(8).unwrap_or(0))
            .unwrap_or(0)
            .min(ITEM_PROGRESSION.len());
        ITEM_PROGRESSION
            .iter()
            .take(owned)
            .map(|&i| i.to_owned())
            .collect()
    }

    fn allies(&mut self, hero_level: u32) -> Vec<AllyState> {
        ALLY_ROSTER
            .iter()
            .map(|&(name, role)| AllyState {
                name: name.to_owned(),
                level: jittered_level(&mut self.rng, hero_level, -1, 1),
                role: role.to_owned(),
                hp_percent: self.rng.random_range(40..=100),
            })
            .collect()
    }

    fn enemies(&mut self, hero_level: u32) -> Vec<EnemyState> {
        ENEMY_ROSTER
            .iter()
            .map(|&(name, role)| EnemyState {
                name: name.to_owned(),
                level: jittered_level(&mut self.rng, hero_level, -2, 4),
                role: role.to_owned(),
                visible: self.rng.random_bool(0.4),
            })
            .collect()
    }

    fn events(&self) -> Vec<String> {
        let len = EVENT_POOL.len().max(1);
        let index = usize::try_from(self.minutes).unwrap_or(0).checked_rem(len);
        index
            .and_then(|i| EVENT_POOL.get(i))
            .map(|&e| vec![e.to_owned()])
            .unwrap_or_default()
    }
}

/// A level near `base`, offset by a random amount in `[low, high]` and
/// clamped to the valid level range.
fn jittered_level(rng: &mut impl Rng, base: u32, low: i64, high: i64) -> u32 {
    let delta: i64 = rng.random_range(low..=high);
    let level = i64::from(base).saturating_add(delta).clamp(1, 30);
    u32::try_from(level).unwrap_or(1)
}
