//! OpenDota match-history client and snapshot conversion.
//!
//! The coach does not get true live telemetry from the web API -- it gets
//! the player's most recent match summary and converts it into a coarse
//! [`GameState`]. Rosters and the hero position are unknown from this
//! endpoint, so the converted snapshot leaves them at their defaults and
//! downstream consumers treat them as "nothing visible".

use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use coach_types::GameState;

use crate::error::StateError;

/// Default OpenDota API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.opendota.com/api";

/// Experience needed per level in the coarse level estimate.
const XP_PER_LEVEL: u32 = 250;

/// Level cap for the estimate.
const LEVEL_CAP: u32 = 30;

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the OpenDota players API.
#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    client: reqwest::Client,
    base_url: String,
    steam_id: String,
}

impl OpenDotaClient {
    /// Create a client for the given 32-bit Steam account id.
    pub fn new(steam_id: impl Into<String>) -> Self {
        Self::with_base_url(steam_id, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (used in tests).
    pub fn with_base_url(steam_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            steam_id: steam_id.into(),
        }
    }

    /// Fetch the player's most recent match, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the request fails, the API answers with
    /// a non-success status, or the body cannot be decoded.
    pub async fn recent_match(&self) -> Result<Option<RecentMatch>, StateError> {
        let url = format!(
            "{}/players/{}/recentMatches",
            self.base_url, self.steam_id
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StateError::Http(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StateError::Api(format!("OpenDota returned {status}")));
        }

        let matches: Vec<RecentMatch> = response
            .json()
            .await
            .map_err(|e| StateError::Decode(format!("recentMatches body: {e}")))?;

        debug!(count = matches.len(), "recent matches fetched");
        Ok(matches.into_iter().next())
    }
}

// ---------------------------------------------------------------------------
// Wire shape and conversion
// ---------------------------------------------------------------------------

/// One entry of the OpenDota `recentMatches` response.
///
/// Every field is defaulted: the API omits fields freely and a degraded
/// entry must still convert into a usable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecentMatch {
    /// Match identifier.
    pub match_id: u64,
    /// Match duration in seconds.
    pub duration: u32,
    /// Numeric hero identifier.
    pub hero_id: u32,
    /// Kill count.
    pub kills: u32,
    /// Death count.
    pub deaths: u32,
    /// Assist count.
    pub assists: u32,
    /// Last-hit count.
    pub last_hits: u32,
    /// Unspent gold at match end.
    pub gold: u32,
    /// Gold per minute.
    pub gold_per_min: u32,
    /// Experience per minute.
    pub xp_per_min: u32,
}

/// Convert a match summary into the snapshot shape.
///
/// Rosters, hit points, and the hero position are unknown from this
/// endpoint and stay at their defaults.
pub fn to_game_state(recent: &RecentMatch) -> GameState {
    let minutes = recent.duration.checked_div(60).unwrap_or(0);

    GameState {
        game_time_min: minutes,
        hero_name: hero_name_for(recent.hero_id),
        level: estimate_level(recent.xp_per_min, minutes),
        gold: recent.gold,
        last_hits: recent.last_hits,
        kills: recent.kills,
        deaths: recent.deaths,
        assists: recent.assists,
        captured_at: Utc::now(),
        ..GameState::default()
    }
}

/// Estimate a hero level from experience rate and elapsed minutes.
///
/// `min(30, 1 + total_xp / 250)` -- deliberately coarse; the estimate
/// only feeds the danger heuristic.
pub fn estimate_level(xp_per_min: u32, minutes: u32) -> u32 {
    let total_xp = xp_per_min.checked_mul(minutes).unwrap_or(u32::MAX);
    1_u32
        .saturating_add(total_xp.checked_div(XP_PER_LEVEL).unwrap_or(0))
        .min(LEVEL_CAP)
}

/// Map a numeric hero id to a display name.
///
/// Only a handful of ids are known; the rest render as `Hero #id`.
fn hero_name_for(hero_id: u32) -> String {
    match hero_id {
        1 => String::from("Anti-Mage"),
        2 => String::from("Axe"),
        3 => String::from("Bane"),
        11 => String::from("Shadow Fiend"),
        16 => String::from("Tidehunter"),
        20 => String::from("Phantom Assassin"),
        other => format!("Hero #{other}"),
    }
}
