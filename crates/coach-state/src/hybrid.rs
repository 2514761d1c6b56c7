//! API-first game-state source with simulated fallback.
//!
//! When live mode is on, each poll first asks the match-history API.
//! Any failure -- network, API status, empty history -- degrades to the
//! synthetic simulation for that poll instead of surfacing an error.
//! The coach loop therefore always receives a snapshot.

use tracing::{info, warn};

use coach_types::GameState;

use crate::simulated::SimulatedMatch;
use crate::webapi::{self, OpenDotaClient};

/// Composes the web API client with a simulated fallback match.
#[derive(Debug, Clone)]
pub struct HybridSource {
    api: OpenDotaClient,
    fallback: SimulatedMatch,
    use_live: bool,
}

impl HybridSource {
    /// Create a hybrid source.
    ///
    /// With `use_live` off, the API is never contacted and every snapshot
    /// comes from the simulation.
    pub const fn new(api: OpenDotaClient, fallback: SimulatedMatch, use_live: bool) -> Self {
        Self {
            api,
            fallback,
            use_live,
        }
    }

    /// Produce the next snapshot, preferring live data.
    pub async fn snapshot(&mut self) -> GameState {
        if self.use_live {
            match self.api.recent_match().await {
                Ok(Some(recent)) => {
                    info!(match_id = recent.match_id, "using live match data");
                    return webapi::to_game_state(&recent);
                }
                Ok(None) => {
                    warn!("no recent match found, falling back to simulation");
                }
                Err(e) => {
                    warn!(error = %e, "match API unavailable, falling back to simulation");
                }
            }
        }
        self.fallback.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn live_off_always_simulates() {
        let api = OpenDotaClient::new("12345");
        let mut source = HybridSource::new(api, SimulatedMatch::new(42), false);

        let first = source.snapshot().await;
        let second = source.snapshot().await;
        assert_eq!(first.game_time_min, 1);
        assert_eq!(second.game_time_min, 2);
        assert_eq!(first.hero_name, "Anti-Mage");
    }

    #[tokio::test]
    async fn unreachable_api_falls_back() {
        // Nothing listens on this port; the request fails fast and the
        // simulation must cover the poll.
        let api = OpenDotaClient::with_base_url("12345", "http://127.0.0.1:1/api");
        let mut source = HybridSource::new(api, SimulatedMatch::new(42), true);

        let state = source.snapshot().await;
        assert_eq!(state.game_time_min, 1);
        assert!(!state.enemies.is_empty());
    }
}
