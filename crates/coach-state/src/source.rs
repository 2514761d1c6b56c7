//! Game-state source selection and dispatch.
//!
//! Uses enum dispatch instead of trait objects because the snapshot
//! method is async. The factory mirrors the coach's startup rules: API
//! modes need a Steam id, and anything else degrades to the local
//! simulation with a warning.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use coach_types::GameState;

use crate::hybrid::HybridSource;
use crate::simulated::SimulatedMatch;
use crate::webapi::OpenDotaClient;

/// Which collaborator supplies game-state snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    /// Local synthetic simulation only.
    Local,
    /// Match-history web API (with simulated fallback).
    Api,
    /// API when reachable, simulation otherwise.
    Hybrid,
}

/// Configuration needed to build a game-state source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Selected source kind.
    pub data_source: DataSource,
    /// 32-bit Steam account id, required for the API modes.
    pub steam_id: Option<String>,
    /// Whether API modes actually contact the live API.
    pub use_live: bool,
    /// Seed for the simulated match.
    pub seed: u64,
}

/// A source of game-state snapshots.
#[derive(Debug, Clone)]
pub enum GameStateSource {
    /// Purely synthetic match.
    Simulated(SimulatedMatch),
    /// Live API with simulated fallback.
    Hybrid(HybridSource),
}

impl GameStateSource {
    /// Produce the next snapshot.
    ///
    /// Total: every poll yields a snapshot, falling back to simulation
    /// when live data is unavailable.
    pub async fn snapshot(&mut self) -> GameState {
        match self {
            Self::Simulated(sim) => sim.snapshot(),
            Self::Hybrid(hybrid) => hybrid.snapshot().await,
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simulated(_) => "simulated",
            Self::Hybrid(_) => "hybrid",
        }
    }
}

/// Build a game-state source from configuration.
///
/// API modes without a Steam id fall back to the local simulation, as
/// the coach cannot query match history for an unknown player.
pub fn create_source(config: &SourceConfig) -> GameStateSource {
    match (config.data_source, config.steam_id.as_deref()) {
        (DataSource::Local, _) => {
            info!(seed = config.seed, "using local match simulation");
            GameStateSource::Simulated(SimulatedMatch::new(config.seed))
        }
        (DataSource::Api | DataSource::Hybrid, Some(steam_id)) => {
            info!(steam_id, use_live = config.use_live, "using match-history API");
            GameStateSource::Hybrid(HybridSource::new(
                OpenDotaClient::new(steam_id),
                SimulatedMatch::new(config.seed),
                config.use_live,
            ))
        }
        (DataSource::Api | DataSource::Hybrid, None) => {
            warn!("steam id not configured, using local simulation");
            GameStateSource::Simulated(SimulatedMatch::new(config.seed))
        }
    }
}
