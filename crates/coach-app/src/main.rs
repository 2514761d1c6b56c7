//! Dota Coach binary entry point.
//!
//! Watches (or simulates) a live match and surfaces short textual tips
//! through the advice panel. Purely advisory tooling: there is no server,
//! no persistence, and no game-memory access.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from environment variables
//! 3. Build the game-state source (simulated / API / hybrid)
//! 4. Build the strategist (Qwen when a key is configured, rules otherwise)
//! 5. Build the route optimizer over the known spot catalog
//! 6. Run the coaching loop until ctrl-c

mod coach;
mod config;
mod error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use coach_core::{RouteOptimizer, catalog_stats, known_spots};
use coach_overlay::AdvicePanel;
use coach_state::{SourceConfig, create_source};
use coach_strategist::create_strategist;

use crate::coach::Coach;
use crate::config::CoachConfig;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading or strategist construction
/// fails; the running loop itself never errors out.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("dota-coach starting");

    // 2. Load configuration.
    let config = CoachConfig::from_env()?;
    info!(
        data_source = ?config.data_source,
        use_live_game = config.use_live_game,
        poll_interval_secs = config.poll_interval.as_secs(),
        farm_interval_secs = config.farm_interval.as_secs(),
        strategy_interval_secs = config.strategy_interval.as_secs(),
        "configuration loaded"
    );

    // 3. Build the game-state source.
    let seed = config.sim_seed.unwrap_or_else(|| rand::random());
    let source = create_source(&SourceConfig {
        data_source: config.data_source,
        steam_id: config.steam_id.clone(),
        use_live: config.use_live_game,
        seed,
    });
    info!(source = source.name(), "game-state source ready");

    // 4. Build the strategist.
    let strategist = create_strategist(config.qwen.as_ref(), &config.templates_dir)
        .map_err(crate::error::CoachError::from)?;
    if config.qwen.is_some() {
        info!("using Qwen analysis (API key configured)");
    } else {
        info!("using local rule analysis (no API key)");
    }

    // 5. Build the optimizer over the known catalog.
    let catalog = known_spots();
    let stats = catalog_stats(&catalog);
    info!(
        total_spots = stats.total_spots,
        lane_spots = stats.lane_spots,
        jungle_spots = stats.jungle_spots,
        max_gpm = stats.max_gold_per_minute,
        dangerous_spots = stats.dangerous_spots,
        "farm spot catalog loaded"
    );
    let optimizer = RouteOptimizer::new(catalog);

    // 6. Run the loop.
    let panel = AdvicePanel::new(config.panel_position);
    let mut coach = Coach::new(
        source,
        strategist,
        optimizer,
        panel,
        config.poll_interval,
        config.farm_interval,
        config.strategy_interval,
    );

    info!("coach initialized, entering the watch loop");
    coach.run().await;

    Ok(())
}
