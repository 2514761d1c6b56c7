//! Configuration for the coach binary.
//!
//! All configuration is loaded from environment variables and collected
//! into one explicit struct; collaborators receive the pieces they need
//! rather than reading process-wide state themselves.

use std::time::Duration;

use coach_overlay::PanelPosition;
use coach_state::DataSource;
use coach_strategist::QwenConfig;

use crate::error::CoachError;

/// Default `DashScope` API base URL.
const DEFAULT_QWEN_API_URL: &str = "https://dashscope.aliyuncs.com/api/v1";

/// Default Qwen model.
const DEFAULT_QWEN_MODEL: &str = "qwen-max";

/// Complete coach configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Where game-state snapshots come from.
    pub data_source: DataSource,
    /// 32-bit Steam account id for the match-history API.
    pub steam_id: Option<String>,
    /// Whether API modes contact the live API.
    pub use_live_game: bool,
    /// Qwen backend configuration; `None` selects the local rule table.
    pub qwen: Option<QwenConfig>,
    /// Directory holding the prompt templates.
    pub templates_dir: String,
    /// Screen corner for the advice panel.
    pub panel_position: PanelPosition,
    /// How often the loop polls for a snapshot.
    pub poll_interval: Duration,
    /// Minimum time between farming analyses.
    pub farm_interval: Duration,
    /// Minimum time between strategic analyses.
    pub strategy_interval: Duration,
    /// Seed for the simulated match; `None` means pick one at startup.
    pub sim_seed: Option<u64>,
}

impl CoachConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `DATA_SOURCE` -- `local`, `api`, or `hybrid` (default `local`)
    /// - `STEAM_ID` -- Steam account id for the API modes
    /// - `USE_LIVE_GAME` -- contact the live API (default `false`)
    /// - `QWEN_API_KEY` -- enables the Qwen strategist when set
    /// - `QWEN_API_URL` -- Qwen base URL (default `DashScope`)
    /// - `QWEN_MODEL` -- model name (default `qwen-max`)
    /// - `TEMPLATES_DIR` -- prompt templates directory (default `templates`)
    /// - `PANEL_POSITION` -- advice panel corner (default `top-right`)
    /// - `POLL_INTERVAL_SECS` -- snapshot poll period (default 5)
    /// - `FARM_INTERVAL_SECS` -- farming analysis cooldown (default 15)
    /// - `STRATEGY_INTERVAL_SECS` -- strategy analysis cooldown (default 30)
    /// - `SIM_SEED` -- fixed seed for the simulated match
    pub fn from_env() -> Result<Self, CoachError> {
        let data_source = parse_data_source(
            &std::env::var("DATA_SOURCE").unwrap_or_else(|_| "local".to_owned()),
        )?;

        let steam_id = optional_var("STEAM_ID");

        let use_live_game: bool = std::env::var("USE_LIVE_GAME")
            .unwrap_or_else(|_| "false".to_owned())
            .parse()
            .map_err(|e| CoachError::Config(format!("invalid USE_LIVE_GAME: {e}")))?;

        let qwen = optional_var("QWEN_API_KEY").map(|api_key| QwenConfig {
            api_url: std::env::var("QWEN_API_URL")
                .unwrap_or_else(|_| DEFAULT_QWEN_API_URL.to_owned()),
            api_key,
            model: std::env::var("QWEN_MODEL")
                .unwrap_or_else(|_| DEFAULT_QWEN_MODEL.to_owned()),
        });

        let templates_dir =
            std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_owned());

        let panel_position = PanelPosition::parse(
            &std::env::var("PANEL_POSITION").unwrap_or_else(|_| "top-right".to_owned()),
        );

        let poll_interval = duration_var("POLL_INTERVAL_SECS", 5)?;
        let farm_interval = duration_var("FARM_INTERVAL_SECS", 15)?;
        let strategy_interval = duration_var("STRATEGY_INTERVAL_SECS", 30)?;

        let sim_seed = match optional_var("SIM_SEED") {
            Some(raw) => Some(
                raw.parse()
                    .map_err(|e| CoachError::Config(format!("invalid SIM_SEED: {e}")))?,
            ),
            None => None,
        };

        Ok(Self {
            data_source,
            steam_id,
            use_live_game,
            qwen,
            templates_dir,
            panel_position,
            poll_interval,
            farm_interval,
            strategy_interval,
            sim_seed,
        })
    }
}

/// Read an optional environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read a duration-in-seconds variable with a default.
fn duration_var(name: &str, default_secs: u64) -> Result<Duration, CoachError> {
    let secs: u64 = std::env::var(name)
        .unwrap_or_else(|_| default_secs.to_string())
        .parse()
        .map_err(|e| CoachError::Config(format!("invalid {name}: {e}")))?;
    Ok(Duration::from_secs(secs))
}

/// Parse the data-source selector.
fn parse_data_source(raw: &str) -> Result<DataSource, CoachError> {
    match raw.to_lowercase().as_str() {
        "local" => Ok(DataSource::Local),
        "api" => Ok(DataSource::Api),
        "hybrid" => Ok(DataSource::Hybrid),
        other => Err(CoachError::Config(format!("unknown DATA_SOURCE: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_parsing() {
        assert!(matches!(parse_data_source("local"), Ok(DataSource::Local)));
        assert!(matches!(parse_data_source("API"), Ok(DataSource::Api)));
        assert!(matches!(
            parse_data_source("hybrid"),
            Ok(DataSource::Hybrid)
        ));
        assert!(parse_data_source("telepathy").is_err());
    }

    #[test]
    fn duration_default_applies() {
        // Variable not set in the test environment.
        let d = duration_var("COACH_TEST_UNSET_INTERVAL", 15);
        assert!(d.is_ok());
        assert_eq!(d.ok(), Some(Duration::from_secs(15)));
    }
}
