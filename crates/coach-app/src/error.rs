//! Error types for the coach binary.

use coach_strategist::StrategistError;

/// Errors that can occur during coach startup.
///
/// The running loop itself is total: snapshot sources fall back and
/// strategist failures are logged and skipped, so only configuration and
/// wiring can fail.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// The strategist could not be constructed.
    #[error("strategist error: {source}")]
    Strategist {
        /// The underlying strategist error.
        #[from]
        source: StrategistError,
    },
}
