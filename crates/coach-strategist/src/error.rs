//! Error types for the strategist pipeline.
//!
//! Uses `thiserror` for typed errors covering template rendering, the
//! HTTP backend, and snapshot serialization. Backend failures are
//! normally absorbed by the rule-table fallback and never reach the
//! orchestrator loop.

/// Errors that can occur during strategic analysis.
#[derive(Debug, thiserror::Error)]
pub enum StrategistError {
    /// Failed to load or render a prompt template.
    #[error("template error: {0}")]
    Template(String),

    /// The LLM backend returned an error or was unreachable.
    #[error("LLM backend error: {0}")]
    Backend(String),

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
