//! Error types for game-state acquisition.
//!
//! Uses `thiserror` for typed errors. Upstream APIs are unreliable by
//! nature, so every error here is recoverable: the hybrid source logs it
//! and falls back to the simulation.

/// Errors that can occur while fetching game state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The HTTP request failed (connection, TLS, timeout).
    #[error("match API request failed: {0}")]
    Http(String),

    /// The API answered with a non-success status.
    #[error("match API error: {0}")]
    Api(String),

    /// The response body could not be decoded.
    #[error("match API response decode failed: {0}")]
    Decode(String),
}
