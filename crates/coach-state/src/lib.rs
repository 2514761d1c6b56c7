//! Game-state acquisition for the Dota Coach companion.
//!
//! The coach never reads game memory. Snapshots come from one of two
//! collaborators behind a narrow interface:
//!
//! - a **synthetic simulation** that fabricates plausible escalating match
//!   stats with injected randomness, for running the coach without a
//!   live match; or
//! - the **OpenDota match-history web API**, polled for the player's most
//!   recent match and converted into the snapshot shape.
//!
//! The hybrid source composes the two: live data when available, silent
//! fallback to the simulation when the API is unreachable. Callers only
//! ever see a [`GameState`](coach_types::GameState) value per poll.
//!
//! # Modules
//!
//! - [`error`] -- [`StateError`] for HTTP and decode failures.
//! - [`simulated`] -- Seeded synthetic match generator.
//! - [`webapi`] -- OpenDota client and snapshot conversion.
//! - [`hybrid`] -- API-first source with simulated fallback.
//! - [`source`] -- [`GameStateSource`] enum dispatch and factory.
//!
//! [`StateError`]: error::StateError
//! [`GameStateSource`]: source::GameStateSource

pub mod error;
pub mod hybrid;
pub mod simulated;
pub mod source;
pub mod webapi;

// Re-export primary types at crate root.
pub use error::StateError;
pub use hybrid::HybridSource;
pub use simulated::SimulatedMatch;
pub use source::{DataSource, GameStateSource, SourceConfig, create_source};
pub use webapi::{OpenDotaClient, RecentMatch, to_game_state};
