//! Shared type definitions for the Dota Coach companion.
//!
//! This crate is the single source of truth for all types used across the
//! coach workspace: game-state snapshots flowing in from match sources,
//! map geometry used by the farm-route core, and the advice records handed
//! to the display panel.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Enumeration types (spot categories, advice categories)
//! - [`map`] -- Map-space geometry ([`MapPoint`])
//! - [`snapshot`] -- The per-tick [`GameState`] snapshot and its rosters
//! - [`advice`] -- Display advice and strategist tips
//!
//! [`MapPoint`]: map::MapPoint
//! [`GameState`]: snapshot::GameState

pub mod advice;
pub mod enums;
pub mod ids;
pub mod map;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use advice::{Advice, StrategyTip};
pub use enums::{AdviceCategory, SpotCategory};
pub use ids::AdviceId;
pub use map::MapPoint;
pub use snapshot::{AllyState, EnemyState, GameState};
