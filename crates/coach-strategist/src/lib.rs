//! Strategic analysis for the Dota Coach companion.
//!
//! Two interchangeable strategists produce ranked [`StrategyTip`]s from a
//! game-state snapshot:
//!
//! - a **rule table** that inspects economy, safety, positioning, items,
//!   and teamfight signals locally; and
//! - a **Qwen LLM** call over HTTP, prompted from `minijinja` templates,
//!   with the rule table as its fallback whenever the remote call fails
//!   or returns nothing usable.
//!
//! The core is agnostic to which one runs; the orchestrator picks at
//! startup based on whether an API key is configured.
//!
//! # Modules
//!
//! - [`error`] -- [`StrategistError`].
//! - [`rules`] -- The local rule table.
//! - [`prompt`] -- Prompt template loading and rendering.
//! - [`llm`] -- The Qwen (`DashScope`) HTTP backend.
//! - [`parse`] -- Lenient parsing of LLM responses into tips.
//! - [`strategist`] -- [`Strategist`] enum dispatch and factory.
//!
//! [`StrategyTip`]: coach_types::StrategyTip
//! [`StrategistError`]: error::StrategistError
//! [`Strategist`]: strategist::Strategist

pub mod error;
pub mod llm;
pub mod parse;
pub mod prompt;
pub mod rules;
pub mod strategist;

// Re-export primary types at crate root.
pub use error::StrategistError;
pub use llm::{QwenBackend, QwenConfig};
pub use parse::parse_recommendations;
pub use prompt::{PromptEngine, RenderedPrompt};
pub use rules::RuleStrategist;
pub use strategist::{QwenStrategist, Strategist, create_strategist};
