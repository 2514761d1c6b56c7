//! Strategist selection and dispatch.
//!
//! Uses enum dispatch instead of trait objects because the LLM path is
//! async. The Qwen strategist owns a rule-table fallback: a failed or
//! unusable remote call degrades to local analysis instead of surfacing
//! an error to the coach loop.

use tracing::{debug, warn};

use coach_types::{GameState, StrategyTip};

use crate::error::StrategistError;
use crate::llm::{QwenBackend, QwenConfig};
use crate::parse::parse_recommendations;
use crate::prompt::PromptEngine;
use crate::rules::RuleStrategist;

// ---------------------------------------------------------------------------
// Strategist dispatch
// ---------------------------------------------------------------------------

/// A source of ranked strategy tips.
pub enum Strategist {
    /// Local rule-table analysis.
    Rules(RuleStrategist),
    /// Remote Qwen analysis with rule-table fallback.
    Qwen(QwenStrategist),
}

impl Strategist {
    /// Analyze a snapshot and return ranked tips, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`StrategistError`] only for local failures (snapshot
    /// serialization, template rendering). Remote failures are absorbed
    /// by the fallback.
    pub async fn analyze(&self, state: &GameState) -> Result<Vec<StrategyTip>, StrategistError> {
        match self {
            Self::Rules(rules) => Ok(rules.analyze(state)),
            Self::Qwen(qwen) => qwen.analyze(state).await,
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rules(_) => "rule-table",
            Self::Qwen(_) => "qwen",
        }
    }
}

/// Create a strategist from optional Qwen configuration.
///
/// With a configured backend the Qwen strategist is used (templates are
/// loaded from `templates_dir`); otherwise analysis is local-only.
///
/// # Errors
///
/// Returns [`StrategistError::Template`] if Qwen is requested but the
/// prompt templates cannot be loaded.
pub fn create_strategist(
    qwen: Option<&QwenConfig>,
    templates_dir: &str,
) -> Result<Strategist, StrategistError> {
    match qwen {
        Some(config) => {
            let prompts = PromptEngine::new(templates_dir)?;
            Ok(Strategist::Qwen(QwenStrategist::new(
                QwenBackend::new(config),
                prompts,
            )))
        }
        None => Ok(Strategist::Rules(RuleStrategist::new())),
    }
}

// ---------------------------------------------------------------------------
// QwenStrategist
// ---------------------------------------------------------------------------

/// The remote strategist: prompt rendering, the Qwen call, response
/// parsing, and the local fallback chain.
pub struct QwenStrategist {
    backend: QwenBackend,
    prompts: PromptEngine,
    fallback: RuleStrategist,
}

impl QwenStrategist {
    /// Create a Qwen strategist with a rule-table fallback.
    pub const fn new(backend: QwenBackend, prompts: PromptEngine) -> Self {
        Self {
            backend,
            prompts,
            fallback: RuleStrategist::new(),
        }
    }

    /// Run one analysis: render, call, parse -- falling back to the rule
    /// table when the remote side fails or returns nothing usable.
    pub async fn analyze(&self, state: &GameState) -> Result<Vec<StrategyTip>, StrategistError> {
        let value = serde_json::to_value(state)?;
        let prompt = self.prompts.render(&value)?;

        match self.backend.complete(&prompt).await {
            Ok(raw) => {
                let tips = parse_recommendations(&raw);
                if tips.is_empty() {
                    warn!(
                        model = self.backend.model(),
                        "LLM response had no usable tips, using rule fallback"
                    );
                    return Ok(self.fallback.analyze(state));
                }
                debug!(
                    model = self.backend.model(),
                    tip_count = tips.len(),
                    "LLM analysis parsed"
                );
                Ok(tips)
            }
            Err(e) => {
                warn!(error = %e, "LLM backend failed, using rule fallback");
                Ok(self.fallback.analyze(state))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_templates(dir: &std::path::Path) {
        std::fs::write(dir.join("system.j2"), "You coach {{ hero_name }}.").ok();
        std::fs::write(dir.join("situation.j2"), "Minute {{ game_time_min }}.").ok();
        std::fs::write(dir.join("format.j2"), "Answer with RECOMMENDATION blocks.").ok();
    }

    fn template_dir(tag: &str) -> std::path::PathBuf {
        let unique = format!(
            "coach_strategist_{tag}_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        );
        let dir = std::env::temp_dir().join(unique);
        std::fs::create_dir_all(&dir).ok();
        write_templates(&dir);
        dir
    }

    #[tokio::test]
    async fn rule_strategist_dispatch() {
        let strategist = Strategist::Rules(RuleStrategist::new());
        assert_eq!(strategist.name(), "rule-table");

        let state = GameState {
            game_time_min: 8,
            hp: 100,
            max_hp: 500,
            ..GameState::default()
        };
        let tips = strategist.analyze(&state).await;
        assert!(tips.is_ok());
        assert!(!tips.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_falls_back_to_rules() {
        let dir = template_dir("fallback");
        let prompts = PromptEngine::new(dir.to_str().unwrap_or(""));
        assert!(prompts.is_ok());
        let Ok(prompts) = prompts else { return };

        // Nothing listens here; the call fails and the rules answer.
        let backend = QwenBackend::new(&QwenConfig {
            api_url: "http://127.0.0.1:1".to_owned(),
            api_key: "test".to_owned(),
            model: "qwen-max".to_owned(),
        });
        let strategist = Strategist::Qwen(QwenStrategist::new(backend, prompts));
        assert_eq!(strategist.name(), "qwen");

        let state = GameState {
            game_time_min: 8,
            hp: 100,
            max_hp: 500,
            ..GameState::default()
        };
        let tips = strategist.analyze(&state).await;
        assert!(tips.is_ok());
        let tips = tips.unwrap_or_default();
        assert!(!tips.is_empty(), "fallback rules should produce tips");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn factory_without_key_selects_rules() {
        let strategist = create_strategist(None, "templates");
        assert!(strategist.is_ok());
        assert_eq!(strategist.map(|s| s.name()).ok(), Some("rule-table"));
    }

    #[test]
    fn factory_with_key_needs_templates() {
        let config = QwenConfig {
            api_url: "https://dashscope.aliyuncs.com/api/v1".to_owned(),
            api_key: "key".to_owned(),
            model: "qwen-max".to_owned(),
        };
        // Missing template directory surfaces as a template error.
        let result = create_strategist(Some(&config), "/nonexistent/templates");
        assert!(result.is_err());

        let dir = template_dir("factory");
        let result = create_strategist(Some(&config), dir.to_str().unwrap_or(""));
        assert!(result.is_ok());
        assert_eq!(result.map(|s| s.name()).ok(), Some("qwen"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
