//! Advice records: strategist tips and the display units built from them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::enums::AdviceCategory;
use crate::ids::AdviceId;

/// Lowest allowed advice priority.
pub const MIN_PRIORITY: u8 = 1;

/// Highest allowed advice priority.
pub const MAX_PRIORITY: u8 = 10;

// ---------------------------------------------------------------------------
// StrategyTip
// ---------------------------------------------------------------------------

/// A ranked tip produced by a strategist.
///
/// Tips are an intermediate form: the orchestrator converts the top tip
/// into an [`Advice`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTip {
    /// Short headline (used in logs).
    pub title: String,
    /// The actionable advice text shown to the player.
    pub advice: String,
    /// Advice category.
    pub category: AdviceCategory,
    /// Priority from 1 (lowest) to 10 (highest).
    pub priority: u8,
}

// ---------------------------------------------------------------------------
// Advice
// ---------------------------------------------------------------------------

/// A single advice record handed to the display panel.
///
/// Ephemeral: queued in memory, shown once for `duration`, then dropped.
/// Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    /// Unique identifier for queue bookkeeping and log correlation.
    pub id: AdviceId,
    /// The advice text. May contain newlines for multi-line display.
    pub text: String,
    /// Advice category.
    pub category: AdviceCategory,
    /// Priority from 1 (lowest) to 10 (highest); out-of-range input is
    /// clamped rather than rejected.
    pub priority: u8,
    /// Icon shown next to the text.
    pub icon: String,
    /// How long the advice stays visible.
    pub duration: Duration,
}

impl Advice {
    /// Create an advice record with the category's default icon.
    pub fn new(
        text: impl Into<String>,
        category: AdviceCategory,
        priority: u8,
        duration: Duration,
    ) -> Self {
        Self {
            id: AdviceId::new(),
            text: text.into(),
            category,
            priority: priority.clamp(MIN_PRIORITY, MAX_PRIORITY),
            icon: category.icon().to_owned(),
            duration,
        }
    }

    /// Replace the default icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_clamped() {
        let low = Advice::new("a", AdviceCategory::Strategy, 0, Duration::from_secs(5));
        assert_eq!(low.priority, MIN_PRIORITY);

        let high = Advice::new("b", AdviceCategory::Danger, 200, Duration::from_secs(5));
        assert_eq!(high.priority, MAX_PRIORITY);

        let mid = Advice::new("c", AdviceCategory::Farming, 7, Duration::from_secs(5));
        assert_eq!(mid.priority, 7);
    }

    #[test]
    fn default_icon_comes_from_category() {
        let advice = Advice::new("d", AdviceCategory::Farming, 7, Duration::from_secs(5));
        assert_eq!(advice.icon, AdviceCategory::Farming.icon());
    }

    #[test]
    fn icon_override() {
        let advice = Advice::new("e", AdviceCategory::Strategy, 5, Duration::from_secs(5))
            .with_icon("\u{274c}");
        assert_eq!(advice.icon, "\u{274c}");
    }

    #[test]
    fn ids_are_unique() {
        let a = Advice::new("x", AdviceCategory::Strategy, 5, Duration::from_secs(1));
        let b = Advice::new("x", AdviceCategory::Strategy, 5, Duration::from_secs(1));
        assert_ne!(a.id, b.id);
    }
}
