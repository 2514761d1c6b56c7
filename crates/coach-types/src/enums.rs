//! Enumeration types for the coach workspace.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Spot categories
// ---------------------------------------------------------------------------

/// The kind of resource-gathering spot on the map.
///
/// Categories carry no behavior of their own; the optimizer scores spots
/// purely from yield, distance, and difficulty. The category is surfaced
/// in recommendations so the player knows what kind of farm awaits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpotCategory {
    /// Lane creep waves.
    Lane,
    /// Neutral jungle camps.
    Jungle,
    /// A single detached neutral camp.
    Camp,
    /// A pre-stacked camp with multiplied yield.
    StackedCamp,
    /// The map boss (Roshan). High yield, high risk.
    Boss,
}

impl SpotCategory {
    /// Short lowercase label for logging and recommendation text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lane => "lane",
            Self::Jungle => "jungle",
            Self::Camp => "camp",
            Self::StackedCamp => "stacked-camp",
            Self::Boss => "boss",
        }
    }
}

// ---------------------------------------------------------------------------
// Advice categories
// ---------------------------------------------------------------------------

/// The category of a displayed advice, used for panel labeling and for
/// choosing a default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AdviceCategory {
    /// General strategic guidance.
    Strategy,
    /// Farming and gold-income guidance.
    Farming,
    /// Immediate danger warnings.
    Danger,
    /// Map objectives (towers, the boss pit).
    Objective,
    /// Item purchase suggestions.
    Item,
    /// Positioning corrections.
    Positioning,
}

impl AdviceCategory {
    /// Short lowercase label for logging and the panel header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Farming => "farming",
            Self::Danger => "danger",
            Self::Objective => "objective",
            Self::Item => "item",
            Self::Positioning => "positioning",
        }
    }

    /// Default icon shown next to advice of this category.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Strategy => "\u{1f4a1}",    // light bulb
            Self::Farming => "\u{1f33e}",     // sheaf of rice
            Self::Danger => "\u{26a0}\u{fe0f}", // warning sign
            Self::Objective => "\u{1f409}",   // dragon
            Self::Item => "\u{2728}",         // sparkles
            Self::Positioning => "\u{1f4cd}", // round pushpin
        }
    }
}
