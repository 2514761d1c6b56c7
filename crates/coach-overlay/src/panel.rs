//! The advice panel state machine.
//!
//! One advice is visible at a time. [`AdvicePanel::refresh`] drives the
//! machine with an explicit `now` instant: when the visible advice has
//! outlived its duration it is dropped and the next queued advice (by
//! priority, then arrival) is promoted. Passing `now` in keeps the panel
//! deterministic under test; only the binary touches the real clock.

use std::time::Instant;

use tracing::info;

use coach_types::Advice;

use crate::queue::AdviceQueue;

/// Which screen corner the panel occupies.
///
/// The headless panel only records the preference; whatever renders the
/// panel applies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelPosition {
    /// Top-right corner (default).
    #[default]
    TopRight,
    /// Top-left corner.
    TopLeft,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
}

impl PanelPosition {
    /// Parse a position label such as `top-right`. Unknown labels fall
    /// back to the default corner.
    pub fn parse(label: &str) -> Self {
        match label {
            "top-left" => Self::TopLeft,
            "bottom-right" => Self::BottomRight,
            "bottom-left" => Self::BottomLeft,
            _ => Self::TopRight,
        }
    }
}

/// The currently visible advice with its display deadline bookkeeping.
#[derive(Debug, Clone)]
struct ActiveAdvice {
    advice: Advice,
    shown_at: Instant,
}

/// The queued, priority-ordered advice panel.
#[derive(Debug, Clone)]
pub struct AdvicePanel {
    position: PanelPosition,
    hero_name: String,
    hero_avatar: String,
    queue: AdviceQueue,
    current: Option<ActiveAdvice>,
}

impl AdvicePanel {
    /// Create an empty panel for the given screen corner.
    pub const fn new(position: PanelPosition) -> Self {
        Self {
            position,
            hero_name: String::new(),
            hero_avatar: String::new(),
            queue: AdviceQueue::new(),
            current: None,
        }
    }

    /// The panel's configured screen corner.
    pub const fn position(&self) -> PanelPosition {
        self.position
    }

    /// Set the hero shown in the panel header.
    pub fn set_hero(&mut self, name: impl Into<String>, avatar: impl Into<String>) {
        self.hero_name = name.into();
        self.hero_avatar = avatar.into();
    }

    /// Queue advice for display.
    pub fn show(&mut self, advice: Advice) {
        self.queue.push(advice);
    }

    /// Advance the display state machine.
    ///
    /// Expires the visible advice once its duration has passed, then
    /// promotes the next queued advice if the slot is free. Returns the
    /// newly visible advice when the display changed this call.
    pub fn refresh(&mut self, now: Instant) -> Option<&Advice> {
        if let Some(active) = &self.current
            && now.duration_since(active.shown_at) >= active.advice.duration
        {
            self.current = None;
        }

        if self.current.is_some() {
            return None;
        }

        let advice = self.queue.pop_next()?;
        info!(
            advice_id = %advice.id,
            category = advice.category.as_str(),
            priority = advice.priority,
            "advice now visible"
        );
        self.current = Some(ActiveAdvice {
            advice,
            shown_at: now,
        });
        self.current.as_ref().map(|a| &a.advice)
    }

    /// The advice currently on screen, if any.
    pub fn visible(&self) -> Option<&Advice> {
        self.current.as_ref().map(|a| &a.advice)
    }

    /// Number of advice records waiting behind the visible one.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Render the panel as a text block: hero header plus the visible
    /// advice, or a waiting line when nothing is on screen.
    pub fn render(&self) -> String {
        let header = if self.hero_name.is_empty() {
            String::from("Dota Coach")
        } else {
            format!("{} {}", self.hero_avatar, self.hero_name)
        };

        match self.visible() {
            Some(advice) => format!(
                "{header}\n{} {}\n{}",
                advice.icon,
                advice.category.as_str().to_uppercase(),
                advice.text
            ),
            None => format!("{header}\nwaiting for advice..."),
        }
    }
}
