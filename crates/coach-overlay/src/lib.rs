//! The on-screen advice surface for the Dota Coach companion.
//!
//! A small queued, priority-ordered panel: advice records are pushed in
//! from the coach loop, the highest-priority record is shown one at a
//! time, and each stays visible for its configured duration before the
//! next is promoted. Advice is handed in by value; the panel never shares
//! references with the producing thread.
//!
//! The panel itself is headless -- it manages the state machine and
//! renders a text block; putting that block in a window (or a terminal,
//! or a log line) is the binary's concern.
//!
//! # Modules
//!
//! - [`queue`] -- [`AdviceQueue`]: highest-priority-first, FIFO on ties.
//! - [`panel`] -- [`AdvicePanel`]: the one-visible-item state machine.
//!
//! [`AdviceQueue`]: queue::AdviceQueue
//! [`AdvicePanel`]: panel::AdvicePanel

pub mod panel;
pub mod queue;

// Re-export primary types at crate root.
pub use panel::{AdvicePanel, PanelPosition};
pub use queue::AdviceQueue;
