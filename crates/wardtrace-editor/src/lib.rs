//! Wardtrace Editor - Canvas interaction state machines
//!
//! Canvas-side logic for the room and gateway configuration surfaces: the
//! outline editor, double-click pairing, and timeline playback. Everything
//! here is synchronous state driven by the host surface's events and timers.

pub mod click;
pub mod outline;
pub mod playback;

pub use click::{Clock, DoubleClickDetector, ManualClock, SystemClock};
pub use outline::{ClickOutcome, EditorThresholds, OutlineEditor, OutlineState};
pub use playback::TimelinePlayer;
