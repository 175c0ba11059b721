//! Bounded timeline playback.
//!
//! The analytics surface owns the real repeating timer; this type holds the
//! stepping state so starting, advancing, and cancelling stay deterministic.
//! `tick` advances one step and stops itself at the upper bound; `stop` is
//! idempotent and never blocks.

/// Auto-advancing position over a fixed range of timeline steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePlayer {
    len: usize,
    position: usize,
    playing: bool,
}

impl TimelinePlayer {
    /// Player over `len` steps, positioned at the start, stopped
    pub fn new(len: usize) -> Self {
        Self { len, position: 0, playing: false }
    }

    /// Current step index
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Begin playback. Starting while at the final step rewinds to the
    /// beginning first; an empty timeline never plays.
    pub fn play(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.position + 1 >= self.len {
            self.position = 0;
        }
        self.playing = true;
    }

    /// Advance one step; returns the new position, or `None` when stopped.
    /// Reaching the final step stops playback, so the host can drop its
    /// timer on `None` or on `is_playing()` turning false.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.playing {
            return None;
        }

        if self.position + 1 >= self.len {
            self.playing = false;
            return None;
        }

        self.position += 1;
        if self.position + 1 == self.len {
            self.playing = false;
        }
        Some(self.position)
    }

    /// Halt playback, keeping the current position. Safe to call repeatedly,
    /// including when already stopped.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Jump to a step, clamped to the valid range. Seeking stops playback.
    pub fn seek(&mut self, position: usize) {
        self.playing = false;
        self.position = position.min(self.len.saturating_sub(1));
    }
}
