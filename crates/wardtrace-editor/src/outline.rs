//! Room-outline editor.
//!
//! Click dispatch order on the drawing canvas: selecting an existing corner
//! wins over closing, closing wins over appending. Closing needs at least
//! three corners already placed; the closing click itself adds no point.

use std::time::Duration;

use wardtrace_core::models::Point;
use wardtrace_geo::primitives::pixel_distance;

use crate::click::{Clock, DoubleClickDetector, SystemClock};

/// Pixel radii and timing for the outline editor.
///
/// The closing radius must stay strictly larger than the selection radius;
/// the selection check runs first, so an equal or smaller closing radius
/// would make the first corner impossible to close on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorThresholds {
    /// Radius around an existing corner that selects it instead of adding
    pub select_px: f64,

    /// Radius around the first corner that closes the outline
    pub close_px: f64,

    /// Two clicks on the same corner within this window delete it
    pub double_click_window: Duration,
}

impl Default for EditorThresholds {
    fn default() -> Self {
        Self {
            select_px: 10.0,
            close_px: 40.0,
            double_click_window: Duration::from_millis(300),
        }
    }
}

/// Editor state. A selection can only exist while drawing, and a completed
/// outline carries no selection, so invalid combinations are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineState {
    /// No outline in progress
    Idle,

    /// Accumulating corners; at most one may be selected
    Drawing {
        points: Vec<Point>,
        selected: Option<usize>,
    },

    /// Outline closed. The implied edge from the last corner back to the
    /// first is not stored.
    Complete { points: Vec<Point> },
}

/// What a click did, so the host surface can react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new corner was appended
    Added,
    /// An existing corner was selected
    Selected(usize),
    /// A double click removed a corner
    Removed(usize),
    /// The outline was closed
    Closed,
    /// The editor was not drawing
    Ignored,
}

/// State machine behind the room-outline drawing canvas
#[derive(Debug)]
pub struct OutlineEditor<C: Clock = SystemClock> {
    state: OutlineState,
    thresholds: EditorThresholds,
    detector: DoubleClickDetector<C>,
}

impl OutlineEditor<SystemClock> {
    pub fn new(thresholds: EditorThresholds) -> Self {
        Self::with_clock(thresholds, SystemClock::new())
    }
}

impl Default for OutlineEditor<SystemClock> {
    fn default() -> Self {
        Self::new(EditorThresholds::default())
    }
}

impl<C: Clock> OutlineEditor<C> {
    /// Editor with an injected clock, for deterministic double-click pairing
    pub fn with_clock(thresholds: EditorThresholds, clock: C) -> Self {
        let detector = DoubleClickDetector::new(clock, thresholds.double_click_window);
        Self { state: OutlineState::Idle, thresholds, detector }
    }

    pub fn state(&self) -> &OutlineState {
        &self.state
    }

    /// Corners in insertion order, whatever the state
    pub fn points(&self) -> &[Point] {
        match &self.state {
            OutlineState::Idle => &[],
            OutlineState::Drawing { points, .. } | OutlineState::Complete { points } => points,
        }
    }

    /// The completed outline, if the editor has one
    pub fn completed_points(&self) -> Option<&[Point]> {
        match &self.state {
            OutlineState::Complete { points } => Some(points),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, OutlineState::Complete { .. })
    }

    /// Index of the currently selected corner, while drawing
    pub fn selected(&self) -> Option<usize> {
        match &self.state {
            OutlineState::Drawing { selected, .. } => *selected,
            _ => None,
        }
    }

    /// Begin a fresh outline, discarding any prior corners
    pub fn start(&mut self) {
        tracing::debug!("outline editor: start drawing");
        self.detector.clear();
        self.state = OutlineState::Drawing { points: Vec::new(), selected: None };
    }

    /// Re-enter drawing over an existing room's corners. The outline is
    /// immediately eligible for re-closing or further edits.
    pub fn edit(&mut self, points: Vec<Point>) {
        tracing::debug!(corners = points.len(), "outline editor: edit existing outline");
        self.detector.clear();
        self.state = OutlineState::Drawing { points, selected: None };
    }

    /// Adopt an already-completed outline, e.g. when a saved room is opened
    /// for editing. Use `edit` afterwards to change the corners.
    pub fn load_complete(&mut self, points: Vec<Point>) {
        self.detector.clear();
        self.state = OutlineState::Complete { points };
    }

    /// Handle a canvas click while drawing
    pub fn click(&mut self, at: Point) -> ClickOutcome {
        let OutlineState::Drawing { points, selected } = &mut self.state else {
            return ClickOutcome::Ignored;
        };

        // Near an existing corner: select it, or remove it on a double
        // click. No minimum size applies here; the count may drop below 3.
        if let Some(index) = nearest_within(points, at, self.thresholds.select_px) {
            if self.detector.observe(index) {
                points.remove(index);
                *selected = None;
                // Corners after the removed one have shifted index.
                self.detector.clear();
                return ClickOutcome::Removed(index);
            }
            *selected = Some(index);
            return ClickOutcome::Selected(index);
        }

        // Near the first corner with enough corners placed: close. The
        // closing edge stays implied, the click adds no point.
        if points.len() >= 3 && pixel_distance(points[0], at) <= self.thresholds.close_px {
            let points = std::mem::take(points);
            tracing::debug!(corners = points.len(), "outline editor: outline closed");
            self.detector.clear();
            self.state = OutlineState::Complete { points };
            return ClickOutcome::Closed;
        }

        points.push(at);
        ClickOutcome::Added
    }

    /// Remove the most recently added corner; no-op when none remain
    pub fn undo(&mut self) {
        if let OutlineState::Drawing { points, selected } = &mut self.state {
            if points.pop().is_some() {
                *selected = None;
                self.detector.clear();
            }
        }
    }

    /// Remove the currently selected corner, if any, and clear selection
    pub fn delete_selected(&mut self) {
        if let OutlineState::Drawing { points, selected } = &mut self.state {
            if let Some(index) = selected.take() {
                points.remove(index);
                self.detector.clear();
            }
        }
    }

    /// Discard the outline in progress and return to idle
    pub fn cancel(&mut self) {
        if matches!(self.state, OutlineState::Drawing { .. }) {
            self.detector.clear();
            self.state = OutlineState::Idle;
        }
    }

    /// Drop the outline, completed or not, and return to idle
    pub fn reset(&mut self) {
        self.detector.clear();
        self.state = OutlineState::Idle;
    }
}

/// Closest corner within `radius` of the click, if any
fn nearest_within(points: &[Point], at: Point, radius: f64) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, pixel_distance(p, at)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}
