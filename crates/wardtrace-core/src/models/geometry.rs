//! Canvas geometry value types.
//!
//! All coordinates are canvas pixels. Conversion to real-world meters is the
//! job of the calibration layer, which carries the per-axis scale.

use serde::{Deserialize, Serialize};

/// A point in canvas-pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
