//! Wardtrace Geo - Canvas geometry and scale calibration
//!
//! This crate handles the geometric side of room outlines: point distances,
//! vertex centroids, pixel-to-meter calibration, and point-in-room tests.

pub mod calibrate;
pub mod locate;
pub mod primitives;

pub use calibrate::{compute_scale, gateway_distance, Scale};
pub use primitives::{meters_distance, pixel_distance, vertex_centroid};
