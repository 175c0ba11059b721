use serde::{Deserialize, Serialize};

/// A named floor-plan image plus its real-world dimensions and the canvas
/// pixel dimensions outlines are drawn against.
///
/// `image_ref` is an opaque reference to a raster image (e.g. a data URL)
/// supplied by the file-picker surface. It is never decoded or validated
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Floor plan name
    pub name: String,

    /// Opaque reference to the raster image
    pub image_ref: String,

    /// Real-world width in meters
    pub width_meters: f64,

    /// Real-world height in meters
    pub height_meters: f64,

    /// Canvas width in pixels
    pub canvas_width_px: u32,

    /// Canvas height in pixels
    pub canvas_height_px: u32,
}

impl FloorPlan {
    pub fn new(
        name: impl Into<String>,
        image_ref: impl Into<String>,
        width_meters: f64,
        height_meters: f64,
        canvas_width_px: u32,
        canvas_height_px: u32,
    ) -> Self {
        Self {
            name: name.into(),
            image_ref: image_ref.into(),
            width_meters,
            height_meters,
            canvas_width_px,
            canvas_height_px,
        }
    }
}
