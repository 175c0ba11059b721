use geo::{Distance, Euclidean};
use wardtrace_core::models::Point;

/// Euclidean distance between two canvas points, in pixels
pub fn pixel_distance(a: Point, b: Point) -> f64 {
    Euclidean.distance(geo::Point::new(a.x, a.y), geo::Point::new(b.x, b.y))
}

/// Arithmetic mean of the outline vertices.
///
/// This is the vertex mean, not the area-weighted centroid: a room's
/// representative location is defined by the corners the user clicked.
/// Returns `None` for an empty slice.
pub fn vertex_centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Some(Point::new(sum_x / n, sum_y / n))
}

/// Real-world distance between two canvas points, in meters, given the
/// per-axis meters-per-pixel factors
pub fn meters_distance(a: Point, b: Point, scale_x: f64, scale_y: f64) -> f64 {
    let dx = (b.x - a.x) * scale_x;
    let dy = (b.y - a.y) * scale_y;
    (dx * dx + dy * dy).sqrt()
}
