use geo::algorithm::contains::Contains;
use wardtrace_core::models::Point;

/// Whether a completed outline contains a canvas point.
///
/// The outline is stored open; the implied closing edge from the last point
/// back to the first is added before the containment test. Outlines with
/// fewer than three points enclose nothing.
pub fn outline_contains(points: &[Point], p: Point) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut ring: Vec<geo::Coord> = points.iter().map(|c| geo::Coord { x: c.x, y: c.y }).collect();
    if let Some(&first) = ring.first() {
        ring.push(first);
    }

    let polygon = geo::Polygon::new(geo::LineString::new(ring), vec![]);
    polygon.contains(&geo::Point::new(p.x, p.y))
}
