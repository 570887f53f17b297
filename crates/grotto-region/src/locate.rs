//! Point-in-region queries by fan triangulation.

use crate::region::Region;
use grotto_core::{MapError, Point, RegionId};

/// Orientation of `p1` relative to the directed line `p2 → p3`.
///
/// `(x1 - x3)(y2 - y3) - (x2 - x3)(y1 - y3)`: negative when `p1, p2, p3`
/// turn clockwise, zero when collinear.
pub fn sign(p1: Point, p2: Point, p3: Point) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Whether `point` is inside the clockwise polygon `polygon`.
///
/// The polygon is split into the fan `(v0, vi, vi+1)` for `i in 1..n-1`. A
/// triangle holds the point when all three orientation signs are negative.
/// Signs against real polygon sides must be strictly negative, so points on
/// the boundary are outside; a zero sign against an internal fan diagonal is
/// accepted, so points on a diagonal are still found.
pub fn polygon_contains(polygon: &[Point], point: Point) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let v0 = polygon[0];
    (1..n - 1).any(|i| {
        let (b, c) = (polygon[i], polygon[i + 1]);
        let inside = |s: f64, on_boundary: bool| if on_boundary { s < 0.0 } else { s <= 0.0 };
        inside(sign(point, v0, b), i == 1)
            && inside(sign(point, b, c), true)
            && inside(sign(point, c, v0), i == n - 2)
    })
}

/// Find the first region containing `point`.
///
/// Linear scan in slice order. Returns [`MapError::PointNotContained`] when
/// no region holds the point (outside the map, or exactly on a border).
pub fn locate(point: Point, regions: &[Region]) -> Result<RegionId, MapError> {
    regions
        .iter()
        .find(|r| r.contains(point))
        .map(Region::id)
        .ok_or(MapError::PointNotContained { point })
}
