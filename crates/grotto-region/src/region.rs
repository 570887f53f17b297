//! A polygonal map region.

use grotto_core::{CellType, MapError, Point, RegionId, Segment};
use std::collections::HashSet;

/// One cell of the map's polygonal partition.
///
/// Owns the site it was generated from, its boundary as an ordered closed
/// vertex loop (clockwise, the last vertex connects back to the first), and
/// a terrain type. Only the type changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: RegionId,
    site: Point,
    polygon: Vec<Point>,
    cell_type: CellType,
}

impl Region {
    /// Create a region.
    ///
    /// A trailing vertex equal to the first one is dropped, so both open and
    /// explicitly closed loops are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedPolygon`] if the loop has fewer than
    /// three distinct vertices, repeats a vertex back to back, traverses any
    /// side twice, or contains a non-finite coordinate (the site included).
    pub fn new(
        id: RegionId,
        site: Point,
        mut polygon: Vec<Point>,
        cell_type: CellType,
    ) -> Result<Self, MapError> {
        if polygon.len() > 1 && polygon.first() == polygon.last() {
            polygon.pop();
        }
        let malformed = || MapError::MalformedPolygon {
            region: id,
            vertices: polygon.len(),
        };
        if polygon.len() < 3 || !site.is_finite() || !polygon.iter().all(|p| p.is_finite()) {
            return Err(malformed());
        }
        if polygon.windows(2).any(|w| w[0] == w[1]) {
            return Err(malformed());
        }
        if polygon.iter().collect::<HashSet<_>>().len() < 3 {
            return Err(malformed());
        }
        let n = polygon.len();
        let sides: HashSet<Segment> = (0..n)
            .map(|i| Segment::new(polygon[i], polygon[(i + 1) % n]))
            .collect();
        if sides.len() < n {
            return Err(malformed());
        }
        Ok(Self {
            id,
            site,
            polygon,
            cell_type,
        })
    }

    /// The region's ID.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// The site the region was generated from.
    pub fn site(&self) -> Point {
        self.site
    }

    /// Boundary vertices in winding order, without the closing repeat.
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// Current terrain type.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Change the terrain type.
    pub fn set_cell_type(&mut self, cell_type: CellType) {
        self.cell_type = cell_type;
    }

    /// Number of boundary sides (equal to the vertex count).
    pub fn side_count(&self) -> usize {
        self.polygon.len()
    }

    /// Boundary sides in winding order, including the closing side.
    pub fn sides(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.polygon.len();
        (0..n).map(move |i| Segment::new(self.polygon[i], self.polygon[(i + 1) % n]))
    }

    /// Shoelace signed area: negative for clockwise loops.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.polygon)
    }

    /// Whether `point` lies strictly inside the region.
    pub fn contains(&self, point: Point) -> bool {
        crate::locate::polygon_contains(&self.polygon, point)
    }
}

/// Shoelace signed area of a vertex loop; positive when counter-clockwise.
pub(crate) fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (p, q) = (polygon[i], polygon[(i + 1) % n]);
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice / 2.0
}
