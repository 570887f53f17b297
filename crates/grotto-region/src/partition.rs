//! Site-to-polygon partitioning.
//!
//! [`Partitioner`] is the seam to the geometry backend. The bundled
//! [`VoronoiPartitioner`] derives Voronoi cells from a `spade` Delaunay
//! triangulation.

use crate::region::signed_area;
use grotto_core::{MapError, Point, WorldBounds};
use spade::{DelaunayTriangulation, Point2, Triangulation};

/// Turns a site list into one polygon per site.
pub trait Partitioner {
    /// Partition the plane around `sites`.
    ///
    /// Returns exactly one vertex loop per site, in site order, all wound
    /// clockwise. Sides shared by neighbouring cells must use bit-identical
    /// vertex values.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Partition`] if the sites cannot be partitioned.
    fn partition(&self, sites: &[Point]) -> Result<Vec<Vec<Point>>, MapError>;
}

/// Voronoi partitioning over a bounded world.
///
/// Four frame sites are placed far outside `bounds` before the cells are
/// read off, so every real site is interior to the triangulation and gets
/// a closed cell. Cells of sites near the edge of the world extend past the
/// bounds toward the frame.
#[derive(Clone, Debug)]
pub struct VoronoiPartitioner {
    bounds: WorldBounds,
}

impl VoronoiPartitioner {
    /// Frame sites sit this many world extents from the centre.
    pub const FRAME_SCALE: f64 = 4.0;

    /// Create a partitioner for sites within `bounds`.
    pub fn new(bounds: WorldBounds) -> Self {
        Self { bounds }
    }

    /// The world rectangle the frame is built around.
    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    fn frame(&self) -> [Point2<f64>; 4] {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        let (cx, cy) = ((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
        let r = self.bounds.width().max(self.bounds.height()) * Self::FRAME_SCALE;
        [
            Point2::new(cx - r, cy - r),
            Point2::new(cx + r, cy - r),
            Point2::new(cx + r, cy + r),
            Point2::new(cx - r, cy + r),
        ]
    }
}

impl Partitioner for VoronoiPartitioner {
    fn partition(&self, sites: &[Point]) -> Result<Vec<Vec<Point>>, MapError> {
        let mut tri: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
        let mut handles = Vec::with_capacity(sites.len());
        for (i, site) in sites.iter().enumerate() {
            if !site.is_finite() {
                return Err(MapError::Partition {
                    reason: format!("site {i} is not finite: {site}"),
                });
            }
            let handle = tri
                .insert(Point2::new(site.x, site.y))
                .map_err(|e| MapError::Partition {
                    reason: format!("site {i} at {site} rejected: {e:?}"),
                })?;
            if tri.num_vertices() != i + 1 {
                return Err(MapError::Partition {
                    reason: format!("site {i} at {site} duplicates an earlier site"),
                });
            }
            handles.push(handle);
        }
        for corner in self.frame() {
            tri.insert(corner).map_err(|e| MapError::Partition {
                reason: format!("frame site rejected: {e:?}"),
            })?;
        }
        if tri.num_vertices() != sites.len() + 4 {
            return Err(MapError::Partition {
                reason: "a site coincides with the partition frame".to_string(),
            });
        }

        // One circumcenter per face, shared by every cell around it.
        let mut centres: Vec<Option<Point>> = vec![None; tri.num_all_faces()];
        let mut cells = Vec::with_capacity(handles.len());
        for (i, &handle) in handles.iter().enumerate() {
            let mut cell: Vec<Point> = Vec::new();
            for edge in tri.vertex(handle).out_edges() {
                let face = edge.face().as_inner().ok_or_else(|| MapError::Partition {
                    reason: format!("site {i} lies outside the partition frame"),
                })?;
                let centre = *centres[face.fix().index()].get_or_insert_with(|| {
                    let c = face.circumcenter();
                    Point::new(c.x, c.y)
                });
                if cell.last() != Some(&centre) {
                    cell.push(centre);
                }
            }
            if cell.len() > 1 && cell.first() == cell.last() {
                cell.pop();
            }
            if cell.len() < 3 {
                log::warn!("site {i} produced a degenerate cell with {} vertices", cell.len());
                return Err(MapError::Partition {
                    reason: format!("site {i} has a degenerate cell"),
                });
            }
            if signed_area(&cell) > 0.0 {
                cell.reverse();
            }
            cells.push(cell);
        }

        log::debug!(
            "partitioned {} sites into cells over {} triangles",
            sites.len(),
            tri.num_inner_faces()
        );
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::borders::extract_dividing_borders;
    use crate::edges::EdgeIndex;
    use crate::locate::locate;
    use crate::region::Region;
    use grotto_core::{CellType, RegionId};
    use proptest::prelude::*;

    fn bounds() -> WorldBounds {
        WorldBounds::centered(100.0, 100.0).unwrap()
    }

    fn regions(sites: &[Point]) -> Vec<Region> {
        let cells = VoronoiPartitioner::new(bounds()).partition(sites).unwrap();
        sites
            .iter()
            .zip(cells)
            .enumerate()
            .map(|(i, (&s, c))| Region::new(RegionId(i as u32), s, c, CellType::Wall).unwrap())
            .collect()
    }

    fn lattice() -> Vec<Point> {
        let mut pts = Vec::new();
        for j in 0..5 {
            for i in 0..5 {
                // Jittered so no four sites are cocircular.
                let x = -40.0 + 20.0 * i as f64 + (j as f64) * 0.7;
                let y = -40.0 + 20.0 * j as f64 + (i as f64) * 0.3;
                pts.push(Point::new(x, y));
            }
        }
        pts
    }

    // ── Output shape ────────────────────────────────────────────

    #[test]
    fn empty_input_gives_no_cells() {
        let cells = VoronoiPartitioner::new(bounds()).partition(&[]).unwrap();
        assert!(cells.is_empty());
    }

    #[test]
    fn one_cell_per_site_clockwise() {
        let sites = lattice();
        let cells = VoronoiPartitioner::new(bounds()).partition(&sites).unwrap();
        assert_eq!(cells.len(), sites.len());
        for cell in &cells {
            assert!(cell.len() >= 3);
            assert!(signed_area(cell) < 0.0);
        }
    }

    #[test]
    fn single_site_is_closed() {
        let cells = VoronoiPartitioner::new(bounds())
            .partition(&[Point::new(0.0, 0.0)])
            .unwrap();
        assert_eq!(cells.len(), 1);
        assert!(crate::locate::polygon_contains(&cells[0], Point::new(0.0, 0.0)));
    }

    // ── Topology ────────────────────────────────────────────────

    #[test]
    fn neighbouring_cells_share_exact_edges() {
        let rs = regions(&lattice());
        let idx = EdgeIndex::build(&rs).unwrap();
        // Interior site (2, 2) of the lattice touches at least its four
        // axis neighbours.
        let centre = RegionId(12);
        for n in [7, 11, 13, 17] {
            assert!(
                idx.neighbours(centre).contains(&RegionId(n)),
                "region {n} not adjacent to centre"
            );
            assert!(idx.shared_edges(centre, RegionId(n)).count() >= 1);
        }
    }

    #[test]
    fn uniform_types_give_no_borders() {
        assert!(extract_dividing_borders(&regions(&lattice())).unwrap().is_empty());
    }

    #[test]
    fn differing_neighbour_gives_borders() {
        let mut rs = regions(&lattice());
        rs[12].set_cell_type(CellType::Open);
        let borders = extract_dividing_borders(&rs).unwrap();
        assert_eq!(borders.len(), rs[12].side_count());
    }

    // ── Rejections ──────────────────────────────────────────────

    #[test]
    fn duplicate_site_is_rejected() {
        let p = Point::new(1.0, 2.0);
        let err = VoronoiPartitioner::new(bounds())
            .partition(&[p, Point::new(3.0, 3.0), p])
            .unwrap_err();
        assert!(matches!(err, MapError::Partition { .. }));
    }

    #[test]
    fn non_finite_site_is_rejected() {
        let err = VoronoiPartitioner::new(bounds())
            .partition(&[Point::new(f64::NAN, 0.0)])
            .unwrap_err();
        assert!(matches!(err, MapError::Partition { .. }));
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn locate_at_site_finds_its_region(
            raw in proptest::collection::hash_set((-4900i32..4900, -4900i32..4900), 3..40)
        ) {
            let sites: Vec<Point> = raw
                .into_iter()
                .map(|(x, y)| Point::new(x as f64 / 100.0, y as f64 / 100.0))
                .collect();
            let rs = regions(&sites);
            for r in &rs {
                prop_assert_eq!(locate(r.site(), &rs), Ok(r.id()));
            }
        }
    }
}
