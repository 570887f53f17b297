//! The mutable map: regions, adjacency, and the current border set.
//!
//! # Ownership model
//!
//! `MapModel` owns its regions outright. Region types change only through
//! `&mut self` methods, and the stored [`BorderSet`] is replaced wholesale
//! by [`recompute_borders()`](MapModel::recompute_borders), so a shared
//! borrow of the border set can never observe a half-applied edit.

use grotto_core::{CellType, MapError, Point, RegionId};
use grotto_region::{extract_dividing_borders, locate, BorderSet, EdgeIndex, Region};

use crate::edit::Stroke;

// Compile-time assertion: MapModel is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<MapModel>();
    }
};

/// Number of regions of each type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeCounts {
    /// Wall regions.
    pub wall: usize,
    /// Open regions.
    pub open: usize,
    /// Outer-space regions.
    pub outer_space: usize,
}

impl TypeCounts {
    /// Tally the types of `regions`.
    pub fn of(regions: &[Region]) -> Self {
        let mut counts = Self::default();
        for r in regions {
            match r.cell_type() {
                CellType::Wall => counts.wall += 1,
                CellType::Open => counts.open += 1,
                CellType::OuterSpace => counts.outer_space += 1,
            }
        }
        counts
    }

    /// Sum over all types.
    pub fn total(&self) -> usize {
        self.wall + self.open + self.outer_space
    }
}

/// A classified region set plus its derived topology.
#[derive(Debug, Clone)]
pub struct MapModel {
    regions: Vec<Region>,
    edges: EdgeIndex,
    borders: BorderSet,
    pub(crate) stroke: Option<Stroke>,
}

impl MapModel {
    /// Build a model from a region set, computing adjacency and borders.
    ///
    /// Region IDs must be dense and match their slice position; polygons
    /// are already validated by [`Region::new`].
    ///
    /// # Errors
    ///
    /// - [`MapError::RegionIdMismatch`] if `regions[i].id() != RegionId(i)`
    /// - [`MapError::InconsistentPartition`] if a side has three owners
    pub fn from_regions(regions: Vec<Region>) -> Result<Self, MapError> {
        for (index, r) in regions.iter().enumerate() {
            if r.id().index() != index {
                return Err(MapError::RegionIdMismatch { index, id: r.id() });
            }
        }
        let edges = EdgeIndex::build(&regions)?;
        let borders = extract_dividing_borders(&regions)?;
        log::debug!(
            "map model: {} regions, {} edges, {} borders",
            regions.len(),
            edges.edge_count(),
            borders.len()
        );
        Ok(Self {
            regions,
            edges,
            borders,
            stroke: None,
        })
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the map has no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// All regions, indexed by ID.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The region with ID `id`.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// The dividing borders as of the last recompute.
    pub fn borders(&self) -> &BorderSet {
        &self.borders
    }

    /// Side-adjacency index. Geometry never changes, so this is built once.
    pub fn edge_index(&self) -> &EdgeIndex {
        &self.edges
    }

    /// Regions sharing a side with `id`.
    pub fn neighbours(&self, id: RegionId) -> &[RegionId] {
        self.edges.neighbours(id)
    }

    /// Region containing `point`.
    pub fn locate(&self, point: Point) -> Result<RegionId, MapError> {
        locate(point, &self.regions)
    }

    /// Per-type region counts.
    pub fn type_counts(&self) -> TypeCounts {
        TypeCounts::of(&self.regions)
    }

    /// Set a region's type and return the previous one.
    ///
    /// Borders are not recomputed; call
    /// [`recompute_borders()`](Self::recompute_borders) once the batch of
    /// edits is complete.
    pub fn set_region_type(&mut self, id: RegionId, cell_type: CellType) -> Result<CellType, MapError> {
        let region = self
            .regions
            .get_mut(id.index())
            .ok_or(MapError::UnknownRegion { id })?;
        let previous = region.cell_type();
        region.set_cell_type(cell_type);
        Ok(previous)
    }

    /// Re-extract the dividing borders from the current region types.
    ///
    /// The new set is built aside and swapped in with one assignment; on
    /// error the previous set is kept. Returns the new border count.
    pub fn recompute_borders(&mut self) -> Result<usize, MapError> {
        let fresh = extract_dividing_borders(&self.regions)?;
        log::debug!(
            "borders recomputed: {} -> {}",
            self.borders.len(),
            fresh.len()
        );
        self.borders = fresh;
        Ok(self.borders.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grotto_core::WorldBounds;
    use grotto_region::classify_all;
    use grotto_test_utils::{grid_from_ascii, rect_region, tile_regions};

    #[test]
    fn from_regions_computes_borders() {
        let mut regions = tile_regions(3, 1, CellType::Wall);
        regions[1].set_cell_type(CellType::Open);
        let model = MapModel::from_regions(regions).unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(model.borders().len(), 2);
        assert_eq!(model.edge_index().edge_count(), 10);
    }

    #[test]
    fn borders_follow_classified_grid() {
        // One grid cell per tile; the top row is y = 1.
        let grid = grid_from_ascii(&["~.", "##"]);
        let bounds = WorldBounds::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0)).unwrap();
        let mut regions = tile_regions(2, 2, CellType::Open);
        classify_all(&mut regions, &grid, &bounds);
        let model = MapModel::from_regions(regions).unwrap();
        assert_eq!(
            model.type_counts(),
            TypeCounts {
                wall: 2,
                open: 1,
                outer_space: 1
            }
        );
        // The two walls share a side that is not a border.
        assert_eq!(model.borders().len(), 3);
    }

    #[test]
    fn from_regions_rejects_misnumbered_ids() {
        let regions = vec![
            rect_region(0, 0.0, 0.0, 1.0, 1.0, CellType::Wall),
            rect_region(5, 1.0, 0.0, 2.0, 1.0, CellType::Wall),
        ];
        assert_eq!(
            MapModel::from_regions(regions).unwrap_err(),
            MapError::RegionIdMismatch {
                index: 1,
                id: RegionId(5)
            }
        );
    }

    #[test]
    fn empty_model_is_valid() {
        let model = MapModel::from_regions(Vec::new()).unwrap();
        assert!(model.is_empty());
        assert!(model.borders().is_empty());
        assert_eq!(model.type_counts().total(), 0);
    }

    #[test]
    fn set_region_type_defers_recompute() {
        let mut model = MapModel::from_regions(tile_regions(2, 1, CellType::Wall)).unwrap();
        let prev = model.set_region_type(RegionId(0), CellType::Open).unwrap();
        assert_eq!(prev, CellType::Wall);
        assert!(model.borders().is_empty());
        assert_eq!(model.recompute_borders().unwrap(), 1);
        assert_eq!(model.borders().len(), 1);
    }

    #[test]
    fn set_region_type_unknown_id() {
        let mut model = MapModel::from_regions(tile_regions(2, 1, CellType::Wall)).unwrap();
        assert_eq!(
            model.set_region_type(RegionId(2), CellType::Open),
            Err(MapError::UnknownRegion { id: RegionId(2) })
        );
    }

    #[test]
    fn noop_recompute_is_stable() {
        let mut regions = tile_regions(3, 3, CellType::Wall);
        regions[4].set_cell_type(CellType::Open);
        let mut model = MapModel::from_regions(regions).unwrap();
        let before = model.borders().clone();
        model.recompute_borders().unwrap();
        assert!(model.borders().iter().eq(before.iter()));
    }

    #[test]
    fn queries() {
        let model = MapModel::from_regions(tile_regions(2, 2, CellType::Open)).unwrap();
        assert_eq!(model.locate(Point::new(1.5, 0.5)), Ok(RegionId(1)));
        assert_eq!(model.neighbours(RegionId(0)).len(), 2);
        assert_eq!(model.region(RegionId(3)).map(Region::id), Some(RegionId(3)));
        assert!(model.region(RegionId(4)).is_none());
        assert_eq!(
            model.type_counts(),
            TypeCounts {
                wall: 0,
                open: 4,
                outer_space: 0
            }
        );
    }
}
