//! Undirected edge → owner index over a region set.

use crate::borders::BorderSet;
use crate::region::Region;
use grotto_core::{MapError, RegionId, Segment};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Owners of one edge: one for an outer edge, two for a shared one.
type Owners = SmallVec<[RegionId; 2]>;

/// Adjacency index built from region boundaries.
///
/// Every distinct side maps to the regions owning it, and every region to
/// the regions it shares a side with. Insertion order follows the region
/// slice, so iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    edges: IndexMap<Segment, Owners>,
    links: Vec<SmallVec<[RegionId; 8]>>,
}

impl EdgeIndex {
    /// Index the sides of `regions`.
    ///
    /// # Errors
    ///
    /// - [`MapError::RegionIdMismatch`] if a region ID points past the end
    ///   of `regions`
    /// - [`MapError::InconsistentPartition`] if a side is owned by more than
    ///   two regions
    pub fn build(regions: &[Region]) -> Result<Self, MapError> {
        for (index, r) in regions.iter().enumerate() {
            if r.id().index() >= regions.len() {
                return Err(MapError::RegionIdMismatch { index, id: r.id() });
            }
        }
        let sides: usize = regions.iter().map(Region::side_count).sum();
        let mut edges: IndexMap<Segment, Owners> = IndexMap::with_capacity(sides / 2 + 1);
        for region in regions {
            for side in region.sides() {
                let owners = edges.entry(side).or_default();
                if owners.len() == 2 {
                    return Err(MapError::InconsistentPartition {
                        segment: side,
                        sightings: 3,
                    });
                }
                owners.push(region.id());
            }
        }

        let mut links: Vec<SmallVec<[RegionId; 8]>> = vec![SmallVec::new(); regions.len()];
        for owners in edges.values() {
            if let [a, b] = owners[..] {
                if a != b && !links[a.index()].contains(&b) {
                    links[a.index()].push(b);
                    links[b.index()].push(a);
                }
            }
        }
        Ok(Self { edges, links })
    }

    /// Number of distinct sides.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Regions owning `segment`, or `None` if no region has that side.
    pub fn owners(&self, segment: &Segment) -> Option<&[RegionId]> {
        self.edges.get(segment).map(|o| o.as_slice())
    }

    /// Regions sharing at least one side with `id`. Empty for unknown IDs.
    pub fn neighbours(&self, id: RegionId) -> &[RegionId] {
        self.links
            .get(id.index())
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }

    /// Sides shared by `a` and `b`.
    pub fn shared_edges(&self, a: RegionId, b: RegionId) -> impl Iterator<Item = Segment> + '_ {
        self.edges.iter().filter_map(move |(s, o)| match o[..] {
            [x, y] if (x == a && y == b) || (x == b && y == a) => Some(*s),
            _ => None,
        })
    }

    /// Sides owned by a single region: the outer boundary of the map.
    pub fn outer_edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges
            .iter()
            .filter(|(_, o)| o.len() == 1)
            .map(|(s, _)| *s)
    }

    /// Shared sides whose two owners currently differ in type.
    ///
    /// Owners are looked up by ID position in `regions`; sides whose owners
    /// are missing from the slice are skipped.
    pub fn dividing_borders(&self, regions: &[Region]) -> BorderSet {
        let type_of = |id: RegionId| regions.get(id.index()).map(Region::cell_type);
        self.edges
            .iter()
            .filter_map(|(s, o)| match o[..] {
                [a, b] => match (type_of(a), type_of(b)) {
                    (Some(ta), Some(tb)) if ta != tb => Some(*s),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }
}
