//! Dividing-border extraction.
//!
//! A dividing border is a polygon side shared by exactly two regions whose
//! terrain types differ. The extractor streams over every side once, pairing
//! each side with its first sighting, so the cost is linear in the total
//! number of sides.

use crate::region::Region;
use grotto_core::{CellType, MapError, Segment};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;

/// Insertion-ordered set of dividing borders.
pub type BorderSet = IndexSet<Segment>;

/// Compute the dividing borders of `regions` from scratch.
///
/// Output order follows the order in which each border's second sighting
/// is reached, so identical inputs give identical sets in identical order.
/// Sides seen once (the map's outer boundary) are never borders.
///
/// # Errors
///
/// Returns [`MapError::InconsistentPartition`] if any side is owned by more
/// than two regions.
pub fn extract_dividing_borders(regions: &[Region]) -> Result<BorderSet, MapError> {
    let sides: usize = regions.iter().map(Region::side_count).sum();
    let mut open: IndexMap<Segment, CellType> = IndexMap::with_capacity(sides / 2 + 1);
    let mut closed: HashSet<Segment> = HashSet::with_capacity(sides / 2 + 1);
    let mut borders = BorderSet::new();

    for region in regions {
        let t = region.cell_type();
        for side in region.sides() {
            if closed.contains(&side) {
                return Err(MapError::InconsistentPartition {
                    segment: side,
                    sightings: 3,
                });
            }
            match open.swap_remove(&side) {
                None => {
                    open.insert(side, t);
                }
                Some(first) => {
                    closed.insert(side);
                    if first != t {
                        borders.insert(side);
                    }
                }
            }
        }
    }

    log::debug!(
        "border extraction: {} regions, {} shared sides, {} outer sides, {} borders",
        regions.len(),
        closed.len(),
        open.len(),
        borders.len()
    );
    Ok(borders)
}
