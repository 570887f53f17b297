//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a region within a map.
///
/// Regions are created once from the partitioner's output and assigned
/// sequential IDs. `RegionId(n)` corresponds to the n-th region of the
/// map, so lookups are plain slice indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl RegionId {
    /// The region's position in its map's region list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_inner_value() {
        assert_eq!(RegionId(7).index(), 7);
        assert_eq!(RegionId::from(3), RegionId(3));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(RegionId(42).to_string(), "42");
    }
}
