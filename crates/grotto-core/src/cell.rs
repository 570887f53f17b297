//! Terrain cell states.

use std::fmt;

/// Terrain state of a grid cell or a map region.
///
/// The two-state cave variant only ever produces [`Wall`](Self::Wall) and
/// [`Open`](Self::Open); the surface variant additionally marks the sky
/// above the cave as [`OuterSpace`](Self::OuterSpace). For neighbour
/// counting, only `Wall` is solid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellType {
    /// Solid rock.
    #[default]
    Wall,
    /// Walkable cave space.
    Open,
    /// Sky above the cave surface.
    OuterSpace,
}

impl CellType {
    /// Whether this cell counts as solid for the automaton rule.
    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }

    /// The type an editor click flips this one to.
    ///
    /// `Open` becomes `Wall`; everything else becomes `Open`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Wall,
            Self::Wall | Self::OuterSpace => Self::Open,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => write!(f, "wall"),
            Self::Open => write!(f, "open"),
            Self::OuterSpace => write!(f, "outer space"),
        }
    }
}
