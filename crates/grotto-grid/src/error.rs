//! Error types for grid operations and cave generation.

use crate::automaton::AutomatonState;
use grotto_core::{ConfigError, MapError};
use std::error::Error;
use std::fmt;

/// Errors arising from grid access or automaton transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A cell coordinate is outside the grid.
    CoordOutOfBounds {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// An automaton transition was requested from a state that does not
    /// allow it (e.g. `step()` before `initialize()`).
    InvalidTransition {
        /// State the automaton was in.
        from: AutomatonState,
        /// The rejected operation.
        op: &'static str,
    },
    /// Generation parameters were rejected before any grid was built.
    Config(ConfigError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "cell ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::InvalidTransition { from, op } => {
                write!(f, "cannot {op} an automaton in state {from:?}")
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::Config(c) => MapError::Config(c),
            other => MapError::Grid {
                reason: other.to_string(),
            },
        }
    }
}
