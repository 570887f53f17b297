//! Cellular-automaton cave grids for Grotto.
//!
//! This crate owns the [`CellGrid`] container and the smoothing rule that
//! turns random noise into connected cave space, plus the pipeline that
//! drives it:
//!
//! - [`CaveConfig`]: validated generation parameters
//! - [`CaveAutomaton`]: explicit `Uninitialized → Initialized → Stepped(n)
//!   → Finished` state machine over one grid
//! - [`CaveGenerator`]: one-call `initialize`, `step × n`, `finish` driver
//!   producing a finished [`Cave`]
//!
//! Grid coordinates are `(x, y)` with `y = 0` the bottom row; "down" means
//! decreasing `y`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use automaton::{AutomatonState, CaveAutomaton};
pub use config::{CaveConfig, CaveVariant};
pub use error::GridError;
pub use generator::{Cave, CaveGenerator};
pub use grid::{CellGrid, WALL_THRESHOLD};
