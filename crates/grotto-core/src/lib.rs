//! Core types for the Grotto cave map generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other Grotto crate: terrain cell
//! states, world-space points and segments, region identifiers, world
//! bounds, and the error enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod geom;
pub mod id;

pub use cell::CellType;
pub use error::{ConfigError, MapError};
pub use geom::{Point, Segment, WorldBounds};
pub use id::RegionId;
