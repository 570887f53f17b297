//! Polygonal regions and the topology derived from them.
//!
//! A Grotto map is a set of [`Region`]s, one per site, each owning a convex
//! polygon produced by a [`Partitioner`]. This crate provides:
//!
//! - [`Region`]: site, clockwise vertex loop, and mutable terrain type
//! - [`classify`](mod@classify): assigns a region's type by sampling the cave grid
//! - [`borders`]: streaming extraction of the dividing-border set
//! - [`EdgeIndex`]: undirected edge → owning regions adjacency index
//! - [`locate`](mod@locate): fan-triangulated point-in-region queries
//! - [`partition`]: the geometry seam plus a Delaunay-backed Voronoi
//!   implementation
//!
//! Shared edges are detected by exact coordinate identity, so regions must
//! reuse the vertex values handed out by one partition call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod borders;
pub mod classify;
pub mod edges;
pub mod locate;
pub mod partition;
pub mod region;

#[cfg(test)]
pub(crate) mod fixtures;

pub use borders::{extract_dividing_borders, BorderSet};
pub use classify::{classify, classify_all, grid_cell_for};
pub use edges::EdgeIndex;
pub use locate::{locate, polygon_contains};
pub use partition::{Partitioner, VoronoiPartitioner};
pub use region::Region;
