//! Grotto: cellular-automaton caves classified onto polygonal region maps.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Grotto sub-crates. For most users, adding `grotto` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use grotto::prelude::*;
//!
//! let bounds = WorldBounds::centered(400.0, 200.0).unwrap();
//! let config = MapConfig::new(bounds)
//!     .region_count(100)
//!     .cave(CaveConfig::new(40, 20))
//!     .seed(42);
//! let mut map = generate_map(&config, &VoronoiPartitioner::new(bounds)).unwrap();
//! assert_eq!(map.model.len(), 100);
//!
//! // Flip the region under the first site and commit the edit.
//! let site = map.model.regions()[0].site();
//! let id = map.model.toggle_at(site).unwrap();
//! assert_eq!(id, RegionId(0));
//! map.model.commit_edit().unwrap();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grotto-core` | Cell types, geometry, IDs, errors |
//! | [`grid`] | `grotto-grid` | Cell grid, cave automaton, generator |
//! | [`region`] | `grotto-region` | Regions, borders, point location, partitioning |
//! | [`map`] | `grotto-map` | Map model, editing, generation pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, geometry, and errors (`grotto-core`).
pub use grotto_core as types;

/// Cell grid and cave automaton (`grotto-grid`).
///
/// [`grid::CaveGenerator`] produces a finished [`grid::Cave`] from a
/// validated [`grid::CaveConfig`].
pub use grotto_grid as grid;

/// Regions and their topology (`grotto-region`).
///
/// Includes [`region::extract_dividing_borders`], [`region::EdgeIndex`],
/// [`region::locate`](fn@region::locate), and the [`region::Partitioner`] seam.
pub use grotto_region as region;

/// Map model, editing session, and generation pipeline (`grotto-map`).
pub use grotto_map as map;

/// Common imports for typical Grotto usage.
///
/// ```rust
/// use grotto::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use grotto_core::{CellType, Point, RegionId, Segment, WorldBounds};

    // Errors
    pub use grotto_core::{ConfigError, MapError};
    pub use grotto_grid::GridError;

    // Cave
    pub use grotto_grid::{Cave, CaveConfig, CaveGenerator, CaveVariant, CellGrid};

    // Regions
    pub use grotto_region::{BorderSet, Partitioner, Region, VoronoiPartitioner};

    // Map
    pub use grotto_map::{generate_map, GeneratedMap, MapConfig, MapModel, SharedMap};
}
