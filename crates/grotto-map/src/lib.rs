//! Map model, editing session, and generation pipeline.
//!
//! [`generate_map`] turns a [`MapConfig`] into a classified [`MapModel`]:
//! sample sites, partition them into polygons, grow a cave with the
//! cellular automaton, classify every region against the cave, and extract
//! the dividing borders.
//!
//! The model is then edited through a paint-stroke API
//! ([`toggle_at`](MapModel::toggle_at), [`drag_to`](MapModel::drag_to),
//! [`commit_edit`](MapModel::commit_edit)); the border set is recomputed in
//! full once per committed stroke. [`SharedMap`] wraps a model for callers
//! that read borders from another thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod edit;
pub mod metrics;
pub mod model;
pub mod setup;

pub use config::MapConfig;
pub use edit::{SharedMap, Stroke};
pub use metrics::GenerationMetrics;
pub use model::{MapModel, TypeCounts};
pub use setup::{generate_map, sample_sites, GeneratedMap};
