//! Timing and size metrics for one map generation.
//!
//! [`GenerationMetrics`] is filled in by
//! [`generate_map`](crate::generate_map) and returned alongside the model.

use crate::model::TypeCounts;

/// Per-phase timings and result sizes for one generation.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct GenerationMetrics {
    /// Wall-clock time for the whole pipeline, in microseconds.
    pub total_us: u64,
    /// Time spent sampling sites, in microseconds.
    pub sampling_us: u64,
    /// Time spent in the partitioner, in microseconds.
    pub partition_us: u64,
    /// Time spent running the cave automaton, in microseconds.
    pub cave_us: u64,
    /// Time spent classifying regions against the cave, in microseconds.
    pub classify_us: u64,
    /// Time spent building adjacency and extracting borders, in microseconds.
    pub topology_us: u64,
    /// Number of regions generated.
    pub region_count: usize,
    /// Number of distinct polygon sides.
    pub edge_count: usize,
    /// Sides owned by a single region, i.e. the map's outer boundary.
    pub outer_edge_count: usize,
    /// Number of dividing borders after classification.
    pub border_count: usize,
    /// Region counts per type after classification.
    pub types: TypeCounts,
}
