//! Error types for the Grotto map pipeline.
//!
//! [`ConfigError`] covers rejected generation parameters; nothing is
//! allocated when one is returned. [`MapError`] covers everything that can
//! go wrong while building, querying, or editing a map.

use crate::geom::{Point, Segment};
use crate::id::RegionId;
use std::error::Error;
use std::fmt;

/// Errors detected while validating generation parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid width or height is zero.
    EmptyGrid {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Grid is too narrow to hold a frame plus an entrance column.
    GridTooNarrow {
        /// Configured width.
        width: u32,
        /// Smallest accepted width.
        min: u32,
    },
    /// The cave surface row lies outside `1..height`.
    InvalidWallStartRow {
        /// Configured row.
        row: u32,
        /// Grid height.
        height: u32,
    },
    /// Wall fill probability is NaN or outside `[0, 1]`.
    InvalidFillProbability {
        /// The invalid value.
        value: f64,
    },
    /// World bounds are non-finite or have no area.
    InvalidBounds {
        /// Configured minimum corner.
        min: Point,
        /// Configured maximum corner.
        max: Point,
    },
    /// A map was requested with zero regions.
    NoRegions,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::GridTooNarrow { width, min } => {
                write!(f, "grid width {width} is below minimum of {min}")
            }
            Self::InvalidWallStartRow { row, height } => {
                write!(f, "wall_start_row {row} must be in [1, {height})")
            }
            Self::InvalidFillProbability { value } => {
                write!(f, "fill_probability must be in [0, 1], got {value}")
            }
            Self::InvalidBounds { min, max } => {
                write!(f, "world bounds {min}..{max} must be finite with positive area")
            }
            Self::NoRegions => write!(f, "region_count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from map construction, point location, and editing.
#[derive(Clone, Debug, PartialEq)]
pub enum MapError {
    /// No region contains the queried point.
    ///
    /// Recoverable: interactive callers ignore the click or retry.
    PointNotContained {
        /// The queried world point.
        point: Point,
    },
    /// A region polygon has fewer than three vertices or a non-finite
    /// vertex.
    MalformedPolygon {
        /// The offending region.
        region: RegionId,
        /// Number of vertices supplied.
        vertices: usize,
    },
    /// A boundary segment was sighted by more than two regions, so the
    /// region set is not a valid planar partition.
    InconsistentPartition {
        /// The over-shared segment.
        segment: Segment,
        /// How many sightings had been made when the problem was detected.
        sightings: usize,
    },
    /// A region ID does not exist in the map.
    UnknownRegion {
        /// The requested ID.
        id: RegionId,
    },
    /// A loaded region's ID does not match its position in the region list.
    RegionIdMismatch {
        /// Position in the list.
        index: usize,
        /// ID stored on the region.
        id: RegionId,
    },
    /// The partitioner could not produce one polygon per site.
    Partition {
        /// What went wrong.
        reason: String,
    },
    /// Cave grid generation failed.
    Grid {
        /// What went wrong.
        reason: String,
    },
    /// Generation parameters were rejected.
    Config(ConfigError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointNotContained { point } => {
                write!(f, "no region contains point {point}")
            }
            Self::MalformedPolygon { region, vertices } => {
                write!(
                    f,
                    "region {region} has a malformed polygon ({vertices} vertices)"
                )
            }
            Self::InconsistentPartition { segment, sightings } => {
                write!(
                    f,
                    "segment {segment} is shared by more than two regions \
                     ({sightings} sightings)"
                )
            }
            Self::UnknownRegion { id } => write!(f, "unknown region {id}"),
            Self::RegionIdMismatch { index, id } => {
                write!(f, "region at index {index} carries id {id}")
            }
            Self::Partition { reason } => write!(f, "partition failed: {reason}"),
            Self::Grid { reason } => write!(f, "grid generation failed: {reason}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for MapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for MapError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_is_source_of_map_error() {
        let err: MapError = ConfigError::NoRegions.into();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "config: region_count must be at least 1");
    }

    #[test]
    fn point_not_contained_display() {
        let err = MapError::PointNotContained {
            point: Point::new(1.5, -2.0),
        };
        assert_eq!(err.to_string(), "no region contains point (1.5, -2)");
    }

    #[test]
    fn leaf_errors_have_no_source() {
        let err = MapError::UnknownRegion { id: RegionId(9) };
        assert!(err.source().is_none());
    }
}
