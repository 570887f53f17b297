//! World-space geometry: points, undirected segments, and world bounds.
//!
//! Shared-edge detection between regions relies on exact coordinate
//! identity: two regions share an edge only if the partitioner handed both
//! of them literally the same vertex values. [`Point`] equality and hashing
//! are therefore bitwise (after folding `-0.0` into `0.0`), and
//! [`Segment`] stores its endpoints in a canonical order so the derived
//! `Eq`/`Hash` are independent of winding direction.

use crate::error::ConfigError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fold negative zero into positive zero so equal values share one bit
/// pattern.
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// A point in world coordinates.
///
/// Two points are equal iff their coordinates are exactly equal. NaN
/// coordinates compare equal to themselves (bitwise identity) so that
/// `Eq` and `Hash` stay consistent; regions reject non-finite vertices at
/// construction, so this never matters for well-formed maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (up is positive).
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn key(self) -> (u64, u64) {
        (canonical(self.x).to_bits(), canonical(self.y).to_bits())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Lexicographic on `(x, y)` using IEEE total ordering.
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.x)
            .total_cmp(&canonical(other.x))
            .then_with(|| canonical(self.y).total_cmp(&canonical(other.y)))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An undirected line segment between two points.
///
/// The constructor stores the smaller endpoint (by [`Point`]'s ordering)
/// first, so `Segment::new(a, b) == Segment::new(b, a)` and both hash
/// identically. This is what lets a region boundary walked clockwise by
/// one region match the same boundary walked by its neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Create a segment from two endpoints in either order.
    pub fn new(p1: Point, p2: Point) -> Self {
        if p1 <= p2 {
            Self { a: p1, b: p2 }
        } else {
            Self { a: p2, b: p1 }
        }
    }

    /// The lexicographically smaller endpoint.
    pub fn a(&self) -> Point {
        self.a
    }

    /// The lexicographically larger endpoint.
    pub fn b(&self) -> Point {
        self.b
    }

    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.b.x - self.a.x).hypot(self.b.y - self.a.y)
    }

    /// Whether both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Axis-aligned rectangle of world space that sites are sampled from and
/// that the cave grid is stretched over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    min: Point,
    max: Point,
}

impl WorldBounds {
    /// Create bounds from opposite corners.
    ///
    /// Returns `Err(ConfigError::InvalidBounds)` unless every coordinate is
    /// finite, `max` is strictly greater than `min` on both axes, and the
    /// width and height themselves fit in an `f64`.
    pub fn new(min: Point, max: Point) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || max.x <= min.x || max.y <= min.y {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        if !(max.x - min.x).is_finite() || !(max.y - min.y).is_finite() {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds of the given size centred on the origin, like a screen-sized
    /// orthographic camera.
    pub fn centered(width: f64, height: f64) -> Result<Self, ConfigError> {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::new(Point::new(-hw, -hh), Point::new(hw, hh))
    }

    /// Minimum corner.
    pub fn min(&self) -> Point {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether `p` lies inside the bounds (edges inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
