//! Partitioner doubles.
//!
//! - [`TilePartitioner`]: snaps every site to the square tile it falls in.
//! - [`FailingPartitioner`]: always fails.

use grotto_core::{MapError, Point};
use grotto_region::Partitioner;

/// Maps each site to the clockwise `size × size` square containing it.
///
/// Two sites in the same tile produce identical polygons, which border
/// extraction later rejects as an inconsistent partition.
pub struct TilePartitioner {
    pub size: f64,
}

impl TilePartitioner {
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

impl Partitioner for TilePartitioner {
    fn partition(&self, sites: &[Point]) -> Result<Vec<Vec<Point>>, MapError> {
        Ok(sites
            .iter()
            .map(|p| {
                let x0 = (p.x / self.size).floor() * self.size;
                let y0 = (p.y / self.size).floor() * self.size;
                let (x1, y1) = (x0 + self.size, y0 + self.size);
                vec![
                    Point::new(x0, y0),
                    Point::new(x0, y1),
                    Point::new(x1, y1),
                    Point::new(x1, y0),
                ]
            })
            .collect())
    }
}

/// Fails every call with [`MapError::Partition`].
pub struct FailingPartitioner;

impl Partitioner for FailingPartitioner {
    fn partition(&self, _sites: &[Point]) -> Result<Vec<Vec<Point>>, MapError> {
        Err(MapError::Partition {
            reason: "partitioner unavailable".to_string(),
        })
    }
}
