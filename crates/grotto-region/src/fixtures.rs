//! Region layouts shared by this crate's unit tests.

use crate::region::Region;
use grotto_core::{CellType, Point, RegionId};

/// Clockwise axis-aligned rectangle with its site off-centre, so the site
/// never falls on a fan diagonal.
pub(crate) fn rect(id: u32, x0: f64, y0: f64, x1: f64, y1: f64, t: CellType) -> Region {
    let site = Point::new(x0 + (x1 - x0) * 0.3, y0 + (y1 - y0) * 0.4);
    let polygon = vec![
        Point::new(x0, y0),
        Point::new(x0, y1),
        Point::new(x1, y1),
        Point::new(x1, y0),
    ];
    Region::new(RegionId(id), site, polygon, t).unwrap()
}

/// `cols × rows` unit squares tiling `[0, cols] × [0, rows]`, row-major IDs,
/// all of type `t`.
pub(crate) fn tiles(cols: u32, rows: u32, t: CellType) -> Vec<Region> {
    let mut out = Vec::with_capacity((cols * rows) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = (c as f64, r as f64);
            out.push(rect(r * cols + c, x, y, x + 1.0, y + 1.0, t));
        }
    }
    out
}
