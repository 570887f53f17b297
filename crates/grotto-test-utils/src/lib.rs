//! Test fixtures for Grotto development.
//!
//! Grid and region builders that keep tests short:
//!
//! - [`grid_from_ascii`]: a [`CellGrid`] drawn as text, top row first
//! - [`rect_region`], [`tile_regions`], [`two_regions`]: hand-made
//!   partitions with exactly shared corners
//! - [`fixtures`]: [`Partitioner`](grotto_region::Partitioner) doubles

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use grotto_core::{CellType, Point, RegionId};
use grotto_grid::CellGrid;
use grotto_region::Region;

pub use fixtures::{FailingPartitioner, TilePartitioner};

/// Build a grid from rows of text, the first string being the top row.
///
/// `#` is Wall, `.` is Open, `~` is OuterSpace.
///
/// # Panics
///
/// On ragged rows, an empty picture, or any other character.
pub fn grid_from_ascii(rows: &[&str]) -> CellGrid {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut grid = CellGrid::new(width, height, CellType::Open).expect("non-empty picture");
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count() as u32, width, "ragged row {i}: {row:?}");
        let y = height - 1 - i as u32;
        for (x, ch) in row.chars().enumerate() {
            let cell = match ch {
                '#' => CellType::Wall,
                '.' => CellType::Open,
                '~' => CellType::OuterSpace,
                other => panic!("unknown cell character {other:?}"),
            };
            grid.set(x as u32, y, cell).expect("in range");
        }
    }
    grid
}

/// Render a grid back to text, top row first.
pub fn grid_to_ascii(grid: &CellGrid) -> Vec<String> {
    (0..grid.height())
        .rev()
        .map(|y| {
            grid.row(y)
                .unwrap_or_default()
                .iter()
                .map(|c| match c {
                    CellType::Wall => '#',
                    CellType::Open => '.',
                    CellType::OuterSpace => '~',
                })
                .collect()
        })
        .collect()
}

/// Clockwise axis-aligned rectangle region.
///
/// The site sits at 30% / 40% of the extent, off every fan diagonal.
pub fn rect_region(id: u32, x0: f64, y0: f64, x1: f64, y1: f64, cell_type: CellType) -> Region {
    let site = Point::new(x0 + (x1 - x0) * 0.3, y0 + (y1 - y0) * 0.4);
    let polygon = vec![
        Point::new(x0, y0),
        Point::new(x0, y1),
        Point::new(x1, y1),
        Point::new(x1, y0),
    ];
    Region::new(RegionId(id), site, polygon, cell_type).expect("well-formed rectangle")
}

/// `cols × rows` unit squares tiling `[0, cols] × [0, rows]`.
///
/// IDs are row-major from the bottom-left tile.
pub fn tile_regions(cols: u32, rows: u32, cell_type: CellType) -> Vec<Region> {
    let mut out = Vec::with_capacity((cols * rows) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = (c as f64, r as f64);
            out.push(rect_region(r * cols + c, x, y, x + 1.0, y + 1.0, cell_type));
        }
    }
    out
}

/// Two unit squares side by side sharing the edge `x = 1`.
pub fn two_regions(left: CellType, right: CellType) -> Vec<Region> {
    vec![
        rect_region(0, 0.0, 0.0, 1.0, 1.0, left),
        rect_region(1, 1.0, 0.0, 2.0, 1.0, right),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_top_row_is_highest_y() {
        let g = grid_from_ascii(&["~~~", "#.#", "###"]);
        assert_eq!(g.get(0, 2), Some(CellType::OuterSpace));
        assert_eq!(g.get(1, 1), Some(CellType::Open));
        assert_eq!(g.get(1, 0), Some(CellType::Wall));
        assert_eq!(grid_to_ascii(&g), vec!["~~~", "#.#", "###"]);
    }

    #[test]
    fn tiles_are_numbered_row_major() {
        let t = tile_regions(3, 2, CellType::Wall);
        assert_eq!(t.len(), 6);
        assert_eq!(t[4].polygon()[0], Point::new(1.0, 1.0));
    }
}
