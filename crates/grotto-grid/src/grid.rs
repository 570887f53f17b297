//! Fixed-size 2D grid of terrain cells with an 8-connected smoothing rule.

use crate::error::GridError;
use grotto_core::{CellType, ConfigError};
use std::ops::Range;

/// All 8 offsets as `(dx, dy)`: W, E, S, N, SW, SE, NW, NE.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// A cell becomes Wall when at least this many of its 8 neighbours are
/// Wall.
pub const WALL_THRESHOLD: u8 = 5;

/// A rectangular grid of [`CellType`], stored row-major.
///
/// Cell `(x, y)` lives at index `y * width + x`; `y = 0` is the bottom
/// row. Dimensions are fixed for the grid's lifetime.
///
/// The grid carries a second buffer of the same size so that a smoothing
/// step can compute every new cell from the untouched previous generation
/// and then swap buffers, instead of mutating cells whose neighbours are
/// still being read.
#[derive(Debug, Clone)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<CellType>,
    next: Vec<CellType>,
}

impl CellGrid {
    /// Create a `width × height` grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::Config(ConfigError::EmptyGrid))` if either
    /// dimension is 0.
    pub fn new(width: u32, height: u32, fill: CellType) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height }.into());
        }
        let n = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![fill; n],
            next: vec![fill; n],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<CellType> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, cell: CellType) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::CoordOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index(x, y);
        self.cells[i] = cell;
        Ok(())
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    /// One row, left to right.
    pub fn row(&self, y: u32) -> Option<&[CellType]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, CellType)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i % w) as u32, (i / w) as u32, c))
    }

    /// Number of cells of the given type.
    pub fn count(&self, cell: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Set every cell to `cell`.
    pub fn fill(&mut self, cell: CellType) {
        self.cells.fill(cell);
    }

    /// Reset the whole grid to Open.
    pub fn clear(&mut self) {
        self.fill(CellType::Open);
    }

    /// Whether `(x, y)` lies on the outermost ring of the grid.
    pub fn is_border(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    /// Count Wall cells among the 8 neighbours of `(x, y)`.
    ///
    /// Positions outside the grid are absent, not Wall.
    pub fn wall_neighbours(&self, x: u32, y: u32) -> u8 {
        let (w, h) = (self.width as i64, self.height as i64);
        let mut count = 0;
        for (dx, dy) in OFFSETS_8 {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            if self.cells[(ny * w + nx) as usize].is_wall() {
                count += 1;
            }
        }
        count
    }

    /// Apply one smoothing step to every interior (non-border) cell.
    ///
    /// Returns the number of cells that changed.
    pub fn step(&mut self) -> usize {
        self.step_rows(0..self.height)
    }

    /// Apply one smoothing step to the interior cells of rows `rows`.
    ///
    /// Cells outside the band keep their value but still count as
    /// neighbours. Border cells never change. Returns the number of cells
    /// that changed.
    pub fn step_rows(&mut self, rows: Range<u32>) -> usize {
        let y_lo = rows.start.max(1);
        let y_hi = rows.end.min(self.height.saturating_sub(1));
        let x_hi = self.width.saturating_sub(1);

        self.next.copy_from_slice(&self.cells);
        let mut changed = 0;
        for y in y_lo..y_hi {
            for x in 1..x_hi {
                let cell = if self.wall_neighbours(x, y) >= WALL_THRESHOLD {
                    CellType::Wall
                } else {
                    CellType::Open
                };
                let i = self.index(x, y);
                if self.cells[i] != cell {
                    changed += 1;
                }
                self.next[i] = cell;
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
        changed
    }
}

impl PartialEq for CellGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for CellGrid {}
