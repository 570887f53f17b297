//! Region classification from the cave grid.

use crate::region::Region;
use grotto_core::{CellType, Point, WorldBounds};
use grotto_grid::CellGrid;

/// Map a world-space site to the grid cell it falls in.
///
/// The world rectangle is scaled onto `width × height` cells; each
/// coordinate is floored and clamped into the grid, so sites on or beyond
/// the bounds land in the edge cells. A NaN coordinate maps to 0.
pub fn grid_cell_for(site: Point, width: u32, height: u32, bounds: &WorldBounds) -> (u32, u32) {
    let min = bounds.min();
    let gx = scale(site.x - min.x, bounds.width(), width);
    let gy = scale(site.y - min.y, bounds.height(), height);
    (gx, gy)
}

fn scale(offset: f64, extent: f64, cells: u32) -> u32 {
    let v = (offset / extent * cells as f64).floor();
    if v.is_nan() || v < 0.0 {
        0
    } else {
        (v as u32).min(cells.saturating_sub(1))
    }
}

/// Set `region`'s type to the grid cell under its site and return it.
pub fn classify(region: &mut Region, grid: &CellGrid, bounds: &WorldBounds) -> CellType {
    let (x, y) = grid_cell_for(region.site(), grid.width(), grid.height(), bounds);
    // Always in range after clamping.
    let t = grid.get(x, y).unwrap_or_default();
    region.set_cell_type(t);
    t
}

/// Classify every region against the same grid.
pub fn classify_all(regions: &mut [Region], grid: &CellGrid, bounds: &WorldBounds) {
    for region in regions.iter_mut() {
        classify(region, grid, bounds);
    }
    log::debug!(
        "classified {} regions against a {}x{} grid",
        regions.len(),
        grid.width(),
        grid.height()
    );
}
