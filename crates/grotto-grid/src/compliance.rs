//! Cave layout compliance helpers.
//!
//! These functions check the structural invariants every generated cave
//! must satisfy, whatever the seed or number of smoothing steps. Reused by
//! the automaton and generator test modules.

use crate::config::CaveConfig;
use crate::grid::CellGrid;
use grotto_core::CellType;

/// Assert the left, right, and floor walls are intact up to the surface.
pub fn assert_frame(grid: &CellGrid, config: &CaveConfig) {
    for y in 0..=config.wall_start_row {
        assert_eq!(grid.get(0, y), Some(CellType::Wall), "left wall open at y={y}");
        assert_eq!(
            grid.get(config.width - 1, y),
            Some(CellType::Wall),
            "right wall open at y={y}"
        );
    }
    for x in 0..config.width {
        assert_eq!(grid.get(x, 0), Some(CellType::Wall), "floor open at x={x}");
    }
}

/// Assert the surface row is solid apart from the single entrance column.
pub fn assert_surface(grid: &CellGrid, config: &CaveConfig, entrance: u32) {
    assert!(
        entrance >= 1 && entrance < config.width - 1,
        "entrance column {entrance} is on the frame"
    );
    for x in 0..config.width {
        let expected = if x == entrance {
            CellType::Open
        } else {
            CellType::Wall
        };
        assert_eq!(
            grid.get(x, config.wall_start_row),
            Some(expected),
            "surface row wrong at x={x}"
        );
    }
}

/// Assert every row above the surface holds only the variant's sky.
pub fn assert_sky(grid: &CellGrid, config: &CaveConfig) {
    let sky = config.variant.sky();
    for y in config.wall_start_row + 1..config.height {
        let row = grid.row(y).expect("row in range");
        assert!(row.iter().all(|&c| c == sky), "row {y} is not all {sky}");
    }
}

/// Run all layout checks on a generated grid.
pub fn assert_layout(grid: &CellGrid, config: &CaveConfig, entrance: u32) {
    assert_eq!(grid.width(), config.width);
    assert_eq!(grid.height(), config.height);
    assert_frame(grid, config);
    assert_surface(grid, config, entrance);
    assert_sky(grid, config);
}
