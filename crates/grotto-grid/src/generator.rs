//! One-call cave generation.

use crate::automaton::CaveAutomaton;
use crate::config::CaveConfig;
use crate::error::GridError;
use crate::grid::CellGrid;
use grotto_core::CellType;
use log::debug;

/// A finished cave: the smoothed grid plus where its entrance is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cave {
    grid: CellGrid,
    entrance_x: u32,
    wall_start_row: u32,
    iterations: u32,
}

impl Cave {
    /// The finished grid.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Entrance column on the surface row.
    pub fn entrance_x(&self) -> u32 {
        self.entrance_x
    }

    /// The surface row.
    pub fn wall_start_row(&self) -> u32 {
        self.wall_start_row
    }

    /// Number of smoothing steps that were applied.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Reset the grid to all Open, as after loading a map whose regions
    /// no longer come from this cave.
    pub fn clear(&mut self) {
        self.grid.clear();
    }
}

/// Drives a [`CaveAutomaton`] through its full lifecycle.
///
/// # Example
///
/// ```
/// use grotto_grid::{CaveConfig, CaveGenerator};
///
/// let cave = CaveGenerator::new(CaveConfig::new(40, 20).seed(7))
///     .unwrap()
///     .generate()
///     .unwrap();
/// assert_eq!(cave.grid().width(), 40);
/// assert_eq!(cave.iterations(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CaveGenerator {
    config: CaveConfig,
}

impl CaveGenerator {
    /// Validate `config` up front so `generate` only fails on internal
    /// errors.
    pub fn new(config: CaveConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The generator's configuration.
    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Initialize, smooth `config.iterations` times, and carve the entrance.
    pub fn generate(&self) -> Result<Cave, GridError> {
        let mut automaton = CaveAutomaton::new(self.config.clone())?;
        automaton.run(self.config.iterations)?;
        let (grid, entrance_x, iterations) = automaton.into_parts()?;
        debug!(
            "cave generated: seed {}, {} iterations, {} open / {} wall cells",
            self.config.seed,
            iterations,
            grid.count(CellType::Open),
            grid.count(CellType::Wall)
        );
        Ok(Cave {
            grid,
            entrance_x,
            wall_start_row: self.config.wall_start_row,
            iterations,
        })
    }
}
