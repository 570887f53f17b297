//! The cave automaton: seeded noise, band smoothing, and the entrance carve.
//!
//! [`CaveAutomaton`] is an explicit state machine over one [`CellGrid`]:
//!
//! ```text
//! Uninitialized ──initialize──▶ Initialized ──step──▶ Stepped(1) ──step──▶ Stepped(n)
//!                                    │                       │
//!                                    └────────finish─────────┴──▶ Finished
//! ```
//!
//! Transitions requested from the wrong state return
//! [`GridError::InvalidTransition`].

use crate::config::CaveConfig;
use crate::error::GridError;
use crate::grid::CellGrid;
use grotto_core::CellType;
use log::debug;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Lifecycle position of a [`CaveAutomaton`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutomatonState {
    /// Grid allocated, nothing generated yet.
    Uninitialized,
    /// Noise, surface row, frame, and sky are in place.
    Initialized,
    /// This many smoothing steps have run.
    Stepped(u32),
    /// The entrance has been carved; the grid is final.
    Finished,
}

/// Cellular automaton that shapes one cave grid.
#[derive(Debug, Clone)]
pub struct CaveAutomaton {
    config: CaveConfig,
    grid: CellGrid,
    entrance_x: Option<u32>,
    state: AutomatonState,
}

impl CaveAutomaton {
    /// Validate `config` and allocate an all-Wall grid.
    pub fn new(config: CaveConfig) -> Result<Self, GridError> {
        config.validate()?;
        let grid = CellGrid::new(config.width, config.height, CellType::Wall)?;
        Ok(Self {
            config,
            grid,
            entrance_x: None,
            state: AutomatonState::Uninitialized,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AutomatonState {
        self.state
    }

    /// The configuration this automaton was built from.
    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Read-only view of the grid in its current state.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Entrance column, once initialized.
    pub fn entrance(&self) -> Option<u32> {
        self.entrance_x
    }

    /// Seed the grid.
    ///
    /// Cave cells (`y < wall_start_row`) become Wall with probability
    /// `fill_probability`. The surface row becomes Wall except for one
    /// random entrance column in `1..width-1`. The frame (left and right
    /// columns and the floor row, up to the surface) is forced to Wall, and
    /// rows above the surface become the variant's sky.
    pub fn initialize(&mut self) -> Result<(), GridError> {
        if self.state != AutomatonState::Uninitialized {
            return Err(GridError::InvalidTransition {
                from: self.state,
                op: "initialize",
            });
        }
        let CaveConfig {
            width,
            height,
            wall_start_row: surface,
            fill_probability,
            seed,
            variant,
            ..
        } = self.config;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for y in 0..surface {
            for x in 0..width {
                let cell = if rng.gen::<f64>() < fill_probability {
                    CellType::Wall
                } else {
                    CellType::Open
                };
                self.grid.set(x, y, cell)?;
            }
        }

        let entrance = rng.gen_range(1..width - 1);
        for x in 0..width {
            let cell = if x == entrance {
                CellType::Open
            } else {
                CellType::Wall
            };
            self.grid.set(x, surface, cell)?;
        }

        for y in 0..=surface {
            self.grid.set(0, y, CellType::Wall)?;
            self.grid.set(width - 1, y, CellType::Wall)?;
        }
        for x in 0..width {
            self.grid.set(x, 0, CellType::Wall)?;
        }

        let sky = variant.sky();
        for y in surface + 1..height {
            for x in 0..width {
                self.grid.set(x, y, sky)?;
            }
        }

        debug!(
            "cave initialized: {width}x{height}, surface row {surface}, entrance column {entrance}, {} walls",
            self.grid.count(CellType::Wall)
        );
        self.entrance_x = Some(entrance);
        self.state = AutomatonState::Initialized;
        Ok(())
    }

    /// Run one smoothing step over the cave band (rows `1..wall_start_row`,
    /// columns `1..width-1`). Returns the number of cells that changed.
    pub fn step(&mut self) -> Result<usize, GridError> {
        let done = match self.state {
            AutomatonState::Initialized => 0,
            AutomatonState::Stepped(n) => n,
            from => {
                return Err(GridError::InvalidTransition { from, op: "step" });
            }
        };
        let changed = self.grid.step_rows(1..self.config.wall_start_row);
        self.state = AutomatonState::Stepped(done + 1);
        debug!("cave step {}: {changed} cells changed", done + 1);
        Ok(changed)
    }

    /// Carve the entrance shaft.
    ///
    /// Starting one row below the entrance, walks down the entrance column
    /// turning Wall into Open until it reaches a non-Wall cell. The floor
    /// row is never carved. Returns the number of cells opened.
    pub fn finish(&mut self) -> Result<u32, GridError> {
        let entrance = match (self.state, self.entrance_x) {
            (AutomatonState::Initialized | AutomatonState::Stepped(_), Some(x)) => x,
            (from, _) => {
                return Err(GridError::InvalidTransition { from, op: "finish" });
            }
        };
        let mut carved = 0;
        for y in (1..self.config.wall_start_row).rev() {
            if self.grid.get(entrance, y) != Some(CellType::Wall) {
                break;
            }
            self.grid.set(entrance, y, CellType::Open)?;
            carved += 1;
        }
        debug!("cave entrance at column {entrance}: carved {carved} cells");
        self.state = AutomatonState::Finished;
        Ok(carved)
    }

    /// `initialize`, then `step` exactly `iterations` times, then `finish`.
    pub fn run(&mut self, iterations: u32) -> Result<(), GridError> {
        self.initialize()?;
        for _ in 0..iterations {
            self.step()?;
        }
        self.finish()?;
        Ok(())
    }

    /// Consume a finished automaton, returning the grid and entrance column.
    pub(crate) fn into_parts(self) -> Result<(CellGrid, u32, u32), GridError> {
        match (self.state, self.entrance_x) {
            (AutomatonState::Finished, Some(x)) => {
                let steps = self.config.iterations;
                Ok((self.grid, x, steps))
            }
            (from, _) => Err(GridError::InvalidTransition {
                from,
                op: "take the grid of",
            }),
        }
    }
}
