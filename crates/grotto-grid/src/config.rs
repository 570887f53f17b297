//! Cave generation parameters and their validation.

use grotto_core::{CellType, ConfigError};

/// Smallest grid width that fits a left wall, an entrance column, and a
/// right wall.
pub const MIN_WIDTH: u32 = 3;

/// What fills the rows above the cave surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaveVariant {
    /// Two-state grid: the sky is plain Open space.
    TwoState,
    /// The sky is marked [`CellType::OuterSpace`], which the automaton
    /// treats as non-Wall.
    #[default]
    OuterSpace,
}

impl CaveVariant {
    /// Cell type used for rows above the surface.
    pub fn sky(self) -> CellType {
        match self {
            Self::TwoState => CellType::Open,
            Self::OuterSpace => CellType::OuterSpace,
        }
    }
}

/// Complete configuration for generating one cave grid.
///
/// `validate()` checks every invariant before any grid is allocated, so an
/// invalid configuration never yields a partial grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CaveConfig {
    /// Grid columns. Minimum: 3.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// The cave surface row. Rows below it are cave, the row itself is
    /// solid apart from the entrance, rows above it are sky. Must be in
    /// `[1, height)`.
    pub wall_start_row: u32,
    /// Probability that a cave cell starts as Wall. Default: 0.45.
    pub fill_probability: f64,
    /// RNG seed for deterministic generation.
    pub seed: u64,
    /// Number of smoothing steps between initialization and the entrance
    /// carve. Default: 3.
    pub iterations: u32,
    /// Sky handling. Default: [`CaveVariant::OuterSpace`].
    pub variant: CaveVariant,
}

impl CaveConfig {
    /// Default fill probability for cave cells.
    pub const DEFAULT_FILL_PROBABILITY: f64 = 0.45;

    /// Default number of smoothing steps.
    pub const DEFAULT_ITERATIONS: u32 = 3;

    /// Configuration for a `width × height` grid with the surface a tenth of
    /// the height below the top row.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            wall_start_row: height.saturating_sub(height / 10).saturating_sub(1),
            fill_probability: Self::DEFAULT_FILL_PROBABILITY,
            seed: 0,
            iterations: Self::DEFAULT_ITERATIONS,
            variant: CaveVariant::default(),
        }
    }

    /// Set the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the Wall fill probability.
    pub fn fill_probability(mut self, p: f64) -> Self {
        self.fill_probability = p;
        self
    }

    /// Set the number of smoothing steps.
    pub fn iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Set the surface row.
    pub fn wall_start_row(mut self, row: u32) -> Self {
        self.wall_start_row = row;
        self
    }

    /// Set the sky variant.
    pub fn variant(mut self, variant: CaveVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Check all structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyGrid`] if either dimension is 0
    /// - [`ConfigError::GridTooNarrow`] if `width < 3`
    /// - [`ConfigError::InvalidWallStartRow`] unless `1 <= wall_start_row < height`
    /// - [`ConfigError::InvalidFillProbability`] unless the probability is in `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width < MIN_WIDTH {
            return Err(ConfigError::GridTooNarrow {
                width: self.width,
                min: MIN_WIDTH,
            });
        }
        if self.wall_start_row == 0 || self.wall_start_row >= self.height {
            return Err(ConfigError::InvalidWallStartRow {
                row: self.wall_start_row,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(ConfigError::InvalidFillProbability {
                value: self.fill_probability,
            });
        }
        Ok(())
    }
}

impl Default for CaveConfig {
    /// A 100×50 grid, matching the reference map layout.
    fn default() -> Self {
        Self::new(100, 50)
    }
}
