//! Map generation configuration.

use grotto_core::{ConfigError, WorldBounds};
use grotto_grid::CaveConfig;

/// Everything [`generate_map`](crate::generate_map) needs.
///
/// `seed` drives site sampling; `cave.seed` drives the automaton. The
/// [`seed`](Self::seed) setter sets both.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    /// World rectangle that sites are sampled from and the cave grid is
    /// stretched over.
    pub bounds: WorldBounds,
    /// Number of regions (sites). Default: 2000.
    pub region_count: usize,
    /// Cave grid parameters. Default: [`CaveConfig::default()`].
    pub cave: CaveConfig,
    /// RNG seed for site sampling.
    pub seed: u64,
}

impl MapConfig {
    /// Default number of regions.
    pub const DEFAULT_REGION_COUNT: usize = 2000;

    /// Configuration over `bounds` with default region count and cave.
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            region_count: Self::DEFAULT_REGION_COUNT,
            cave: CaveConfig::default(),
            seed: 0,
        }
    }

    /// Set the number of regions.
    pub fn region_count(mut self, n: usize) -> Self {
        self.region_count = n;
        self
    }

    /// Replace the cave configuration.
    pub fn cave(mut self, cave: CaveConfig) -> Self {
        self.cave = cave;
        self
    }

    /// Seed both site sampling and the cave automaton.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.cave.seed = seed;
        self
    }

    /// Check all structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoRegions`] if `region_count` is 0 or does not fit
    ///   a region ID
    /// - any error from [`CaveConfig::validate`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region_count == 0 || u32::try_from(self.region_count).is_err() {
            return Err(ConfigError::NoRegions);
        }
        self.cave.validate()
    }
}
