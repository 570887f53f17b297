//! Benchmark profiles for the Grotto cave map generator.
//!
//! - [`reference_profile`]: 2000 regions over a 100x50 cave grid
//! - [`stress_profile`]: 10K regions over a 400x200 cave grid
//! - [`reference_map`]: a generated reference map, ready for edit benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use grotto_core::{ConfigError, MapError, WorldBounds};
use grotto_grid::CaveConfig;
use grotto_map::{generate_map, GeneratedMap, MapConfig};
use grotto_region::VoronoiPartitioner;

/// Screen-sized world shared by all profiles.
pub fn world_bounds() -> Result<WorldBounds, ConfigError> {
    WorldBounds::centered(800.0, 480.0)
}

/// Reference profile: 2000 regions, 100x50 grid, 3 smoothing steps.
pub fn reference_profile(seed: u64) -> Result<MapConfig, ConfigError> {
    Ok(MapConfig::new(world_bounds()?).seed(seed))
}

/// Stress profile: 10K regions over a 400x200 grid.
pub fn stress_profile(seed: u64) -> Result<MapConfig, ConfigError> {
    Ok(MapConfig::new(world_bounds()?)
        .region_count(10_000)
        .cave(CaveConfig::new(400, 200))
        .seed(seed))
}

/// Generate the reference map with the Voronoi partitioner.
pub fn reference_map(seed: u64) -> Result<GeneratedMap, MapError> {
    let config = reference_profile(seed)?;
    generate_map(&config, &VoronoiPartitioner::new(config.bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert!(reference_profile(0).unwrap().validate().is_ok());
        assert!(stress_profile(0).unwrap().validate().is_ok());
        assert_eq!(reference_profile(0).unwrap().region_count, 2000);
    }
}
