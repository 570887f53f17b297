//! The map generation pipeline.

use std::collections::HashSet;
use std::time::Instant;

use grotto_core::{CellType, MapError, Point, RegionId, WorldBounds};
use grotto_grid::{Cave, CaveGenerator};
use grotto_region::{classify_all, Partitioner, Region};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::MapConfig;
use crate::metrics::GenerationMetrics;
use crate::model::MapModel;

/// Output of [`generate_map`].
#[derive(Debug)]
pub struct GeneratedMap {
    /// The classified, border-annotated model.
    pub model: MapModel,
    /// The cave grid the regions were classified against.
    pub cave: Cave,
    /// Timings and sizes for this run.
    pub metrics: GenerationMetrics,
}

/// Sample `count` distinct sites uniformly from `bounds`.
///
/// Deterministic for a given seed. Coincident draws are discarded and
/// redrawn.
pub fn sample_sites(bounds: &WorldBounds, count: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (min, max) = (bounds.min(), bounds.max());
    let mut seen = HashSet::with_capacity(count);
    let mut sites = Vec::with_capacity(count);
    while sites.len() < count {
        let p = Point::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y));
        if seen.insert(p) {
            sites.push(p);
        }
    }
    sites
}

fn micros(since: Instant) -> u64 {
    since.elapsed().as_micros() as u64
}

/// Generate a complete map.
///
/// Samples `config.region_count` sites, partitions them, builds one Wall
/// region per site, grows the cave, classifies every region by the grid
/// cell under its site, and builds the [`MapModel`] (adjacency plus
/// dividing borders).
///
/// # Errors
///
/// - [`MapError::Config`] if `config` fails validation (nothing is
///   generated)
/// - [`MapError::Partition`] if the partitioner fails or returns the wrong
///   number of polygons
/// - [`MapError::MalformedPolygon`] if a returned polygon is unusable
/// - [`MapError::InconsistentPartition`] if polygons overlap along a side
pub fn generate_map<P>(config: &MapConfig, partitioner: &P) -> Result<GeneratedMap, MapError>
where
    P: Partitioner + ?Sized,
{
    config.validate()?;
    let start = Instant::now();
    let mut metrics = GenerationMetrics::default();

    let t = Instant::now();
    let sites = sample_sites(&config.bounds, config.region_count, config.seed);
    metrics.sampling_us = micros(t);

    let t = Instant::now();
    let polygons = partitioner.partition(&sites)?;
    if polygons.len() != sites.len() {
        return Err(MapError::Partition {
            reason: format!(
                "partitioner returned {} polygons for {} sites",
                polygons.len(),
                sites.len()
            ),
        });
    }
    let mut regions = sites
        .iter()
        .zip(polygons)
        .enumerate()
        .map(|(i, (&site, polygon))| {
            // Fits: region_count was checked against u32 in validate().
            Region::new(RegionId(i as u32), site, polygon, CellType::Wall)
        })
        .collect::<Result<Vec<_>, _>>()?;
    metrics.partition_us = micros(t);
    log::debug!("partition: {} regions", regions.len());

    let t = Instant::now();
    let cave = CaveGenerator::new(config.cave.clone())?.generate()?;
    metrics.cave_us = micros(t);

    let t = Instant::now();
    classify_all(&mut regions, cave.grid(), &config.bounds);
    metrics.classify_us = micros(t);

    let t = Instant::now();
    let model = MapModel::from_regions(regions)?;
    metrics.topology_us = micros(t);

    metrics.region_count = model.len();
    metrics.edge_count = model.edge_index().edge_count();
    metrics.outer_edge_count = model.edge_index().outer_edges().count();
    metrics.border_count = model.borders().len();
    metrics.types = model.type_counts();
    metrics.total_us = micros(start);

    log::info!(
        "generated map: {} regions ({} wall, {} open, {} outer space), {} borders, {} outer edges in {} us",
        metrics.region_count,
        metrics.types.wall,
        metrics.types.open,
        metrics.types.outer_space,
        metrics.border_count,
        metrics.outer_edge_count,
        metrics.total_us
    );
    Ok(GeneratedMap {
        model,
        cave,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grotto_core::ConfigError;
    use grotto_grid::CaveConfig;
    use grotto_region::VoronoiPartitioner;

    fn bounds() -> WorldBounds {
        WorldBounds::centered(400.0, 200.0).unwrap()
    }

    fn small_config() -> MapConfig {
        MapConfig::new(bounds())
            .region_count(150)
            .cave(CaveConfig::new(40, 20))
            .seed(7)
    }

    /// Partitioner that drops the last polygon.
    struct ShortPartitioner(VoronoiPartitioner);

    impl Partitioner for ShortPartitioner {
        fn partition(&self, sites: &[Point]) -> Result<Vec<Vec<Point>>, MapError> {
            let mut cells = self.0.partition(sites)?;
            cells.pop();
            Ok(cells)
        }
    }

    // ── Site sampling ───────────────────────────────────────────

    #[test]
    fn sites_are_distinct_and_in_bounds() {
        let b = bounds();
        let sites = sample_sites(&b, 500, 3);
        assert_eq!(sites.len(), 500);
        assert!(sites.iter().all(|&p| b.contains(p)));
        let unique: HashSet<Point> = sites.iter().copied().collect();
        assert_eq!(unique.len(), 500);
    }

    #[test]
    fn sites_fill_widest_finite_bounds() {
        let b = WorldBounds::centered(f64::MAX, f64::MAX).unwrap();
        let sites = sample_sites(&b, 50, 9);
        assert_eq!(sites.len(), 50);
        assert!(sites.iter().all(|&p| b.contains(p)));
    }

    #[test]
    fn sites_are_seeded() {
        let b = bounds();
        assert_eq!(sample_sites(&b, 20, 1), sample_sites(&b, 20, 1));
        assert_ne!(sample_sites(&b, 20, 1), sample_sites(&b, 20, 2));
    }

    // ── Pipeline ────────────────────────────────────────────────

    #[test]
    fn generates_classified_map() {
        let config = small_config();
        let map = generate_map(&config, &VoronoiPartitioner::new(config.bounds)).unwrap();
        assert_eq!(map.model.len(), 150);
        assert_eq!(map.metrics.region_count, 150);
        assert_eq!(map.metrics.types.total(), 150);
        assert_eq!(map.metrics.border_count, map.model.borders().len());
        // Outer sides face the partition frame, well outside the world.
        assert!(map.metrics.outer_edge_count > 0);
        assert!(map.metrics.outer_edge_count < map.metrics.edge_count);
        for side in map.model.edge_index().outer_edges() {
            assert!(!config.bounds.contains(side.a()), "inner side {side:?}");
            assert!(!config.bounds.contains(side.b()), "inner side {side:?}");
        }
        // Every region carries the type of the grid cell under its site.
        for r in map.model.regions() {
            let (x, y) = grotto_region::grid_cell_for(r.site(), 40, 20, &config.bounds);
            assert_eq!(Some(r.cell_type()), map.cave.grid().get(x, y));
        }
    }

    #[test]
    fn invalid_config_generates_nothing() {
        let config = small_config().region_count(0);
        let err = generate_map(&config, &VoronoiPartitioner::new(config.bounds)).unwrap_err();
        assert_eq!(err, MapError::Config(ConfigError::NoRegions));
    }

    #[test]
    fn short_partition_is_rejected() {
        let config = small_config();
        let p = ShortPartitioner(VoronoiPartitioner::new(config.bounds));
        assert!(matches!(
            generate_map(&config, &p),
            Err(MapError::Partition { .. })
        ));
    }

    #[test]
    fn works_through_trait_object() {
        let config = small_config().region_count(10);
        let p: Box<dyn Partitioner> = Box::new(VoronoiPartitioner::new(config.bounds));
        assert_eq!(generate_map(&config, p.as_ref()).unwrap().model.len(), 10);
    }
}
