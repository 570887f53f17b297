//! Integration test: the full generation pipeline.
//!
//! Verifies that generation is deterministic per seed, that the generated
//! topology is internally consistent (every site locates to its own region,
//! the adjacency index agrees with the streaming border extractor), and
//! that partitioner failures surface as typed errors.

use grotto_core::{CellType, MapError, WorldBounds};
use grotto_grid::CaveConfig;
use grotto_map::{generate_map, GeneratedMap, MapConfig};
use grotto_region::{extract_dividing_borders, VoronoiPartitioner};
use grotto_test_utils::{grid_to_ascii, FailingPartitioner, TilePartitioner};

fn config(seed: u64) -> MapConfig {
    MapConfig::new(WorldBounds::centered(800.0, 480.0).unwrap())
        .region_count(400)
        .cave(CaveConfig::new(60, 30))
        .seed(seed)
}

fn generate(seed: u64) -> GeneratedMap {
    let c = config(seed);
    generate_map(&c, &VoronoiPartitioner::new(c.bounds)).unwrap()
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn same_seed_same_map() {
    let a = generate(42);
    let b = generate(42);
    assert_eq!(a.cave, b.cave);
    assert_eq!(a.model.regions(), b.model.regions());
    assert!(a.model.borders().iter().eq(b.model.borders().iter()));
}

#[test]
fn different_seed_different_map() {
    let a = generate(1);
    let b = generate(2);
    assert_ne!(a.model.regions(), b.model.regions());
}

// ── Topology ────────────────────────────────────────────────────────

#[test]
fn every_site_locates_to_its_region() {
    let map = generate(5);
    for r in map.model.regions() {
        assert_eq!(map.model.locate(r.site()), Ok(r.id()), "site of {}", r.id());
    }
}

#[test]
fn edge_index_agrees_with_extractor() {
    let map = generate(9);
    let regions = map.model.regions();
    let from_index = map.model.edge_index().dividing_borders(regions);
    assert_eq!(&from_index, map.model.borders());
    assert_eq!(&extract_dividing_borders(regions).unwrap(), map.model.borders());
}

#[test]
fn borders_separate_differing_types_only() {
    let map = generate(11);
    let idx = map.model.edge_index();
    for border in map.model.borders() {
        let owners = idx.owners(border).unwrap();
        assert_eq!(owners.len(), 2);
        let a = map.model.region(owners[0]).unwrap().cell_type();
        let b = map.model.region(owners[1]).unwrap().cell_type();
        assert_ne!(a, b);
    }
}

#[test]
fn cave_layout_reaches_regions() {
    // With a sky above the surface, some regions must be outer space and
    // the cave below must produce some wall.
    let map = generate(3);
    let counts = map.model.type_counts();
    assert!(counts.outer_space > 0);
    assert!(counts.wall > 0);
    assert_eq!(counts.total(), 400);
    assert_eq!(map.metrics.types, counts);
}

#[test]
fn cave_surface_has_single_entrance() {
    let map = generate(3);
    let rows = grid_to_ascii(map.cave.grid());
    assert_eq!(rows.len(), 30);
    assert!(rows[0].chars().all(|c| c == '~'), "sky: {}", rows[0]);
    let surface = &rows[rows.len() - 1 - map.cave.wall_start_row() as usize];
    assert_eq!(surface.matches('.').count(), 1, "surface: {surface}");
    assert_eq!(surface.find('.'), Some(map.cave.entrance_x() as usize));
}

// ── Failures ────────────────────────────────────────────────────────

#[test]
fn partitioner_error_propagates() {
    let err = generate_map(&config(0), &FailingPartitioner).unwrap_err();
    assert!(matches!(err, MapError::Partition { .. }));
}

#[test]
fn overlapping_polygons_are_inconsistent() {
    // 400 sites in a 800×480 world snapped to 400-unit tiles: many share a
    // tile, so sides appear more than twice.
    let err = generate_map(&config(0), &TilePartitioner::new(400.0)).unwrap_err();
    assert!(matches!(err, MapError::InconsistentPartition { .. }));
}

#[test]
fn invalid_cave_rejected_before_partitioning() {
    let c = config(0).cave(CaveConfig::new(100, 50).fill_probability(1.5));
    // The failing partitioner is never reached.
    let err = generate_map(&c, &FailingPartitioner).unwrap_err();
    assert!(matches!(err, MapError::Config(_)));
}

#[test]
fn two_state_variant_has_no_outer_space() {
    let mut c = config(8);
    c.cave = c.cave.variant(grotto_grid::CaveVariant::TwoState);
    let map = generate_map(&c, &VoronoiPartitioner::new(c.bounds)).unwrap();
    assert_eq!(map.model.type_counts().outer_space, 0);
    assert_eq!(map.cave.grid().count(CellType::OuterSpace), 0);
}
