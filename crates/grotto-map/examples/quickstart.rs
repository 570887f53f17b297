//! Grotto Quickstart: generate a cave map and edit it.
//!
//! Demonstrates:
//!   1. Building a MapConfig over a screen-sized world
//!   2. Generating the map with the Voronoi partitioner
//!   3. Printing the cave grid
//!   4. Toggling a region, dragging a stroke, and committing the edit
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use grotto_core::{CellType, MapError, Point, WorldBounds};
use grotto_grid::CaveConfig;
use grotto_map::{generate_map, MapConfig};
use grotto_region::VoronoiPartitioner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ─── Generate ───────────────────────────────────────────────

    let bounds = WorldBounds::centered(800.0, 480.0)?;
    let config = MapConfig::new(bounds)
        .region_count(1200)
        .cave(CaveConfig::new(80, 40))
        .seed(2024);
    let mut map = generate_map(&config, &VoronoiPartitioner::new(bounds))?;

    println!("cave ({}x{}):", map.cave.grid().width(), map.cave.grid().height());
    for y in (0..map.cave.grid().height()).rev() {
        let row: String = map
            .cave
            .grid()
            .row(y)
            .unwrap_or_default()
            .iter()
            .map(|c| match c {
                CellType::Wall => '#',
                CellType::Open => '.',
                CellType::OuterSpace => ' ',
            })
            .collect();
        println!("  {row}");
    }
    let m = &map.metrics;
    println!(
        "{} regions, {} edges, {} borders ({} us total, {} us partition)",
        m.region_count, m.edge_count, m.border_count, m.total_us, m.partition_us
    );

    // ─── Edit ───────────────────────────────────────────────────

    let model = &mut map.model;
    let id = model.toggle_at(Point::new(0.0, 0.0))?;
    if let Some(r) = model.region(id) {
        println!("toggled region {id} to {}", r.cell_type());
    }

    for i in 1..10 {
        let p = Point::new(i as f64 * 15.0, -(i as f64) * 10.0);
        match model.drag_to(p) {
            Ok(Some(hit)) => println!("  painted region {hit}"),
            Ok(None) => {}
            Err(MapError::PointNotContained { point }) => println!("  missed at {point}"),
            Err(e) => return Err(e.into()),
        }
    }
    let borders = model.commit_edit()?;
    println!("committed: {borders} borders");
    Ok(())
}
