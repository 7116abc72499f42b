//! Build the full recipe graph for a data set and write it out for viewing.
//!
//! This example demonstrates:
//! - Loading a catalog
//! - Populating and bulk-connecting every non-excluded recipe
//! - Exporting a Graphviz rendering and a session document
//!
//! Usage: `cargo run --example plan_graph -- path/to/data.json [out-dir]`

use recipegraph::{Catalog, GraphError, Planner};
use std::path::{Path, PathBuf};

fn main() -> recipegraph::Result<()> {
    let mut args = std::env::args().skip(1);
    let data = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/data.json"));
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    println!("Loading data from {}...", data.display());
    let catalog = Catalog::load(&data)?;
    println!(
        "✓ Loaded {} items and {} recipes",
        catalog.items().len(),
        catalog.recipes().len()
    );

    let mut planner = Planner::new(catalog);
    let added = planner.populate_from_catalog();
    println!("✓ Added {added} nodes");

    let graph = planner.graph();
    println!("\n--- Graph Statistics ---\n");
    println!("Total nodes: {}", graph.node_count());
    println!("Total edges: {}", graph.edge_count());
    println!("Production loops: {}", graph.find_production_loops()?.len());

    let dot_path = out_dir.join("recipes.dot");
    write_file(&dot_path, &graph.export_dot())?;
    println!("\n✓ Wrote {} (render with `dot -Tsvg`)", dot_path.display());

    let session_path = out_dir.join("session.json");
    write_file(&session_path, &planner.export_session_json()?)?;
    println!("✓ Wrote {}", session_path.display());

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> recipegraph::Result<()> {
    std::fs::write(path, contents).map_err(|e| GraphError::io(path, e))
}
