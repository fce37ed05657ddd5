//! CLI command implementations.

use crate::config::Config;
use campus_graph::{load_graph_file, CampusGraph, GraphPath, VertexId};
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads the project config and the graph it points at.
fn open(explicit: Option<&Path>) -> Result<(CampusGraph, Config)> {
    let project = std::env::current_dir()?;
    let config = Config::load_or_default(&project)?;
    let graph_path = config.graph_path(&project, explicit);

    debug!("Using graph file {}", graph_path.display());
    let graph = load_graph_file(&graph_path)
        .map_err(|e| format!("{}: {}", graph_path.display(), e))?;

    Ok((graph, config))
}

fn resolve(graph: &CampusGraph, name: &str) -> Result<VertexId> {
    Ok(graph
        .index_of(name)
        .ok_or_else(|| format!("unknown location \"{}\"", name))?)
}

/// Create a default config in a directory.
pub fn init(path: &Path) -> Result<()> {
    if Config::load(path)?.is_some() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    let config = Config::default();
    config.save(path)?;

    println!("{} Initialized campus map in {}", "✓".green(), path.display());
    println!(
        "  Graph file: {}",
        config.graph.display().to_string().cyan()
    );

    Ok(())
}

/// Show graph statistics.
pub fn info(graph_file: Option<&Path>) -> Result<()> {
    let (graph, _) = open(graph_file)?;
    let stats = graph.stats();

    println!("{}", "Campus Graph".cyan().bold());
    println!();
    println!("  {} {}", "Locations:".dimmed(), stats.vertex_count);
    println!("  {} {}", "Adjacencies:".dimmed(), stats.edge_count);

    let one_way = graph.asymmetric_edges();
    if one_way.is_empty() {
        println!("  {} every adjacency is listed both ways", "✓".green());
    } else {
        println!("\n{} {} one-way adjacencies:", "⚠".yellow(), one_way.len());
        for edge in one_way.iter().take(5) {
            println!(
                "  {} → {} {}",
                edge.source.red(),
                edge.target,
                format!("(line {})", edge.line).dimmed()
            );
        }
        if one_way.len() > 5 {
            println!("  ... and {} more", one_way.len() - 5);
        }
    }

    Ok(())
}

/// Describe a location.
pub fn show(graph_file: Option<&Path>, name: &str) -> Result<()> {
    let (graph, _) = open(graph_file)?;
    let id = resolve(&graph, name)?;

    if let Some(description) = graph.describe(id) {
        println!("{}", description);
    }

    Ok(())
}

/// Find the path with the fewest hops between two locations.
pub fn path(graph_file: Option<&Path>, from: &str, to: &str, json: bool) -> Result<()> {
    let (graph, _) = open(graph_file)?;
    let start = resolve(&graph, from)?;
    let end = resolve(&graph, to)?;

    let found = graph.find_path(start, end);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&path_json(&graph, from, to, found.as_ref()))?
        );
        return Ok(());
    }

    match found {
        Some(path) => {
            println!(
                "{} {} ({} hops)",
                "✓".green(),
                format_route(&graph, &path).cyan(),
                path.hop_count()
            );
        }
        None => {
            println!("{} No path from {} to {}", "✗".red(), from.bold(), to.bold());
        }
    }

    Ok(())
}

/// Find the location under a map point.
pub fn at(graph_file: Option<&Path>, x: i32, y: i32, radius: Option<i32>) -> Result<()> {
    let (graph, config) = open(graph_file)?;
    let radius = radius.unwrap_or(config.hit_radius);

    match graph.vertex_at(x, y, radius).and_then(|id| graph.get(id)) {
        Some(vertex) => println!("{}", vertex),
        None => println!("No location at ({}, {})", x, y),
    }

    Ok(())
}

/// Export the graph to JSON.
pub fn export(graph_file: Option<&Path>, output: &Path) -> Result<()> {
    let (graph, _) = open(graph_file)?;

    fs::write(output, serde_json::to_string_pretty(&export_json(&graph))?)?;
    println!("{} Exported to {}", "✓".green(), output.display());

    Ok(())
}

fn format_route(graph: &CampusGraph, path: &GraphPath) -> String {
    path.names(graph).join(" → ")
}

fn path_json(
    graph: &CampusGraph,
    from: &str,
    to: &str,
    path: Option<&GraphPath>,
) -> serde_json::Value {
    match path {
        Some(path) => serde_json::json!({
            "from": from,
            "to": to,
            "found": true,
            "hops": path.hop_count(),
            "path": path.vertices(graph),
        }),
        None => serde_json::json!({
            "from": from,
            "to": to,
            "found": false,
            "hops": null,
            "path": [],
        }),
    }
}

fn export_json(graph: &CampusGraph) -> serde_json::Value {
    let vertices: Vec<_> = graph.vertices().collect();

    serde_json::json!({
        "version": "1.0",
        "stats": {
            "vertexCount": graph.vertex_count(),
            "edgeCount": graph.edge_count()
        },
        "vertices": vertices,
        "edges": graph.export_edges()
    })
}
