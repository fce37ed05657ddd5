//! Graph builder for constructing the campus graph from its source text.
//!
//! Adjacency lists may name vertices defined further down the file, so
//! loading takes two passes:
//! 1. Add every vertex to the graph
//! 2. Resolve adjacency names into edges

use crate::edge::Edge;
use crate::graph::CampusGraph;
use campus_core::{parse_source, LoadError, Record, Result, Vertex};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Builds a CampusGraph from graph source records.
pub struct GraphBuilder {
    graph: CampusGraph,
    /// Records kept for the second pass.
    records: Vec<Record>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            graph: CampusGraph::new(),
            records: Vec::new(),
        }
    }

    /// Parses a source and adds its vertices to the graph.
    ///
    /// Nothing is added if any line is malformed. Line numbers restart at 1
    /// for every source, so edge and error lines are relative to the source
    /// that declared them.
    pub fn add_source(&mut self, source: &str) -> Result<()> {
        let records = parse_source(source)?;
        self.add_records(records);
        Ok(())
    }

    /// Adds vertices for parsed records.
    ///
    /// A name seen before replaces the earlier vertex's position; both
    /// records' adjacency lists end up on the surviving vertex.
    pub fn add_records(&mut self, records: Vec<Record>) {
        for record in records {
            if self.graph.index_of(&record.name).is_some() {
                warn!(
                    "Line {}: vertex \"{}\" is defined again, later definition wins",
                    record.line, record.name
                );
            }

            let vertex = Vertex {
                name: record.name.clone(),
                position: record.position,
            };
            self.graph.add_vertex(vertex);
            self.records.push(record);
        }
    }

    /// Resolves adjacency names into edges.
    ///
    /// This is the second pass after all vertices are added. Every name
    /// must resolve; the first one that does not aborts the build.
    fn resolve_edges(&mut self) -> Result<()> {
        for record in &self.records {
            let Some(from) = self.graph.index_of(&record.name) else {
                continue;
            };

            for name in &record.adjacent {
                let to = self
                    .graph
                    .index_of(name)
                    .ok_or_else(|| LoadError::UndefinedVertex {
                        line: record.line,
                        name: name.clone(),
                    })?;
                self.graph.add_edge(from, to, Edge::new(record.line));
            }
        }
        Ok(())
    }

    /// Finishes building and returns the graph.
    pub fn build(mut self) -> Result<CampusGraph> {
        self.resolve_edges()?;
        debug!(
            "Loaded campus graph: {} vertices, {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        Ok(self.graph)
    }
}

/// Loads a graph from source text.
pub fn load_graph(source: &str) -> Result<CampusGraph> {
    let mut builder = GraphBuilder::new();
    builder.add_source(source)?;
    builder.build()
}

/// Loads a graph from a file.
pub fn load_graph_file(path: impl AsRef<Path>) -> Result<CampusGraph> {
    let path = path.as_ref();
    debug!("Reading campus graph from {}", path.display());
    let source = fs::read_to_string(path)?;
    load_graph(&source)
}
