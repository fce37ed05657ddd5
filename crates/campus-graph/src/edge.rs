//! Edge types for the campus graph.
//!
//! An edge is one entry of a vertex's adjacency list. Edges are directed
//! as written; the source data is expected to list both directions.

use serde::{Deserialize, Serialize};

/// An adjacency entry in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Line that declared this adjacency, numbered within its source.
    pub line: usize,
}

impl Edge {
    /// Creates an edge declared on the given line.
    pub fn new(line: usize) -> Self {
        Self { line }
    }
}

/// A simplified edge for drawing and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub line: usize,
}
