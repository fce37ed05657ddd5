//! Core graph data structure.
//!
//! The CampusGraph wraps petgraph and adds a name index. Vertices are
//! created by the loader only; once built, the graph is read-only.

use crate::edge::{Edge, GraphEdge};
use crate::search::{self, GraphPath};
use campus_core::Vertex;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Handle to a vertex in a [`CampusGraph`].
///
/// Handles are only meaningful for the graph that issued them.
pub type VertexId = NodeIndex;

/// Half-width of the square around a vertex that counts as a hit.
pub const DEFAULT_HIT_RADIUS: i32 = 9;

/// The campus map graph.
#[derive(Debug, Default)]
pub struct CampusGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<Vertex, Edge>,

    /// Maps vertex names to handles.
    name_index: HashMap<String, VertexId>,
}

impl CampusGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex, or replaces the vertex already registered under the
    /// same name. A replaced vertex keeps its handle and its edges.
    pub(crate) fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        if let Some(&id) = self.name_index.get(&vertex.name) {
            if let Some(slot) = self.graph.node_weight_mut(id) {
                *slot = vertex;
            }
            return id;
        }

        let name = vertex.name.clone();
        let id = self.graph.add_node(vertex);
        self.name_index.insert(name, id);
        id
    }

    /// Appends `to` to the adjacency list of `from`.
    pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId, edge: Edge) {
        self.graph.add_edge(from, to, edge);
    }

    /// Gets a vertex by handle.
    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.graph.node_weight(id)
    }

    /// Gets a vertex by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Vertex> {
        self.index_of(name).and_then(|id| self.get(id))
    }

    /// Gets the handle registered for a name.
    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.name_index.get(name).copied()
    }

    /// Whether the handle belongs to this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.graph.node_count()
    }

    /// Adjacent vertices in adjacency-list order.
    pub fn adjacent(&self, id: VertexId) -> Vec<VertexId> {
        if !self.contains(id) {
            return Vec::new();
        }
        // petgraph yields the most recently added edge first
        let mut neighbors: Vec<VertexId> = self.graph.neighbors(id).collect();
        neighbors.reverse();
        neighbors
    }

    /// Finds the vertex drawn under the point `(x, y)`.
    ///
    /// When hit boxes overlap, the vertex loaded last wins since it is
    /// drawn on top.
    pub fn vertex_at(&self, x: i32, y: i32, radius: i32) -> Option<VertexId> {
        self.graph
            .node_indices()
            .filter(|&id| self.graph[id].position.contains(x, y, radius))
            .last()
    }

    /// Describes a vertex with its location and adjacent names.
    ///
    /// `Baker; Location: 10, 20; Adjacent vertices: Sanborn, Collis`
    pub fn describe(&self, id: VertexId) -> Option<String> {
        let vertex = self.get(id)?;
        let adjacent: Vec<&str> = self
            .adjacent(id)
            .into_iter()
            .filter_map(|n| self.get(n))
            .map(|v| v.name.as_str())
            .collect();

        Some(format!(
            "{}; Location: {}; Adjacent vertices: {}",
            vertex.name,
            vertex.position,
            adjacent.join(", ")
        ))
    }

    /// Finds the path with the fewest hops from `start` to `end`.
    ///
    /// See [`search::find_path`].
    pub fn find_path(&self, start: VertexId, end: VertexId) -> Option<GraphPath> {
        search::find_path(self, start, end)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all vertices in load order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.graph.node_weights()
    }

    /// Iterates over all vertex handles in load order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.node_indices()
    }

    /// Returns all edges with source and target names, in load order.
    pub fn export_edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .map(|edge_ref| GraphEdge {
                source: self.graph[edge_ref.source()].name.clone(),
                target: self.graph[edge_ref.target()].name.clone(),
                line: edge_ref.weight().line,
            })
            .collect()
    }

    /// Edges whose reverse direction is not listed.
    ///
    /// Map data is expected to be symmetric; this reports where it is not.
    pub fn asymmetric_edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .filter(|edge_ref| {
                self.graph
                    .find_edge(edge_ref.target(), edge_ref.source())
                    .is_none()
            })
            .map(|edge_ref| GraphEdge {
                source: self.graph[edge_ref.source()].name.clone(),
                target: self.graph[edge_ref.target()].name.clone(),
                line: edge_ref.weight().line,
            })
            .collect()
    }
}

/// Graph statistics for the info command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub asymmetric_edges: usize,
}

impl CampusGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            asymmetric_edges: self.asymmetric_edges().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::load_graph;

    const TRIANGLE: &str = "A;B,C;0,0\nB;A;30,0\nC;A;30,30\n";

    #[test]
    fn test_adjacent_keeps_file_order() {
        let graph = load_graph("Hub;D,B,C,A;0,0\nA;Hub;1,1\nB;Hub;2,2\nC;Hub;3,3\nD;Hub;4,4").unwrap();
        let hub = graph.index_of("Hub").unwrap();
        let names: Vec<&str> = graph
            .adjacent(hub)
            .into_iter()
            .map(|id| graph.get(id).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn test_lookup_by_name() {
        let graph = load_graph(TRIANGLE).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);

        let b = graph.get_by_name("B").unwrap();
        assert_eq!((b.position.x, b.position.y), (30, 0));
        assert!(graph.get_by_name("Z").is_none());
        assert!(graph.index_of("Z").is_none());
    }

    #[test]
    fn test_foreign_handle() {
        let graph = load_graph(TRIANGLE).unwrap();
        let foreign = VertexId::new(42);
        assert!(!graph.contains(foreign));
        assert!(graph.get(foreign).is_none());
        assert!(graph.adjacent(foreign).is_empty());
        assert!(graph.describe(foreign).is_none());
    }

    #[test]
    fn test_vertex_at() {
        let graph = load_graph(TRIANGLE).unwrap();
        let a = graph.index_of("A").unwrap();
        let c = graph.index_of("C").unwrap();

        assert_eq!(graph.vertex_at(5, -5, DEFAULT_HIT_RADIUS), Some(a));
        assert_eq!(graph.vertex_at(39, 39, DEFAULT_HIT_RADIUS), Some(c));
        assert_eq!(graph.vertex_at(15, 15, DEFAULT_HIT_RADIUS), None);
    }

    #[test]
    fn test_vertex_at_coordinate_limits() {
        let graph = load_graph("Edge;;2147483647,0\nCorner;;-2147483648,-2147483648").unwrap();
        let edge = graph.index_of("Edge").unwrap();
        let corner = graph.index_of("Corner").unwrap();

        assert_eq!(graph.vertex_at(i32::MAX, 0, DEFAULT_HIT_RADIUS), Some(edge));
        assert_eq!(graph.vertex_at(i32::MIN, i32::MIN + 3, DEFAULT_HIT_RADIUS), Some(corner));
        assert_eq!(graph.vertex_at(i32::MAX, 0, -1), None);
    }

    #[test]
    fn test_vertex_at_prefers_last_loaded() {
        let graph = load_graph("Under;;0,0\nOver;;4,4").unwrap();
        let over = graph.index_of("Over").unwrap();
        assert_eq!(graph.vertex_at(2, 2, DEFAULT_HIT_RADIUS), Some(over));
    }

    #[test]
    fn test_describe() {
        let graph = load_graph(TRIANGLE).unwrap();
        let a = graph.index_of("A").unwrap();
        assert_eq!(
            graph.describe(a).unwrap(),
            "A; Location: 0, 0; Adjacent vertices: B, C"
        );

        let lonely = load_graph("Lonely;;5,6").unwrap();
        let id = lonely.index_of("Lonely").unwrap();
        assert_eq!(
            lonely.describe(id).unwrap(),
            "Lonely; Location: 5, 6; Adjacent vertices: "
        );
    }

    #[test]
    fn test_export_edges() {
        let graph = load_graph(TRIANGLE).unwrap();
        let edges = graph.export_edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].source, "A");
        assert_eq!(edges[0].target, "B");
        assert_eq!(edges[0].line, 1);
        assert_eq!(edges[3].source, "C");
        assert_eq!(edges[3].line, 3);
    }

    #[test]
    fn test_stats_reports_asymmetry() {
        let symmetric = load_graph(TRIANGLE).unwrap();
        assert_eq!(symmetric.stats().asymmetric_edges, 0);

        let one_way = load_graph("A;B;0,0\nB;;1,1").unwrap();
        let stats = one_way.stats();
        assert_eq!(stats.vertex_count, 2);
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.asymmetric_edges, 1);
        assert_eq!(one_way.asymmetric_edges()[0].source, "A");
    }
}
