//! Breadth-first path finding.
//!
//! The graph is unweighted, so the first time BFS discovers the end
//! vertex it has found a path with the fewest hops. When several such
//! paths exist, the one discovered first in adjacency-list order wins.

use crate::graph::{CampusGraph, VertexId};
use campus_core::Vertex;
use std::collections::{HashMap, VecDeque};

/// An ordered walk through the graph, start and end inclusive.
///
/// Holds handles only; resolve them through the graph that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath {
    hops: Vec<VertexId>,
}

impl GraphPath {
    /// The handles from start to end.
    pub fn ids(&self) -> &[VertexId] {
        &self.hops
    }

    /// Number of vertices on the path. Never zero.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Always false; a path holds at least its start vertex.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Number of edges walked.
    pub fn hop_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    pub fn start(&self) -> VertexId {
        self.hops[0]
    }

    pub fn end(&self) -> VertexId {
        self.hops[self.hops.len() - 1]
    }

    /// Resolves the path to vertices.
    pub fn vertices<'g>(&self, graph: &'g CampusGraph) -> Vec<&'g Vertex> {
        self.hops.iter().filter_map(|&id| graph.get(id)).collect()
    }

    /// Resolves the path to vertex names.
    pub fn names<'g>(&self, graph: &'g CampusGraph) -> Vec<&'g str> {
        self.vertices(graph).into_iter().map(|v| v.name.as_str()).collect()
    }
}

/// Finds the path with the fewest hops from `start` to `end`.
///
/// Returns `None` when `end` is unreachable from `start`, or when either
/// handle does not belong to `graph`. Asking for a path from a vertex to
/// itself yields the single-vertex path.
pub fn find_path(graph: &CampusGraph, start: VertexId, end: VertexId) -> Option<GraphPath> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }

    if start == end {
        return Some(GraphPath { hops: vec![start] });
    }

    let mut queue: VecDeque<VertexId> = VecDeque::new();
    queue.push_back(start);

    // Predecessor of every discovered vertex. The start vertex is the
    // root and never gets an entry.
    let mut backpointers: HashMap<VertexId, VertexId> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.adjacent(current) {
            if neighbor != start && !backpointers.contains_key(&neighbor) {
                backpointers.insert(neighbor, current);
                queue.push_back(neighbor);
            }

            if neighbor == end {
                return Some(backchain(&backpointers, start, end));
            }
        }
    }

    None
}

/// Walks backpointers from `end` to `start` and returns the path in
/// start-to-end order.
fn backchain(
    backpointers: &HashMap<VertexId, VertexId>,
    start: VertexId,
    end: VertexId,
) -> GraphPath {
    let mut hops = vec![end];
    let mut current = end;

    while current != start {
        match backpointers.get(&current) {
            Some(&previous) => {
                hops.push(previous);
                current = previous;
            }
            None => break,
        }
    }

    hops.reverse();
    GraphPath { hops }
}
