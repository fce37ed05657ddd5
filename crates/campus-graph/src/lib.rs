//! Campus Graph - Locations and the paths between them
//!
//! This crate loads a campus map graph from its text source and finds the
//! path with the fewest hops between two locations.
//!
//! # Architecture
//!
//! Vertices live in a petgraph arena and are addressed by [`VertexId`]
//! handles. A name index maps location names to handles. Path finding
//! compares handles, never names.
//!
//! # Example
//!
//! ```
//! use campus_graph::load_graph;
//!
//! let graph = load_graph("A;B;0,0\nB;A,C;10,0\nC;B;20,0").unwrap();
//! let a = graph.index_of("A").unwrap();
//! let c = graph.index_of("C").unwrap();
//!
//! let path = graph.find_path(a, c).unwrap();
//! assert_eq!(path.names(&graph), vec!["A", "B", "C"]);
//! ```

mod builder;
mod edge;
mod graph;
mod search;

pub use builder::{load_graph, load_graph_file, GraphBuilder};
pub use campus_core::{LoadError, Position, Vertex};
pub use edge::{Edge, GraphEdge};
pub use graph::{CampusGraph, GraphStats, VertexId, DEFAULT_HIT_RADIUS};
pub use search::{find_path, GraphPath};
