//! Vertex type for the campus graph.
//!
//! A vertex is a named location with a fixed position on the map image.
//! Its adjacency lives in the owning graph, not on the vertex itself.

use serde::{Deserialize, Serialize};

/// A pixel coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `(x, y)` lies inside the square of half-width `radius`
    /// centred on this position. Edges count as inside; a negative
    /// radius contains nothing.
    pub fn contains(&self, x: i32, y: i32, radius: i32) -> bool {
        if radius < 0 {
            return false;
        }
        let radius = i64::from(radius);
        (i64::from(x) - i64::from(self.x)).abs() <= radius
            && (i64::from(y) - i64::from(self.y)).abs() <= radius
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// A named location on the campus map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique name, also the lookup key in the graph.
    pub name: String,

    /// Where the vertex is drawn.
    pub position: Position,
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
        }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
