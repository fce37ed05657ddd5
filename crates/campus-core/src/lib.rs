//! Campus Core - Vertex model and source parsing
//!
//! This crate defines the named, positioned locations that make up a
//! campus map and parses the line-oriented text format they are stored in:
//!
//! ```text
//! name;adjacent1,adjacent2;x,y
//! ```
//!
//! Resolving adjacency names into a connected graph happens one layer up,
//! in `campus-graph`.
//!
//! # Example
//!
//! ```
//! use campus_core::parse_record;
//!
//! let record = parse_record("Library; Green, Gym ; 120, 45", 1).unwrap().unwrap();
//! assert_eq!(record.name, "Library");
//! assert_eq!(record.adjacent, vec!["Green", "Gym"]);
//! assert_eq!((record.position.x, record.position.y), (120, 45));
//! ```

mod error;
mod record;
mod vertex;

pub use error::{LoadError, Result};
pub use record::{parse_record, parse_source, Record};
pub use vertex::{Position, Vertex};
