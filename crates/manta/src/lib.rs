//! Insertion-ordered adjacency-list graphs with traversal and cycle
//! analysis.
//!
//! [`Graph`] is the container: generic over the caller's node identifier
//! type, with an optional per-edge weight (`Graph<I>` is unweighted,
//! `Graph<I, W>` weighted). [`alg`] holds the read-only algorithms:
//! breadth- and depth-first traversal, directed and undirected cycle
//! detection, and simple-cycle enumeration.

pub mod alg;
mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Adjacency, EdgeKind, Graph, NodeId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
