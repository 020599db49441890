//! Path search over graphs.
//!
//! [`astar`] holds the generic search, which only sees nodes through caller-supplied
//! functions. [`AdjacencyGraph`] is a concrete in-memory graph that plugs into it.

pub mod astar;

mod adjacency_graph;
mod node;

pub use adjacency_graph::*;
pub use astar::{
    Neighbors, Path, PathFinder, SearchError, SearchOptions, a_star, a_star_with_stats,
};
pub use node::*;
