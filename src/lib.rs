//! Best-first graph search: a comparator-driven binary heap and an A* path
//! finder built on top of it.
//!
//! The library never owns the searched graph. Callers hand in a start node, a
//! heuristic and a neighbor-expansion function; nodes are discovered lazily.
//! A small in-memory [`search::AdjacencyGraph`] and a JSON loader are shipped
//! for the `waypoint` binary and for tests.

pub mod fs;
pub mod search;
pub mod sets;
pub mod statistics;
