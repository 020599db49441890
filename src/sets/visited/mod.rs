//! Closed-set tracking for graph search.

mod hashset;
mod visitor_set;

pub use visitor_set::*;
