//! Comparator-driven binary heap.
//!
//! [`PriorityQueue`] knows nothing about graphs: it stores opaque items and asks an
//! injected [`Comparator`] which of two items should sit nearer the root.

mod comparator;
mod priority_queue;

pub use comparator::*;
pub use priority_queue::*;
