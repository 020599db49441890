//! Specialized data structures for graph search operations.
//!
//! # Submodules
//!
//! - [`queue`]: Comparator-driven binary heap used as the open set
//! - [`visited`]: Closed-set tracking keyed by caller-defined node identity

pub mod queue;
pub mod visited;
