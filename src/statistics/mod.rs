//! Performance statistics tracking for path searches.
//!
//! This module provides a counter object that a search can fill in while it runs:
//! nodes expanded, edges considered, nodes opened and cost improvements.

mod stats;
pub use stats::*;
