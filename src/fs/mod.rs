//! File system I/O for loading graphs and search options.
//!
//! Graphs are stored as JSON [`GraphFile`]s; search options as JSON
//! [`SearchOptions`](crate::search::SearchOptions) records.

mod error;
mod graph_load;
mod options_load;

pub use error::*;
pub use graph_load::*;
