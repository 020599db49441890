//! A* shortest-path search over caller-supplied, lazily expanded graphs.
//!
//! The goal is implicit: any node whose heuristic is `<= 0` ends the search. Running
//! costs, parent links and the closed set are created per call and dropped on return.

mod cost_order;
mod error;
mod finder;
mod neighbors;
mod options;
mod path;
mod search;

pub use error::*;
pub use finder::*;
pub use neighbors::*;
pub use options::*;
pub use path::*;
pub use search::*;
