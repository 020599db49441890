use thiserror::Error;

/// Errors raised while reading graphs or options from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Two node records share the same id.
    #[error("node {id} is declared more than once")]
    DuplicateNode { id: usize },

    /// Node ids must cover `0..n` without gaps.
    #[error("node ids must be contiguous from 0, node {id} is missing")]
    MissingNode { id: usize },

    /// An edge references a node id that was never declared.
    #[error("edge {from} -> {to} references unknown node {id}")]
    UnknownNode { from: usize, to: usize, id: usize },

    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidCost { from: usize, to: usize, cost: f64 },
}
