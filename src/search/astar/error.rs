use thiserror::Error;

/// Why a search finished without producing a path.
///
/// The two variants carry different information and must not be conflated:
/// [`SearchError::BudgetExhausted`] only says the search was cut short, while
/// [`SearchError::Unreachable`] says every node reachable within the cost bound was
/// expanded without meeting a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The expansion counter reached `max_depth` before a goal was popped.
    #[error("search budget of {limit} expansions exhausted before reaching a goal")]
    BudgetExhausted { limit: usize },

    /// The open set ran dry without ever popping a goal node.
    #[error("no goal reachable from the start node ({expanded} nodes expanded)")]
    Unreachable { expanded: usize },
}

impl SearchError {
    /// Number of nodes expanded before the search gave up.
    pub fn expanded(&self) -> usize {
        match *self {
            SearchError::BudgetExhausted { limit } => limit.saturating_sub(1),
            SearchError::Unreachable { expanded } => expanded,
        }
    }
}
