use serde::{Deserialize, Serialize};

/// Limits applied to a single A* search.
///
/// Both limits are optional. A value of `0` is treated exactly like an absent one,
/// meaning unlimited, so option files written with zeroed fields keep working.
///
/// # Fields
/// - `max_depth`: hard cap on the number of node expansions. The node whose pop makes
///   the counter reach the cap is not expanded and the search fails with
///   [`SearchError::BudgetExhausted`](crate::search::SearchError::BudgetExhausted).
/// - `max_cost`: any node whose running cost would exceed this bound is never opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    #[serde(alias = "maxDepth")]
    pub max_depth: Option<usize>,

    #[serde(alias = "maxCost")]
    pub max_cost: Option<f64>,
}

impl SearchOptions {
    /// Options with neither limit set.
    pub fn new() -> Self {
        SearchOptions::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// The effective expansion cap, `None` when unlimited.
    pub fn depth_limit(&self) -> Option<usize> {
        self.max_depth.filter(|&depth| depth != 0)
    }

    /// The effective running-cost bound, `None` when unlimited.
    ///
    /// NaN counts as unset, like zero.
    pub fn cost_limit(&self) -> Option<f64> {
        self.max_cost.filter(|&cost| cost != 0.0 && !cost.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let options = SearchOptions::new();
        assert_eq!(options.depth_limit(), None);
        assert_eq!(options.cost_limit(), None);
    }

    #[test]
    fn test_zero_means_unlimited() {
        let options = SearchOptions::new().with_max_depth(0).with_max_cost(0.0);
        assert_eq!(options.depth_limit(), None);
        assert_eq!(options.cost_limit(), None);
        assert_eq!(SearchOptions::new().with_max_cost(f64::NAN).cost_limit(), None);
    }

    #[test]
    fn test_builder_sets_limits() {
        let options = SearchOptions::new().with_max_depth(12).with_max_cost(3.5);
        assert_eq!(options.depth_limit(), Some(12));
        assert_eq!(options.cost_limit(), Some(3.5));
    }

    #[test]
    fn test_deserialize_both_spellings() {
        let snake: SearchOptions =
            serde_json::from_str(r#"{"max_depth": 10, "max_cost": 2.5}"#).unwrap();
        let camel: SearchOptions =
            serde_json::from_str(r#"{"maxDepth": 10, "maxCost": 2.5}"#).unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.depth_limit(), Some(10));

        let empty: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SearchOptions::default());
    }
}
