use std::{cmp::Ordering, hash::Hash};

use hashbrown::HashMap;

use crate::sets::queue::Comparator;

/// Ranks open nodes by total cost `g(node) + h(node)`, lowest first.
///
/// The running costs `g` live here so that the open queue, which owns its comparator,
/// always compares with the latest known costs. Total costs are never stored, they are
/// recomputed on every comparison.
pub(crate) struct TotalCostOrder<'h, N, H> {
    running: HashMap<N, f64>,
    heuristic: &'h H,
}

impl<'h, N, H> TotalCostOrder<'h, N, H>
where
    N: Eq + Hash,
    H: Fn(&N) -> f64,
{
    pub(crate) fn new(heuristic: &'h H) -> Self {
        TotalCostOrder {
            running: HashMap::new(),
            heuristic,
        }
    }

    /// Best known cost from the start to `node`, `None` if it was never reached.
    pub(crate) fn running_cost(&self, node: &N) -> Option<f64> {
        self.running.get(node).copied()
    }

    /// Same as [`running_cost`](Self::running_cost), with unreached nodes infinitely far.
    pub(crate) fn cost_of(&self, node: &N) -> f64 {
        self.running_cost(node).unwrap_or(f64::INFINITY)
    }

    /// Records a new running cost for `node`, returning the previous one if any.
    pub(crate) fn set_running_cost(&mut self, node: N, cost: f64) -> Option<f64> {
        self.running.insert(node, cost)
    }

    fn total_cost(&self, node: &N) -> f64 {
        self.cost_of(node) + (self.heuristic)(node)
    }
}

impl<N, H> Comparator<N> for TotalCostOrder<'_, N, H>
where
    N: Eq + Hash,
    H: Fn(&N) -> f64,
{
    fn compare(&self, a: &N, b: &N) -> Ordering {
        // total_cmp keeps NaN totals ordered instead of panicking
        self.total_cost(b).total_cmp(&self.total_cost(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_total_cost_wins() {
        let heuristic = |node: &u32| f64::from(*node);
        let mut order = TotalCostOrder::new(&heuristic);
        order.set_running_cost(1, 5.0); // total 6
        order.set_running_cost(4, 1.0); // total 5

        assert_eq!(order.compare(&4, &1), Ordering::Greater);
        assert_eq!(order.compare(&1, &4), Ordering::Less);
        assert_eq!(order.compare(&1, &1), Ordering::Equal);
    }

    #[test]
    fn test_unreached_nodes_rank_last() {
        let heuristic = |_: &u32| 0.0;
        let mut order = TotalCostOrder::new(&heuristic);
        order.set_running_cost(0, 100.0);

        assert_eq!(order.running_cost(&9), None);
        assert_eq!(order.compare(&0, &9), Ordering::Greater);
    }

    #[test]
    fn test_overwrite_returns_previous() {
        let heuristic = |_: &u32| 0.0;
        let mut order = TotalCostOrder::new(&heuristic);
        assert_eq!(order.set_running_cost(3, 4.0), None);
        assert_eq!(order.set_running_cost(3, 2.0), Some(4.0));
        assert_eq!(order.cost_of(&3), 2.0);
    }
}
