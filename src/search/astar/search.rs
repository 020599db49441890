use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::{
    search::astar::{Path, SearchError, SearchOptions, cost_order::TotalCostOrder},
    sets::{queue::PriorityQueue, visited::VisitorSet},
    statistics::Stats,
};

/// Finds the lowest-cost path from `start` to any node whose heuristic is `<= 0`.
///
/// Convenience wrapper around [`a_star_with_stats`] that discards the statistics.
pub fn a_star<N, H, G, I>(
    start: N,
    heuristic: H,
    neighbors: G,
    options: &SearchOptions,
) -> Result<Path<N>, SearchError>
where
    N: Clone + Eq + Hash,
    H: Fn(&N) -> f64,
    G: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, f64)>,
{
    a_star_with_stats(start, heuristic, neighbors, options, &mut Stats::new())
}

/// Best-first A* search over a graph that is only known through `neighbors`.
///
/// The open set is a [`PriorityQueue`] ranked by ascending `g(node) + heuristic(node)`.
/// Each iteration pops the cheapest open node and closes it. A popped node with
/// `heuristic(node) <= 0` is the goal. Otherwise the node is expanded: `neighbors` is
/// called exactly once for it and each returned `(node, edge_cost)` pair is relaxed
/// in the order given.
///
/// # Parameters
/// - `start`: seed of the open set, with a running cost of 0.
/// - `heuristic`: estimate of the remaining cost to a goal. Must not overestimate.
/// - `neighbors`: adjacent nodes with their non-negative traversal costs.
/// - `options`: optional expansion cap and running-cost bound.
/// - `stats`: counters updated while the search runs.
///
/// # Returns
/// The path from `start` to the first goal popped, or why none was produced.
///
/// # Preconditions
/// Closed nodes are never reopened and an open node whose running cost improves keeps
/// its current slot in the queue instead of being re-sorted. The returned path is
/// therefore only guaranteed optimal for a consistent heuristic, and even then open
/// nodes revisited at a lower cost may be popped later than their new total cost
/// warrants, so a longer path to the goal can be returned when the goal was queued
/// ahead of such a node. Negative edge costs are not supported.
pub fn a_star_with_stats<N, H, G, I>(
    start: N,
    heuristic: H,
    mut neighbors: G,
    options: &SearchOptions,
    stats: &mut Stats,
) -> Result<Path<N>, SearchError>
where
    N: Clone + Eq + Hash,
    H: Fn(&N) -> f64,
    G: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, f64)>,
{
    stats.bump_searches();
    let max_depth = options.depth_limit();
    let max_cost = options.cost_limit();
    tracing::debug!(?max_depth, ?max_cost, "starting A* search");

    let mut order = TotalCostOrder::new(&heuristic);
    order.set_running_cost(start.clone(), 0.0);
    let mut open = PriorityQueue::new(order);
    open.push(start);

    let mut closed: HashSet<N> = HashSet::new();
    let mut parents: HashMap<N, N> = HashMap::new();
    let mut expanded = 0;

    let goal = loop {
        let Some(current) = open.pop() else {
            tracing::debug!(expanded, "open set exhausted without reaching a goal");
            return Err(SearchError::Unreachable { expanded });
        };
        closed.mark_visited(current.clone());

        if heuristic(&current) <= 0.0 {
            break current;
        }

        // the node that hits the cap is popped and closed, but never expanded
        expanded += 1;
        if let Some(limit) = max_depth.filter(|&limit| expanded >= limit) {
            tracing::debug!(limit, "expansion budget exhausted");
            return Err(SearchError::BudgetExhausted { limit });
        }
        stats.bump_expansions();

        let current_cost = open.comparator().cost_of(&current);
        let mut considered = 0;
        for (neighbor, edge_cost) in neighbors(&current) {
            considered += 1;

            if closed.was_visited(&neighbor) {
                continue;
            }

            let candidate_cost = current_cost + edge_cost;
            if open
                .comparator()
                .running_cost(&neighbor)
                .is_some_and(|known| candidate_cost >= known)
            {
                continue;
            }
            if max_cost.is_some_and(|limit| candidate_cost > limit) {
                continue;
            }

            open.comparator_mut()
                .set_running_cost(neighbor.clone(), candidate_cost);
            parents.insert(neighbor.clone(), current.clone());

            // already-open nodes keep their slot, see the preconditions above
            if open.contains(&neighbor) {
                stats.bump_improvements();
            } else {
                open.push(neighbor);
                stats.bump_opened();
            }
        }
        stats.bump_edges(considered);

        tracing::trace!(expanded, considered, open = open.len(), "expanded node");
    };

    let cost = open.comparator().cost_of(&goal);
    let mut nodes = vec![goal.clone()];
    let mut cursor = &goal;
    while let Some(parent) = parents.get(cursor) {
        nodes.push(parent.clone());
        cursor = parent;
    }
    nodes.reverse();

    tracing::debug!(expanded, length = nodes.len(), cost, "goal reached");
    Ok(Path::new(nodes, cost))
}
