#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    searches: usize,
    expansions: usize,
    edges_considered: usize,
    nodes_opened: usize,
    cost_improvements: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            searches: 0,
            expansions: 0,
            edges_considered: 0,
            nodes_opened: 0,
            cost_improvements: 0,
        }
    }

    /// Record into the statistics object that a new search call has been performed
    pub fn bump_searches(&mut self) {
        self.searches += 1
    }

    /// Record that a node was popped from the open set and handed to the neighbor function
    pub fn bump_expansions(&mut self) {
        self.expansions += 1
    }

    /// Record that a bunch of new edges were taken into consideration
    /// in the graph exploration phase
    pub fn bump_edges(&mut self, edge_amount: usize) {
        self.edges_considered += edge_amount
    }

    /// Record that a node was pushed onto the open set for the first time
    pub fn bump_opened(&mut self) {
        self.nodes_opened += 1
    }

    /// Record that a node already sitting in the open set was reached more cheaply
    pub fn bump_improvements(&mut self) {
        self.cost_improvements += 1
    }

    pub fn get_searches(&self) -> usize {
        self.searches
    }

    pub fn get_expansions(&self) -> usize {
        self.expansions
    }

    pub fn get_edges_considered(&self) -> usize {
        self.edges_considered
    }

    pub fn get_nodes_opened(&self) -> usize {
        self.nodes_opened
    }

    pub fn get_cost_improvements(&self) -> usize {
        self.cost_improvements
    }

    /// Sums the counters of two statistics objects.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            searches: self.searches + other.searches,
            expansions: self.expansions + other.expansions,
            edges_considered: self.edges_considered + other.edges_considered,
            nodes_opened: self.nodes_opened + other.nodes_opened,
            cost_improvements: self.cost_improvements + other.cost_improvements,
        }
    }

    /// Emit all contents of the stats object as a single `info` event.
    pub fn dump(&self) {
        tracing::info!(
            searches = self.searches,
            expansions = self.expansions,
            edges_considered = self.edges_considered,
            nodes_opened = self.nodes_opened,
            cost_improvements = self.cost_improvements,
            "search statistics"
        );
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = Stats::new();
        assert_eq!(stats.get_searches(), 0);
        assert_eq!(stats.get_expansions(), 0);
        assert_eq!(stats.get_edges_considered(), 0);
        assert_eq!(stats.get_nodes_opened(), 0);
        assert_eq!(stats.get_cost_improvements(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Stats::default(), Stats::new());
    }

    #[test]
    fn test_bump_expansions_multiple_times() {
        let mut stats = Stats::new();
        stats.bump_expansions();
        stats.bump_expansions();
        stats.bump_expansions();
        assert_eq!(stats.get_expansions(), 3);
        assert_eq!(stats.get_edges_considered(), 0);
    }

    #[test]
    fn test_bump_edges_accumulates() {
        let mut stats = Stats::new();
        stats.bump_edges(5);
        stats.bump_edges(10);
        stats.bump_edges(0);
        assert_eq!(stats.get_edges_considered(), 15);
    }

    #[test]
    fn test_merge() {
        let mut a = Stats::new();
        a.bump_searches();
        a.bump_expansions();
        a.bump_opened();
        let mut b = Stats::new();
        b.bump_searches();
        b.bump_edges(4);
        b.bump_improvements();

        let merged = a.merge(&b);
        assert_eq!(merged.get_searches(), 2);
        assert_eq!(merged.get_expansions(), 1);
        assert_eq!(merged.get_edges_considered(), 4);
        assert_eq!(merged.get_nodes_opened(), 1);
        assert_eq!(merged.get_cost_improvements(), 1);
    }

    #[test]
    fn test_dump_does_not_panic() {
        let mut stats = Stats::new();
        stats.bump_edges(42);
        stats.dump();
    }
}
