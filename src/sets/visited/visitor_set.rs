/// Tracks which nodes have already been expanded by a search.
///
/// Once a node is set it is never cleared for the lifetime of the set.
pub trait VisitorSet<N> {
    fn was_visited(&self, node: &N) -> bool;
    fn mark_visited(&mut self, node: N);
}
