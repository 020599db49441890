use std::hash::{BuildHasher, Hash};

use hashbrown::HashSet;

use crate::sets::visited::VisitorSet;

impl<N, S> VisitorSet<N> for HashSet<N, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn was_visited(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn mark_visited(&mut self, node: N) {
        self.insert(node);
    }
}
