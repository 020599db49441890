/// An ordered sequence of nodes from the start node to a goal node, both inclusive.
///
/// A path always holds at least one node; when the start node is itself a goal the
/// path is just that node with a cost of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: f64,
}

impl<N> Path<N> {
    pub(crate) fn new(nodes: Vec<N>, cost: f64) -> Self {
        debug_assert!(!nodes.is_empty());
        Path { nodes, cost }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Running cost of the goal node, i.e. the sum of edge costs along the path.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, kept alongside `len` for the usual pairing.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
