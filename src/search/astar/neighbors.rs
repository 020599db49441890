/// The outcome of expanding one node: adjacent nodes paired with traversal costs.
///
/// Neighbor functions may return any `IntoIterator<Item = (N, f64)>`; this type is a
/// convenience for callers that naturally produce two parallel sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbors<N> {
    edges: Vec<(N, f64)>,
}

impl<N> Neighbors<N> {
    pub fn new() -> Self {
        Neighbors { edges: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Neighbors {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Pairs `nodes[i]` with `costs[i]`.
    ///
    /// Both sequences are expected to have the same length. If they do not, the extra
    /// entries of the longer one are dropped.
    pub fn from_parallel(nodes: Vec<N>, costs: Vec<f64>) -> Self {
        Neighbors {
            edges: nodes.into_iter().zip(costs).collect(),
        }
    }

    pub fn push(&mut self, node: N, cost: f64) {
        self.edges.push((node, cost));
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<N> Default for Neighbors<N> {
    fn default() -> Self {
        Neighbors::new()
    }
}

impl<N> FromIterator<(N, f64)> for Neighbors<N> {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        Neighbors {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<N> IntoIterator for Neighbors<N> {
    type Item = (N, f64);
    type IntoIter = std::vec::IntoIter<(N, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}
