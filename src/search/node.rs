use std::fmt;

/// Dense integer handle of a node inside an [`AdjacencyGraph`](crate::search::AdjacencyGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub internal: usize,
}

impl From<usize> for NodeId {
    fn from(internal: usize) -> Self {
        NodeId { internal }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.internal)
    }
}

/// A directed, weighted edge to another node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub cost: f64,
}

/// A graph node: a position in the plane and its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub position: [f64; 2],
    pub neighbors: Vec<Edge>,
}

impl Node {
    pub fn new(x: f64, y: f64) -> Self {
        Node {
            position: [x, y],
            neighbors: Vec::new(),
        }
    }

    /// Straight-line distance between two nodes.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.position[0] - other.position[0];
        let dy = self.position[1] - other.position[1];
        dx.hypot(dy)
    }
}
