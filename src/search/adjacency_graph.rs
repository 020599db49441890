use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    search::{
        Edge, Node, NodeId,
        astar::{Path, SearchError, SearchOptions, a_star_with_stats},
    },
    statistics::Stats,
};

/// In-memory weighted directed graph of nodes placed in the plane.
///
/// # Invariants
/// - `adjacency[i]` represents the node with `NodeId { internal: i }`.
/// - Every `Edge.to` is a valid index into `adjacency`.
///
/// # Algorithms
/// - [`find_path`](AdjacencyGraph::find_path) runs A* guided by the straight-line
///   distance to the goal. That heuristic is consistent whenever no edge is cheaper
///   than the distance between its endpoints, which holds for every graph built by
///   [`grid`](AdjacencyGraph::grid) and for loaded edges without an explicit cost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Node>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        AdjacencyGraph {
            adjacency: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.adjacency.get(id.internal)
    }

    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        self.adjacency.push(Node::new(x, y));
        NodeId {
            internal: self.adjacency.len() - 1,
        }
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// # Panics
    /// If either endpoint is not a node of this graph.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: f64) {
        assert!(to.internal < self.adjacency.len(), "unknown edge target {to}");
        self.adjacency[from.internal]
            .neighbors
            .push(Edge { to, cost });
    }

    /// Adds edges in both directions with the same cost.
    ///
    /// # Panics
    /// If either endpoint is not a node of this graph.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, cost: f64) {
        self.add_edge(a, b, cost);
        self.add_edge(b, a, cost);
    }

    /// Straight-line distance between two nodes.
    ///
    /// # Panics
    /// If either node is not part of this graph.
    pub fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        self.adjacency[a.internal].distance_to(&self.adjacency[b.internal])
    }

    /// Outgoing edges of `id` as `(neighbor, cost)` pairs, in insertion order.
    /// Unknown ids have no neighbors.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get(id.internal)
            .into_iter()
            .flat_map(|node| node.neighbors.iter().map(|edge| (edge.to, edge.cost)))
    }

    /// Straight-line distance to `goal`, zero exactly at nodes sharing its position.
    pub fn euclidean_heuristic(&self, goal: NodeId) -> impl Fn(&NodeId) -> f64 + '_ {
        move |node: &NodeId| self.distance(*node, goal)
    }

    /// Runs A* from `start` to `goal` using [`euclidean_heuristic`](Self::euclidean_heuristic).
    ///
    /// Open nodes reached more cheaply are not re-sorted, so on grids with diagonal
    /// moves the returned path is occasionally longer than the shortest one.
    ///
    /// # Panics
    /// If `start` or `goal` is not part of this graph.
    pub fn find_path(
        &self,
        start: NodeId,
        goal: NodeId,
        options: &SearchOptions,
        stats: &mut Stats,
    ) -> Result<Path<NodeId>, SearchError> {
        a_star_with_stats(
            start,
            self.euclidean_heuristic(goal),
            |node: &NodeId| self.neighbors(*node),
            options,
            stats,
        )
    }

    /// Node id of grid cell `(x, y)` in a graph built by [`grid`](Self::grid).
    pub fn cell(width: usize, x: usize, y: usize) -> NodeId {
        NodeId {
            internal: y * width + x,
        }
    }

    /// Builds a `width` by `height` grid with unit spacing.
    ///
    /// Cell `(x, y)` gets id `y * width + x`. Open cells are connected to their open
    /// orthogonal neighbors at cost 1 and, when `diagonal` is set, to their open
    /// diagonal neighbors at cost `sqrt(2)`. Blocked cells still exist but have no edges.
    pub fn grid<F>(width: usize, height: usize, diagonal: bool, blocked: F) -> Self
    where
        F: Fn(usize, usize) -> bool,
    {
        let mut graph = AdjacencyGraph::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                graph.add_node(x as f64, y as f64);
            }
        }

        let offsets: &[(isize, isize)] = if diagonal {
            &[
                (-1, -1),
                (0, -1),
                (1, -1),
                (-1, 0),
                (1, 0),
                (-1, 1),
                (0, 1),
                (1, 1),
            ]
        } else {
            &[(0, -1), (-1, 0), (1, 0), (0, 1)]
        };

        for y in 0..height {
            for x in 0..width {
                if blocked(x, y) {
                    continue;
                }
                for &(dx, dy) in offsets {
                    let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                    else {
                        continue;
                    };
                    if nx >= width || ny >= height || blocked(nx, ny) {
                        continue;
                    }
                    let cost = if dx != 0 && dy != 0 {
                        std::f64::consts::SQRT_2
                    } else {
                        1.0
                    };
                    graph.add_edge(
                        Self::cell(width, x, y),
                        Self::cell(width, nx, ny),
                        cost,
                    );
                }
            }
        }

        graph
    }

    /// Builds an 8-connected grid where each cell is blocked with probability `density`.
    ///
    /// The corner cells `(0, 0)` and `(width - 1, height - 1)` are always open. A
    /// density outside `[0, 1]` is clamped into it, NaN counts as 0.
    pub fn random_grid(width: usize, height: usize, density: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        let mut blocked = vec![false; width * height];
        for (index, cell) in blocked.iter_mut().enumerate() {
            let corner = index == 0 || index + 1 == width * height;
            *cell = !corner && rng.random_bool(density);
        }
        Self::grid(width, height, true, |x, y| blocked[y * width + x])
    }
}
