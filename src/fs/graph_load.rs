use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    fs::LoadError,
    search::{AdjacencyGraph, NodeId},
};

/// On-disk JSON representation of an [`AdjacencyGraph`].
///
/// Node ids must be exactly `0..nodes.len()`, in any order. An edge without a `cost`
/// gets the straight-line distance between its endpoints. With `bidirectional` set,
/// every edge is also added in the reverse direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<NodeRecord>,

    #[serde(default)]
    pub edges: Vec<EdgeRecord>,

    #[serde(default)]
    pub bidirectional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl TryFrom<GraphFile> for AdjacencyGraph {
    type Error = LoadError;

    fn try_from(file: GraphFile) -> Result<Self, Self::Error> {
        let mut positions: Vec<Option<[f64; 2]>> = vec![None; file.nodes.len()];
        for record in &file.nodes {
            let slot = positions
                .get_mut(record.id)
                .ok_or_else(|| LoadError::MissingNode {
                    id: first_gap(&file.nodes),
                })?;
            if slot.is_some() {
                return Err(LoadError::DuplicateNode { id: record.id });
            }
            *slot = Some([record.x, record.y]);
        }

        let mut graph = AdjacencyGraph::with_capacity(positions.len());
        for position in positions.into_iter().flatten() {
            graph.add_node(position[0], position[1]);
        }

        for edge in &file.edges {
            for id in [edge.from, edge.to] {
                if id >= graph.len() {
                    return Err(LoadError::UnknownNode {
                        from: edge.from,
                        to: edge.to,
                        id,
                    });
                }
            }

            let (from, to) = (NodeId::from(edge.from), NodeId::from(edge.to));
            let cost = edge.cost.unwrap_or_else(|| graph.distance(from, to));
            if cost.is_nan() || cost < 0.0 {
                return Err(LoadError::InvalidCost {
                    from: edge.from,
                    to: edge.to,
                    cost,
                });
            }

            if file.bidirectional {
                graph.add_undirected_edge(from, to, cost);
            } else {
                graph.add_edge(from, to, cost);
            }
        }

        Ok(graph)
    }
}

impl From<&AdjacencyGraph> for GraphFile {
    fn from(graph: &AdjacencyGraph) -> Self {
        let mut nodes = Vec::with_capacity(graph.len());
        let mut edges = Vec::new();
        for internal in 0..graph.len() {
            let id = NodeId { internal };
            let Some(node) = graph.node(id) else {
                continue;
            };
            nodes.push(NodeRecord {
                id: internal,
                x: node.position[0],
                y: node.position[1],
            });
            edges.extend(node.neighbors.iter().map(|edge| EdgeRecord {
                from: internal,
                to: edge.to.internal,
                cost: Some(edge.cost),
            }));
        }

        GraphFile {
            nodes,
            edges,
            bidirectional: false,
        }
    }
}

// smallest id in 0..n that no record claims
fn first_gap(nodes: &[NodeRecord]) -> usize {
    let mut seen = vec![false; nodes.len()];
    for record in nodes {
        if let Some(flag) = seen.get_mut(record.id) {
            *flag = true;
        }
    }
    seen.iter().position(|&flag| !flag).unwrap_or(nodes.len())
}

impl AdjacencyGraph {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let file: GraphFile = serde_json::from_str(json)?;
        AdjacencyGraph::try_from(file)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let file: GraphFile = serde_json::from_reader(reader)?;
        let graph = AdjacencyGraph::try_from(file)?;
        tracing::info!(path = %path.display(), nodes = graph.len(), "loaded graph");
        Ok(graph)
    }

    /// Writes the graph as a directed [`GraphFile`] with explicit edge costs.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &GraphFile::from(self))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{SearchError, SearchOptions},
        statistics::Stats,
    };

    #[test]
    fn test_load_diamond() {
        let graph = AdjacencyGraph::load_from_path("test_index/diamond.json").unwrap();
        assert_eq!(graph.len(), 5);
        // bidirectional: every edge shows up twice
        let edge_count: usize = (0..graph.len())
            .map(|i| graph.neighbors(NodeId::from(i)).count())
            .sum();
        assert_eq!(edge_count, 8);

        let path = graph
            .find_path(
                NodeId::from(0),
                NodeId::from(3),
                &SearchOptions::new(),
                &mut Stats::new(),
            )
            .unwrap();
        assert_eq!(
            path.nodes(),
            &[NodeId::from(0), NodeId::from(2), NodeId::from(3)]
        );
        assert!((path.cost() - 2.0 * 5.0_f64.sqrt()).abs() < 1e-12);

        let isolated = graph.find_path(
            NodeId::from(0),
            NodeId::from(4),
            &SearchOptions::new(),
            &mut Stats::new(),
        );
        assert_eq!(isolated, Err(SearchError::Unreachable { expanded: 4 }));
    }

    #[test]
    fn test_nodes_in_any_order() {
        let graph = AdjacencyGraph::from_json_str(
            r#"{"nodes": [{"id": 1, "x": 3.0, "y": 4.0}, {"id": 0, "x": 0.0, "y": 0.0}],
                "edges": [{"from": 0, "to": 1}]}"#,
        )
        .unwrap();
        assert_eq!(graph.node(NodeId::from(1)).unwrap().position, [3.0, 4.0]);
        let edges: Vec<_> = graph.neighbors(NodeId::from(0)).collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].0, NodeId::from(1));
        assert!((edges[0].1 - 5.0).abs() < 1e-12);
        assert_eq!(graph.neighbors(NodeId::from(1)).count(), 0);
    }

    #[test]
    fn test_rejects_bad_ids() {
        let duplicate = AdjacencyGraph::from_json_str(
            r#"{"nodes": [{"id": 0, "x": 0, "y": 0}, {"id": 0, "x": 1, "y": 0}]}"#,
        );
        assert!(matches!(duplicate, Err(LoadError::DuplicateNode { id: 0 })));

        let gap = AdjacencyGraph::from_json_str(
            r#"{"nodes": [{"id": 0, "x": 0, "y": 0}, {"id": 2, "x": 1, "y": 0}]}"#,
        );
        assert!(matches!(gap, Err(LoadError::MissingNode { id: 1 })));

        let unknown = AdjacencyGraph::from_json_str(
            r#"{"nodes": [{"id": 0, "x": 0, "y": 0}], "edges": [{"from": 0, "to": 7}]}"#,
        );
        assert!(matches!(
            unknown,
            Err(LoadError::UnknownNode { from: 0, to: 7, id: 7 })
        ));
    }

    #[test]
    fn test_rejects_negative_cost() {
        let result = AdjacencyGraph::from_json_str(
            r#"{"nodes": [{"id": 0, "x": 0, "y": 0}, {"id": 1, "x": 1, "y": 0}],
                "edges": [{"from": 0, "to": 1, "cost": -1.0}]}"#,
        );
        assert!(matches!(result, Err(LoadError::InvalidCost { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = AdjacencyGraph::from_json_str("{ nodes: ");
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_graph_file_conversion_preserves_graph() {
        let graph = AdjacencyGraph::random_grid(6, 4, 0.2, 3);
        let file = GraphFile::from(&graph);
        assert_eq!(file.nodes.len(), graph.len());
        assert_eq!(AdjacencyGraph::try_from(file).unwrap(), graph);
    }
}
