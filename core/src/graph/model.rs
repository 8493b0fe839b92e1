//! Immutable weighted graph with a per-node heuristic table
//!
//! Node labels are interned to [`NodeId`]s when the graph is assembled. Ids
//! are handed out in lexicographic label order, so comparing two ids gives
//! the same answer as comparing their labels. The search frontier relies on
//! this for its tie-break.

use crate::error::{SearchError, SearchResult};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Newtype wrapper for node identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Directed edge to a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Target node
    pub target: NodeId,

    /// Assessment effort to follow this edge
    pub cost: f64,

    /// Edge-specific risk-reduction estimate (kept for reporting; the
    /// searches read the node heuristic table instead)
    pub heuristic: f64,
}

/// Read-only graph shared by every search invocation
#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<String>,
    index: FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    heuristics: Vec<f64>,
}

impl Graph {
    /// Look up a node by label
    pub fn node(&self, label: &str) -> SearchResult<NodeId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| SearchError::UnknownNode(label.to_string()))
    }

    /// Label of a node
    pub fn label(&self, id: NodeId) -> SearchResult<&str> {
        self.labels
            .get(id.0 as usize)
            .map(|s| s.as_str())
            .ok_or_else(|| SearchError::UnknownNode(id.to_string()))
    }

    /// Outgoing edges of a node, in declaration order (empty for sinks)
    pub fn neighbors(&self, id: NodeId) -> SearchResult<&[Edge]> {
        self.adjacency
            .get(id.0 as usize)
            .map(|edges| edges.as_slice())
            .ok_or_else(|| SearchError::UnknownNode(id.to_string()))
    }

    /// Estimated cost from a node to the goal
    pub fn heuristic(&self, id: NodeId) -> SearchResult<f64> {
        self.heuristics
            .get(id.0 as usize)
            .copied()
            .ok_or_else(|| SearchError::UnknownNode(id.to_string()))
    }

    /// Edge between two nodes, if one exists
    pub fn edge(&self, from: NodeId, to: NodeId) -> SearchResult<Option<&Edge>> {
        Ok(self.neighbors(from)?.iter().find(|e| e.target == to))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All node ids in label order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len() as u32).map(NodeId)
    }

    /// All edges as `(source, edge)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, edges)| edges.iter().map(move |e| (NodeId(i as u32), e)))
    }

    /// Nodes with no outgoing edges
    pub fn sinks(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|id| self.adjacency[id.0 as usize].is_empty())
            .collect()
    }

    /// Check that every consecutive pair in `path` is an edge
    pub fn is_path(&self, path: &[NodeId]) -> bool {
        self.path_cost(path).is_some()
    }

    /// Sum of edge costs along `path`, or `None` if some step is not an edge
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f64> {
        if path.is_empty() {
            return None;
        }

        path.windows(2).try_fold(0.0, |total, pair| {
            let edge = self.edge(pair[0], pair[1]).ok()??;
            Some(total + edge.cost)
        })
    }

    /// Convert a path of ids to labels
    pub fn labels_of(&self, path: &[NodeId]) -> SearchResult<Vec<String>> {
        path.iter()
            .map(|&id| self.label(id).map(str::to_string))
            .collect()
    }

    /// Check the structural invariants: finite non-negative weights and no cycles
    pub fn validate(&self) -> SearchResult<()> {
        for id in self.nodes() {
            let h = self.heuristics[id.0 as usize];
            if !h.is_finite() || h < 0.0 {
                return Err(SearchError::InvalidGraph(format!(
                    "heuristic for {} must be finite and non-negative, got {}",
                    self.labels[id.0 as usize], h
                )));
            }
        }

        for (source, edge) in self.edges() {
            for (name, value) in [("cost", edge.cost), ("heuristic", edge.heuristic)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(SearchError::InvalidGraph(format!(
                        "edge {} -> {} has invalid {}: {}",
                        self.labels[source.0 as usize],
                        self.labels[edge.target.0 as usize],
                        name,
                        value
                    )));
                }
            }
        }

        // Kahn's algorithm: a DAG drains completely
        let mut in_degree = vec![0usize; self.len()];
        for (_, edge) in self.edges() {
            in_degree[edge.target.0 as usize] += 1;
        }
        let mut ready: Vec<NodeId> = self
            .nodes()
            .filter(|id| in_degree[id.0 as usize] == 0)
            .collect();
        let mut drained = 0;
        while let Some(id) = ready.pop() {
            drained += 1;
            for edge in &self.adjacency[id.0 as usize] {
                let d = &mut in_degree[edge.target.0 as usize];
                *d -= 1;
                if *d == 0 {
                    ready.push(edge.target);
                }
            }
        }
        if drained != self.len() {
            return Err(SearchError::InvalidGraph("graph contains a cycle".to_string()));
        }

        Ok(())
    }
}

/// Incremental description of a graph, turned into a [`Graph`] by [`GraphBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    heuristics: Vec<(String, f64)>,
    edges: Vec<(String, String, f64, f64)>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node with its heuristic-to-goal value
    pub fn node(mut self, label: &str, heuristic: f64) -> Self {
        self.heuristics.push((label.to_string(), heuristic));
        self
    }

    /// Declare a directed edge with its cost and edge heuristic
    pub fn edge(mut self, from: &str, to: &str, cost: f64, heuristic: f64) -> Self {
        self.edges
            .push((from.to_string(), to.to_string(), cost, heuristic));
        self
    }

    /// Assemble and validate the graph
    pub fn build(self) -> SearchResult<Graph> {
        let mut declared = BTreeSet::new();
        for (label, _) in &self.heuristics {
            if !declared.insert(label.as_str()) {
                return Err(SearchError::InvalidGraph(format!(
                    "heuristic declared twice for {}",
                    label
                )));
            }
        }

        let mut seen_edges = BTreeSet::new();
        for (from, to, _, _) in &self.edges {
            for label in [from, to] {
                if !declared.contains(label.as_str()) {
                    return Err(SearchError::InvalidGraph(format!(
                        "node {} has no heuristic",
                        label
                    )));
                }
            }
            if !seen_edges.insert((from.as_str(), to.as_str())) {
                return Err(SearchError::InvalidGraph(format!(
                    "duplicate edge {} -> {}",
                    from, to
                )));
            }
        }

        let graph = self.assemble();
        graph.validate()?;
        Ok(graph)
    }

    /// Intern labels and lay out adjacency without validation
    ///
    /// Every edge endpoint must have been declared with [`GraphBuilder::node`].
    pub(crate) fn assemble(self) -> Graph {
        let labels: Vec<String> = self
            .heuristics
            .iter()
            .map(|(label, _)| label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let index: FxHashMap<String, NodeId> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), NodeId(i as u32)))
            .collect();

        let mut heuristics = vec![0.0; labels.len()];
        for (label, h) in &self.heuristics {
            heuristics[index[label].0 as usize] = *h;
        }

        let mut adjacency = vec![Vec::new(); labels.len()];
        for (from, to, cost, heuristic) in &self.edges {
            adjacency[index[from].0 as usize].push(Edge {
                target: index[to],
                cost: *cost,
                heuristic: *heuristic,
            });
        }

        Graph {
            labels,
            index,
            adjacency,
            heuristics,
        }
    }
}
