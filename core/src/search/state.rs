//! Per-invocation search bookkeeping and path reconstruction

use crate::error::{SearchError, SearchResult};
use crate::graph::{Graph, NodeId};
use rustc_hash::FxHashMap;

/// Predecessor map: each discovered node to the node it was reached from
/// (`None` for the start node)
pub type CameFrom = FxHashMap<NodeId, Option<NodeId>>;

/// Mutable state of one search run
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Node the search started from
    pub start: NodeId,

    /// Best known predecessor of each discovered node
    pub came_from: CameFrom,

    /// Best known accumulated cost from the start
    pub cost_so_far: FxHashMap<NodeId, f64>,

    /// Number of frontier pops performed
    pub nodes_expanded: usize,
}

impl SearchState {
    /// Fresh state with only the start node discovered at cost 0
    pub fn new(start: NodeId) -> Self {
        let mut came_from = CameFrom::default();
        came_from.insert(start, None);

        let mut cost_so_far = FxHashMap::default();
        cost_so_far.insert(start, 0.0);

        Self {
            start,
            came_from,
            cost_so_far,
            nodes_expanded: 0,
        }
    }

    /// Best known cost to `node`, if discovered
    pub fn cost(&self, node: NodeId) -> Option<f64> {
        self.cost_so_far.get(&node).copied()
    }

    /// Record `to` as reached through `from` if this is the first or a strictly
    /// cheaper route. Returns the new cost when the node was relaxed.
    pub fn relax(&mut self, from: NodeId, to: NodeId, edge_cost: f64) -> Option<f64> {
        let new_cost = self.cost(from)? + edge_cost;

        match self.cost_so_far.get(&to) {
            Some(&known) if new_cost >= known => None,
            _ => {
                self.cost_so_far.insert(to, new_cost);
                self.came_from.insert(to, Some(from));
                Some(new_cost)
            }
        }
    }

    /// Reconstruct the route from the start to `goal`
    pub fn path_to(&self, graph: &Graph, goal: NodeId) -> SearchResult<Vec<NodeId>> {
        reconstruct_path(graph, &self.came_from, self.start, goal)
    }
}

/// Walk `came_from` back from `goal` to `start` and return the route in
/// start-to-goal order.
///
/// Fails with [`SearchError::GoalUnreachable`] when `goal` was never
/// discovered or the predecessor chain does not lead back to `start`.
pub fn reconstruct_path(
    graph: &Graph,
    came_from: &CameFrom,
    start: NodeId,
    goal: NodeId,
) -> SearchResult<Vec<NodeId>> {
    let unreachable = || -> SearchError {
        SearchError::GoalUnreachable {
            start: graph
                .label(start)
                .map(str::to_string)
                .unwrap_or_else(|_| start.to_string()),
            goal: graph
                .label(goal)
                .map(str::to_string)
                .unwrap_or_else(|_| goal.to_string()),
        }
    };

    let mut path = Vec::new();
    let mut current = goal;

    while current != start {
        // A chain longer than the map has looped
        if path.len() > came_from.len() {
            return Err(unreachable());
        }
        path.push(current);
        current = match came_from.get(&current) {
            Some(Some(prev)) => *prev,
            _ => return Err(unreachable()),
        };
    }

    path.push(start);
    path.reverse();
    Ok(path)
}

/// What a search run produced
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Route from start to goal, or `None` if the goal was not reached
    pub path: Option<Vec<NodeId>>,

    /// Number of frontier pops performed
    pub nodes_expanded: usize,

    /// Largest frontier size observed
    pub peak_frontier: usize,

    /// Final predecessor map
    pub came_from: CameFrom,

    /// Final accumulated-cost map
    pub cost_so_far: FxHashMap<NodeId, f64>,
}

impl SearchOutcome {
    /// Build an outcome from finished state, reconstructing the path to `goal`
    ///
    /// An unreachable goal becomes `path: None`; any other error propagates.
    pub fn from_state(
        graph: &Graph,
        state: SearchState,
        goal: NodeId,
        peak_frontier: usize,
    ) -> SearchResult<Self> {
        let path = match state.path_to(graph, goal) {
            Ok(path) => Some(path),
            Err(e) if e.is_unreachable() => None,
            Err(e) => return Err(e),
        };

        Ok(Self::with_path(state, path, peak_frontier))
    }

    /// Build an outcome with an already-decided path
    pub fn with_path(state: SearchState, path: Option<Vec<NodeId>>, peak_frontier: usize) -> Self {
        Self {
            path,
            nodes_expanded: state.nodes_expanded,
            peak_frontier,
            came_from: state.came_from,
            cost_so_far: state.cost_so_far,
        }
    }

    /// Whether the goal was reached
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}
