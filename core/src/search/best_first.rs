//! Greedy best-first search
//!
//! Expands whichever discovered node has the lowest heuristic, ignoring the
//! cost already paid to reach it.

use super::frontier::{Frontier, Priority};
use super::state::{SearchOutcome, SearchState};
use crate::error::SearchResult;
use crate::graph::{Graph, NodeId};
use tracing::{debug, trace};

/// Run greedy best-first search from `start` to `goal`
pub fn best_first_search(graph: &Graph, start: NodeId, goal: NodeId) -> SearchResult<SearchOutcome> {
    ordered_search(graph, start, goal, Priority::Heuristic)
}

/// Single-frontier search shared by best-first and A*
///
/// Pops the lowest entry, stops on the first pop of `goal`, otherwise relaxes
/// every outgoing edge and pushes improved neighbors with `priority`.
pub(crate) fn ordered_search(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    priority: Priority,
) -> SearchResult<SearchOutcome> {
    // Fail fast on ids outside the graph
    graph.label(goal)?;

    let mut state = SearchState::new(start);
    let mut frontier = Frontier::with_start(priority.score(0.0, graph.heuristic(start)?), start);

    while let Some(entry) = frontier.pop() {
        let current = entry.node;
        state.nodes_expanded += 1;
        trace!(node = %current, priority = entry.priority, "pop");

        if current == goal {
            break;
        }

        for edge in graph.neighbors(current)? {
            if let Some(new_cost) = state.relax(current, edge.target, edge.cost) {
                let score = priority.score(new_cost, graph.heuristic(edge.target)?);
                frontier.push(score, edge.target);
            }
        }
    }

    debug!(
        ?priority,
        start = %start,
        goal = %goal,
        nodes_expanded = state.nodes_expanded,
        "frontier search finished"
    );

    SearchOutcome::from_state(graph, state, goal, frontier.peak())
}
