//! Beam search implementation
//!
//! Round-based greedy search: expand at most `beam_width` entries, gather the
//! neighbors they relax, keep the best `beam_width` as the next frontier.
//! Anything outside the beam is dropped for good, so the goal can be missed
//! even when a path exists.

use super::frontier::{Frontier, FrontierEntry, Priority};
use super::state::{SearchOutcome, SearchState};
use crate::error::{SearchError, SearchResult};
use crate::graph::{Graph, NodeId};
use tracing::{debug, trace};

/// Run beam search from `start` to `goal`, keeping `beam_width` entries per round
///
/// Returns an outcome with `path: None` when the beam empties before the goal
/// is popped. A width of zero is rejected.
pub fn beam_search(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    beam_width: usize,
) -> SearchResult<SearchOutcome> {
    if beam_width == 0 {
        return Err(SearchError::InvalidConfig(
            "beam width must be at least 1".to_string(),
        ));
    }
    graph.label(goal)?;

    let mut state = SearchState::new(start);
    let mut frontier = Frontier::with_start(graph.heuristic(start)?, start);
    let mut peak = frontier.len();
    let mut round = 0;

    while !frontier.is_empty() {
        round += 1;
        let mut candidates: Vec<FrontierEntry> = Vec::new();

        for _ in 0..beam_width.min(frontier.len()) {
            let Some(entry) = frontier.pop() else { break };
            let current = entry.node;
            state.nodes_expanded += 1;
            trace!(round, node = %current, priority = entry.priority, "pop");

            if current == goal {
                debug!(round, nodes_expanded = state.nodes_expanded, "beam reached goal");
                let path = state.path_to(graph, goal)?;
                return Ok(SearchOutcome::with_path(state, Some(path), peak));
            }

            for edge in graph.neighbors(current)? {
                if let Some(new_cost) = state.relax(current, edge.target, edge.cost) {
                    let score = Priority::Heuristic.score(new_cost, graph.heuristic(edge.target)?);
                    candidates.push(FrontierEntry::new(score, edge.target));
                }
            }
        }

        candidates.sort();
        candidates.truncate(beam_width);
        trace!(round, kept = candidates.len(), "beam truncated");

        frontier = Frontier::from_entries(candidates);
        peak = peak.max(frontier.len());
    }

    debug!(
        rounds = round,
        nodes_expanded = state.nodes_expanded,
        "beam emptied without reaching goal"
    );

    Ok(SearchOutcome::with_path(state, None, peak))
}
