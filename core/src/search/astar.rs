//! A* search
//!
//! Orders the frontier by accumulated cost plus heuristic and stops on the
//! first pop of the goal.

use super::best_first::ordered_search;
use super::frontier::Priority;
use super::state::SearchOutcome;
use crate::error::SearchResult;
use crate::graph::{Graph, NodeId};

/// Run A* search from `start` to `goal`
pub fn a_star_search(graph: &Graph, start: NodeId, goal: NodeId) -> SearchResult<SearchOutcome> {
    ordered_search(graph, start, goal, Priority::CostPlusHeuristic)
}
