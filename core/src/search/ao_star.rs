//! AO* search over an OR-graph
//!
//! The diagnostic graph has no AND nodes: every risk level is reached by any
//! one chain of findings, never by a conjunction of sub-goals. Without AND
//! nodes there is no cost aggregation over solution subgraphs, and AO*
//! reduces to A*. This module delegates accordingly; full AND-OR search is
//! not implemented.

use super::astar::a_star_search;
use super::state::SearchOutcome;
use crate::error::SearchResult;
use crate::graph::{Graph, NodeId};

/// Run AO* search from `start` to `goal` (OR-graph only, same as A*)
pub fn ao_star_search(graph: &Graph, start: NodeId, goal: NodeId) -> SearchResult<SearchOutcome> {
    a_star_search(graph, start, goal)
}
