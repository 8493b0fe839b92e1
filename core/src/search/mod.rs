//! Search module - informed searches over the diagnostic graph
//!
//! Best-first, beam and A* share one frontier and one relaxation rule and
//! differ in how they prioritise and prune. AO* runs as A* on this OR-graph.

pub mod ao_star;
pub mod astar;
pub mod beam;
pub mod best_first;
pub mod frontier;
pub mod runner;
pub mod state;

pub use ao_star::ao_star_search;
pub use astar::a_star_search;
pub use beam::beam_search;
pub use best_first::best_first_search;
pub use frontier::{Frontier, FrontierEntry, Priority};
pub use runner::{run_search, Algorithm, RunHistory, SearchReport};
pub use state::{reconstruct_path, CameFrom, SearchOutcome, SearchState};
