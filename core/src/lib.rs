//! Risk Search Core
//!
//! Informed search from presenting symptoms to a risk-level assessment
//!
//! # Example
//!
//! ```rust
//! use risk_search_core::{risk_graph, run_search, Algorithm, RiskLevel, SearchConfig};
//!
//! let report = run_search(
//!     risk_graph(),
//!     Algorithm::AStar,
//!     RiskLevel::Medium,
//!     &SearchConfig::default(),
//! )?;
//!
//! assert_eq!(report.path_cost, Some(3.0));
//! println!("{}", report.render_text());
//! # Ok::<(), risk_search_core::SearchError>(())
//! ```

pub mod config;  // Search tunables (beam width)
pub mod error;   // Error taxonomy
pub mod graph;   // Diagnostic graph and heuristic table
pub mod search;  // Best-first, beam, A*, AO*

pub use config::SearchConfig;
pub use error::{SearchError, SearchResult};
pub use graph::{risk_graph, Edge, Graph, GraphBuilder, NodeId, RiskLevel, START};
pub use search::{
    a_star_search, ao_star_search, beam_search, best_first_search, reconstruct_path, run_search,
    Algorithm, CameFrom, RunHistory, SearchOutcome, SearchReport,
};
