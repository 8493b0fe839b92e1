//! Graph model
//!
//! - **model**: interned node ids, weighted edges and the heuristic table
//! - **risk**: the fixed symptom-to-risk graph and the risk-level goals

mod model;
mod risk;

pub use model::{Edge, Graph, GraphBuilder, NodeId};
pub use risk::{risk_graph, RiskLevel, START};
