//! The symptom-to-risk diagnostic graph
//!
//! Symptoms lead to intermediate diagnoses, which lead to one of three
//! risk levels. Edge costs model assessment effort; node heuristics are the
//! estimated remaining effort to reach any risk level.

use super::model::{Graph, GraphBuilder};
use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Label of the fixed start node
pub const START: &str = "Start";

/// Node heuristic table
const HEURISTICS: &[(&str, f64)] = &[
    ("Start", 5.0),
    ("Fever", 3.0),
    ("Cough", 3.0),
    ("Sneezing", 2.0),
    ("Headache", 3.0),
    ("Flu", 2.0),
    ("Cold", 1.0),
    ("Allergies", 1.0),
    ("Migraine", 1.0),
    ("Diabetic_Retinopathy", 3.0),
    ("Low_Risk", 0.0),
    ("Medium_Risk", 0.0),
    ("High_Risk", 0.0),
];

/// (from, to, cost, edge heuristic)
const EDGES: &[(&str, &str, f64, f64)] = &[
    ("Start", "Fever", 1.0, 4.0),
    ("Start", "Cough", 1.0, 3.0),
    ("Start", "Sneezing", 1.0, 2.0),
    ("Start", "Headache", 1.0, 3.0),
    ("Fever", "Flu", 1.0, 2.0),
    ("Fever", "Cold", 1.0, 1.0),
    ("Cough", "Flu", 1.0, 2.0),
    ("Cough", "Cold", 1.0, 1.0),
    ("Sneezing", "Allergies", 1.0, 1.0),
    ("Headache", "Migraine", 1.0, 1.0),
    ("Headache", "Diabetic_Retinopathy", 2.0, 3.0),
    ("Flu", "High_Risk", 1.0, 0.0),
    ("Cold", "Low_Risk", 1.0, 0.0),
    ("Allergies", "Medium_Risk", 1.0, 0.0),
    ("Migraine", "Medium_Risk", 1.0, 0.0),
    ("Diabetic_Retinopathy", "High_Risk", 1.0, 0.0),
];

impl Graph {
    /// Build the risk-assessment graph
    pub fn risk_assessment() -> Graph {
        let builder = HEURISTICS
            .iter()
            .fold(GraphBuilder::new(), |b, &(label, h)| b.node(label, h));
        EDGES
            .iter()
            .fold(builder, |b, &(from, to, cost, h)| b.edge(from, to, cost, h))
            .assemble()
    }
}

/// Shared risk-assessment graph, built on first use
pub fn risk_graph() -> &'static Graph {
    static GRAPH: OnceLock<Graph> = OnceLock::new();
    GRAPH.get_or_init(Graph::risk_assessment)
}

/// Terminal risk level a search can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low_Risk")]
    Low,
    #[serde(rename = "Medium_Risk")]
    Medium,
    #[serde(rename = "High_Risk")]
    High,
}

impl RiskLevel {
    /// All risk levels, lowest first
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Node label of this risk level
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low_Risk",
            RiskLevel::Medium => "Medium_Risk",
            RiskLevel::High => "High_Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = SearchError;

    /// Accepts node labels (`High_Risk`) and short forms (`high`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let normalized = normalized
            .strip_suffix("risk")
            .unwrap_or(normalized.as_str());

        match normalized {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(SearchError::InvalidSelection(format!(
                "unknown risk goal '{}' (expected Low_Risk, Medium_Risk or High_Risk)",
                s
            ))),
        }
    }
}
