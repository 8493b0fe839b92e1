//! Algorithm selection, timed runs and caller-side history
//!
//! `run_search` is the entry point presentation code calls: pick an
//! algorithm and a risk level, get back plain data.

use super::ao_star::ao_star_search;
use super::astar::a_star_search;
use super::beam::beam_search;
use super::best_first::best_first_search;
use super::state::SearchOutcome;
use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::graph::{Graph, NodeId, RiskLevel, START};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    BestFirst,
    Beam,
    AStar,
    AOStar,
}

impl Algorithm {
    /// Every strategy, in menu order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BestFirst,
        Algorithm::Beam,
        Algorithm::AStar,
        Algorithm::AOStar,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BestFirst => "Best First Search",
            Algorithm::Beam => "Beam Search",
            Algorithm::AStar => "A* Search",
            Algorithm::AOStar => "AO* Search",
        }
    }

    /// Run this strategy between two nodes
    pub fn search(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        config: &SearchConfig,
    ) -> SearchResult<SearchOutcome> {
        match self {
            Algorithm::BestFirst => best_first_search(graph, start, goal),
            Algorithm::Beam => beam_search(graph, start, goal, config.beam_width),
            Algorithm::AStar => a_star_search(graph, start, goal),
            Algorithm::AOStar => ao_star_search(graph, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Accepts display names ("A* Search") and short forms ("astar", "best-first")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .replace('*', "star")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let normalized = match normalized.strip_suffix("search") {
            Some(stem) if !stem.is_empty() => stem,
            _ => normalized.as_str(),
        };

        match normalized {
            "bestfirst" | "greedy" => Ok(Algorithm::BestFirst),
            "beam" => Ok(Algorithm::Beam),
            "astar" => Ok(Algorithm::AStar),
            "aostar" => Ok(Algorithm::AOStar),
            _ => Err(SearchError::InvalidSelection(format!(
                "unknown algorithm '{}' (expected best-first, beam, astar or aostar)",
                s
            ))),
        }
    }
}

/// Plain-data result of one timed search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Strategy that ran
    pub algorithm: Algorithm,

    /// Start node label
    pub start: String,

    /// Targeted risk level
    pub goal: RiskLevel,

    /// Node labels from start to goal, `None` if no path was found
    pub path: Option<Vec<String>>,

    /// Sum of edge costs along `path`
    pub path_cost: Option<f64>,

    /// Number of frontier pops
    pub nodes_expanded: usize,

    /// Largest frontier the search held
    pub peak_frontier: usize,

    /// Wall-clock time of the search itself
    pub elapsed: Duration,
}

impl SearchReport {
    /// Whether the goal was reached
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Path joined with arrows, or a no-path notice
    pub fn path_display(&self) -> String {
        match &self.path {
            Some(path) => path.join(" -> "),
            None => "no path found".to_string(),
        }
    }

    /// Multi-line text summary for a results panel
    pub fn render_text(&self) -> String {
        format!(
            "Algorithm: {}\nPath to Risk Assessment: {}\nNodes Expanded: {}\nTime Taken: {:.4} seconds\n",
            self.algorithm,
            self.path_display(),
            self.nodes_expanded,
            self.elapsed_secs()
        )
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> SearchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> SearchResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SearchResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Run `algorithm` from the start node to `goal` and time it
///
/// Selection and configuration errors surface before any search work.
pub fn run_search(
    graph: &Graph,
    algorithm: Algorithm,
    goal: RiskLevel,
    config: &SearchConfig,
) -> SearchResult<SearchReport> {
    config.validate()?;
    let start_id = graph.node(START)?;
    let goal_id = graph.node(goal.label())?;

    let timer = Instant::now();
    let outcome = algorithm.search(graph, start_id, goal_id, config)?;
    let elapsed = timer.elapsed();

    let path = outcome
        .path
        .as_deref()
        .map(|p| graph.labels_of(p))
        .transpose()?;
    let path_cost = outcome.path.as_deref().and_then(|p| graph.path_cost(p));

    if path.is_none() {
        warn!(%algorithm, %goal, nodes_expanded = outcome.nodes_expanded, "no path found");
    } else {
        debug!(
            %algorithm,
            %goal,
            nodes_expanded = outcome.nodes_expanded,
            elapsed_us = elapsed.as_micros() as u64,
            "search finished"
        );
    }

    Ok(SearchReport {
        algorithm,
        start: START.to_string(),
        goal,
        path,
        path_cost,
        nodes_expanded: outcome.nodes_expanded,
        peak_frontier: outcome.peak_frontier,
        elapsed,
    })
}

/// Reports collected by a caller across runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunHistory {
    reports: Vec<SearchReport>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished run
    pub fn record(&mut self, report: SearchReport) {
        self.reports.push(report);
    }

    /// All runs, oldest first
    pub fn reports(&self) -> &[SearchReport] {
        &self.reports
    }

    /// Most recent run
    pub fn latest(&self) -> Option<&SearchReport> {
        self.reports.last()
    }

    /// Latest elapsed time per algorithm, in order of first use
    pub fn timings(&self) -> Vec<(Algorithm, Duration)> {
        let mut timings: Vec<(Algorithm, Duration)> = Vec::new();
        for report in &self.reports {
            match timings.iter_mut().find(|(a, _)| *a == report.algorithm) {
                Some(slot) => slot.1 = report.elapsed,
                None => timings.push((report.algorithm, report.elapsed)),
            }
        }
        timings
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::risk_graph;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("Best First Search".parse::<Algorithm>().unwrap(), Algorithm::BestFirst);
        assert_eq!("best-first".parse::<Algorithm>().unwrap(), Algorithm::BestFirst);
        assert_eq!("Beam Search".parse::<Algorithm>().unwrap(), Algorithm::Beam);
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("AO* Search".parse::<Algorithm>().unwrap(), Algorithm::AOStar);
        assert!(matches!(
            "dijkstra".parse::<Algorithm>(),
            Err(SearchError::InvalidSelection(_))
        ));
        assert!("".parse::<Algorithm>().is_err());
        assert!("search".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_names_parse_back() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_run_search_report() {
        let report = run_search(
            risk_graph(),
            Algorithm::AStar,
            RiskLevel::Medium,
            &SearchConfig::default(),
        )
        .unwrap();

        assert!(report.found());
        assert_eq!(report.start, "Start");
        assert_eq!(
            report.path.as_deref().unwrap(),
            ["Start", "Sneezing", "Allergies", "Medium_Risk"]
        );
        assert_eq!(report.path_cost, Some(3.0));
        assert_eq!(report.nodes_expanded, 4);
    }

    #[test]
    fn test_run_search_rejects_bad_config() {
        let config = SearchConfig::default().with_beam_width(0);
        let result = run_search(risk_graph(), Algorithm::AStar, RiskLevel::Low, &config);

        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_beam_no_path_is_not_an_error() {
        let report = run_search(
            risk_graph(),
            Algorithm::Beam,
            RiskLevel::High,
            &SearchConfig::default(),
        )
        .unwrap();

        assert!(!report.found());
        assert_eq!(report.path_cost, None);
        assert!(report.render_text().contains("no path found"));
    }

    #[test]
    fn test_render_text() {
        let report = SearchReport {
            algorithm: Algorithm::BestFirst,
            start: "Start".to_string(),
            goal: RiskLevel::Low,
            path: Some(vec!["Start".into(), "Cough".into(), "Cold".into(), "Low_Risk".into()]),
            path_cost: Some(3.0),
            nodes_expanded: 7,
            peak_frontier: 4,
            elapsed: Duration::from_millis(12),
        };

        let text = report.render_text();
        assert!(text.contains("Algorithm: Best First Search"));
        assert!(text.contains("Path to Risk Assessment: Start -> Cough -> Cold -> Low_Risk"));
        assert!(text.contains("Nodes Expanded: 7"));
        assert!(text.contains("Time Taken: 0.0120 seconds"));
    }

    #[test]
    fn test_history_keeps_latest_timing_in_first_use_order() {
        let mut history = RunHistory::new();
        let config = SearchConfig::default();

        for algorithm in [Algorithm::AStar, Algorithm::Beam, Algorithm::AStar] {
            let mut report = run_search(risk_graph(), algorithm, RiskLevel::Low, &config).unwrap();
            report.elapsed = Duration::from_millis(history.len() as u64 + 1);
            history.record(report);
        }

        let timings = history.timings();
        assert_eq!(history.len(), 3);
        assert_eq!(
            timings,
            vec![
                (Algorithm::AStar, Duration::from_millis(3)),
                (Algorithm::Beam, Duration::from_millis(2)),
            ]
        );
        assert_eq!(history.latest().unwrap().algorithm, Algorithm::AStar);

        history.clear();
        assert!(history.is_empty());
        assert!(history.timings().is_empty());
    }
}
