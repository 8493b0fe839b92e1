//! Priority frontier shared by the searches
//!
//! Entries are ordered by `(priority, node)`. Node ids follow label order,
//! so equal priorities pop in lexicographic label order.

use crate::graph::NodeId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// How a neighbor's frontier priority is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Heuristic only (greedy best-first, beam)
    Heuristic,

    /// Accumulated cost plus heuristic (A*)
    CostPlusHeuristic,
}

impl Priority {
    /// Priority for a node reached at `cost` with heuristic `heuristic`
    pub fn score(self, cost: f64, heuristic: f64) -> f64 {
        match self {
            Priority::Heuristic => heuristic,
            Priority::CostPlusHeuristic => cost + heuristic,
        }
    }
}

/// A discovered node waiting to be expanded
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub priority: f64,
    pub node: NodeId,
}

impl FrontierEntry {
    pub fn new(priority: f64, node: NodeId) -> Self {
        Self { priority, node }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    /// Ascending by priority, then by node id
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Min-priority queue of frontier entries
///
/// Stale entries for nodes relaxed more than once are left in place and
/// popped like any other.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    peak: usize,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Frontier seeded with a single entry
    pub fn with_start(priority: f64, node: NodeId) -> Self {
        let mut frontier = Self::new();
        frontier.push(priority, node);
        frontier
    }

    /// Frontier holding exactly `entries`
    pub fn from_entries(entries: impl IntoIterator<Item = FrontierEntry>) -> Self {
        let heap: BinaryHeap<_> = entries.into_iter().map(Reverse).collect();
        let peak = heap.len();
        Self { heap, peak }
    }

    pub fn push(&mut self, priority: f64, node: NodeId) {
        self.heap.push(Reverse(FrontierEntry::new(priority, node)));
        self.peak = self.peak.max(self.heap.len());
    }

    /// Remove the lowest `(priority, node)` entry
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached
    pub fn peak(&self) -> usize {
        self.peak
    }
}
