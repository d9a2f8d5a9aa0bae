//! Single-criterion shortest-path search.
//!
//! Dijkstra and A* over the scalarized edge weight
//! `α·distance + β·time + γ·cost`. Edge metrics that are absent are
//! backfilled from the great-circle distance between the edge's endpoints;
//! both searches also accumulate the raw per-criterion totals along the
//! best-known path for reporting.

mod astar;
mod cost;
mod dijkstra;

pub use astar::astar;
pub use dijkstra::dijkstra;

pub(crate) use cost::edge_metrics;

use crate::models::{CostModel, PathResult, RoadGraph, Weights};

/// Selection between the two single-criterion algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    /// Classic relaxation over the full node set.
    Dijkstra,
    /// Heuristic-guided relaxation over an open set.
    AStar,
}

impl SearchAlgorithm {
    /// Runs the selected search between two node ids.
    pub fn run(
        &self,
        graph: &RoadGraph,
        start: &str,
        goal: &str,
        weights: &Weights,
        costs: &CostModel,
    ) -> Option<PathResult> {
        match self {
            SearchAlgorithm::Dijkstra => dijkstra(graph, start, goal, weights, costs),
            SearchAlgorithm::AStar => astar(graph, start, goal, weights, costs),
        }
    }
}
