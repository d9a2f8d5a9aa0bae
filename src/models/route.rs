//! Path and multi-stop route results.

use serde::Serialize;

use super::{CriteriaVector, NodeId};

/// Result of a single-criterion search: the node path from start to goal
/// (inclusive), its scalarized weight, and the raw per-criterion totals
/// accumulated along it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node ids from start to goal.
    pub path: Vec<NodeId>,
    /// Total `α·d + β·t + γ·c` weight of the path.
    pub total_weight: f64,
    /// Unscalarized per-criterion totals, for reporting.
    pub totals: CriteriaVector,
}

/// Which algorithm produced a planned route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAlgorithm {
    /// Greedy sequencing driven by Dijkstra.
    Dijkstra,
    /// Greedy sequencing driven by A*.
    AStar,
    /// Pareto label-setting refinement of a fixed order.
    #[serde(rename = "multi")]
    ParetoRefined,
}

/// A single-vehicle visiting sequence rooted at the depot.
///
/// `path` concatenates the node paths of consecutive legs, with each
/// leg's first node elided to avoid duplication; `totals` sums the legs'
/// per-criterion totals over the order actually visited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiStopRoute {
    /// Client ids in visiting order (depot implicit first).
    pub order: Vec<String>,
    /// Concatenated leg paths, depot node first.
    pub path: Vec<NodeId>,
    /// Accumulated per-criterion totals over the visited legs.
    pub totals: CriteriaVector,
    /// Cluster this route belongs to, or `None` for a global route.
    pub cluster: Option<usize>,
}

/// A multi-stop route tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    /// Producing algorithm.
    pub algorithm: RouteAlgorithm,
    /// The route itself.
    pub route: MultiStopRoute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_algorithm_serialized_tags() {
        assert_eq!(
            serde_json::to_string(&RouteAlgorithm::Dijkstra).expect("serializes"),
            "\"dijkstra\""
        );
        assert_eq!(
            serde_json::to_string(&RouteAlgorithm::AStar).expect("serializes"),
            "\"astar\""
        );
        assert_eq!(
            serde_json::to_string(&RouteAlgorithm::ParetoRefined).expect("serializes"),
            "\"multi\""
        );
    }

    #[test]
    fn test_multi_stop_route_serializes() {
        let route = MultiStopRoute {
            order: vec!["C1".into()],
            path: vec!["a".into(), "b".into()],
            totals: CriteriaVector::new(1.5, 0.05, 1.5),
            cluster: None,
        };
        let json = serde_json::to_value(&route).expect("serializes");
        assert_eq!(json["order"][0], "C1");
        assert_eq!(json["path"][1], "b");
        assert!(json["cluster"].is_null());
    }
}
