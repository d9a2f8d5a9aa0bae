//! Scalarized edge weights and the search heuristic.

use crate::distance::haversine_km;
use crate::models::{CostModel, CriteriaVector, RoadEdge, RoadNode, Weights};

/// Resolved criteria of an edge, with absent metrics backfilled from the
/// great-circle distance between its endpoints.
pub(crate) fn edge_metrics(
    edge: &RoadEdge,
    from: &RoadNode,
    to: &RoadNode,
    costs: &CostModel,
) -> CriteriaVector {
    let fallback = haversine_km((from.lat, from.lng), (to.lat, to.lng));
    edge.metrics(fallback, costs)
}

/// Scalarized cost of travelling the great-circle distance from `from` to
/// `goal` at the fallback speed and unit price.
///
/// This is a lower bound on the remaining path weight — and therefore an
/// admissible A* heuristic — only while no edge is cheaper than its
/// geodesic-derived cost. That is the caller's contract on the graph.
pub(crate) fn heuristic_weight(
    from: &RoadNode,
    goal: &RoadNode,
    weights: &Weights,
    costs: &CostModel,
) -> f64 {
    let dist = haversine_km((from.lat, from.lng), (goal.lat, goal.lng));
    CriteriaVector::new(dist, dist / costs.speed_kmh(), dist * costs.price_per_km())
        .scalarized(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_metrics_uses_endpoint_geodesic_as_fallback() {
        let from = RoadNode::new("a", 50.45, 30.52);
        let to = RoadNode::new("b", 50.46, 30.53);
        let edge = RoadEdge::new("e", "a", "b");
        let m = edge_metrics(&edge, &from, &to, &CostModel::default());
        let expected = haversine_km((50.45, 30.52), (50.46, 30.53));
        assert!((m.distance - expected).abs() < 1e-12);
        assert!((m.time - expected / 60.0).abs() < 1e-12);
        assert!((m.cost - expected).abs() < 1e-12);
    }

    #[test]
    fn test_heuristic_is_geodesic_lower_bound() {
        let from = RoadNode::new("a", 50.45, 30.52);
        let goal = RoadNode::new("b", 50.46, 30.53);
        let weights = Weights::new(1.0, 2.0, 3.0).expect("valid");
        let costs = CostModel::default();

        // A real edge at least as expensive as the straight line in every
        // criterion must weigh at least the heuristic.
        let edge = RoadEdge::new("e", "a", "b").with_metrics(1.5, 0.05, 1.5);
        let h = heuristic_weight(&from, &goal, &weights, &costs);
        let w = edge_metrics(&edge, &from, &goal, &costs).scalarized(&weights);
        assert!(h <= w);
    }

    #[test]
    fn test_heuristic_zero_at_goal() {
        let n = RoadNode::new("a", 50.45, 30.52);
        let weights = Weights::new(1.0, 1.0, 1.0).expect("valid");
        assert_eq!(heuristic_weight(&n, &n, &weights, &CostModel::default()), 0.0);
    }
}
