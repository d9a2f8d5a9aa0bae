//! Order-preserving multi-objective refinement.
//!
//! Takes a visiting order as given (typically the greedy Dijkstra order)
//! and re-optimizes each leg with the Pareto search. This is the one place
//! where scalarization meets the Pareto frontier: the search produces a
//! set of nondominated labels per leg, and the refiner collapses each set
//! to a single label by the same linear `α·d + β·t + γ·c` used elsewhere,
//! so the assembled route is again one path.

use std::collections::HashMap;

use super::RouteRequest;
use crate::models::{CriteriaVector, MultiStopRoute, NodeId, ProblemPoint};
use crate::pareto::{label_setting, ParetoConfig};
use crate::projection::ProjectionCache;

/// Re-optimizes each leg of a fixed visiting `order` with the Pareto
/// search.
///
/// Order entries that are unknown, unprojectable, or unreachable from the
/// current position are skipped, so the effective order may be a strict
/// subset of the input. Returns `None` for an empty input order, an
/// unprojectable depot, or when every leg is skipped.
pub fn refine_route(
    request: &RouteRequest<'_>,
    order: &[String],
    config: &ParetoConfig,
) -> Option<MultiStopRoute> {
    if order.is_empty() {
        return None;
    }

    let by_id: HashMap<&str, &ProblemPoint> = request
        .clients
        .iter()
        .map(|c| (c.id.as_str(), c))
        .collect();
    let mut projections = ProjectionCache::new();
    let depot_node = projections.node_for(request.graph, request.depot)?;

    let mut current = depot_node.clone();
    let mut path: Vec<NodeId> = vec![depot_node];
    let mut totals = CriteriaVector::ZERO;
    let mut effective: Vec<String> = Vec::new();

    for client_id in order {
        let Some(client) = by_id.get(client_id.as_str()) else {
            continue;
        };
        let Some(target) = projections.node_for(request.graph, client) else {
            continue;
        };

        let frontier = label_setting(request.graph, &current, &target, &request.costs, config);
        let Some(best) = frontier.best_scalarized(&request.weights) else {
            continue;
        };
        let leg_path = frontier.path(best);
        if leg_path.len() < 2 {
            continue;
        }

        totals = totals + frontier.costs(best);
        path.extend(leg_path.into_iter().skip(1));
        effective.push(client_id.clone());
        current = target;
    }

    if effective.is_empty() {
        return None;
    }

    Some(MultiStopRoute {
        order: effective,
        path,
        totals,
        cluster: request.cluster,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostModel, RoadEdge, RoadGraph, RoadNode, Weights};

    /// d → b with two parallel corridors per direction: via `s` short but
    /// slow, via `f` long but fast.
    fn corridor_graph() -> RoadGraph {
        RoadGraph::from_parts(
            vec![
                RoadNode::new("d", 50.450, 30.520),
                RoadNode::new("s", 50.455, 30.525),
                RoadNode::new("f", 50.455, 30.515),
                RoadNode::new("b", 50.460, 30.530),
            ],
            vec![
                RoadEdge::new("d-s", "d", "s").with_metrics(1.0, 0.10, 1.0),
                RoadEdge::new("s-b", "s", "b").with_metrics(1.0, 0.10, 1.0),
                RoadEdge::new("d-f", "d", "f").with_metrics(3.0, 0.02, 3.0),
                RoadEdge::new("f-b", "f", "b").with_metrics(3.0, 0.02, 3.0),
            ],
        )
    }

    fn request<'a>(
        graph: &'a RoadGraph,
        depot: &'a ProblemPoint,
        clients: &'a [ProblemPoint],
        weights: Weights,
    ) -> RouteRequest<'a> {
        RouteRequest {
            graph,
            depot,
            clients,
            weights,
            costs: CostModel::default(),
            cluster: None,
        }
    }

    #[test]
    fn test_empty_order_no_route() {
        let graph = corridor_graph();
        let depot = ProblemPoint::depot("Depot", 50.450, 30.520);
        let clients = vec![ProblemPoint::client("C1", 50.460, 30.530)];
        let req = request(&graph, &depot, &clients, Weights::distance_only());
        assert!(refine_route(&req, &[], &ParetoConfig::new()).is_none());
    }

    #[test]
    fn test_distance_weights_pick_short_corridor() {
        let graph = corridor_graph();
        let depot = ProblemPoint::depot("Depot", 50.450, 30.520);
        let clients = vec![ProblemPoint::client("C1", 50.460, 30.530)];
        let req = request(&graph, &depot, &clients, Weights::distance_only());
        let route =
            refine_route(&req, &["C1".to_string()], &ParetoConfig::new()).expect("reachable");
        assert_eq!(route.order, vec!["C1"]);
        assert_eq!(route.path, vec!["d", "s", "b"]);
        assert!((route.totals.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_time_weights_pick_fast_corridor() {
        let graph = corridor_graph();
        let depot = ProblemPoint::depot("Depot", 50.450, 30.520);
        let clients = vec![ProblemPoint::client("C1", 50.460, 30.530)];
        let weights = Weights::new(0.0, 1.0, 0.0).expect("valid");
        let req = request(&graph, &depot, &clients, weights);
        let route =
            refine_route(&req, &["C1".to_string()], &ParetoConfig::new()).expect("reachable");
        assert_eq!(route.path, vec!["d", "f", "b"]);
        assert!((route.totals.time - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_order_entry_skipped() {
        let graph = corridor_graph();
        let depot = ProblemPoint::depot("Depot", 50.450, 30.520);
        let clients = vec![ProblemPoint::client("C1", 50.460, 30.530)];
        let req = request(&graph, &depot, &clients, Weights::distance_only());
        let order = vec!["Ghost".to_string(), "C1".to_string()];
        let route = refine_route(&req, &order, &ParetoConfig::new()).expect("reachable");
        assert_eq!(route.order, vec!["C1"]);
    }

    #[test]
    fn test_unreachable_leg_excluded_from_effective_order() {
        let mut graph = corridor_graph();
        graph.push_node(RoadNode::new("island", 51.0, 31.0));
        let depot = ProblemPoint::depot("Depot", 50.450, 30.520);
        let clients = vec![
            ProblemPoint::client("Stranded", 51.0, 31.0),
            ProblemPoint::client("C1", 50.460, 30.530),
        ];
        let req = request(&graph, &depot, &clients, Weights::distance_only());
        let order = vec!["Stranded".to_string(), "C1".to_string()];
        let route = refine_route(&req, &order, &ParetoConfig::new()).expect("reachable");
        // The stranded stop is dropped; the rest of the order still runs.
        assert_eq!(route.order, vec!["C1"]);
        assert_eq!(route.path, vec!["d", "s", "b"]);
    }

    #[test]
    fn test_all_legs_unreachable_no_route() {
        let mut graph = corridor_graph();
        graph.push_node(RoadNode::new("island", 51.0, 31.0));
        let depot = ProblemPoint::depot("Depot", 50.450, 30.520);
        let clients = vec![ProblemPoint::client("Stranded", 51.0, 31.0)];
        let req = request(&graph, &depot, &clients, Weights::distance_only());
        assert!(refine_route(&req, &["Stranded".to_string()], &ParetoConfig::new()).is_none());
    }

    #[test]
    fn test_totals_accumulate_across_legs() {
        // Two stops chained through the corridor graph extended by a tail.
        let mut graph = corridor_graph();
        graph.push_node(RoadNode::new("t", 50.465, 30.535));
        graph.push_edge(RoadEdge::new("b-t", "b", "t").with_metrics(1.0, 0.01, 1.0));
        let depot = ProblemPoint::depot("Depot", 50.450, 30.520);
        let clients = vec![
            ProblemPoint::client("C1", 50.460, 30.530),
            ProblemPoint::client("C2", 50.465, 30.535),
        ];
        let req = request(&graph, &depot, &clients, Weights::distance_only());
        let order = vec!["C1".to_string(), "C2".to_string()];
        let route = refine_route(&req, &order, &ParetoConfig::new()).expect("reachable");
        assert_eq!(route.order, vec!["C1", "C2"]);
        assert_eq!(route.path, vec!["d", "s", "b", "t"]);
        // 2 km to C1's node plus 1 km onward.
        assert!((route.totals.distance - 3.0).abs() < 1e-12);
        assert!((route.totals.time - 0.21).abs() < 1e-12);
    }
}
