//! Route planning across algorithms and clusters.

use super::{greedy_route, refine_route, RouteRequest};
use crate::clustering::{k_means, ClusterResult};
use crate::models::{PlannedRoute, RouteAlgorithm};
use crate::pareto::ParetoConfig;
use crate::search::SearchAlgorithm;

/// Runs the full algorithm comparison over one destination subset:
/// a Dijkstra-driven greedy route, an independent A*-driven greedy route,
/// and — when the Dijkstra route exists — the Pareto refinement of its
/// order. Routes that cannot be built are simply absent from the result.
///
/// The stages are pure and run back-to-back; any pacing between them for
/// an interactive host is the caller's concern.
pub fn plan_routes(request: &RouteRequest<'_>, config: &ParetoConfig) -> Vec<PlannedRoute> {
    let dijkstra_route = greedy_route(request, SearchAlgorithm::Dijkstra);
    let astar_route = greedy_route(request, SearchAlgorithm::AStar);
    let refined = dijkstra_route
        .as_ref()
        .and_then(|route| refine_route(request, &route.order, config));

    let mut planned = Vec::new();
    if let Some(route) = dijkstra_route {
        planned.push(PlannedRoute {
            algorithm: RouteAlgorithm::Dijkstra,
            route,
        });
    }
    if let Some(route) = astar_route {
        planned.push(PlannedRoute {
            algorithm: RouteAlgorithm::AStar,
            route,
        });
    }
    if let Some(route) = refined {
        planned.push(PlannedRoute {
            algorithm: RouteAlgorithm::ParetoRefined,
            route,
        });
    }
    planned
}

/// Partitions the request's clients into `k` clusters, then plans routes
/// per non-empty cluster; each planned route carries its cluster index.
///
/// Returns the clustering together with the routes so callers can relate
/// assignments to routes. Any cluster whose clients yield no route
/// contributes nothing.
///
/// # Examples
///
/// ```
/// use delivery_router::clustering::DEFAULT_ITERATIONS;
/// use delivery_router::models::{CostModel, ProblemPoint, RoadEdge, RoadGraph, RoadNode, Weights};
/// use delivery_router::pareto::ParetoConfig;
/// use delivery_router::sequencer::{cluster_routes, RouteRequest};
///
/// let graph = RoadGraph::from_parts(
///     vec![RoadNode::new("a", 50.45, 30.52), RoadNode::new("b", 50.46, 30.53)],
///     vec![
///         RoadEdge::new("ab", "a", "b").with_metrics(1.5, 0.05, 1.5),
///         RoadEdge::new("ba", "b", "a").with_metrics(1.5, 0.05, 1.5),
///     ],
/// );
/// let depot = ProblemPoint::depot("Depot", 50.45, 30.52);
/// let clients = vec![ProblemPoint::client("C1", 50.46, 30.53)];
/// let request = RouteRequest {
///     graph: &graph,
///     depot: &depot,
///     clients: &clients,
///     weights: Weights::distance_only(),
///     costs: CostModel::default(),
///     cluster: None,
/// };
/// let (clustering, routes) =
///     cluster_routes(&request, 1, DEFAULT_ITERATIONS, &ParetoConfig::new());
/// assert_eq!(clustering.centers.len(), 1);
/// assert!(routes.iter().all(|r| r.route.cluster == Some(0)));
/// ```
pub fn cluster_routes(
    request: &RouteRequest<'_>,
    k: usize,
    iterations: usize,
    config: &ParetoConfig,
) -> (ClusterResult, Vec<PlannedRoute>) {
    let clustering = k_means(request.clients, k, iterations);
    let mut planned = Vec::new();

    for cluster in 0..clustering.centers.len() {
        let subset: Vec<_> = request
            .clients
            .iter()
            .filter(|c| clustering.assignments.get(&c.id) == Some(&cluster))
            .cloned()
            .collect();
        if subset.is_empty() {
            continue;
        }
        let sub_request = RouteRequest {
            clients: &subset,
            cluster: Some(cluster),
            ..*request
        };
        planned.extend(plan_routes(&sub_request, config));
    }

    (clustering, planned)
}
