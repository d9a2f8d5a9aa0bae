//! Greedy nearest-insertion route construction.
//!
//! # Algorithm
//!
//! Starting at the depot's projected node, evaluate every remaining
//! destination by running the chosen single-criterion search to it, append
//! the one with the lowest scalarized weight, advance there, repeat. Stops
//! when the remaining set is exhausted or no remaining destination is
//! reachable. Myopic by design: each pick is locally optimal only, which
//! keeps latency bounded at O(clients² · search).

use super::RouteRequest;
use crate::models::{CriteriaVector, MultiStopRoute, NodeId, PathResult};
use crate::projection::ProjectionCache;
use crate::search::SearchAlgorithm;

/// Builds a multi-stop route by greedy nearest insertion.
///
/// Destinations that cannot be projected or reached are dropped; the
/// returned order covers only what was actually visited. Returns `None`
/// when there are no clients, the depot cannot be projected, or no client
/// is reachable at all.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{CostModel, ProblemPoint, RoadEdge, RoadGraph, RoadNode, Weights};
/// use delivery_router::search::SearchAlgorithm;
/// use delivery_router::sequencer::{greedy_route, RouteRequest};
///
/// let graph = RoadGraph::from_parts(
///     vec![RoadNode::new("a", 50.45, 30.52), RoadNode::new("b", 50.46, 30.53)],
///     vec![RoadEdge::new("e", "a", "b").with_metrics(1.5, 0.05, 1.5)],
/// );
/// let depot = ProblemPoint::depot("Depot", 50.4501, 30.5201);
/// let clients = vec![ProblemPoint::client("C1", 50.4601, 30.5301)];
/// let request = RouteRequest {
///     graph: &graph,
///     depot: &depot,
///     clients: &clients,
///     weights: Weights::distance_only(),
///     costs: CostModel::default(),
///     cluster: None,
/// };
/// let route = greedy_route(&request, SearchAlgorithm::Dijkstra).unwrap();
/// assert_eq!(route.order, vec!["C1"]);
/// assert_eq!(route.path, vec!["a", "b"]);
/// ```
pub fn greedy_route(
    request: &RouteRequest<'_>,
    algorithm: SearchAlgorithm,
) -> Option<MultiStopRoute> {
    if request.clients.is_empty() {
        return None;
    }

    let mut projections = ProjectionCache::new();
    let depot_node = projections.node_for(request.graph, request.depot)?;

    let mut remaining: Vec<usize> = (0..request.clients.len()).collect();
    let mut current = depot_node.clone();
    let mut order: Vec<String> = Vec::new();
    let mut path: Vec<NodeId> = vec![depot_node];
    let mut totals = CriteriaVector::ZERO;

    while !remaining.is_empty() {
        let mut best: Option<(usize, NodeId, PathResult)> = None;

        for (slot, &ci) in remaining.iter().enumerate() {
            let candidate = &request.clients[ci];
            let Some(target) = projections.node_for(request.graph, candidate) else {
                continue;
            };
            let Some(leg) = algorithm.run(
                request.graph,
                &current,
                &target,
                &request.weights,
                &request.costs,
            ) else {
                continue;
            };
            if leg.path.len() < 2 {
                continue;
            }
            if best
                .as_ref()
                .map_or(true, |(_, _, b)| leg.total_weight < b.total_weight)
            {
                best = Some((slot, target, leg));
            }
        }

        let Some((slot, target, leg)) = best else { break };
        let chosen = remaining.remove(slot);

        order.push(request.clients[chosen].id.clone());
        path.extend(leg.path.iter().skip(1).cloned());
        totals = totals + leg.totals;
        current = target;
    }

    if order.is_empty() {
        return None;
    }

    Some(MultiStopRoute {
        order,
        path,
        totals,
        cluster: request.cluster,
    })
}
