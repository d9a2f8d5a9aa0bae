//! Single-criterion Dijkstra search.
//!
//! # Algorithm
//!
//! Classic non-negative relaxation over the scalarized weight
//! `α·distance + β·time + γ·cost`. Extraction is a linear scan over the
//! unsettled nodes with a first-encountered tie-break, so repeated runs on
//! the same graph are reproducible (though not stable under node
//! reordering). The search stops as soon as the goal is settled.
//!
//! # Complexity
//!
//! O(n² + m) over n nodes and m edges.

use super::cost::edge_metrics;
use crate::models::{CostModel, CriteriaVector, PathResult, RoadGraph, Weights};

/// Runs Dijkstra between two node ids.
///
/// Alongside the scalarized weight, the raw per-criterion totals along the
/// best-known path are accumulated for reporting. Returns `None` when
/// either endpoint is unknown or the goal is unreachable — a normal
/// outcome, not an error. `start == goal` yields a single-node path with
/// zero totals.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{CostModel, RoadEdge, RoadGraph, RoadNode, Weights};
/// use delivery_router::search::dijkstra;
///
/// let graph = RoadGraph::from_parts(
///     vec![RoadNode::new("a", 50.45, 30.52), RoadNode::new("b", 50.46, 30.53)],
///     vec![RoadEdge::new("e", "a", "b").with_metrics(1.5, 0.05, 1.5)],
/// );
/// let weights = Weights::new(1.0, 0.0, 0.0).unwrap();
/// let result = dijkstra(&graph, "a", "b", &weights, &CostModel::default()).unwrap();
/// assert_eq!(result.path, vec!["a", "b"]);
/// assert!((result.total_weight - 1.5).abs() < 1e-9);
/// ```
pub fn dijkstra(
    graph: &RoadGraph,
    start: &str,
    goal: &str,
    weights: &Weights,
    costs: &CostModel,
) -> Option<PathResult> {
    let start_idx = graph.node_idx(start)?;
    let goal_idx = graph.node_idx(goal)?;
    let n = graph.num_nodes();
    let adj = graph.adjacency();

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut totals = vec![CriteriaVector::ZERO; n];
    let mut unsettled = vec![true; n];
    let mut remaining = n;

    dist[start_idx] = 0.0;

    while remaining > 0 {
        let mut u = None;
        for i in 0..n {
            if unsettled[i] && u.map_or(true, |best: usize| dist[i] < dist[best]) {
                u = Some(i);
            }
        }
        let Some(u) = u else { break };
        unsettled[u] = false;
        remaining -= 1;

        if u == goal_idx {
            break;
        }
        if dist[u].is_infinite() {
            // only unreachable nodes remain
            break;
        }

        for er in adj.outgoing(u) {
            let m = edge_metrics(
                &graph.edges()[er.edge],
                graph.node(u),
                graph.node(er.target),
                costs,
            );
            let alt = dist[u] + m.scalarized(weights);
            if alt < dist[er.target] {
                dist[er.target] = alt;
                prev[er.target] = Some(u);
                totals[er.target] = totals[u] + m;
            }
        }
    }

    if dist[goal_idx].is_infinite() && start_idx != goal_idx {
        return None;
    }

    Some(PathResult {
        path: walk_back(graph, &prev, start_idx, goal_idx),
        total_weight: dist[goal_idx],
        totals: totals[goal_idx],
    })
}

/// Rebuilds the node-id path goal-to-start along predecessor links, then
/// reverses it.
pub(crate) fn walk_back(
    graph: &RoadGraph,
    prev: &[Option<usize>],
    start_idx: usize,
    goal_idx: usize,
) -> Vec<String> {
    let mut indices = vec![goal_idx];
    let mut cur = goal_idx;
    while cur != start_idx {
        let Some(p) = prev[cur] else { break };
        cur = p;
        indices.push(cur);
    }
    indices.reverse();
    indices
        .into_iter()
        .map(|i| graph.node(i).id.clone())
        .collect()
}
