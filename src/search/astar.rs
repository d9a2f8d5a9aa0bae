//! Single-criterion A* search.
//!
//! # Algorithm
//!
//! The same relaxation discipline as [`dijkstra`](super::dijkstra),
//! restricted to an open set and guided by the geodesic heuristic of
//! [`cost`](super::cost): the scalarized cost of covering the great-circle
//! distance to the goal at the fallback speed and unit price. The heuristic
//! is admissible only while no edge is cheaper than its geodesic-derived
//! lower bound; with edges cheaper than the straight line, optimality is
//! not guaranteed.

use super::cost::{edge_metrics, heuristic_weight};
use super::dijkstra::walk_back;
use crate::models::{CostModel, CriteriaVector, PathResult, RoadGraph, Weights};

/// Runs A* between two node ids.
///
/// Same contract as [`dijkstra`](super::dijkstra): raw per-criterion totals
/// accompany the scalarized weight, `None` signals an unknown endpoint or
/// an unreachable goal, and `start == goal` yields a single-node path with
/// zero totals.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{CostModel, RoadEdge, RoadGraph, RoadNode, Weights};
/// use delivery_router::search::astar;
///
/// let graph = RoadGraph::from_parts(
///     vec![RoadNode::new("a", 50.45, 30.52), RoadNode::new("b", 50.46, 30.53)],
///     vec![RoadEdge::new("e", "a", "b").with_metrics(1.5, 0.05, 1.5)],
/// );
/// let weights = Weights::new(1.0, 0.0, 0.0).unwrap();
/// let result = astar(&graph, "a", "b", &weights, &CostModel::default()).unwrap();
/// assert_eq!(result.path, vec!["a", "b"]);
/// assert!((result.total_weight - 1.5).abs() < 1e-9);
/// ```
pub fn astar(
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
    let goal_node = graph.node(goal_idx);

    let mut open = vec![false; n];
    let mut open_count = 1usize;
    let mut came_from: Vec<Option<usize>> = vec![None; n];
    let mut g_score = vec![f64::INFINITY; n];
    let mut f_score = vec![f64::INFINITY; n];
    let mut totals = vec![CriteriaVector::ZERO; n];

    open[start_idx] = true;
    g_score[start_idx] = 0.0;
    f_score[start_idx] = heuristic_weight(graph.node(start_idx), goal_node, weights, costs);

    while open_count > 0 {
        let mut current = None;
        for i in 0..n {
            if open[i] && current.map_or(true, |best: usize| f_score[i] < f_score[best]) {
                current = Some(i);
            }
        }
        let Some(current) = current else { break };

        if current == goal_idx {
            break;
        }
        open[current] = false;
        open_count -= 1;

        for er in adj.outgoing(current) {
            let m = edge_metrics(
                &graph.edges()[er.edge],
                graph.node(current),
                graph.node(er.target),
                costs,
            );
            let tentative = g_score[current] + m.scalarized(weights);
            if tentative < g_score[er.target] {
                came_from[er.target] = Some(current);
                g_score[er.target] = tentative;
                totals[er.target] = totals[current] + m;
                f_score[er.target] =
                    tentative + heuristic_weight(graph.node(er.target), goal_node, weights, costs);
                if !open[er.target] {
                    open[er.target] = true;
                    open_count += 1;
                }
            }
        }
    }

    if came_from[goal_idx].is_none() && start_idx != goal_idx {
        return None;
    }

    Some(PathResult {
        path: walk_back(graph, &came_from, start_idx, goal_idx),
        total_weight: g_score[goal_idx],
        totals: totals[goal_idx],
    })
}
