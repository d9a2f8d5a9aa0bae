//! Multi-objective label-setting search.
//!
//! # Algorithm
//!
//! Label-correcting breadth expansion from the start node over a FIFO
//! queue. Each popped label is extended along every outgoing edge; the
//! child label is kept only if no label already stored at its node
//! dominates it, and stored labels the child dominates are evicted. The
//! search runs to exhaustion over the reachable graph rather than stopping
//! when the goal is first reached: a label at the goal is only certified
//! nondominated once every nondominated path through the graph has been
//! considered.
//!
//! # Complexity caveat
//!
//! The queue is not deduplicated by node and dominance class, so graphs
//! with many incomparable tradeoffs produce superlinear label counts, and
//! zero-cost cycles never exhaust on their own. That is the accepted cost
//! of exactness; [`ParetoConfig::with_max_labels`] bounds memory when a
//! bound matters more than completeness.

use std::collections::VecDeque;

use super::label::{Label, ParetoResult};
use crate::models::{CostModel, CriteriaVector, RoadGraph};
use crate::search::edge_metrics;

/// Tuning for the label-setting search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParetoConfig {
    max_labels: Option<usize>,
}

impl ParetoConfig {
    /// Unbounded search (the default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of labels the search may allocate. When the cap is
    /// reached, expansion stops and the frontier collected so far is
    /// returned with [`truncated`](ParetoResult::truncated) set — possibly
    /// incomplete, but never wrong about the labels it does contain being
    /// mutually nondominated.
    pub fn with_max_labels(mut self, cap: usize) -> Self {
        self.max_labels = Some(cap);
        self
    }

    /// The configured cap, if any.
    pub fn max_labels(&self) -> Option<usize> {
        self.max_labels
    }
}

/// Runs the label-setting search and returns the Pareto frontier at `goal`.
///
/// Unknown endpoints yield an empty frontier, as does an unreachable goal —
/// both are normal outcomes. `start == goal` yields the zero-cost seed
/// label. Absent edge metrics are backfilled from the geodesic distance
/// between the edge's endpoints, as in the single-criterion searches.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{CostModel, RoadEdge, RoadGraph, RoadNode};
/// use delivery_router::pareto::{label_setting, ParetoConfig};
///
/// let graph = RoadGraph::from_parts(
///     vec![RoadNode::new("a", 50.45, 30.52), RoadNode::new("b", 50.46, 30.53)],
///     vec![RoadEdge::new("e", "a", "b").with_metrics(1.5, 0.05, 1.5)],
/// );
/// let result = label_setting(&graph, "a", "b", &CostModel::default(), &ParetoConfig::new());
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.path(0), vec!["a", "b"]);
/// assert!((result.costs(0).distance - 1.5).abs() < 1e-12);
/// ```
pub fn label_setting<'g>(
    graph: &'g RoadGraph,
    start: &str,
    goal: &str,
    costs: &CostModel,
    config: &ParetoConfig,
) -> ParetoResult<'g> {
    let (Some(start_idx), Some(goal_idx)) = (graph.node_idx(start), graph.node_idx(goal)) else {
        return ParetoResult::empty(graph);
    };

    let adj = graph.adjacency();
    let mut arena: Vec<Label> = Vec::new();
    // Nondominated arena indices currently stored at each node.
    let mut at_node: Vec<Vec<usize>> = vec![Vec::new(); graph.num_nodes()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut truncated = false;

    arena.push(Label::new(start_idx, CriteriaVector::ZERO, None));
    at_node[start_idx].push(0);
    queue.push_back(0);

    'expand: while let Some(cur) = queue.pop_front() {
        let cur_node = arena[cur].node();
        let cur_costs = arena[cur].costs();

        for er in adj.outgoing(cur_node) {
            let m = edge_metrics(
                &graph.edges()[er.edge],
                graph.node(cur_node),
                graph.node(er.target),
                costs,
            );
            let child_costs = cur_costs + m;

            if at_node[er.target]
                .iter()
                .any(|&i| arena[i].costs().dominates(&child_costs))
            {
                continue;
            }

            if let Some(cap) = config.max_labels() {
                if arena.len() >= cap {
                    truncated = true;
                    break 'expand;
                }
            }

            at_node[er.target].retain(|&i| !child_costs.dominates(&arena[i].costs()));

            let idx = arena.len();
            arena.push(Label::new(er.target, child_costs, Some(cur)));
            at_node[er.target].push(idx);
            queue.push_back(idx);
        }
    }

    let frontier = at_node[goal_idx].clone();
    ParetoResult::new(graph, arena, frontier, truncated)
}
