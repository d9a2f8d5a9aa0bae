//! Arena-resident Pareto labels and the search result.

use crate::models::{CriteriaVector, NodeId, RoadGraph, Weights};

/// One Pareto-nondominated partial path to a node: its cumulative criteria
/// and a link to the label it extends.
///
/// Labels are immutable snapshots stored in an append-only arena; `parent`
/// refers to a strictly earlier arena slot, so label chains form a DAG with
/// shared suffixes and no cycles. Dominated labels are dropped from the
/// per-node frontier but stay in the arena — surviving labels may still
/// reach them through parent links.
#[derive(Debug, Clone, Copy)]
pub struct Label {
    node: usize,
    costs: CriteriaVector,
    parent: Option<usize>,
}

impl Label {
    pub(crate) fn new(node: usize, costs: CriteriaVector, parent: Option<usize>) -> Self {
        Self {
            node,
            costs,
            parent,
        }
    }

    /// Cumulative criteria of the partial path this label represents.
    pub fn costs(&self) -> CriteriaVector {
        self.costs
    }

    pub(crate) fn node(&self) -> usize {
        self.node
    }

    pub(crate) fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// The Pareto frontier at the goal node, with the label arena needed to
/// reconstruct paths.
///
/// Borrowing the graph ties every reconstructed path to the snapshot the
/// search ran against. There is no single best label in multi-objective
/// space; a caller wanting one path applies its own tie-break —
/// [`best_scalarized`](ParetoResult::best_scalarized) is the linear one
/// used by the route sequencer.
#[derive(Debug, Clone)]
pub struct ParetoResult<'g> {
    graph: &'g RoadGraph,
    arena: Vec<Label>,
    frontier: Vec<usize>,
    truncated: bool,
}

impl<'g> ParetoResult<'g> {
    pub(crate) fn new(
        graph: &'g RoadGraph,
        arena: Vec<Label>,
        frontier: Vec<usize>,
        truncated: bool,
    ) -> Self {
        Self {
            graph,
            arena,
            frontier,
            truncated,
        }
    }

    pub(crate) fn empty(graph: &'g RoadGraph) -> Self {
        Self::new(graph, Vec::new(), Vec::new(), false)
    }

    /// Number of nondominated labels at the goal.
    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// `true` if the goal was unreachable (or unknown).
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// `true` if the label cap stopped the search before exhaustion; the
    /// frontier may then be incomplete.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Costs of the `i`-th frontier label.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn costs(&self, i: usize) -> CriteriaVector {
        self.arena[self.frontier[i]].costs()
    }

    /// Costs of every frontier label, in discovery order.
    pub fn iter_costs(&self) -> impl Iterator<Item = CriteriaVector> + '_ {
        self.frontier.iter().map(|&l| self.arena[l].costs())
    }

    /// Index of the frontier label minimizing `α·d + β·t + γ·c`, ties
    /// broken toward the first-discovered label. `None` on an empty
    /// frontier.
    pub fn best_scalarized(&self, weights: &Weights) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, costs) in self.iter_costs().enumerate() {
            let score = costs.scalarized(weights);
            if best.map_or(true, |(_, b)| score < b) {
                best = Some((i, score));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Reconstructs the node-id path of the `i`-th frontier label by
    /// walking parent links back to the start, then reversing.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn path(&self, i: usize) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut cur = Some(self.frontier[i]);
        while let Some(l) = cur {
            let label = &self.arena[l];
            ids.push(self.graph.node(label.node()).id.clone());
            cur = label.parent();
        }
        ids.reverse();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoadGraph, RoadNode};

    fn chain_fixture() -> (RoadGraph, Vec<Label>) {
        let graph = RoadGraph::from_parts(
            vec![
                RoadNode::new("a", 0.0, 0.0),
                RoadNode::new("b", 0.0, 0.1),
                RoadNode::new("c", 0.0, 0.2),
            ],
            vec![],
        );
        let arena = vec![
            Label::new(0, CriteriaVector::ZERO, None),
            Label::new(1, CriteriaVector::new(1.0, 0.1, 1.0), Some(0)),
            Label::new(2, CriteriaVector::new(2.0, 0.2, 2.0), Some(1)),
        ];
        (graph, arena)
    }

    #[test]
    fn test_path_walks_parent_chain_in_order() {
        let (graph, arena) = chain_fixture();
        let result = ParetoResult::new(&graph, arena, vec![2], false);
        assert_eq!(result.path(0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_best_scalarized_picks_minimum() {
        let (graph, mut arena) = chain_fixture();
        // A second label at c: longer but cheaper.
        arena.push(Label::new(2, CriteriaVector::new(3.0, 0.3, 0.5), Some(0)));
        let result = ParetoResult::new(&graph, arena, vec![2, 3], false);

        let by_distance = Weights::distance_only();
        assert_eq!(result.best_scalarized(&by_distance), Some(0));

        let by_cost = Weights::new(0.0, 0.0, 1.0).expect("valid");
        assert_eq!(result.best_scalarized(&by_cost), Some(1));
    }

    #[test]
    fn test_empty_result() {
        let (graph, _) = chain_fixture();
        let result = ParetoResult::empty(&graph);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(!result.truncated());
        assert_eq!(result.best_scalarized(&Weights::distance_only()), None);
    }
}
