//! Multi-stop route construction.
//!
//! Sequencing always runs as a pair over the same destination subset:
//! a greedy nearest-insertion pass driven by a single-criterion search
//! picks the visiting order, then an order-preserving pass re-optimizes
//! each leg with the Pareto search. [`plan_routes`] runs the whole
//! comparison (Dijkstra greedy, A* greedy, Pareto refinement of the
//! Dijkstra order); [`cluster_routes`] does the same per k-means cluster.

mod greedy;
mod plan;
mod refine;

pub use greedy::greedy_route;
pub use plan::{cluster_routes, plan_routes};
pub use refine::refine_route;

use crate::models::{CostModel, ProblemPoint, RoadGraph, Weights};

/// Inputs shared by every route-construction variant: the graph snapshot,
/// the depot, the destination subset, the scalarization weights, the
/// fallback cost model, and the cluster the subset came from (if any).
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest<'a> {
    /// The road network, immutable for the duration of the request.
    pub graph: &'a RoadGraph,
    /// Route origin.
    pub depot: &'a ProblemPoint,
    /// Destinations to sequence.
    pub clients: &'a [ProblemPoint],
    /// Scalarization weights.
    pub weights: Weights,
    /// Fallback cost model for partially known edges.
    pub costs: CostModel,
    /// Cluster index for per-cluster routes, `None` for a global route.
    pub cluster: Option<usize>,
}
