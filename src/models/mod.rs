//! Domain model types for the routing core.
//!
//! Provides the road network graph with its memoized adjacency view,
//! criteria vectors with scalarization and Pareto dominance, depot/client
//! problem points with cached projections, route result records, and the
//! persisted scenario document.

mod criteria;
mod graph;
mod point;
mod route;
mod scenario;

pub use criteria::{CostModel, CriteriaVector, Weights};
pub use graph::{AdjacencyIndex, EdgeRef, NodeId, RoadEdge, RoadGraph, RoadNode};
pub use point::{PointKind, ProblemPoint};
pub use route::{MultiStopRoute, PathResult, PlannedRoute, RouteAlgorithm};
pub use scenario::Scenario;
