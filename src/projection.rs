//! Nearest-node projection of free-form map points.
//!
//! Depot and client points live anywhere on the map; routing needs a graph
//! node for each. Projection scans the node set for the smallest
//! great-circle distance. Each routing request owns its own
//! [`ProjectionCache`] so repeated lookups of the same point stay cheap
//! without any global mutable state.

use std::collections::HashMap;

use crate::distance::haversine_km;
use crate::models::{NodeId, ProblemPoint, RoadGraph};

/// A point projected onto the road graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Id of the nearest graph node.
    pub node_id: NodeId,
    /// Great-circle distance to it in kilometers.
    pub distance_km: f64,
}

/// Returns the graph node nearest to `(lat, lng)`, or `None` on an empty
/// graph. Ties keep the first-encountered node.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{RoadGraph, RoadNode};
/// use delivery_router::projection::nearest_node;
///
/// let graph = RoadGraph::from_parts(
///     vec![RoadNode::new("far", 51.0, 31.0), RoadNode::new("near", 50.451, 30.524)],
///     vec![],
/// );
/// let p = nearest_node(&graph, 50.4501, 30.5234).unwrap();
/// assert_eq!(p.node_id, "near");
/// ```
pub fn nearest_node(graph: &RoadGraph, lat: f64, lng: f64) -> Option<Projection> {
    let mut best: Option<(usize, f64)> = None;
    for (i, node) in graph.nodes().iter().enumerate() {
        let d = haversine_km((lat, lng), (node.lat, node.lng));
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, d)| Projection {
        node_id: graph.node(i).id.clone(),
        distance_km: d,
    })
}

/// Per-request memoization of point projections, keyed by point id.
///
/// A point's own cached projection wins; otherwise the first lookup scans
/// the graph and the outcome — including "no node" — is remembered for the
/// rest of the request. One cache serves one routing request against one
/// graph snapshot; it is never shared across requests.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    by_point: HashMap<String, Option<NodeId>>,
}

impl ProjectionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The projected node id for `point`, or `None` if the graph has no
    /// nodes.
    pub fn node_for(&mut self, graph: &RoadGraph, point: &ProblemPoint) -> Option<NodeId> {
        if let Some(id) = &point.nearest_node_id {
            return Some(id.clone());
        }
        if let Some(cached) = self.by_point.get(&point.id) {
            return cached.clone();
        }
        let found = nearest_node(graph, point.lat, point.lng).map(|p| p.node_id);
        self.by_point.insert(point.id.clone(), found.clone());
        found
    }
}
