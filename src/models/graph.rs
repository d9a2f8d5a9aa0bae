//! Road network graph and its derived adjacency view.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{CostModel, CriteriaVector};

/// Identifier of a road-graph node.
pub type NodeId = String;

/// A node of the road network. Identity is `id`; coordinates are fixed
/// once the graph is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNode {
    /// Node identifier.
    pub id: NodeId,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl RoadNode {
    /// Creates a node.
    pub fn new(id: impl Into<NodeId>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
        }
    }
}

/// A directed road segment. A bidirectional road is two edges.
///
/// Metrics may be partially known; [`RoadEdge::metrics`] resolves the gaps
/// from a caller-supplied geodesic fallback distance without ever mutating
/// the stored edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    /// Edge identifier.
    pub id: String,
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// Length in kilometers, if known.
    pub distance: Option<f64>,
    /// Travel time in hours, if known.
    pub time: Option<f64>,
    /// Monetary cost, if known.
    pub cost: Option<f64>,
}

impl RoadEdge {
    /// Creates an edge with no known metrics.
    pub fn new(id: impl Into<String>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            distance: None,
            time: None,
            cost: None,
        }
    }

    /// Sets all three metrics.
    pub fn with_metrics(mut self, distance: f64, time: f64, cost: f64) -> Self {
        self.distance = Some(distance);
        self.time = Some(time);
        self.cost = Some(cost);
        self
    }

    /// Sets the distance metric.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Sets the time metric.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the cost metric.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Resolves this edge's criteria, backfilling absent metrics from the
    /// given geodesic fallback distance: `distance = fallback`,
    /// `time = fallback / speed`, `cost = fallback · price`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_router::models::{CostModel, RoadEdge};
    ///
    /// let edge = RoadEdge::new("e", "a", "b").with_distance(2.0);
    /// let m = edge.metrics(1.2, &CostModel::default());
    /// assert_eq!(m.distance, 2.0);            // stored metric wins
    /// assert!((m.time - 1.2 / 60.0).abs() < 1e-12); // derived from fallback
    /// assert!((m.cost - 1.2).abs() < 1e-12);
    /// ```
    pub fn metrics(&self, fallback_km: f64, costs: &CostModel) -> CriteriaVector {
        CriteriaVector {
            distance: self.distance.unwrap_or(fallback_km),
            time: self
                .time
                .unwrap_or_else(|| fallback_km / costs.speed_kmh()),
            cost: self
                .cost
                .unwrap_or_else(|| fallback_km * costs.price_per_km()),
        }
    }
}

/// An outgoing edge reference: the edge's index in the graph's edge list
/// and the index of its target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef {
    /// Index into [`RoadGraph::edges`].
    pub edge: usize,
    /// Index of the target node.
    pub target: usize,
}

/// Outgoing-edge view of a [`RoadGraph`], keyed by node index.
///
/// Edges whose endpoints are not in the node set are omitted.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    outgoing: Vec<Vec<EdgeRef>>,
}

impl AdjacencyIndex {
    /// Outgoing edges of the node at `node` index (empty if out of range).
    pub fn outgoing(&self, node: usize) -> &[EdgeRef] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// An in-memory road network with lazily-built, memoized derived views:
/// a node-id lookup and an adjacency index.
///
/// The views are rebuilt after any mutation through [`RoadGraph::push_node`]
/// or [`RoadGraph::push_edge`]; they are never mutated independently of the
/// node and edge lists. The graph is meant to be immutable for the duration
/// of a search and is shareable across threads read-only.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{RoadEdge, RoadGraph, RoadNode};
///
/// let graph = RoadGraph::from_parts(
///     vec![RoadNode::new("a", 0.0, 0.0), RoadNode::new("b", 0.0, 0.1)],
///     vec![RoadEdge::new("e", "a", "b").with_metrics(11.0, 0.2, 11.0)],
/// );
/// let a = graph.node_idx("a").unwrap();
/// assert_eq!(graph.adjacency().outgoing(a).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    nodes: Vec<RoadNode>,
    edges: Vec<RoadEdge>,
    node_index: OnceLock<HashMap<NodeId, usize>>,
    adjacency: OnceLock<AdjacencyIndex>,
}

impl RoadGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from node and edge lists.
    pub fn from_parts(nodes: Vec<RoadNode>, edges: Vec<RoadEdge>) -> Self {
        Self {
            nodes,
            edges,
            node_index: OnceLock::new(),
            adjacency: OnceLock::new(),
        }
    }

    /// The node list.
    pub fn nodes(&self) -> &[RoadNode] {
        &self.nodes
    }

    /// The edge list.
    pub fn edges(&self) -> &[RoadEdge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Adds a node, invalidating the derived views.
    pub fn push_node(&mut self, node: RoadNode) {
        self.nodes.push(node);
        self.invalidate();
    }

    /// Adds an edge, invalidating the derived views.
    pub fn push_edge(&mut self, edge: RoadEdge) {
        self.edges.push(edge);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.node_index = OnceLock::new();
        self.adjacency = OnceLock::new();
    }

    /// The node at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn node(&self, idx: usize) -> &RoadNode {
        &self.nodes[idx]
    }

    /// Index of the node with the given id, if present.
    pub fn node_idx(&self, id: &str) -> Option<usize> {
        self.node_index().get(id).copied()
    }

    fn node_index(&self) -> &HashMap<NodeId, usize> {
        self.node_index.get_or_init(|| {
            self.nodes
                .iter()
                .enumerate()
                .map(|(i, n)| (n.id.clone(), i))
                .collect()
        })
    }

    /// The adjacency index, built on first use and memoized until the graph
    /// changes. Idempotent; an empty graph yields an empty index.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        self.adjacency.get_or_init(|| {
            let index = self.node_index();
            let mut outgoing = vec![Vec::new(); self.nodes.len()];
            for (ei, edge) in self.edges.iter().enumerate() {
                let (Some(&source), Some(&target)) =
                    (index.get(&edge.source), index.get(&edge.target))
                else {
                    continue;
                };
                outgoing[source].push(EdgeRef { edge: ei, target });
            }
            AdjacencyIndex { outgoing }
        })
    }
}
