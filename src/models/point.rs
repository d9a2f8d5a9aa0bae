//! Depot and client points placed on the map.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Whether a problem point is the depot or a client destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PointKind {
    /// The single route origin.
    Depot,
    /// A delivery destination.
    Client,
}

/// A free-form map point — the depot or a client — optionally carrying its
/// cached projection onto the nearest road-graph node.
///
/// The projection is computed once and travels with the point; repositioning
/// clears it so the next routing request re-projects. Serialized under the
/// persisted scenario spelling (`type`, `nearestNodeId`, `nearestNodeDistKm`).
///
/// # Examples
///
/// ```
/// use delivery_router::models::ProblemPoint;
///
/// let mut client = ProblemPoint::client("C1", 50.46, 30.53)
///     .with_projection("n42", 0.08);
/// assert_eq!(client.nearest_node_id.as_deref(), Some("n42"));
///
/// client.reposition(50.47, 30.54);
/// assert!(client.nearest_node_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemPoint {
    /// Point identifier (unique among points, not a graph node id).
    pub id: String,
    /// Depot or client.
    #[serde(rename = "type")]
    pub kind: PointKind,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Cached id of the nearest graph node, if projected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_node_id: Option<NodeId>,
    /// Cached great-circle distance to that node in km.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_node_dist_km: Option<f64>,
}

impl ProblemPoint {
    /// Creates a depot point with no cached projection.
    pub fn depot(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            kind: PointKind::Depot,
            lat,
            lng,
            nearest_node_id: None,
            nearest_node_dist_km: None,
        }
    }

    /// Creates a client point with no cached projection.
    pub fn client(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            kind: PointKind::Client,
            lat,
            lng,
            nearest_node_id: None,
            nearest_node_dist_km: None,
        }
    }

    /// Attaches a cached projection.
    pub fn with_projection(mut self, node_id: impl Into<NodeId>, dist_km: f64) -> Self {
        self.nearest_node_id = Some(node_id.into());
        self.nearest_node_dist_km = Some(dist_km);
        self
    }

    /// Moves the point, clearing the now-stale projection.
    pub fn reposition(&mut self, lat: f64, lng: f64) {
        self.lat = lat;
        self.lng = lng;
        self.nearest_node_id = None;
        self.nearest_node_dist_km = None;
    }
}
