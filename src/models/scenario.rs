//! Persisted scenario document.

use serde::{Deserialize, Serialize};

use super::ProblemPoint;

/// The persisted scenario: the depot (if placed) and the ordered client
/// list.
///
/// The document is owned by the persistence layer; it is specified here so
/// that round-tripping reproduces identical point sets, including cached
/// node projections when present. Either field may be absent in a stored
/// document.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{ProblemPoint, Scenario};
///
/// let scenario = Scenario {
///     depot: Some(ProblemPoint::depot("Depot", 50.45, 30.52)),
///     clients: vec![ProblemPoint::client("C1", 50.46, 30.53)],
/// };
/// assert_eq!(scenario.clients.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// The depot, or `None` if not yet placed.
    #[serde(default)]
    pub depot: Option<ProblemPoint>,
    /// Clients in placement order.
    #[serde(default)]
    pub clients: Vec<ProblemPoint>,
}
