//! Deterministic k-means clustering.
//!
//! # Algorithm
//!
//! Lloyd's algorithm over raw `(lat, lng)` treated as a Euclidean plane —
//! an acceptable approximation at city scale; no geodesic correction is
//! attempted. Initialization takes the first `k` input points (sensitive
//! to input order, reproducible), the assignment step tie-breaks toward
//! the lowest center index, and the iteration count is fixed rather than
//! convergence-detected, so two runs on the same input always produce the
//! same output.
//!
//! # Complexity
//!
//! O(iterations · n · k) over n points.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::ProblemPoint;

/// Iteration count used by the route planner.
pub const DEFAULT_ITERATIONS: usize = 25;

/// A cluster centroid on the (lat, lng) plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Final centers and the point-id → cluster-index assignment.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ClusterResult {
    /// One centroid per cluster.
    pub centers: Vec<Centroid>,
    /// Cluster index of every input point.
    pub assignments: HashMap<String, usize>,
}

fn squared_planar(lat: f64, lng: f64, center: &Centroid) -> f64 {
    let dx = lat - center.lat;
    let dy = lng - center.lng;
    dx * dx + dy * dy
}

/// Partitions `points` into `k` clusters, `k` clamped to
/// `[1, points.len()]`.
///
/// An empty input yields an empty result. A center that loses all its
/// points keeps its position for that iteration.
///
/// # Examples
///
/// ```
/// use delivery_router::clustering::{k_means, DEFAULT_ITERATIONS};
/// use delivery_router::models::ProblemPoint;
///
/// let points = vec![
///     ProblemPoint::client("C1", 50.45, 30.52),
///     ProblemPoint::client("C2", 50.46, 30.53),
///     ProblemPoint::client("C3", 50.70, 30.90),
/// ];
/// let result = k_means(&points, 2, DEFAULT_ITERATIONS);
/// assert_eq!(result.centers.len(), 2);
/// assert_eq!(result.assignments.len(), 3);
/// // The far-away point sits alone.
/// assert_ne!(result.assignments["C3"], result.assignments["C1"]);
/// ```
pub fn k_means(points: &[ProblemPoint], k: usize, iterations: usize) -> ClusterResult {
    if points.is_empty() {
        return ClusterResult::default();
    }
    let k = k.clamp(1, points.len());

    let mut centers: Vec<Centroid> = points[..k]
        .iter()
        .map(|p| Centroid {
            lat: p.lat,
            lng: p.lng,
        })
        .collect();
    let mut assignment = vec![0usize; points.len()];

    for _ in 0..iterations {
        for (pi, p) in points.iter().enumerate() {
            let mut best_idx = 0;
            let mut best_dist = f64::INFINITY;
            for (ci, center) in centers.iter().enumerate() {
                let d = squared_planar(p.lat, p.lng, center);
                if d < best_dist {
                    best_dist = d;
                    best_idx = ci;
                }
            }
            assignment[pi] = best_idx;
        }

        let mut sum_lat = vec![0.0; centers.len()];
        let mut sum_lng = vec![0.0; centers.len()];
        let mut count = vec![0usize; centers.len()];
        for (pi, p) in points.iter().enumerate() {
            let ci = assignment[pi];
            sum_lat[ci] += p.lat;
            sum_lng[ci] += p.lng;
            count[ci] += 1;
        }
        for (ci, center) in centers.iter_mut().enumerate() {
            if count[ci] > 0 {
                *center = Centroid {
                    lat: sum_lat[ci] / count[ci] as f64,
                    lng: sum_lng[ci] / count[ci] as f64,
                };
            }
        }
    }

    let assignments = points
        .iter()
        .zip(&assignment)
        .map(|(p, &ci)| (p.id.clone(), ci))
        .collect();
    ClusterResult {
        centers,
        assignments,
    }
}
