//! Spatial clustering of destinations.
//!
//! Partitions client points into geographic groups before routing, so each
//! group gets its own multi-stop route.

mod kmeans;

pub use kmeans::{k_means, Centroid, ClusterResult, DEFAULT_ITERATIONS};
