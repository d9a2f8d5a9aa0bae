//! # delivery-router
//!
//! Delivery route optimization over weighted road networks: single-criterion
//! shortest paths, a Pareto multi-objective search, greedy multi-stop route
//! construction, and spatial clustering of destinations.
//!
//! Edges carry up to three criteria (distance in km, time in hours, cost);
//! absent metrics are backfilled from the great-circle distance between the
//! edge's endpoints. Single-criterion searches reduce the criteria to one
//! number via the weighted sum `α·distance + β·time + γ·cost`; the Pareto
//! search keeps the full nondominated frontier instead.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (road graph, criteria vectors, problem points, routes, scenarios)
//! - [`distance`] — Great-circle distance
//! - [`search`] — Single-criterion Dijkstra and A* over a scalarized edge weight
//! - [`pareto`] — Multi-objective Pareto label-setting search
//! - [`projection`] — Nearest-node projection of free-form map points
//! - [`sequencer`] — Multi-stop route construction, refinement, and per-cluster planning
//! - [`clustering`] — k-means partitioning of destinations

pub mod clustering;
pub mod distance;
pub mod models;
pub mod pareto;
pub mod projection;
pub mod search;
pub mod sequencer;
