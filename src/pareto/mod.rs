//! Pareto multi-objective label-setting search.
//!
//! Replaces scalarization with true dominance: vector `a` dominates `b` iff
//! `a` is not worse in any criterion and strictly better in at least one.
//! The search keeps, per node, every nondominated partial path ("label")
//! and returns the full frontier at the goal — possibly more than one
//! label, since no single best path exists in multi-objective space.

mod label;
mod search;

pub use label::{Label, ParetoResult};
pub use search::{label_setting, ParetoConfig};
