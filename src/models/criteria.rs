//! Criteria vectors, scalarization weights, and the fallback cost model.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Per-criterion quantities accumulated along a path: distance (km),
/// time (hours), and monetary cost.
///
/// This is the unit of comparison across the whole crate. Vectors are only
/// meaningful relative to the graph snapshot they were computed against.
///
/// # Examples
///
/// ```
/// use delivery_router::models::{CriteriaVector, Weights};
///
/// let a = CriteriaVector::new(2.0, 0.1, 3.0);
/// let b = CriteriaVector::new(1.0, 0.2, 1.0);
/// let sum = a + b;
/// assert!((sum.distance - 3.0).abs() < 1e-12);
///
/// let w = Weights::new(1.0, 0.0, 0.0).unwrap();
/// assert!((a.scalarized(&w) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriteriaVector {
    /// Travelled distance in kilometers.
    pub distance: f64,
    /// Travel time in hours.
    pub time: f64,
    /// Monetary cost.
    pub cost: f64,
}

impl CriteriaVector {
    /// The zero vector.
    pub const ZERO: Self = Self {
        distance: 0.0,
        time: 0.0,
        cost: 0.0,
    };

    /// Creates a criteria vector.
    pub fn new(distance: f64, time: f64, cost: f64) -> Self {
        Self {
            distance,
            time,
            cost,
        }
    }

    /// Reduces this vector to one number: `α·distance + β·time + γ·cost`.
    pub fn scalarized(&self, weights: &Weights) -> f64 {
        weights.alpha() * self.distance + weights.beta() * self.time + weights.gamma() * self.cost
    }

    /// Pareto dominance: `true` if `self` is not worse than `other` in any
    /// criterion and strictly better in at least one.
    ///
    /// Dominance is a strict partial order: no vector dominates itself, and
    /// `a.dominates(&b)` excludes `b.dominates(&a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_router::models::CriteriaVector;
    ///
    /// let cheap = CriteriaVector::new(1.0, 0.5, 1.0);
    /// let dear = CriteriaVector::new(2.0, 0.5, 1.0);
    /// assert!(cheap.dominates(&dear));
    /// assert!(!dear.dominates(&cheap));
    /// assert!(!cheap.dominates(&cheap));
    /// ```
    pub fn dominates(&self, other: &Self) -> bool {
        let not_worse =
            self.distance <= other.distance && self.time <= other.time && self.cost <= other.cost;
        let strictly_better =
            self.distance < other.distance || self.time < other.time || self.cost < other.cost;
        not_worse && strictly_better
    }
}

impl Add for CriteriaVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            distance: self.distance + rhs.distance,
            time: self.time + rhs.time,
            cost: self.cost + rhs.cost,
        }
    }
}

/// Non-negative scalarization weights `(α, β, γ)` over distance, time, cost.
///
/// All-zero weights are allowed: every edge then weighs zero and all paths
/// tie — a documented boundary, not an error.
///
/// # Examples
///
/// ```
/// use delivery_router::models::Weights;
///
/// let w = Weights::new(1.0, 0.5, 0.0).unwrap();
/// assert_eq!(w.alpha(), 1.0);
/// assert!(Weights::new(-1.0, 0.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl Weights {
    /// Creates scalarization weights.
    ///
    /// Returns `None` if any weight is negative or non-finite.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Option<Self> {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        if !valid(alpha) || !valid(beta) || !valid(gamma) {
            return None;
        }
        Some(Self { alpha, beta, gamma })
    }

    /// Weights that count distance only: `(1, 0, 0)`.
    pub fn distance_only() -> Self {
        Self {
            alpha: 1.0,
            beta: 0.0,
            gamma: 0.0,
        }
    }

    /// Weight on the distance criterion.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Weight on the time criterion.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Weight on the cost criterion.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

/// Fallback cost model for edges with missing metrics.
///
/// When an edge lacks `time` or `cost`, they are derived from the geodesic
/// fallback distance as `time = distance / speed_kmh` and
/// `cost = distance * price_per_km`. The same model prices the A* heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    speed_kmh: f64,
    price_per_km: f64,
}

impl CostModel {
    /// Creates a cost model.
    ///
    /// Returns `None` unless `speed_kmh` is finite and positive and
    /// `price_per_km` is finite and non-negative.
    pub fn new(speed_kmh: f64, price_per_km: f64) -> Option<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return None;
        }
        if !price_per_km.is_finite() || price_per_km < 0.0 {
            return None;
        }
        Some(Self {
            speed_kmh,
            price_per_km,
        })
    }

    /// Assumed travel speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Assumed price per travelled kilometer.
    pub fn price_per_km(&self) -> f64 {
        self.price_per_km
    }
}

impl Default for CostModel {
    /// 60 km/h and 1.0 per km.
    fn default() -> Self {
        Self {
            speed_kmh: 60.0,
            price_per_km: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add() {
        let sum = CriteriaVector::new(1.0, 2.0, 3.0) + CriteriaVector::new(0.5, 0.25, 0.75);
        assert!((sum.distance - 1.5).abs() < 1e-12);
        assert!((sum.time - 2.25).abs() < 1e-12);
        assert!((sum.cost - 3.75).abs() < 1e-12);
    }

    #[test]
    fn test_scalarized() {
        let v = CriteriaVector::new(2.0, 3.0, 4.0);
        let w = Weights::new(1.0, 10.0, 100.0).expect("valid");
        assert!((v.scalarized(&w) - 432.0).abs() < 1e-12);
    }

    #[test]
    fn test_scalarized_zero_weights() {
        let v = CriteriaVector::new(2.0, 3.0, 4.0);
        let w = Weights::new(0.0, 0.0, 0.0).expect("all-zero is allowed");
        assert_eq!(v.scalarized(&w), 0.0);
    }

    #[test]
    fn test_dominates_strictly_better_everywhere() {
        let a = CriteriaVector::new(1.0, 1.0, 1.0);
        let b = CriteriaVector::new(2.0, 2.0, 2.0);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_dominates_equal_is_false() {
        let a = CriteriaVector::new(1.0, 2.0, 3.0);
        assert!(!a.dominates(&a));
    }

    #[test]
    fn test_dominates_single_criterion_improvement() {
        let a = CriteriaVector::new(1.0, 2.0, 3.0);
        let b = CriteriaVector::new(1.0, 2.0, 3.5);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_dominates_tradeoff_is_incomparable() {
        let short_slow = CriteriaVector::new(1.0, 5.0, 1.0);
        let long_fast = CriteriaVector::new(5.0, 1.0, 1.0);
        assert!(!short_slow.dominates(&long_fast));
        assert!(!long_fast.dominates(&short_slow));
    }

    #[test]
    fn test_weights_validation() {
        assert!(Weights::new(1.0, 0.0, 0.0).is_some());
        assert!(Weights::new(0.0, 0.0, 0.0).is_some());
        assert!(Weights::new(-0.1, 0.0, 0.0).is_none());
        assert!(Weights::new(0.0, f64::NAN, 0.0).is_none());
        assert!(Weights::new(0.0, 0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_weights_distance_only() {
        let w = Weights::distance_only();
        assert_eq!(w.alpha(), 1.0);
        assert_eq!(w.beta(), 0.0);
        assert_eq!(w.gamma(), 0.0);
    }

    #[test]
    fn test_cost_model_validation() {
        assert!(CostModel::new(60.0, 1.0).is_some());
        assert!(CostModel::new(0.0, 1.0).is_none());
        assert!(CostModel::new(-10.0, 1.0).is_none());
        assert!(CostModel::new(60.0, -1.0).is_none());
        assert!(CostModel::new(f64::NAN, 1.0).is_none());
    }

    #[test]
    fn test_cost_model_default() {
        let m = CostModel::default();
        assert_eq!(m.speed_kmh(), 60.0);
        assert_eq!(m.price_per_km(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_dominance_is_asymmetric(
            d1 in 0.0..100.0f64, t1 in 0.0..100.0f64, c1 in 0.0..100.0f64,
            d2 in 0.0..100.0f64, t2 in 0.0..100.0f64, c2 in 0.0..100.0f64,
        ) {
            let a = CriteriaVector::new(d1, t1, c1);
            let b = CriteriaVector::new(d2, t2, c2);
            if a.dominates(&b) {
                prop_assert!(!b.dominates(&a));
            }
        }

        #[test]
        fn prop_dominance_is_irreflexive(
            d in 0.0..100.0f64, t in 0.0..100.0f64, c in 0.0..100.0f64,
        ) {
            let v = CriteriaVector::new(d, t, c);
            prop_assert!(!v.dominates(&v));
        }
    }
}
