//! Totally ordered scalar for numeric domains.
//!
//! Bounds require `T: Ord`, which `f64` does not provide because of NaN.
//! [`Real`] wraps an `f64` that is known not to be NaN, making the float
//! usable as an interval endpoint.
use std::cmp::Ordering;
use std::fmt;

use crate::error::DomainError;

/// A real number: any `f64` except NaN, including both infinities.
///
/// # Invariants
///
/// - The wrapped value is never NaN
/// - Negative zero is stored as positive zero, so that the total order agrees
///   with the usual `<` on floats for every accepted value
#[derive(Debug, Copy, Clone)]
pub struct Real(f64);

impl Real {
    pub const ZERO: Real = Real(0.0);
    pub const INFINITY: Real = Real(f64::INFINITY);
    pub const NEG_INFINITY: Real = Real(f64::NEG_INFINITY);

    /// Wraps `value`, or returns `None` if it is NaN.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_nan() {
            None
        } else {
            // -0.0 + 0.0 == +0.0
            Some(Real(value + 0.0))
        }
    }

    /// Returns the raw `f64`.
    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl TryFrom<f64> for Real {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Real::new(value).ok_or(DomainError::NotANumber)
    }
}

impl From<Real> for f64 {
    fn from(real: Real) -> Self {
        real.0
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Real {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
