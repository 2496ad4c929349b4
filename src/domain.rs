//! Numeric domains: unions of disjoint real intervals.
//!
//! A [`Domain`] restricts floating-point values to a permitted subset of the
//! real line, such as "positive numbers" or "everything except zero". It offers
//! two ways of enforcing the restriction:
//!
//! - [`Domain::constrain`] is strict: values outside the domain are rejected.
//! - [`Domain::bound`] clamps: values outside the domain are projected onto the
//!   nearest boundary.
//!
//! An open boundary has no nearest member, so clamping approximates it by a
//! closed value nudged inward by a small step (see [`DomainConfig`]).
//!
//! # Predefined domains
//!
//! | name             | set                 |
//! |------------------|---------------------|
//! | [`ALL`]          | `(-∞, +∞)`          |
//! | [`POSITIVE`]     | `(0, +∞)`           |
//! | [`NEGATIVE`]     | `(-∞, 0)`           |
//! | [`NON_NEGATIVE`] | `[0, +∞)`           |
//! | [`NON_POSITIVE`] | `(-∞, 0]`           |
//! | [`NON_ZERO`]     | `(-∞, 0) ∪ (0, +∞)` |
//!
//! # Example
//!
//! ```rust
//! use intervals_rs::domain::{DomainConfig, NON_NEGATIVE, POSITIVE};
//! use intervals_rs::error::DomainError;
//!
//! assert_eq!(POSITIVE.bound(5.0), Ok(5.0));
//! assert_eq!(POSITIVE.bound(-5.0), Ok(DomainConfig::default().step()));
//!
//! assert_eq!(NON_NEGATIVE.constrain(0.0), Ok(0.0));
//! assert_eq!(NON_NEGATIVE.constrain(-0.1), Err(DomainError::OutOfDomain { value: -0.1 }));
//! ```

use std::fmt;
use std::sync::LazyLock;

use log::{debug, warn};

use crate::bound::{Limit, LowerBound, UpperBound};
use crate::error::DomainError;
use crate::interval::Interval;
use crate::set::IntervalSet;
use crate::types::Real;

/// Default step used to nudge open boundaries.
pub const DEFAULT_STEP: f64 = 1e-50;

pub static ALL: LazyLock<Domain> = LazyLock::new(|| Domain::from(Interval::unbounded()));
pub static POSITIVE: LazyLock<Domain> = LazyLock::new(|| Domain::from(Interval::greater_than(Real::ZERO)));
pub static NEGATIVE: LazyLock<Domain> = LazyLock::new(|| Domain::from(Interval::less_than(Real::ZERO)));
pub static NON_NEGATIVE: LazyLock<Domain> = LazyLock::new(|| Domain::from(Interval::at_least(Real::ZERO)));
pub static NON_POSITIVE: LazyLock<Domain> = LazyLock::new(|| Domain::from(Interval::at_most(Real::ZERO)));
pub static NON_ZERO: LazyLock<Domain> = LazyLock::new(|| NEGATIVE.union(&POSITIVE));

/// Numeric settings of a [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainConfig {
    step: f64,
}

impl DomainConfig {
    /// Creates a configuration with the given nudge step.
    ///
    /// The step must be finite and strictly positive.
    pub fn new(step: f64) -> Result<Self, DomainError> {
        if step.is_finite() && step > 0.0 {
            Ok(Self { step })
        } else {
            Err(DomainError::InvalidStep { step })
        }
    }

    /// Distance by which an open boundary is moved inward when clamping.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

/// Moves `value` up by `step`, or to the next float if `step` is lost to rounding.
fn nudge_up(value: f64, step: f64) -> f64 {
    let nudged = value + step;
    if nudged > value {
        nudged
    } else {
        value.next_up()
    }
}

fn nudge_down(value: f64, step: f64) -> f64 {
    let nudged = value - step;
    if nudged < value {
        nudged
    } else {
        value.next_down()
    }
}

impl LowerBound<Real> {
    /// Closed value approximating this bound.
    ///
    /// `-∞` if unbounded, the value itself if inclusive, the value nudged up by
    /// `step` if exclusive.
    pub fn effective_value(&self, step: f64) -> f64 {
        match self.limit() {
            Limit::Unbounded => f64::NEG_INFINITY,
            Limit::Value(v) if self.is_inclusive() => v.get(),
            Limit::Value(v) => nudge_up(v.get(), step),
        }
    }
}

impl UpperBound<Real> {
    /// Closed value approximating this bound.
    ///
    /// `+∞` if unbounded, the value itself if inclusive, the value nudged down
    /// by `step` if exclusive.
    pub fn effective_value(&self, step: f64) -> f64 {
        match self.limit() {
            Limit::Unbounded => f64::INFINITY,
            Limit::Value(v) if self.is_inclusive() => v.get(),
            Limit::Value(v) => nudge_down(v.get(), step),
        }
    }
}

/// A subset of the real line made of disjoint intervals.
///
/// The member intervals are always kept in canonical form: sorted, merged,
/// and without empty members.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    set: IntervalSet<Real>,
    config: DomainConfig,
}

impl Domain {
    /// Creates a domain from `set` with the default configuration.
    pub fn new(set: IntervalSet<Real>) -> Self {
        Self::with_config(set, DomainConfig::default())
    }

    /// Creates a domain from `set`, normalizing it.
    pub fn with_config(mut set: IntervalSet<Real>, config: DomainConfig) -> Self {
        set.normalize();
        Self { set, config }
    }

    /// A domain that contains nothing.
    pub fn empty() -> Self {
        Self::new(IntervalSet::new())
    }

    pub fn set(&self) -> &IntervalSet<Real> {
        &self.set
    }

    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Returns true if the domain contains no value at all.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Returns true if `x` belongs to the domain. NaN never does.
    pub fn contains(&self, x: f64) -> bool {
        Real::new(x).is_some_and(|x| self.set.contains(&x))
    }

    /// Effective value of the lowest boundary, or `None` for an empty domain.
    pub fn lower_value(&self) -> Option<f64> {
        self.set.lower_bound().map(|b| b.effective_value(self.config.step))
    }

    /// Effective value of the highest boundary, or `None` for an empty domain.
    pub fn upper_value(&self) -> Option<f64> {
        self.set.upper_bound().map(|b| b.effective_value(self.config.step))
    }

    /// Nearest point of `interval` to `x`, using effective boundary values.
    fn nearest_in(&self, interval: &Interval<Real>, x: Real) -> f64 {
        if !interval.lower().admits(&x) {
            interval.lower().effective_value(self.config.step)
        } else if !interval.upper().admits(&x) {
            interval.upper().effective_value(self.config.step)
        } else {
            x.get()
        }
    }

    /// Index of the member nearest to `x`. Ties go to the lower member.
    fn closest_index(&self, x: Real) -> Option<usize> {
        let members = self.set.as_slice();
        if members.is_empty() {
            return None;
        }
        // Every finite boundary is infinitely far from an infinite `x`; the
        // outermost member is the nearest one.
        if x == Real::INFINITY {
            return Some(members.len() - 1);
        }
        if x == Real::NEG_INFINITY {
            return Some(0);
        }
        members
            .iter()
            .map(|i| (x.get() - self.nearest_in(i, x)).abs())
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
    }

    /// Member interval nearest to `x`.
    ///
    /// Returns `None` if `x` is NaN or the domain is empty.
    pub fn closest_interval(&self, x: f64) -> Option<&Interval<Real>> {
        let x = Real::new(x)?;
        self.closest_index(x).map(|index| &self.set.as_slice()[index])
    }

    /// Point of the domain nearest to `x`.
    ///
    /// This is `x` itself when inside, otherwise the effective value of the
    /// nearest boundary. Returns `None` if `x` is NaN or the domain is empty.
    pub fn closest_bound(&self, x: f64) -> Option<f64> {
        let real = Real::new(x)?;
        let interval = self.closest_interval(x)?;
        Some(self.nearest_in(interval, real))
    }

    /// Distance from `x` to the domain; zero when inside.
    ///
    /// Open boundaries are measured at their effective value, so that
    /// `distance(x) == |x - bound(x)|`.
    pub fn distance(&self, x: f64) -> Result<f64, DomainError> {
        let real = self.check("distance", x)?;
        if self.set.contains(&real) {
            return Ok(0.0);
        }
        match self.closest_index(real) {
            Some(index) => {
                let interval = &self.set.as_slice()[index];
                Ok((x - self.nearest_in(interval, real)).abs())
            }
            None => Err(DomainError::EmptyDomain),
        }
    }

    /// Clamps `x` into the domain.
    ///
    /// Returns `x` unchanged if it lies inside, otherwise the effective value
    /// of the nearest boundary.
    pub fn bound(&self, x: f64) -> Result<f64, DomainError> {
        let real = self.check("bound", x)?;
        if self.set.contains(&real) {
            return Ok(x);
        }
        let index = self.closest_index(real).ok_or(DomainError::EmptyDomain)?;
        let interval = &self.set.as_slice()[index];
        let clamped = self.nearest_in(interval, real);
        debug!("bound: {} clamped to {} in {}", x, clamped, interval);
        if !self.contains(clamped) {
            warn!(
                "bound: step {} is too coarse for {}, clamped value {} lies outside",
                self.config.step, interval, clamped
            );
        }
        Ok(clamped)
    }

    /// Returns `x` if it lies inside the domain, without any clamping.
    pub fn constrain(&self, x: f64) -> Result<f64, DomainError> {
        let real = self.check("constrain", x)?;
        if self.set.contains(&real) {
            Ok(x)
        } else {
            warn!("constrain: {} is outside of {}", x, self);
            Err(DomainError::OutOfDomain { value: x })
        }
    }

    /// Union of two domains, keeping the configuration of `self`.
    pub fn union(&self, other: &Domain) -> Domain {
        Domain {
            set: self.set.union(&other.set),
            config: self.config,
        }
    }

    /// Rejects NaN input and empty domains, logging the reason.
    fn check(&self, op: &str, x: f64) -> Result<Real, DomainError> {
        let Some(real) = Real::new(x) else {
            warn!("{}: input is NaN", op);
            return Err(DomainError::NotANumber);
        };
        if self.is_empty() {
            warn!("{}: domain is empty, cannot handle {}", op, x);
            return Err(DomainError::EmptyDomain);
        }
        Ok(real)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Interval<Real>> for Domain {
    fn from(interval: Interval<Real>) -> Self {
        Self::new(IntervalSet::from(interval))
    }
}

impl From<IntervalSet<Real>> for Domain {
    fn from(set: IntervalSet<Real>) -> Self {
        Self::new(set)
    }
}

impl FromIterator<Interval<Real>> for Domain {
    fn from_iter<I: IntoIterator<Item = Interval<Real>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn real(x: f64) -> Real {
        Real::new(x).unwrap()
    }

    fn gap_domain() -> Domain {
        [Interval::closed(real(0.0), real(2.0)), Interval::open(real(5.0), real(7.0))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_config() {
        assert_eq!(DomainConfig::default().step(), DEFAULT_STEP);
        assert_eq!(DomainConfig::new(1e-9).map(|c| c.step()), Ok(1e-9));
        assert_eq!(DomainConfig::new(0.0), Err(DomainError::InvalidStep { step: 0.0 }));
        assert_eq!(DomainConfig::new(-1.0), Err(DomainError::InvalidStep { step: -1.0 }));
        assert!(DomainConfig::new(f64::INFINITY).is_err());
        assert!(DomainConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn test_effective_values() {
        let step = 0.5;
        assert_eq!(LowerBound::inclusive(real(1.0)).effective_value(step), 1.0);
        assert_eq!(LowerBound::exclusive(real(1.0)).effective_value(step), 1.5);
        assert_eq!(LowerBound::<Real>::unbounded().effective_value(step), f64::NEG_INFINITY);
        assert_eq!(UpperBound::inclusive(real(1.0)).effective_value(step), 1.0);
        assert_eq!(UpperBound::exclusive(real(1.0)).effective_value(step), 0.5);
        assert_eq!(UpperBound::<Real>::unbounded().effective_value(step), f64::INFINITY);
    }

    #[test]
    fn test_effective_value_absorbed_step() {
        // 1.0 + 1e-50 rounds back to 1.0
        let v = LowerBound::exclusive(real(1.0)).effective_value(DEFAULT_STEP);
        assert!(v > 1.0);
        assert_eq!(v, 1.0f64.next_up());
        let v = UpperBound::exclusive(real(1.0)).effective_value(DEFAULT_STEP);
        assert!(v < 1.0);
    }

    #[test]
    fn test_predefined_membership() {
        assert!(ALL.contains(-1e300));
        assert!(ALL.contains(f64::INFINITY));
        assert!(!ALL.contains(f64::NAN));

        assert!(POSITIVE.contains(1e-300));
        assert!(!POSITIVE.contains(0.0));
        assert!(NEGATIVE.contains(-1e-300));
        assert!(!NEGATIVE.contains(0.0));
        assert!(NON_NEGATIVE.contains(0.0));
        assert!(NON_NEGATIVE.contains(-0.0));
        assert!(!NON_NEGATIVE.contains(-1e-300));
        assert!(NON_POSITIVE.contains(0.0));
        assert!(!NON_POSITIVE.contains(1e-300));
        assert!(!NON_ZERO.contains(0.0));
        assert!(NON_ZERO.contains(3.0));
        assert!(NON_ZERO.contains(-3.0));
        assert_eq!(NON_ZERO.set().len(), 2);

        // Unbounded members make the predefined sets invalid
        assert!(!ALL.set().is_valid());
        assert!(!NON_ZERO.set().is_valid());
    }

    #[test]
    fn test_bound_clamps_to_open_boundary() {
        let clamped = POSITIVE.bound(-5.0).unwrap();
        assert!(clamped > 0.0);
        assert_eq!(clamped, DEFAULT_STEP);
        assert!(POSITIVE.contains(clamped));

        let clamped = NEGATIVE.bound(5.0).unwrap();
        assert_eq!(clamped, -DEFAULT_STEP);
    }

    #[test]
    fn test_bound_inside_is_identity() {
        assert_eq!(POSITIVE.bound(5.0), Ok(5.0));
        for x in [-1e10, -1.0, 0.0, 0.5, 1e10] {
            assert_eq!(ALL.bound(x), Ok(x));
        }
    }

    #[test]
    fn test_bound_closed_boundary() {
        assert_eq!(NON_NEGATIVE.bound(-3.0), Ok(0.0));
        assert_eq!(NON_POSITIVE.bound(3.0), Ok(0.0));
    }

    #[test]
    fn test_bound_with_custom_step() {
        let config = DomainConfig::new(0.25).unwrap();
        let domain = Domain::with_config(IntervalSet::from(Interval::open(real(0.0), real(1.0))), config);
        assert_eq!(domain.bound(-1.0), Ok(0.25));
        assert_eq!(domain.bound(2.0), Ok(0.75));
    }

    #[test]
    fn test_bound_picks_nearest_member() {
        let domain = gap_domain();
        assert_eq!(domain.bound(3.0), Ok(2.0));
        assert_eq!(domain.bound(4.5), Ok(5.0f64.next_up()));
        assert_eq!(domain.bound(-1.0), Ok(0.0));
        assert!(domain.bound(9.0).unwrap() < 7.0);
    }

    #[test]
    fn test_bound_infinite_input() {
        let domain = gap_domain();
        assert_eq!(domain.bound(f64::NEG_INFINITY), Ok(0.0));
        assert_eq!(domain.bound(f64::INFINITY), Ok(7.0f64.next_down()));
        assert_eq!(POSITIVE.bound(f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(NEGATIVE.bound(f64::INFINITY), Ok(-DEFAULT_STEP));
    }

    #[test]
    fn test_bound_rejects_nan_and_empty() {
        assert_eq!(POSITIVE.bound(f64::NAN), Err(DomainError::NotANumber));
        assert_eq!(Domain::empty().bound(1.0), Err(DomainError::EmptyDomain));
    }

    #[test]
    fn test_constrain() {
        assert_eq!(NON_NEGATIVE.constrain(0.0), Ok(0.0));
        assert_eq!(NON_NEGATIVE.constrain(-0.1), Err(DomainError::OutOfDomain { value: -0.1 }));
        assert_eq!(POSITIVE.constrain(0.0), Err(DomainError::OutOfDomain { value: 0.0 }));
        assert_eq!(ALL.constrain(f64::NAN), Err(DomainError::NotANumber));
        assert_eq!(Domain::empty().constrain(0.0), Err(DomainError::EmptyDomain));
    }

    #[test]
    fn test_distance() {
        let domain = gap_domain();
        assert_eq!(domain.distance(1.0), Ok(0.0));
        assert_eq!(domain.distance(3.0), Ok(1.0));
        assert_eq!(domain.distance(-2.0), Ok(2.0));
        assert_eq!(POSITIVE.distance(f64::INFINITY), Ok(0.0));
        assert_eq!(POSITIVE.distance(f64::NEG_INFINITY), Ok(f64::INFINITY));
        assert_eq!(domain.distance(f64::NAN), Err(DomainError::NotANumber));
        assert_eq!(Domain::empty().distance(1.0), Err(DomainError::EmptyDomain));

        for x in [-7.0, -0.5, 2.5, 4.9, 8.0, 100.0] {
            let clamped = domain.bound(x).unwrap();
            assert_eq!(domain.distance(x), Ok((x - clamped).abs()));
        }
    }

    #[test]
    fn test_closest() {
        let domain = gap_domain();
        assert_eq!(domain.closest_interval(3.0), Some(&Interval::closed(real(0.0), real(2.0))));
        assert_eq!(domain.closest_interval(4.0), Some(&Interval::open(real(5.0), real(7.0))));
        assert_eq!(domain.closest_bound(1.5), Some(1.5));
        assert_eq!(domain.closest_bound(-1.0), Some(0.0));
        assert_eq!(domain.closest_bound(f64::NAN), None);
        assert_eq!(Domain::empty().closest_interval(1.0), None);

        // Midway ties go to the lower member
        let closed: Domain = [Interval::closed(real(0.0), real(2.0)), Interval::closed(real(5.0), real(7.0))]
            .into_iter()
            .collect();
        assert_eq!(closed.closest_interval(3.5), Some(&Interval::closed(real(0.0), real(2.0))));
        assert_eq!(closed.bound(3.5), Ok(2.0));
    }

    #[test]
    fn test_extremes() {
        let domain = gap_domain();
        assert_eq!(domain.lower_value(), Some(0.0));
        assert_eq!(domain.upper_value(), Some(7.0f64.next_down()));
        assert_eq!(ALL.lower_value(), Some(f64::NEG_INFINITY));
        assert_eq!(ALL.upper_value(), Some(f64::INFINITY));
        assert_eq!(Domain::empty().lower_value(), None);
    }

    #[test]
    fn test_construction_normalizes() {
        let domain: Domain = [
            Interval::closed(real(0.0), real(1.0)),
            Interval::closed_open(real(1.0), real(3.0)),
            Interval::open(real(4.0), real(4.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(domain.set().as_slice(), &[Interval::closed_open(real(0.0), real(3.0))]);
        assert!(Domain::from(Interval::open(real(1.0), real(1.0))).is_empty());
    }

    #[test]
    fn test_union() {
        let u = NEGATIVE.union(&POSITIVE);
        assert_eq!(u, *NON_ZERO);
        let all = NON_NEGATIVE.union(&NEGATIVE);
        assert_eq!(all, *ALL);
    }

    #[test]
    fn test_display() {
        assert_eq!(NON_ZERO.to_string(), "(-∞, 0) ∪ (0, +∞)");
        assert_eq!(NON_NEGATIVE.to_string(), "[0, +∞)");
        assert_eq!(Domain::empty().to_string(), "∅");
    }
}
