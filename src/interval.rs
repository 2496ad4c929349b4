//! Intervals over a totally ordered type.
//!
//! An [`Interval`] is a pair of a [`LowerBound`] and an [`UpperBound`]. It may
//! be open, closed, half-open or unbounded on either side. Any pair of bounds
//! is representable, including reversed ones; such intervals are
//! [empty][Interval::is_empty] and not [valid][Interval::is_valid].

use std::cmp::{max, min, Ordering};
use std::fmt;

use crate::bound::{Limit, LowerBound, UpperBound};
use crate::types::Real;

/// A contiguous range between a lower and an upper bound.
///
/// Intervals are ordered by lower bound first, then by upper bound. This is
/// the order [`IntervalSet`][crate::set::IntervalSet] keeps its members in.
///
/// # Example
///
/// ```rust
/// use intervals_rs::interval::Interval;
///
/// let a = Interval::closed_open(1, 2);
/// let b = Interval::closed(2, 5);
///
/// assert!(a.contains(&1));
/// assert!(!a.contains(&2));
///
/// // `[1, 2)` and `[2, 5]` touch at 2
/// assert_eq!(a.merge(&b), Some(Interval::closed(1, 5)));
///
/// // `[1, 2)` and `(2, 5]` leave 2 uncovered
/// assert_eq!(a.merge(&Interval::open_closed(2, 5)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: LowerBound<T>,
    upper: UpperBound<T>,
}

impl<T> Interval<T> {
    pub fn new(lower: LowerBound<T>, upper: UpperBound<T>) -> Self {
        Self { lower, upper }
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(LowerBound::inclusive(lower), UpperBound::inclusive(upper))
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(LowerBound::exclusive(lower), UpperBound::exclusive(upper))
    }

    /// `[lower, upper)`
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::new(LowerBound::inclusive(lower), UpperBound::exclusive(upper))
    }

    /// `(lower, upper]`
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::new(LowerBound::exclusive(lower), UpperBound::inclusive(upper))
    }

    /// `[lower, +∞)`
    pub fn at_least(lower: T) -> Self {
        Self::new(LowerBound::inclusive(lower), UpperBound::unbounded())
    }

    /// `(lower, +∞)`
    pub fn greater_than(lower: T) -> Self {
        Self::new(LowerBound::exclusive(lower), UpperBound::unbounded())
    }

    /// `(-∞, upper]`
    pub fn at_most(upper: T) -> Self {
        Self::new(LowerBound::unbounded(), UpperBound::inclusive(upper))
    }

    /// `(-∞, upper)`
    pub fn less_than(upper: T) -> Self {
        Self::new(LowerBound::unbounded(), UpperBound::exclusive(upper))
    }

    /// `(-∞, +∞)`
    pub fn unbounded() -> Self {
        Self::new(LowerBound::unbounded(), UpperBound::unbounded())
    }

    pub fn lower(&self) -> &LowerBound<T> {
        &self.lower
    }

    pub fn upper(&self) -> &UpperBound<T> {
        &self.upper
    }

    pub fn into_bounds(self) -> (LowerBound<T>, UpperBound<T>) {
        (self.lower, self.upper)
    }
}

impl<T: Ord> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Interval<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lower
            .cmp(&other.lower)
            .then_with(|| self.upper.cmp(&other.upper))
    }
}

impl<T: Clone> Interval<T> {
    /// `[value, value]`
    pub fn singleton(value: T) -> Self {
        Self::closed(value.clone(), value)
    }
}

impl<T: Ord> Interval<T> {
    /// Returns true if `point` lies within both bounds.
    pub fn contains(&self, point: &T) -> bool {
        self.lower.admits(point) && self.upper.admits(point)
    }

    /// Returns true if `other` is a subset of `self`.
    ///
    /// This compares bounds only: `other.lower >= self.lower` and
    /// `other.upper <= self.upper`.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        other.lower >= self.lower && other.upper <= self.upper
    }

    /// Returns true if both bounds have a value and the lower value is
    /// strictly less than the upper value.
    ///
    /// Inclusivity is ignored, so `[v, v]` is not valid even though it is not
    /// empty. An interval with an unbounded side is never valid.
    pub fn is_valid(&self) -> bool {
        match (self.lower.limit(), self.upper.limit()) {
            (Limit::Value(lo), Limit::Value(hi)) => lo < hi,
            _ => false,
        }
    }

    /// Returns true if no point lies within the interval.
    pub fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }

    /// Returns true if the two intervals share a point or meet without a gap.
    pub fn touches(&self, other: &Interval<T>) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Merges two overlapping or adjacent intervals.
    ///
    /// Returns the union `[min(lower), max(upper)]` if the intervals
    /// [touch][Interval::touches], or `None` if a gap separates them.
    /// Neither interval is modified.
    pub fn merge(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if self.touches(other) {
            Some(self.hull(other))
        } else {
            None
        }
    }

    /// Smallest interval covering both `self` and `other`.
    pub fn hull(&self, other: &Interval<T>) -> Interval<T> {
        Interval::new(
            min(&self.lower, &other.lower).clone(),
            max(&self.upper, &other.upper).clone(),
        )
    }

    /// Points that lie in both intervals. The result may be empty.
    pub fn intersection(&self, other: &Interval<T>) -> Interval<T> {
        Interval::new(
            max(&self.lower, &other.lower).clone(),
            min(&self.upper, &other.upper).clone(),
        )
    }
}

impl Interval<Real> {
    /// `[center - radius, center + radius]`, e.g. a confidence interval
    /// `mean ± delta`.
    ///
    /// Returns `None` if either endpoint is NaN.
    pub fn around(center: f64, radius: f64) -> Option<Self> {
        let radius = radius.abs();
        let lower = Real::new(center - radius)?;
        let upper = Real::new(center + radius)?;
        Some(Self::closed(lower, upper))
    }

    /// Distance between the bound values, or `None` if unbounded.
    pub fn width(&self) -> Option<f64> {
        let lo = self.lower.value()?.get();
        let hi = self.upper.value()?.get();
        Some(hi - lo)
    }

    /// Point halfway between the bound values.
    ///
    /// Returns `None` if a side is unbounded or its value is infinite.
    pub fn midpoint(&self) -> Option<f64> {
        let lo = self.lower.value().filter(|v| v.is_finite())?.get();
        let hi = self.upper.value().filter(|v| v.is_finite())?.get();
        Some(lo + (hi - lo) / 2.0)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn real(x: f64) -> Real {
        Real::new(x).unwrap()
    }

    #[test]
    fn test_contains_point() {
        let i = Interval::closed_open(1, 4);
        assert!(i.contains(&1));
        assert!(i.contains(&3));
        assert!(!i.contains(&4));
        assert!(!i.contains(&0));

        let i = Interval::open(1, 4);
        assert!(!i.contains(&1));
        assert!(i.contains(&2));

        assert!(Interval::at_least(0).contains(&i32::MAX));
        assert!(!Interval::at_least(0).contains(&-1));
        assert!(Interval::less_than(0).contains(&i32::MIN));
        assert!(!Interval::less_than(0).contains(&0));
        assert!(Interval::<i32>::unbounded().contains(&0));
    }

    #[test]
    fn test_contains_interval() {
        let outer = Interval::closed(0, 10);
        assert!(outer.contains_interval(&Interval::closed(0, 10)));
        assert!(outer.contains_interval(&Interval::open(0, 10)));
        assert!(outer.contains_interval(&Interval::closed(2, 3)));
        assert!(!outer.contains_interval(&Interval::closed(-1, 3)));
        assert!(!outer.contains_interval(&Interval::at_least(5)));

        let open = Interval::open(0, 10);
        assert!(!open.contains_interval(&Interval::closed(0, 10)));
        assert!(open.contains_interval(&Interval::open_closed(0, 9)));

        assert!(Interval::unbounded().contains_interval(&Interval::less_than(3)));
    }

    #[test]
    fn test_valid_and_empty() {
        assert!(Interval::closed(1, 2).is_valid());
        assert!(!Interval::closed(1, 2).is_empty());

        // Degenerate but non-empty
        let point = Interval::singleton(3);
        assert!(!point.is_valid());
        assert!(!point.is_empty());
        assert!(point.contains(&3));

        assert!(Interval::closed_open(3, 3).is_empty());
        assert!(Interval::open_closed(3, 3).is_empty());
        assert!(Interval::open(3, 3).is_empty());
        assert!(Interval::closed(5, 1).is_empty());
        assert!(!Interval::closed(5, 1).is_valid());

        // Unbounded sides are never valid, yet not empty either
        assert!(!Interval::<i32>::unbounded().is_valid());
        assert!(!Interval::<i32>::unbounded().is_empty());
        assert!(!Interval::at_most(0).is_valid());
        assert!(!Interval::greater_than(0).is_valid());
    }

    #[test]
    fn test_merge_adjacent() {
        let a = Interval::closed_open(1, 2);
        assert_eq!(a.merge(&Interval::closed(2, 5)), Some(Interval::closed(1, 5)));
        assert_eq!(Interval::closed(2, 5).merge(&a), Some(Interval::closed(1, 5)));

        let a = Interval::closed(1, 2);
        assert_eq!(a.merge(&Interval::open_closed(2, 5)), Some(Interval::closed(1, 5)));
    }

    #[test]
    fn test_merge_gap() {
        assert_eq!(Interval::closed_open(1, 2).merge(&Interval::open(2, 5)), None);
        assert_eq!(Interval::closed(1, 2).merge(&Interval::closed(3, 5)), None);
        assert_eq!(Interval::less_than(0).merge(&Interval::greater_than(0)), None);
    }

    #[test]
    fn test_merge_overlap_and_containment() {
        let a = Interval::closed(0, 10);
        assert_eq!(a.merge(&Interval::open(5, 15)), Some(Interval::closed_open(0, 15)));
        assert_eq!(a.merge(&Interval::closed(2, 3)), Some(a));
        assert_eq!(a.merge(&Interval::at_least(10)), Some(Interval::at_least(0)));
    }

    #[test]
    fn test_merge_with_empty_keeps_self() {
        let a = Interval::closed(0, 10);
        assert_eq!(a.merge(&Interval::closed_open(4, 4)), Some(a));
        assert_eq!(a.merge(&Interval::closed(7, 3)), Some(a));
    }

    #[test]
    fn test_intersection() {
        let a = Interval::closed(0, 10);
        let b = Interval::open(5, 15);
        assert_eq!(a.intersection(&b), Interval::open_closed(5, 10));
        assert!(a.intersection(&Interval::closed(11, 12)).is_empty());
        assert!(Interval::closed_open(0, 1).intersection(&Interval::closed(1, 2)).is_empty());
    }

    #[test]
    fn test_ordering() {
        let mut v = vec![
            Interval::closed(2, 3),
            Interval::open(1, 5),
            Interval::closed(1, 2),
            Interval::closed(1, 1),
            Interval::at_most(0),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Interval::at_most(0),
                Interval::closed(1, 1),
                Interval::closed(1, 2),
                Interval::open(1, 5),
                Interval::closed(2, 3),
            ]
        );
    }

    #[test]
    fn test_around() {
        let i = Interval::around(0.5, 0.25).unwrap();
        assert_eq!(i, Interval::closed(real(0.25), real(0.75)));
        assert_eq!(i.width(), Some(0.5));
        assert_eq!(i.midpoint(), Some(0.5));
        assert!(Interval::around(f64::NAN, 1.0).is_none());

        let wide = Interval::closed(Real::NEG_INFINITY, Real::INFINITY);
        assert_eq!(wide.midpoint(), None);
        assert_eq!(wide.width(), Some(f64::INFINITY));
        assert_eq!(Interval::closed(real(1.0), Real::INFINITY).midpoint(), None);
        assert_eq!(Interval::<Real>::at_least(Real::ZERO).width(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::closed_open(1, 2).to_string(), "[1, 2)");
        assert_eq!(Interval::<i32>::unbounded().to_string(), "(-∞, +∞)");
        assert_eq!(Interval::greater_than(real(0.0)).to_string(), "(0, +∞)");
    }
}
