//! Sorted collections of intervals.
//!
//! An [`IntervalSet`] stores intervals in ascending order, without duplicates.
//! Insertion keeps the order but does not merge, so right after inserting the
//! set may hold overlapping or adjacent members. Calling
//! [`merge`][IntervalSet::merge] restores the canonical form in which every
//! pair of members is separated by a gap. Merging never changes which points
//! the set contains.
//!
//! All queries are linear scans over the members. Sortedness lets point and
//! interval queries stop at the first member that starts past the query.
//!
//! # Example
//!
//! ```rust
//! use intervals_rs::interval::Interval;
//! use intervals_rs::set::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//! set.insert(Interval::closed(5, 7));
//! set.insert(Interval::closed_open(0, 2));
//! set.insert(Interval::closed(2, 3));
//! assert_eq!(set.len(), 3);
//!
//! assert!(set.merge());
//! assert_eq!(set.to_string(), "[0, 3] ∪ [5, 7]");
//!
//! assert!(set.contains(&6));
//! assert!(!set.contains(&4));
//! // No single member covers [1, 6]
//! assert!(!set.contains_interval(&Interval::closed(1, 6)));
//! ```

use std::fmt;

use log::{debug, warn};

use crate::bound::{LowerBound, UpperBound};
use crate::interval::Interval;

/// A sorted, duplicate-free sequence of intervals.
///
/// # Invariants
///
/// - Members are sorted by lower bound, then by upper bound
/// - No two members are equal
/// - After [`merge`][IntervalSet::merge], no two members overlap or touch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Returns the number of stored intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns true if no interval is stored.
    ///
    /// A set holding only empty intervals is not empty in this sense; see
    /// [`remove_empty`][IntervalSet::remove_empty].
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Lower bound of the first member.
    pub fn lower_bound(&self) -> Option<&LowerBound<T>> {
        self.intervals.first().map(Interval::lower)
    }
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> IntervalSet<T> {
    /// Inserts `interval` at its sorted position.
    ///
    /// No merging happens. Returns false and leaves the set unchanged if an
    /// equal interval is already stored.
    pub fn insert(&mut self, interval: Interval<T>) -> bool {
        match self.intervals.binary_search(&interval) {
            Ok(_) => false,
            Err(index) => {
                self.intervals.insert(index, interval);
                true
            }
        }
    }

    /// Removes the member equal to `interval`. Returns true if it was present.
    pub fn remove(&mut self, interval: &Interval<T>) -> bool {
        match self.intervals.binary_search(interval) {
            Ok(index) => {
                self.intervals.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every empty member. Returns true if anything was removed.
    pub fn remove_empty(&mut self) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|i| !i.is_empty());
        self.intervals.len() != before
    }

    /// Returns true if some member contains `point`.
    pub fn contains(&self, point: &T) -> bool {
        for interval in &self.intervals {
            if !interval.lower().admits(point) {
                // Every later member starts at or past this one.
                return false;
            }
            if interval.upper().admits(point) {
                return true;
            }
        }
        false
    }

    /// Returns true if a single member contains the whole of `other`.
    ///
    /// An interval spanning the gap between two members is not contained,
    /// even if both of its endpoints are.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        for interval in &self.intervals {
            if other.lower() < interval.lower() {
                return false;
            }
            if interval.contains_interval(other) {
                return true;
            }
        }
        false
    }

    /// Returns true if every member of `other` is contained in `self`.
    pub fn contains_set(&self, other: &IntervalSet<T>) -> bool {
        other.iter().all(|i| self.contains_interval(i))
    }

    /// Returns true if the set is non-empty and every member is valid.
    pub fn is_valid(&self) -> bool {
        !self.intervals.is_empty() && self.intervals.iter().all(Interval::is_valid)
    }

    /// Greatest upper bound over all members.
    pub fn upper_bound(&self) -> Option<&UpperBound<T>> {
        self.intervals.iter().map(Interval::upper).max()
    }
}

impl<T: Ord + Clone + fmt::Debug> IntervalSet<T> {
    /// Coalesces overlapping and adjacent members.
    ///
    /// Makes one left-to-right pass, growing an accumulator from the first
    /// member and dropping every following member it absorbs. Returns true if
    /// at least one member was dropped.
    ///
    /// For every point, [`contains`][IntervalSet::contains] answers the same
    /// before and after the call. Calling `merge` a second time returns false.
    pub fn merge(&mut self) -> bool {
        let before = self.intervals.len();
        let mut merged: Vec<Interval<T>> = Vec::with_capacity(before);

        for interval in self.intervals.drain(..) {
            if let Some(acc) = merged.last_mut() {
                if let Some(union) = acc.merge(&interval) {
                    debug!("merge: {:?} absorbs {:?}", acc, interval);
                    *acc = union;
                    continue;
                }
            }
            merged.push(interval);
        }

        self.intervals = merged;
        let dropped = before - self.intervals.len();
        debug!("merge: dropped {} of {} intervals", dropped, before);
        dropped > 0
    }

    /// Brings the set into canonical form: merged, without empty members.
    pub fn normalize(&mut self) {
        // Empty members can split a run that would otherwise coalesce.
        self.remove_empty();
        self.merge();
    }

    /// Union of two sets, in canonical form.
    pub fn union(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result.normalize();
        result
    }

    /// Returns `value` if some member contains it.
    ///
    /// Otherwise returns `None` and logs a warning.
    pub fn constrain(&self, value: T) -> Option<T> {
        if self.intervals.is_empty() {
            warn!("constrain: cannot constrain {:?} to an empty set", value);
            return None;
        }
        if self.contains(&value) {
            Some(value)
        } else {
            warn!("constrain: {:?} is outside of the set", value);
            None
        }
    }
}

impl<T: Ord> Extend<Interval<T>> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl<T: Ord> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> From<Vec<Interval<T>>> for IntervalSet<T> {
    fn from(mut intervals: Vec<Interval<T>>) -> Self {
        intervals.sort();
        intervals.dedup();
        Self { intervals }
    }
}

impl<T: Ord> From<Interval<T>> for IntervalSet<T> {
    fn from(interval: Interval<T>) -> Self {
        Self {
            intervals: vec![interval],
        }
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T: fmt::Display> fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return write!(f, "∅");
        }
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∪ ")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}
