//! Bounds for interval endpoints.
//!
//! A [`Bound`] is one edge of an interval: a value (or no value at all,
//! meaning the interval is unbounded on that side) plus an inclusive/exclusive
//! flag. On its own a bound has no direction, so it carries no order.
//! Wrapping it into a [`LowerBound`] or an [`UpperBound`] assigns the role and
//! with it a total order.
//!
//! # Ordering
//!
//! Role-aware bounds are ordered as positions on the extended line where each
//! bound sits infinitesimally to one side of its value:
//!
//! | bound         | position   |
//! |---------------|------------|
//! | `[v` (lower)  | `v - ε`    |
//! | `(v` (lower)  | `v + ε`    |
//! | `v]` (upper)  | `v + ε`    |
//! | `v)` (upper)  | `v - ε`    |
//! | unbounded lower | `-∞`     |
//! | unbounded upper | `+∞`     |
//!
//! Hence for equal values an inclusive lower bound sorts before an exclusive
//! one, and an inclusive upper bound sorts after an exclusive one. Lower and
//! upper bounds can be compared with each other too, which is how intervals
//! decide whether they overlap or touch: `[1, 2)` and `[2, 5]` touch because
//! `2)` and `[2` sit at the same position.
//!
//! ```rust
//! use intervals_rs::bound::{LowerBound, UpperBound};
//!
//! assert!(LowerBound::inclusive(1) < LowerBound::exclusive(1));
//! assert!(UpperBound::exclusive(1) < UpperBound::inclusive(1));
//! assert!(LowerBound::unbounded() < LowerBound::inclusive(i32::MIN));
//! assert!(UpperBound::inclusive(i32::MAX) < UpperBound::unbounded());
//!
//! // Cross-role: `[2` meets `2)`, while `(2` lies past it.
//! assert!(LowerBound::inclusive(2) == UpperBound::exclusive(2));
//! assert!(LowerBound::exclusive(2) > UpperBound::exclusive(2));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Value of a bound: either a concrete value or unbounded.
///
/// Which infinity `Unbounded` denotes depends on the role of the bound:
/// `-∞` for a lower bound, `+∞` for an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit<T> {
    Unbounded,
    Value(T),
}

impl<T> Limit<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Limit::Unbounded => None,
            Limit::Value(v) => Some(v),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Limit::Unbounded)
    }
}

/// One edge of an interval, without a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound<T> {
    limit: Limit<T>,
    inclusive: bool,
}

impl<T> Bound<T> {
    /// A closed edge at `value`.
    pub fn inclusive(value: T) -> Self {
        Self {
            limit: Limit::Value(value),
            inclusive: true,
        }
    }

    /// An open edge at `value`.
    pub fn exclusive(value: T) -> Self {
        Self {
            limit: Limit::Value(value),
            inclusive: false,
        }
    }

    /// No edge at all.
    pub fn unbounded() -> Self {
        Self {
            limit: Limit::Unbounded,
            inclusive: false,
        }
    }

    pub fn limit(&self) -> &Limit<T> {
        &self.limit
    }

    /// Returns the value, or `None` if unbounded.
    pub fn value(&self) -> Option<&T> {
        self.limit.as_value()
    }

    /// Returns true if the value itself belongs to the interval.
    ///
    /// Always false for an unbounded edge.
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit.is_unbounded()
    }
}

/// Infinitesimal offset of a bound relative to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Side {
    Before,
    After,
}

/// Position of a role-aware bound on the extended line.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Position<'a, T> {
    NegInf,
    At(&'a T, Side),
    PosInf,
}

/// Lower edge of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LowerBound<T>(Bound<T>);

/// Upper edge of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpperBound<T>(Bound<T>);

macro_rules! role_bound {
    ($name:ident) => {
        impl<T> $name<T> {
            pub fn inclusive(value: T) -> Self {
                Self(Bound::inclusive(value))
            }

            pub fn exclusive(value: T) -> Self {
                Self(Bound::exclusive(value))
            }

            pub fn unbounded() -> Self {
                Self(Bound::unbounded())
            }

            /// Returns the underlying role-less bound.
            pub fn bound(&self) -> &Bound<T> {
                &self.0
            }

            pub fn limit(&self) -> &Limit<T> {
                &self.0.limit
            }

            pub fn value(&self) -> Option<&T> {
                self.0.value()
            }

            pub fn is_inclusive(&self) -> bool {
                self.0.is_inclusive()
            }

            pub fn is_unbounded(&self) -> bool {
                self.0.is_unbounded()
            }

            pub fn into_bound(self) -> Bound<T> {
                self.0
            }
        }

        impl<T> From<Bound<T>> for $name<T> {
            fn from(bound: Bound<T>) -> Self {
                Self(bound)
            }
        }

        impl<T: Ord> PartialOrd for $name<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T: Ord> Ord for $name<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.position().cmp(&other.position())
            }
        }
    };
}

role_bound!(LowerBound);
role_bound!(UpperBound);

impl<T> LowerBound<T> {
    fn position(&self) -> Position<'_, T> {
        match &self.0.limit {
            Limit::Unbounded => Position::NegInf,
            Limit::Value(v) if self.0.inclusive => Position::At(v, Side::Before),
            Limit::Value(v) => Position::At(v, Side::After),
        }
    }
}

impl<T: Ord> LowerBound<T> {
    /// Returns true if `point` is on the inner side of this bound.
    pub fn admits(&self, point: &T) -> bool {
        match &self.0.limit {
            Limit::Unbounded => true,
            Limit::Value(v) if self.0.inclusive => point >= v,
            Limit::Value(v) => point > v,
        }
    }
}

impl<T> UpperBound<T> {
    fn position(&self) -> Position<'_, T> {
        match &self.0.limit {
            Limit::Unbounded => Position::PosInf,
            Limit::Value(v) if self.0.inclusive => Position::At(v, Side::After),
            Limit::Value(v) => Position::At(v, Side::Before),
        }
    }
}

impl<T: Ord> UpperBound<T> {
    /// Returns true if `point` is on the inner side of this bound.
    pub fn admits(&self, point: &T) -> bool {
        match &self.0.limit {
            Limit::Unbounded => true,
            Limit::Value(v) if self.0.inclusive => point <= v,
            Limit::Value(v) => point < v,
        }
    }
}

impl<T: Ord> PartialEq<UpperBound<T>> for LowerBound<T> {
    fn eq(&self, other: &UpperBound<T>) -> bool {
        self.position() == other.position()
    }
}

impl<T: Ord> PartialOrd<UpperBound<T>> for LowerBound<T> {
    fn partial_cmp(&self, other: &UpperBound<T>) -> Option<Ordering> {
        Some(self.position().cmp(&other.position()))
    }
}

impl<T: Ord> PartialEq<LowerBound<T>> for UpperBound<T> {
    fn eq(&self, other: &LowerBound<T>) -> bool {
        self.position() == other.position()
    }
}

impl<T: Ord> PartialOrd<LowerBound<T>> for UpperBound<T> {
    fn partial_cmp(&self, other: &LowerBound<T>) -> Option<Ordering> {
        Some(self.position().cmp(&other.position()))
    }
}

impl<T: fmt::Display> fmt::Display for LowerBound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.limit {
            Limit::Unbounded => write!(f, "(-∞"),
            Limit::Value(v) if self.0.inclusive => write!(f, "[{}", v),
            Limit::Value(v) => write!(f, "({}", v),
        }
    }
}

impl<T: fmt::Display> fmt::Display for UpperBound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.limit {
            Limit::Unbounded => write!(f, "+∞)"),
            Limit::Value(v) if self.0.inclusive => write!(f, "{}]", v),
            Limit::Value(v) => write!(f, "{})", v),
        }
    }
}
