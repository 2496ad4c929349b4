//! # intervals-rs: interval sets and numeric domains in Rust
//!
//! **`intervals-rs`** is a small library for working with **intervals** whose
//! edges may be open, closed or unbounded, and with **sets of intervals**
//! kept in a canonical sorted, merged form.
//! On top of that it provides numeric **domains**: unions of real intervals
//! used to validate or clamp floating-point values.
//!
//! ## Key Features
//!
//! - **Role-aware bounds**: [`LowerBound`][crate::bound::LowerBound] and [`UpperBound`][crate::bound::UpperBound] know which side of an interval they sit on, so `[1` sorts before `(1`, `1)` sorts before `1]`, and an unbounded upper edge is the maximum (not the minimum) of its order.
//! - **Canonical interval sets**: [`IntervalSet`][crate::set::IntervalSet] keeps its members sorted and coalesces overlapping or adjacent intervals on [`merge`][crate::set::IntervalSet::merge], without ever changing which points it contains.
//! - **Numeric domains**: [`Domain`][crate::domain::Domain] clamps values onto the nearest boundary ([`bound`][crate::domain::Domain::bound]) or rejects them ([`constrain`][crate::domain::Domain::constrain]), approximating open boundaries by a configurable nudge.
//! - **No panics on bad input**: NaN and empty domains are reported through [`DomainError`][crate::error::DomainError] and a `log` warning.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! intervals-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use intervals_rs::domain::{Domain, POSITIVE};
//! use intervals_rs::interval::Interval;
//! use intervals_rs::set::IntervalSet;
//! use intervals_rs::types::Real;
//!
//! // 1. Build a set of intervals
//! let mut set = IntervalSet::new();
//! set.insert(Interval::closed(0, 2));
//! set.insert(Interval::closed(5, 7));
//! set.insert(Interval::closed_open(2, 3));
//!
//! // 2. Merge overlapping and adjacent members
//! assert!(set.merge());
//! assert_eq!(set.to_string(), "[0, 3) ∪ [5, 7]");
//!
//! // 3. Query membership
//! assert!(set.contains(&6));
//! assert!(!set.contains(&4));
//!
//! // 4. Clamp floats into a domain
//! assert_eq!(POSITIVE.bound(2.5), Ok(2.5));
//! assert!(POSITIVE.bound(-2.5).unwrap() > 0.0);
//!
//! // 5. Build a custom domain
//! let unit: Domain = Interval::closed(Real::ZERO, Real::new(1.0).unwrap()).into();
//! assert_eq!(unit.bound(3.0), Ok(1.0));
//! ```
//!
//! ## Core Components
//!
//! - **[`bound`]**: Interval edges and their ordering.
//! - **[`interval`]**: A single interval: containment, emptiness, merging.
//! - **[`set`]**: Sorted interval collections and the merge algorithm.
//! - **[`domain`]**: Real-valued domains, predefined constants, clamping.

pub mod bound;
pub mod domain;
pub mod error;
pub mod interval;
pub mod set;
pub mod types;
