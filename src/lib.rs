//! Half-open time periods and normalized sets of them with the set algebra.
//!
//! A [`Period`] is the span `[from, to)` over any ordered instant type.
//! A [`PeriodSet`] is the union of any number of periods kept as
//! a sorted sequence of disjoint, non-touching periods.
//!
//! ```
//! use periodset::{period, period_set};
//!
//! let working = period_set![(9, 12), (13, 18)];
//! let meetings = period_set![(10, 11), (11, 14)];
//!
//! let focus = working.except_with(&meetings);
//! assert!(focus.iter().eq([period!(9, 10), period!(14, 18)]));
//! ```
#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "arbitrary"))]
mod arbitrary;
pub(crate) mod helper;
mod ops;
mod period;
mod set;
mod str;

#[cfg(feature = "chrono")]
pub use self::str::{FormatError, StrftimeInstant};
pub use self::{
    helper::OneOrPair,
    period::Period,
    set::{IntoIter, PeriodSet, Periods},
};
