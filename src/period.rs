use core::{
    cmp,
    ops::{Add, Sub},
};

use crate::OneOrPair;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// The half-open span of instants `[from, to)`:
/// the `from` instant is _included_, the `to` instant is _excluded_.
///
/// No order of the endpoints is enforced, so a [`Period`]
/// with `from > to` is a valid value having a negative [duration][Self::duration].
/// Such a period contains no instant and behaves as a removal
/// when collected into a [`PeriodSet`][crate::PeriodSet].
///
/// Two periods are equal only if both of their endpoints are equal.
pub struct Period<T> {
    from: T,
    to: T,
}

impl<T> Period<T> {
    /// Create a [`Period`] from its endpoints.
    ///
    /// ```
    /// # use periodset::Period;
    /// let p = Period::new(3, 7);
    /// assert_eq!((p.from(), p.to()), (&3, &7));
    /// ```
    pub const fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Create a [`Period`] starting at `from` and lasting for `duration`.
    ///
    /// ```
    /// # use periodset::Period;
    /// assert_eq!(Period::starting_at(3, 4), Period::new(3, 7));
    /// ```
    pub fn starting_at<D>(from: T, duration: D) -> Self
    where
        T: Clone + Add<D, Output = T>,
    {
        let to = from.clone() + duration;
        Self { from, to }
    }

    /// Create a [`Period`] lasting for `duration` and ending at `to`.
    ///
    /// ```
    /// # use periodset::Period;
    /// assert_eq!(Period::ending_at(4, 7), Period::new(3, 7));
    /// ```
    pub fn ending_at<D>(duration: D, to: T) -> Self
    where
        T: Clone + Sub<D, Output = T>,
    {
        let from = to.clone() - duration;
        Self { from, to }
    }

    /// The instant the period starts at (included).
    pub const fn from(&self) -> &T {
        &self.from
    }

    /// The instant the period ends at (excluded).
    pub const fn to(&self) -> &T {
        &self.to
    }

    /// Deconstruct the [`Period`] into the `(from, to)` pair.
    pub fn into_inner(self) -> (T, T) {
        (self.from, self.to)
    }

    /// Get a [`Period`] with referenced endpoints.
    pub const fn as_ref(&self) -> Period<&T> {
        Period {
            from: &self.from,
            to: &self.to,
        }
    }

    /// The elapsed time between the endpoints.
    ///
    /// Negative when the endpoints are inverted.
    ///
    /// ```
    /// # use periodset::Period;
    /// assert_eq!(Period::new(3, 7).duration(), 4);
    /// assert_eq!(Period::new(7, 3).duration(), -4);
    /// ```
    pub fn duration<D>(&self) -> D
    where
        T: Clone + Sub<Output = D>,
    {
        self.to.clone() - self.from.clone()
    }

    /// Whether the period contains no instants at all,
    /// i.e. its endpoints are equal or inverted.
    pub fn is_empty(&self) -> bool
    where
        T: PartialOrd,
    {
        self.from >= self.to
    }

    /// Whether the instant lies in `[from, to)`.
    pub fn contains<U>(&self, instant: &U) -> bool
    where
        T: PartialOrd<U>,
        U: ?Sized + PartialOrd<T>,
    {
        &self.from <= instant && instant < &self.to
    }

    /// Merge two periods if they overlap or touch, otherwise keep them separate.
    ///
    /// The periods are kept separate only when one ends strictly before
    /// the other one starts. In that case both are returned
    /// in the order of the arguments.
    ///
    /// ```
    /// # use periodset::{OneOrPair, Period};
    /// let merged = Period::new(1, 3).combine(Period::new(3, 5));
    /// assert_eq!(merged, OneOrPair::One(Period::new(1, 5)));
    ///
    /// let separate = Period::new(6, 8).combine(Period::new(1, 5));
    /// assert_eq!(separate, OneOrPair::Pair((Period::new(6, 8), Period::new(1, 5))));
    /// ```
    #[must_use = "this method does not modify the periods"]
    pub fn combine(self, other: Self) -> OneOrPair<Self>
    where
        T: Ord,
    {
        if self.to < other.from || self.from > other.to {
            return OneOrPair::Pair((self, other));
        }

        let (from, to) = (self.from.min(other.from), self.to.max(other.to));
        OneOrPair::One(Self { from, to })
    }

    /// Cut the `other` period out of this one, returning what is left.
    ///
    /// The leading remainder exists if this period starts before the `other`,
    /// the trailing one exists if this period ends after the `other`.
    /// Both checks only compare the endpoints, so when the periods
    /// do not overlap at all the remainders may reach over the `other` period.
    ///
    /// ```
    /// # use periodset::{OneOrPair, Period};
    /// let p = Period::new(1, 10);
    /// assert_eq!(
    ///     p.remove(&Period::new(3, 5)),
    ///     Some(OneOrPair::Pair((Period::new(1, 3), Period::new(5, 10))))
    /// );
    /// assert_eq!(p.remove(&Period::new(0, 10)), None);
    /// ```
    #[must_use = "this method does not modify the periods"]
    pub fn remove(&self, other: &Self) -> Option<OneOrPair<Self>>
    where
        T: Ord + Clone,
    {
        let leading = (self.from < other.from).then(|| Self {
            from: self.from.clone(),
            to: cmp::min(&self.to, &other.from).clone(),
        });
        let trailing = (self.to > other.to).then(|| Self {
            from: cmp::max(&self.from, &other.to).clone(),
            to: self.to.clone(),
        });

        OneOrPair::from_options(leading, trailing)
    }
}

impl<T: Clone> Period<&T> {
    /// Get a [`Period`] with owned endpoints.
    pub fn cloned(self) -> Period<T> {
        Period {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

#[cfg(feature = "clock")]
impl Period<chrono::NaiveDateTime> {
    /// The current local day: from today's midnight (included)
    /// to the next day's midnight (excluded).
    pub fn today() -> Self {
        // single clock reading, so both endpoints refer to the same day
        let midnight = chrono::Local::now()
            .date_naive()
            .and_time(chrono::NaiveTime::default());
        Self::starting_at(midnight, chrono::TimeDelta::days(1))
    }
}

#[macro_export]
/// Create a [`Period`] using a concise syntax.
///
/// ```
/// # use periodset::{period, Period};
/// assert_eq!(period!(1, 5), Period::new(1, 5));
/// assert_eq!(period!(1, +4), Period::new(1, 5));
/// ```
macro_rules! period {
    ($from:expr, + $duration:expr) => {
        $crate::Period::starting_at($from, $duration)
    };
    ($from:expr, $to:expr) => {
        $crate::Period::new($from, $to)
    };
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use chrono::{NaiveDate, TimeDelta};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn constructors_agree() {
        let from = ymd(2014, 1, 1);
        let to = ymd(2014, 2, 1);
        let duration = TimeDelta::days(31);

        let direct = Period::new(from, to);
        assert_eq!(Period::starting_at(from, duration), direct);
        assert_eq!(Period::ending_at(duration, to), direct);
        assert_eq!(direct.duration(), duration);
    }

    #[test]
    fn inverted_endpoints_are_kept() {
        let p = Period::new(ymd(2014, 2, 1), ymd(2014, 1, 1));
        assert_eq!(p.duration(), TimeDelta::days(-31));
        assert!(p.is_empty());
        assert!(!p.contains(&ymd(2014, 1, 15)));
    }

    #[test]
    fn equality_is_on_both_endpoints() {
        assert_eq!(period!(1, 3), period!(1, 3));
        // same duration, different start
        assert_ne!(period!(1, 3), period!(2, 4));
        assert_ne!(period!(1, 3), period!(1, 4));
    }

    #[test]
    fn borrowed_endpoints() {
        let p = Period::new(ymd(2014, 1, 1), ymd(2014, 2, 1));
        assert_eq!(p.as_ref().from(), &&ymd(2014, 1, 1));
        assert_eq!(p.as_ref().cloned(), p);
        assert_eq!(p.into_inner(), (ymd(2014, 1, 1), ymd(2014, 2, 1)));
    }

    #[test]
    fn half_open_containment() {
        let p = period!(1, 3);
        assert!(p.contains(&1));
        assert!(p.contains(&2));
        assert!(!p.contains(&3));
        assert!(!p.contains(&0));
        assert!(period!(3, 3).is_empty());
    }

    #[test]
    fn combine_overlapping() {
        let merged = period!(1, 5).combine(period!(3, 8));
        assert_eq!(merged, OneOrPair::One(period!(1, 8)));

        let merged = period!(3, 8).combine(period!(1, 5));
        assert_eq!(merged, OneOrPair::One(period!(1, 8)));
    }

    #[test]
    fn combine_enclosing() {
        let merged = period!(1, 10).combine(period!(3, 5));
        assert_eq!(merged, OneOrPair::One(period!(1, 10)));

        let merged = period!(3, 5).combine(period!(1, 10));
        assert_eq!(merged, OneOrPair::One(period!(1, 10)));
    }

    #[test]
    fn combine_touching() {
        let merged = period!(1, 3).combine(period!(3, 5));
        assert_eq!(merged, OneOrPair::One(period!(1, 5)));

        let merged = period!(3, 5).combine(period!(1, 3));
        assert_eq!(merged, OneOrPair::One(period!(1, 5)));
    }

    #[test]
    fn combine_disjoint_keeps_argument_order() {
        let separate = period!(1, 2).combine(period!(4, 5));
        assert_eq!(separate, OneOrPair::Pair((period!(1, 2), period!(4, 5))));

        let separate = period!(4, 5).combine(period!(1, 2));
        assert_eq!(separate, OneOrPair::Pair((period!(4, 5), period!(1, 2))));
    }

    #[test]
    fn remove_enclosed() {
        assert_eq!(period!(3, 5).remove(&period!(1, 10)), None);
        assert_eq!(period!(3, 5).remove(&period!(3, 5)), None);
    }

    #[test]
    fn remove_inner() {
        let rest = period!(1, 10).remove(&period!(3, 5));
        assert_eq!(rest, Some(OneOrPair::Pair((period!(1, 3), period!(5, 10)))));
    }

    #[test]
    fn remove_overlapping_sides() {
        let rest = period!(1, 10).remove(&period!(5, 12));
        assert_eq!(rest, Some(OneOrPair::One(period!(1, 5))));

        let rest = period!(1, 10).remove(&period!(0, 4));
        assert_eq!(rest, Some(OneOrPair::One(period!(4, 10))));
    }

    #[test]
    fn remove_disjoint_reproduces_original() {
        // subtrahend to the right: only the leading branch fires
        let rest = period!(1, 3).remove(&period!(5, 8));
        assert_eq!(rest, Some(OneOrPair::One(period!(1, 3))));

        // subtrahend to the left: only the trailing branch fires
        let rest = period!(5, 8).remove(&period!(1, 3));
        assert_eq!(rest, Some(OneOrPair::One(period!(5, 8))));
    }

    #[test]
    fn remove_compares_endpoints_only() {
        // inverted subtrahend inside the minuend: both branches fire
        let rest = period!(1, 10).remove(&period!(6, 4));
        let pieces: Vec<_> = rest.into_iter().flatten().collect();
        assert_eq!(pieces, [period!(1, 6), period!(4, 10)]);
    }

    #[test]
    fn macro_with_duration() {
        let from = ymd(2014, 1, 1);
        assert_eq!(
            period!(from, +TimeDelta::days(31)),
            Period::new(from, ymd(2014, 2, 1))
        );
    }

    #[cfg(feature = "clock")]
    #[test]
    fn today_spans_a_day() {
        let today = Period::today();
        assert_eq!(today.duration(), TimeDelta::days(1));
        assert_eq!(today.from().time(), chrono::NaiveTime::default());
    }
}
