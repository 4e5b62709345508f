//! Normalized sets of [`Period`]-s built on top of a sweep line.

use alloc::{
    collections::{btree_map, BTreeMap},
    vec::Vec,
};
use core::iter::FusedIterator;

use crate::Period;

/// Net number of periods opening (positive) or closing (negative) at an instant.
type Delta = i64;

#[derive(Clone, PartialEq, Eq, Hash)]
/// The union of any number of [`Period`]-s kept in its canonical form:
/// a sequence of disjoint, non-touching periods sorted by their start.
///
/// The set is never modified after construction:
/// every operation produces a new [`PeriodSet`].
///
/// ```
/// # use periodset::{period, PeriodSet};
/// let set: PeriodSet<_> = [period!(5, 8), period!(1, 3), period!(2, 4), period!(8, 9)]
///     .into_iter()
///     .collect();
/// assert!(set.iter().eq([period!(1, 4), period!(5, 9)]));
/// ```
pub struct PeriodSet<T> {
    /// Sweep line events: the instants where the coverage changes.
    /// Zero deltas are never stored.
    deltas: BTreeMap<T, Delta>,
}

impl<T> Default for PeriodSet<T> {
    fn default() -> Self {
        Self {
            deltas: BTreeMap::new(),
        }
    }
}

impl<T> PeriodSet<T> {
    /// Create an empty [`PeriodSet`].
    pub const fn new() -> Self {
        Self {
            deltas: BTreeMap::new(),
        }
    }

    /// Whether the set covers no instants.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Iterate over the disjoint periods in ascending order.
    ///
    /// The iterator is derived from the stored sweep line events
    /// and can be recreated any number of times.
    pub fn iter(&self) -> Periods<'_, T> {
        Periods {
            events: self.deltas.iter(),
            coverage: 0,
            start: None,
        }
    }
}

impl<T: Ord + Clone> PeriodSet<T> {
    /// Build the set from the periods in any order,
    /// merging all of them that overlap or touch.
    pub fn from_periods<I>(periods: I) -> Self
    where
        I: IntoIterator<Item = Period<T>>,
    {
        let mut set = Self::new();
        set.ingest(periods, 1);
        set.normalize();
        set
    }

    /// The number of disjoint periods in the set.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether any period of the set contains the instant.
    pub fn contains(&self, instant: &T) -> bool {
        let coverage: Delta = self
            .deltas
            .range(..=instant)
            .map(|(_, delta)| delta)
            .sum();
        coverage > 0
    }

    /// Return the instants of this set not covered by the `other` set.
    ///
    /// ```
    /// # use periodset::{period, period_set};
    /// let a = period_set![(1, 10)];
    /// let b = period_set![(3, 5), (8, 12)];
    /// assert_eq!(a.except_with(&b), period_set![(1, 3), (5, 8)]);
    /// ```
    #[must_use = "this method returns a new set"]
    pub fn except_with(&self, other: &Self) -> Self {
        log::trace!(
            "subtracting {} sweep events from {}",
            other.deltas.len(),
            self.deltas.len()
        );
        let mut result = Self::new();
        result.ingest(self.iter(), 1);
        result.ingest(other.iter(), -1);
        result.normalize();
        result
    }

    /// Return the instants covered by both sets.
    ///
    /// The intersection is the union without the symmetric difference.
    ///
    /// ```
    /// # use periodset::{period, period_set};
    /// let a = period_set![(1, 10)];
    /// let b = period_set![(3, 5), (8, 12)];
    /// assert_eq!(a.intersect_with(&b), period_set![(3, 5), (8, 10)]);
    /// ```
    #[must_use = "this method returns a new set"]
    pub fn intersect_with(&self, other: &Self) -> Self {
        self.union_with(other)
            .symmetric_except_with(&self.symmetric_except_with(other))
    }

    /// Return the instants covered by exactly one of the sets.
    ///
    /// ```
    /// # use periodset::{period, period_set};
    /// let a = period_set![(1, 10)];
    /// let b = period_set![(3, 5), (8, 12)];
    /// assert_eq!(
    ///     a.symmetric_except_with(&b),
    ///     period_set![(1, 3), (5, 8), (10, 12)]
    /// );
    /// ```
    #[must_use = "this method returns a new set"]
    pub fn symmetric_except_with(&self, other: &Self) -> Self {
        self.except_with(other).union_with(&other.except_with(self))
    }

    /// Return the instants covered by any of the sets.
    ///
    /// ```
    /// # use periodset::{period, period_set};
    /// let a = period_set![(1, 10)];
    /// let b = period_set![(3, 5), (8, 12)];
    /// assert_eq!(a.union_with(&b), period_set![(1, 12)]);
    /// ```
    #[must_use = "this method returns a new set"]
    pub fn union_with(&self, other: &Self) -> Self {
        Self::from_periods(self.iter().chain(other.iter()))
    }

    /// Record the periods on the sweep line: `weight` at every start
    /// and `-weight` at every end.
    ///
    /// Does not merge touching periods by itself, see [`Self::normalize`].
    fn ingest<I>(&mut self, periods: I, weight: Delta)
    where
        I: IntoIterator<Item = Period<T>>,
    {
        let mut count = 0_usize;
        for period in periods {
            let (from, to) = period.into_inner();
            self.shift(from, weight);
            self.shift(to, -weight);
            count += 1;
        }
        log::trace!("ingested {count} periods with weight {weight}");
    }

    fn shift(&mut self, instant: T, delta: Delta) {
        match self.deltas.entry(instant) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(delta);
            }
            btree_map::Entry::Occupied(mut entry) => {
                *entry.get_mut() += delta;
                if *entry.get() == 0 {
                    entry.remove();
                }
            }
        }
    }

    /// Re-derive the periods from the sweep line and record them again,
    /// leaving exactly one opening and one closing event per disjoint period.
    fn normalize(&mut self) {
        let periods: Vec<_> = self.iter().collect();
        self.deltas.clear();
        self.ingest(periods, 1);
        log::trace!("normalized into {} sweep events", self.deltas.len());
    }
}

impl<T: Ord + Clone> FromIterator<Period<T>> for PeriodSet<T> {
    fn from_iter<I: IntoIterator<Item = Period<T>>>(iter: I) -> Self {
        Self::from_periods(iter)
    }
}

impl<T: Ord + Clone> From<Period<T>> for PeriodSet<T> {
    fn from(period: Period<T>) -> Self {
        Self::from_periods([period])
    }
}

impl<T> From<PeriodSet<T>> for Vec<Period<T>> {
    fn from(set: PeriodSet<T>) -> Self {
        set.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
/// Serialized as the sequence of its disjoint periods.
impl<T: serde::Serialize + Clone> serde::Serialize for PeriodSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
/// Deserialized from any sequence of periods, which then gets normalized.
impl<'de, T> serde::Deserialize<'de> for PeriodSet<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<Period<T>> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_periods)
    }
}

#[derive(Debug, Clone)]
/// Iterator over the disjoint [`Period`]-s of a [`PeriodSet`] in ascending order.
///
/// Created with [`PeriodSet::iter`].
pub struct Periods<'a, T> {
    events: btree_map::Iter<'a, T, Delta>,
    /// Running sum of the deltas seen so far.
    coverage: Delta,
    start: Option<&'a T>,
}

impl<'a, T> Periods<'a, T> {
    /// Feed one sweep line event, returning the endpoints of the period
    /// it closes, if any.
    ///
    /// A period is open while the coverage is positive.
    /// The coverage of a normalized set is never negative,
    /// but it may be while subtracting sets.
    fn advance(&mut self, instant: &'a T, delta: Delta) -> Option<(&'a T, &'a T)> {
        let previous = self.coverage;
        self.coverage += delta;

        if previous <= 0 && self.coverage > 0 {
            self.start = Some(instant);
        } else if previous > 0 && self.coverage <= 0 {
            return self.start.take().map(|start| (start, instant));
        }
        None
    }
}

impl<T: Clone> Iterator for Periods<'_, T> {
    type Item = Period<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((instant, &delta)) = self.events.next() {
            if let Some((from, to)) = self.advance(instant, delta) {
                return Some(Period::new(from.clone(), to.clone()));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every period needs at least two events
        (0, Some(self.events.len() / 2 + 1))
    }
}

impl<T: Clone> FusedIterator for Periods<'_, T> {}

impl<'a, T: Clone> IntoIterator for &'a PeriodSet<T> {
    type Item = Period<T>;
    type IntoIter = Periods<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
/// Owning iterator over the disjoint [`Period`]-s of a [`PeriodSet`] in ascending order.
pub struct IntoIter<T> {
    events: btree_map::IntoIter<T, Delta>,
    coverage: Delta,
    start: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Period<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for (instant, delta) in self.events.by_ref() {
            let previous = self.coverage;
            self.coverage += delta;

            if previous <= 0 && self.coverage > 0 {
                self.start = Some(instant);
            } else if previous > 0 && self.coverage <= 0 {
                if let Some(from) = self.start.take() {
                    return Some(Period::new(from, instant));
                }
            }
        }
        None
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for PeriodSet<T> {
    type Item = Period<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            events: self.deltas.into_iter(),
            coverage: 0,
            start: None,
        }
    }
}

#[macro_export]
/// Create a [`PeriodSet`][crate::PeriodSet] from `(from, to)` pairs.
///
/// ```
/// # use periodset::{period, period_set, PeriodSet};
/// let set = period_set![(1, 3), (2, 5)];
/// assert!(set.iter().eq([period!(1, 5)]));
///
/// let empty: PeriodSet<u32> = period_set![];
/// assert!(empty.is_empty());
/// ```
macro_rules! period_set {
    ($(($from:expr, $to:expr)),* $(,)?) => {
        $crate::PeriodSet::from_periods([$($crate::Period::new($from, $to)),*])
    };
}


#[cfg(all(feature = "serde", test))]
mod deser_tests {
    use serde_json::json;

    use crate::{period, period_set};

    use super::*;

    #[test]
    fn period() {
        let j = json!({ "from": 1, "to": 3 });
        let p: Period<i32> = serde_json::from_value(j.clone()).unwrap();
        assert_eq!(p, period!(1, 3));
        assert_eq!(serde_json::to_value(p).unwrap(), j);
    }

    #[test]
    fn set_is_a_list_of_periods() {
        let set = period_set![(5, 7), (1, 3)];
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!([{ "from": 1, "to": 3 }, { "from": 5, "to": 7 }])
        );
    }

    #[test]
    fn set_is_normalized_on_read() {
        let j = json!([
            { "from": 8, "to": 9 },
            { "from": 1, "to": 3 },
            { "from": 3, "to": 5 },
        ]);
        let set: PeriodSet<i32> = serde_json::from_value(j).unwrap();
        assert_eq!(set, period_set![(1, 5), (8, 9)]);
    }

    #[test]
    fn empty_set() {
        let set: PeriodSet<i32> = serde_json::from_value(json!([])).unwrap();
        assert!(set.is_empty());
        assert_eq!(serde_json::to_value(&set).unwrap(), json!([]));
    }
}
