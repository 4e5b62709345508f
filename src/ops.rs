use core::ops::{Add, BitAnd, BitOr, BitXor, Bound, Range, RangeBounds, Sub};

use crate::{OneOrPair, Period, PeriodSet};

impl<T> From<Range<T>> for Period<T> {
    fn from(Range { start, end }: Range<T>) -> Self {
        Self::new(start, end)
    }
}

impl<T> From<Period<T>> for Range<T> {
    fn from(period: Period<T>) -> Self {
        let (start, end) = period.into_inner();
        start..end
    }
}

impl<T> RangeBounds<T> for Period<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(self.from())
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Excluded(self.to())
    }
}

/// Same as [`Period::combine`].
impl<T: Ord> Add for Period<T> {
    type Output = OneOrPair<Self>;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}

/// Same as [`Period::remove`].
impl<T: Ord + Clone> Sub for Period<T> {
    type Output = Option<OneOrPair<Self>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.remove(&rhs)
    }
}

/// Same as [`PeriodSet::union_with`].
impl<T: Ord + Clone> BitOr for &PeriodSet<T> {
    type Output = PeriodSet<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union_with(rhs)
    }
}

/// Same as [`PeriodSet::intersect_with`].
impl<T: Ord + Clone> BitAnd for &PeriodSet<T> {
    type Output = PeriodSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect_with(rhs)
    }
}

/// Same as [`PeriodSet::except_with`].
impl<T: Ord + Clone> Sub for &PeriodSet<T> {
    type Output = PeriodSet<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.except_with(rhs)
    }
}

/// Same as [`PeriodSet::symmetric_except_with`].
impl<T: Ord + Clone> BitXor for &PeriodSet<T> {
    type Output = PeriodSet<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_except_with(rhs)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{period, period_set};

    use super::*;

    #[test]
    fn from_range() {
        let p: Period<_> = (3..8).into();
        assert_eq!(p, period!(3, 8));
        assert_eq!(Range::from(p), 3..8);
    }

    #[test]
    fn range_bounds_are_half_open() {
        let p = period!(3, 8);
        assert_eq!(p.start_bound(), Bound::Included(&3));
        assert_eq!(p.end_bound(), Bound::Excluded(&8));
        assert!(RangeBounds::contains(&p, &3));
        assert!(!RangeBounds::contains(&p, &8));
    }

    #[test]
    fn range_bounds_slice_a_map() {
        use alloc::collections::BTreeMap;

        let map: BTreeMap<_, _> = (0..10).map(|i| (i, i * i)).collect();
        let squares: Vec<_> = map.range(period!(2, 5)).map(|(_, v)| *v).collect();
        assert_eq!(squares, [4, 9, 16]);
    }

    #[test]
    fn add_merges_or_separates() {
        assert_eq!(period!(1, 3) + period!(2, 6), OneOrPair::One(period!(1, 6)));
        assert_eq!(period!(1, 3) + period!(3, 6), OneOrPair::One(period!(1, 6)));
        assert_eq!(
            period!(5, 6) + period!(1, 3),
            OneOrPair::Pair((period!(5, 6), period!(1, 3)))
        );
    }

    #[test]
    fn sub_yields_remainders() {
        let pieces: Vec<_> = (period!(0, 10) - period!(2, 4)).into_iter().flatten().collect();
        assert_eq!(pieces, [period!(0, 2), period!(4, 10)]);

        assert_eq!(period!(2, 4) - period!(0, 10), None);
        assert_eq!(
            period!(0, 10) - period!(5, 15),
            Some(OneOrPair::One(period!(0, 5)))
        );
    }

    #[test]
    fn set_operators_match_methods() {
        let a = period_set![(1, 5), (8, 12)];
        let b = period_set![(3, 9)];

        assert_eq!(&a | &b, a.union_with(&b));
        assert_eq!(&a & &b, a.intersect_with(&b));
        assert_eq!(&a - &b, a.except_with(&b));
        assert_eq!(&a ^ &b, a.symmetric_except_with(&b));

        assert_eq!(&a & &b, period_set![(3, 5), (8, 9)]);
    }
}
