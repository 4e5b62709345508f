use core::fmt;

use proptest::{collection, prelude::*};

use crate::{Period, PeriodSet};

/// The largest number of source periods a generated [`PeriodSet`] is built from.
const MAX_SOURCE_PERIODS: usize = 8;

impl<T> Arbitrary for Period<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    /// Generates the endpoints independently, so inverted periods are generated too.
    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let instant = any_with::<T>(args).boxed();
        (instant.clone(), instant)
            .prop_map(|(from, to)| Self::new(from, to))
            .boxed()
    }
}

impl<T> PeriodSet<T> {
    /// Creates a strategy generating sets with the instants drawn from the given strategy.
    ///
    /// The endpoints of every source period get ordered before collecting,
    /// so each of the source periods adds to the set.
    pub fn strategy<S>(instants: S) -> BoxedStrategy<Self>
    where
        S: Strategy<Value = T> + Clone + 'static,
        T: Ord + Clone + fmt::Debug + 'static,
    {
        let period = (instants.clone(), instants).prop_map(|(a, b)| {
            if a <= b {
                Period::new(a, b)
            } else {
                Period::new(b, a)
            }
        });

        collection::vec(period, 0..=MAX_SOURCE_PERIODS)
            .prop_map(Self::from_periods)
            .boxed()
    }
}

impl<T> Arbitrary for PeriodSet<T>
where
    T: Arbitrary + Ord + Clone + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        Self::strategy(any_with::<T>(args).boxed())
    }
}
