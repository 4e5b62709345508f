use core::{iter, option};

/// Two values of the same type.
pub type Pair<T> = (T, T);

/// Either a single value or a pair of values.
///
/// Iterating yields the single value, or both values of the pair
/// in their original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneOrPair<T> {
    /// A single value variant.
    One(T),
    /// A pair of values variant.
    Pair(Pair<T>),
}

impl<T> OneOrPair<T> {
    /// The number of values held: either 1 or 2.
    pub const fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Pair(_) => 2,
        }
    }

    /// Always `false`: there is at least one value.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Apply a transformation to every held value, preserving the structure.
    pub fn map<U, F>(self, mut f: F) -> OneOrPair<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::One(a) => OneOrPair::One(f(a)),
            Self::Pair((a, b)) => OneOrPair::Pair((f(a), f(b))),
        }
    }

    /// Build from up to two optional values, keeping their order.
    pub(crate) fn from_options(first: Option<T>, second: Option<T>) -> Option<Self> {
        match (first, second) {
            (Some(a), Some(b)) => Some(Self::Pair((a, b))),
            (Some(x), None) | (None, Some(x)) => Some(Self::One(x)),
            (None, None) => None,
        }
    }
}

impl<T> From<T> for OneOrPair<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Pair<T>> for OneOrPair<T> {
    fn from(value: Pair<T>) -> Self {
        Self::Pair(value)
    }
}

impl<T> IntoIterator for OneOrPair<T> {
    type Item = T;
    type IntoIter = iter::Chain<iter::Once<T>, option::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        let (first, second) = match self {
            Self::One(a) => (a, None),
            Self::Pair((a, b)) => (a, Some(b)),
        };
        iter::once(first).chain(second)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use super::*;

    #[test]
    fn iterates_in_order() {
        let one = OneOrPair::One(3);
        assert_eq!(one.into_iter().collect::<Vec<_>>(), vec![3]);

        let pair = OneOrPair::Pair((5, 1));
        assert_eq!(pair.into_iter().collect::<Vec<_>>(), vec![5, 1]);
        assert_eq!(pair.len(), 2);
    }

    #[test]
    fn from_options_keeps_order() {
        assert_eq!(OneOrPair::<i32>::from_options(None, None), None);
        assert_eq!(
            OneOrPair::from_options(None, Some(2)),
            Some(OneOrPair::One(2))
        );
        assert_eq!(
            OneOrPair::from_options(Some(1), None),
            Some(OneOrPair::One(1))
        );
        assert_eq!(
            OneOrPair::from_options(Some(1), Some(2)),
            Some(OneOrPair::Pair((1, 2)))
        );
    }

    #[test]
    fn optional_result_flattens() {
        let none: Option<OneOrPair<u8>> = None;
        assert_eq!(none.into_iter().flatten().count(), 0);

        let some = Some(OneOrPair::Pair((1, 2)));
        assert_eq!(some.into_iter().flatten().collect::<Vec<_>>(), vec![1, 2]);
    }
}
