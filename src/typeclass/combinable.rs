//! Explicit merge capabilities for the form algebra.
//!
//! A [`Combinable<T>`] is a value that knows how to produce the identity of
//! `T` and how to merge two `T`s. Unlike [`Monoid`], which is resolved from
//! the type alone, a `Combinable` is passed around explicitly, so the same UI
//! type can be merged differently by different form algebras.
//!
//! # Laws
//!
//! ```text
//! c.merge(c.empty(), a) == a
//! c.merge(a, c.empty()) == a
//! c.merge(c.merge(a, b), d) == c.merge(a, c.merge(b, d))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use formlets::typeclass::{Combinable, FnCombinable, Natural};
//!
//! let natural = Natural::<Vec<&str>>::new();
//! assert_eq!(natural.merge(vec!["a"], vec!["b"]), vec!["a", "b"]);
//!
//! let last_wins = FnCombinable::new(|| None, |left: Option<i32>, right: Option<i32>| right.or(left));
//! assert_eq!(last_wins.merge(Some(1), Some(2)), Some(2));
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{Monoid, Semigroup};

/// A capability for merging values of `T` with an identity element.
pub trait Combinable<T> {
    /// Returns the identity element.
    fn empty(&self) -> T;

    /// Merges two values. Must be associative.
    fn merge(&self, left: T, right: T) -> T;

    /// Merges every value of an iterator, starting from [`empty`](Self::empty).
    fn merge_all<I>(&self, values: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(self.empty(), |accumulator, value| self.merge(accumulator, value))
    }
}

impl<T, C: Combinable<T> + ?Sized> Combinable<T> for Rc<C> {
    fn empty(&self) -> T {
        (**self).empty()
    }

    fn merge(&self, left: T, right: T) -> T {
        (**self).merge(left, right)
    }
}

/// The `Combinable` instance given by a type's own [`Monoid`] implementation.
pub struct Natural<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Natural<T> {
    /// Creates the instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Monoid> Combinable<T> for Natural<T> {
    fn empty(&self) -> T {
        T::empty()
    }

    fn merge(&self, left: T, right: T) -> T {
        left.combine(right)
    }
}

impl<T> Clone for Natural<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Natural<T> {}

impl<T> Default for Natural<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Natural<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Natural")
    }
}

/// A `Combinable` built from an identity constructor and a merge function.
pub struct FnCombinable<T, E, M>
where
    E: Fn() -> T,
    M: Fn(T, T) -> T,
{
    empty: E,
    merge: M,
    _marker: PhantomData<fn() -> T>,
}

impl<T, E, M> FnCombinable<T, E, M>
where
    E: Fn() -> T,
    M: Fn(T, T) -> T,
{
    /// Creates an instance from the two operations.
    ///
    /// The caller is responsible for the identity and associativity laws.
    #[must_use]
    pub const fn new(empty: E, merge: M) -> Self {
        Self {
            empty,
            merge,
            _marker: PhantomData,
        }
    }
}

impl<T, E, M> Combinable<T> for FnCombinable<T, E, M>
where
    E: Fn() -> T,
    M: Fn(T, T) -> T,
{
    fn empty(&self) -> T {
        (self.empty)()
    }

    fn merge(&self, left: T, right: T) -> T {
        (self.merge)(left, right)
    }
}

impl<T, E, M> Clone for FnCombinable<T, E, M>
where
    E: Fn() -> T + Clone,
    M: Fn(T, T) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            empty: self.empty.clone(),
            merge: self.merge.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, E, M> fmt::Debug for FnCombinable<T, E, M>
where
    E: Fn() -> T,
    M: Fn(T, T) -> T,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FnCombinable")
            .finish_non_exhaustive()
    }
}

/// Ordered map union where the first occurrence of a key wins.
///
/// Keys keep the position of their first insertion, so merging record
/// fields preserves declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstWins;

impl<K: Hash + Eq, V> Combinable<IndexMap<K, V>> for FirstWins {
    fn empty(&self) -> IndexMap<K, V> {
        IndexMap::new()
    }

    fn merge(&self, left: IndexMap<K, V>, right: IndexMap<K, V>) -> IndexMap<K, V> {
        left.combine(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rstest::rstest;

    #[rstest]
    fn natural_delegates_to_monoid() {
        let natural = Natural::<String>::new();
        assert_eq!(natural.empty(), "");
        assert_eq!(natural.merge("ab".into(), "cd".into()), "abcd");
    }

    #[rstest]
    fn merge_all_folds_from_empty() {
        let natural = Natural::<IndexMap<&str, i32>>::new();
        let merged = natural.merge_all(vec![
            [("x", 1)].into_iter().collect(),
            [("x", 2), ("y", 3)].into_iter().collect(),
        ]);
        assert_eq!(merged.get("x"), Some(&1));
        assert_eq!(merged.get("y"), Some(&3));
    }

    #[rstest]
    fn first_wins_keeps_earliest_key_and_order() {
        let left: IndexMap<&str, i32> = [("b", 1), ("a", 2)].into_iter().collect();
        let right: IndexMap<&str, i32> = [("a", 9), ("c", 3)].into_iter().collect();
        let merged = FirstWins.merge(left, right);
        assert_eq!(merged.into_iter().collect::<Vec<_>>(), vec![("b", 1), ("a", 2), ("c", 3)]);
    }

    #[rstest]
    fn first_wins_identity() {
        let map: IndexMap<&str, i32> = [("k", 1)].into_iter().collect();
        assert_eq!(FirstWins.merge(FirstWins.empty(), map.clone()), map);
        assert_eq!(FirstWins.merge(map.clone(), FirstWins.empty()), map);
    }

    #[rstest]
    fn rc_forwards_to_inner_instance() {
        let shared = Rc::new(FnCombinable::new(|| 0, |left: i32, right: i32| left + right));
        assert_eq!(shared.merge_all(vec![1, 2, 3]), 6);
    }
}
