//! Semigroup type class - types with an associative binary operation.
//!
//! Editor descriptions and children trees are merged with `combine` whenever
//! sibling forms are composed in parallel, so every UI or children type used
//! with the form algebra starts here.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use formlets::typeclass::Semigroup;
//!
//! let vec1 = vec!["name"];
//! let vec2 = vec!["email"];
//! assert_eq!(vec1.combine(vec2), vec!["name", "email"]);
//! ```

use std::hash::Hash;

use indexmap::IndexMap;

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use formlets::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formlets::typeclass::Semigroup;
    ///
    /// let labels = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(labels), Some(String::from("ab")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option forms a semigroup when its inner type is a semigroup.
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial semigroup.
///
/// Forms without children (plain leaves) use `()` as their children type.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// IndexMap Implementation
// =============================================================================

/// Ordered maps form a semigroup under key union where the first occurrence
/// of a key wins.
///
/// Insertion order is preserved: keys of `self` come first, followed by the
/// keys only present in `other`. Record forms rely on this to keep one entry
/// per field in declaration order.
impl<K: Hash + Eq, V> Semigroup for IndexMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            self.entry(key).or_insert(value);
        }
        self
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

/// Tuples form a semigroup when all their elements are semigroups.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.combine(right), "Hello, World!");
    }

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        let result = left.combine_ref(&right);
        assert_eq!(result, "Hello, World!");
        assert_eq!(left, "Hello, ");
    }

    #[rstest]
    fn vec_combine_concatenates() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(Some(vec![1]), Some(vec![2]), Some(vec![1, 2]))]
    #[case(Some(vec![1]), None, Some(vec![1]))]
    #[case(None, Some(vec![2]), Some(vec![2]))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<Vec<i32>>,
        #[case] right: Option<Vec<i32>>,
        #[case] expected: Option<Vec<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn index_map_combine_keeps_first_occurrence() {
        let left: IndexMap<&str, i32> = [("name", 1), ("age", 2)].into_iter().collect();
        let right: IndexMap<&str, i32> = [("age", 20), ("email", 3)].into_iter().collect();

        let combined = left.combine(right);

        let entries: Vec<(&str, i32)> = combined.into_iter().collect();
        assert_eq!(entries, vec![("name", 1), ("age", 2), ("email", 3)]);
    }

    #[rstest]
    fn reduce_all_empty_is_none() {
        let empty: Vec<Vec<i32>> = vec![];
        assert_eq!(Vec::reduce_all(empty), None);
    }
}
