//! Prism optics for refining raw values into stronger types.
//!
//! A Prism relates a broad type `S` (say, any `String`) with a narrower type
//! `A` (say, an `Email`) that embeds back into it. `preview` succeeds only for
//! the members of `S` that are valid `A`s; `review` always succeeds.
//!
//! Prisms are how refined types enter a form: a
//! [`Validator::from_prism`](crate::validation::Validator::from_prism) turns a
//! failed preview into an error message.
//!
//! # Laws
//!
//! 1. **ReviewPreview Law**: reviewing then previewing yields the original value.
//!    ```text
//!    prism.preview(&prism.review(value)) == Some(value)
//!    ```
//!
//! 2. **PreviewReview Law**: if preview succeeds, reviewing the result yields
//!    the original source.
//!    ```text
//!    prism.preview(&source).map(|a| prism.review(a)) == Some(source)  // when Some
//!    ```
//!
//! # Examples
//!
//! ```
//! use formlets::optics::{FunctionPrism, Prism};
//!
//! let even = FunctionPrism::new(
//!     |value: &i64| (value % 2 == 0).then_some(*value),
//!     |value: i64| value,
//! );
//!
//! assert_eq!(even.preview(&4), Some(4));
//! assert_eq!(even.preview(&3), None);
//! ```

use std::marker::PhantomData;

/// A Prism focuses on the subset of `S` that can be viewed as an `A`.
pub trait Prism<S, A> {
    /// Attempts to view the source as the narrower type.
    fn preview(&self, source: &S) -> Option<A>;

    /// Embeds a narrower value back into the source type.
    fn review(&self, value: A) -> S;

    /// Modifies the value if the source can be previewed.
    ///
    /// Returns `None` when the preview fails.
    fn modify_option<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview(source)
            .map(|value| self.review(function(value)))
    }

    /// Composes this prism with another prism to refine further.
    ///
    /// # Example
    ///
    /// ```
    /// use formlets::optics::{FunctionPrism, Prism};
    ///
    /// let number = FunctionPrism::new(
    ///     |text: &String| text.parse::<i64>().ok(),
    ///     |value: i64| value.to_string(),
    /// );
    /// let positive = FunctionPrism::new(
    ///     |value: &i64| (*value > 0).then_some(*value),
    ///     |value: i64| value,
    /// );
    ///
    /// let positive_number = number.compose(positive);
    /// assert_eq!(positive_number.preview(&"12".to_string()), Some(12));
    /// assert_eq!(positive_number.preview(&"-1".to_string()), None);
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }
}

/// A prism implemented using preview and review functions.
pub struct FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    preview: P,
    review: R,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, P, R> FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from its two directions.
    #[must_use]
    pub const fn new(preview: P, review: R) -> Self {
        Self {
            preview,
            review,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> Prism<S, A> for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.preview)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review)(value)
    }
}

impl<S, A, P, R> Clone for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A> + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview: self.preview.clone(),
            review: self.review.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, R> std::fmt::Debug for FunctionPrism<S, A, P, R>
where
    P: Fn(&S) -> Option<A>,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
