//! Composable validators.
//!
//! A [`Validator<I, O>`] is a pure function from an input to either a refined
//! output or an error message. Validators are built from small pieces and
//! piped together with [`Validator::and_then`]; the first failure wins.
//!
//! # Examples
//!
//! ```
//! use formlets::validation::{Bounds, Validator, number};
//!
//! let age = number()
//!     .and_then(Validator::bounded(Bounds::between(0.0, 150.0)))
//!     .with_label("Age");
//!
//! assert_eq!(age.run("42".to_string()), Ok(42.0));
//! assert_eq!(age.run("-1".to_string()), Err("Age must be greater than 0".to_string()));
//! assert_eq!(age.run(String::new()), Err("Age is required".to_string()));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::optics::Prism;

/// A pure validation function `I -> Result<O, String>`.
pub struct Validator<I, O> {
    run: Rc<dyn Fn(I) -> Result<O, String>>,
}

impl<I, O> Clone for Validator<I, O> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<I, O> fmt::Debug for Validator<I, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl<I: 'static, O: 'static> Validator<I, O> {
    /// Wraps a validation function.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(I) -> Result<O, String> + 'static,
    {
        Self { run: Rc::new(run) }
    }

    /// Runs the validator.
    pub fn run(&self, input: I) -> Result<O, String> {
        (self.run)(input)
    }

    /// Runs `next` on the output of this validator.
    #[must_use]
    pub fn and_then<P: 'static>(self, next: Validator<O, P>) -> Validator<I, P> {
        Validator::new(move |input| self.run(input).and_then(|output| next.run(output)))
    }

    /// Runs this validator on the output of `before`.
    #[must_use]
    pub fn compose<H: 'static>(self, before: Validator<H, I>) -> Validator<H, O> {
        before.and_then(self)
    }

    /// Transforms a successful output.
    #[must_use]
    pub fn map<P, F>(self, function: F) -> Validator<I, P>
    where
        P: 'static,
        F: Fn(O) -> P + 'static,
    {
        Validator::new(move |input| self.run(input).map(&function))
    }

    /// Transforms the error message.
    #[must_use]
    pub fn map_error<F>(self, function: F) -> Self
    where
        F: Fn(String) -> String + 'static,
    {
        Self::new(move |input| self.run(input).map_err(&function))
    }

    /// Prefixes every error with `"{label} "`.
    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.map_error(move |error| format!("{label} {error}"))
    }

    /// Fails with `error` unless the prism can view the input.
    pub fn from_prism<P>(prism: P, error: impl Into<String>) -> Self
    where
        P: Prism<I, O> + 'static,
    {
        let error = error.into();
        Self::new(move |input| prism.preview(&input).ok_or_else(|| error.clone()))
    }
}

impl<I: 'static> Validator<I, I> {
    /// Accepts every input unchanged.
    pub fn succeed() -> Self {
        Self::new(Ok)
    }
}

impl<T: PartialEq + 'static> Validator<T, T> {
    /// Accepts only inputs equal to `expected`.
    pub fn must_equal(expected: T, error: impl Into<String>) -> Self {
        let error = error.into();
        Self::new(move |input| {
            if input == expected {
                Ok(input)
            } else {
                Err(error.clone())
            }
        })
    }
}

impl<T: PartialOrd + fmt::Display + 'static> Validator<T, T> {
    /// Rejects inputs below `min`.
    pub fn minimum(min: T) -> Self {
        Self::new(move |input| {
            if input < min {
                Err(format!("must be greater than {min}"))
            } else {
                Ok(input)
            }
        })
    }

    /// Rejects inputs above `max`.
    pub fn maximum(max: T) -> Self {
        Self::new(move |input| {
            if input > max {
                Err(format!("must be less than {max}"))
            } else {
                Ok(input)
            }
        })
    }

    /// Rejects inputs outside `min..=max`, checking the lower bound first.
    pub fn between(min: T, max: T) -> Self {
        Self::minimum(min).and_then(Self::maximum(max))
    }

    /// Applies whichever of the bounds are set.
    pub fn bounded(bounds: Bounds<T>) -> Self {
        match (bounds.min, bounds.max) {
            (Some(min), Some(max)) => Self::between(min, max),
            (Some(min), None) => Self::minimum(min),
            (None, Some(max)) => Self::maximum(max),
            (None, None) => Self::succeed(),
        }
    }
}

impl<T: 'static> Validator<Option<T>, T> {
    /// Requires an optional input to be present.
    pub fn non_optional() -> Self {
        Self::new(|input: Option<T>| input.ok_or_else(|| "is required".to_string()))
    }
}

impl<O: Clone + 'static> Validator<String, O> {
    /// Maps the empty string to `default` and validates everything else.
    #[must_use]
    pub fn or_default(self, default: O) -> Self {
        Self::new(move |input: String| {
            if input.is_empty() {
                Ok(default.clone())
            } else {
                self.run(input)
            }
        })
    }
}

impl<O: 'static> Validator<String, O> {
    /// Maps the empty string to `None` and valid input to `Some`.
    #[must_use]
    pub fn optional(self) -> Validator<String, Option<O>> {
        Validator::new(move |input: String| {
            if input.is_empty() {
                Ok(None)
            } else {
                self.run(input).map(Some)
            }
        })
    }
}

/// Optional inclusive bounds for numeric validators.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T> {
    /// Smallest accepted value.
    pub min: Option<T>,
    /// Largest accepted value.
    pub max: Option<T>,
}

impl<T> Bounds<T> {
    /// No bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Both bounds.
    #[must_use]
    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Sets the lower bound.
    #[must_use]
    pub fn with_min(self, min: T) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn with_max(self, max: T) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }
}
