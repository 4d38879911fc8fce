//! Modification tracking for validated state.

/// A state value paired with whether the user has edited it.
///
/// Validation failures stay hidden while `modified` is `false`. Every edit
/// routed through [`Form::validate_with`](crate::form::Form::validate_with)
/// sets the flag, and nothing ever clears it except replacing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Validated<I> {
    /// The raw state.
    pub value: I,
    /// Whether the value has been edited since it was created.
    pub modified: bool,
}

impl<I> Validated<I> {
    /// An untouched value; failures are suppressed.
    pub const fn fresh(value: I) -> Self {
        Self {
            value,
            modified: false,
        }
    }

    /// A value that counts as edited; failures are shown.
    pub const fn touched(value: I) -> Self {
        Self {
            value,
            modified: true,
        }
    }

    /// Transforms the value, keeping the flag.
    #[must_use]
    pub fn map<J, F>(self, function: F) -> Validated<J>
    where
        F: FnOnce(I) -> J,
    {
        Validated {
            value: function(self.value),
            modified: self.modified,
        }
    }

    /// `self` when it has been edited, otherwise `other()`.
    #[must_use]
    pub fn alt<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.modified { self } else { other() }
    }
}

impl<I> From<I> for Validated<I> {
    fn from(value: I) -> Self {
        Self::fresh(value)
    }
}

/// Structures that can mark every [`Validated`] they contain as modified.
///
/// Used to reveal all errors at once, for example on a submit attempt.
/// Derive it for records with `#[derive(MarkModified)]`.
pub trait MarkModified {
    /// Returns the structure with every contained `Validated` touched.
    #[must_use]
    fn mark_modified(self) -> Self;
}

impl<I> MarkModified for Validated<I> {
    fn mark_modified(self) -> Self {
        Self::touched(self.value)
    }
}

impl<T: MarkModified> MarkModified for Vec<T> {
    fn mark_modified(self) -> Self {
        self.into_iter().map(MarkModified::mark_modified).collect()
    }
}

impl<T: MarkModified> MarkModified for Option<T> {
    fn mark_modified(self) -> Self {
        self.map(MarkModified::mark_modified)
    }
}

impl<A: MarkModified, B: MarkModified> MarkModified for (A, B) {
    fn mark_modified(self) -> Self {
        (self.0.mark_modified(), self.1.mark_modified())
    }
}
