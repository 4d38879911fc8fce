//! Checks for the contracts forms rely on but cannot enforce by type.
//!
//! [`Form::focus`](crate::form::Form::focus) assumes its lens is coherent: a
//! lens that reads back something other than what it just wrote makes edits
//! disappear without any error. Run [`verify_lens`] on sample values when
//! building forms from hand-written lenses.

use std::error::Error;
use std::fmt;

use crate::optics::Lens;

/// A lens law that failed on sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LawViolation {
    /// Writing back the viewed value changed the source.
    GetPut,
    /// Reading after a write did not return the written value.
    PutGet,
    /// Two writes did not behave like the last one alone.
    PutPut,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetPut => write!(formatter, "lens violates GetPut: setting the viewed value changed the source"),
            Self::PutGet => write!(formatter, "lens violates PutGet: the written value was not read back"),
            Self::PutPut => write!(formatter, "lens violates PutPut: an earlier write leaked through a later one"),
        }
    }
}

impl Error for LawViolation {}

/// Checks the GetPut, PutGet and PutPut laws of `lens` at `source`, using
/// `value` and `other` as the written values.
///
/// # Errors
///
/// Returns the first law that fails.
///
/// # Examples
///
/// ```
/// use formlets::lens;
/// use formlets::laws::{LawViolation, verify_lens};
/// use formlets::optics::FunctionLens;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Range { low: i32, high: i32 }
///
/// let range = Range { low: 1, high: 5 };
/// assert_eq!(verify_lens(&lens!(Range, low), &range, &2, &3), Ok(()));
///
/// let forgetful = FunctionLens::new(|range: &Range| &range.low, |range: Range, _low: i32| range);
/// assert_eq!(verify_lens(&forgetful, &range, &2, &3), Err(LawViolation::PutGet));
/// ```
pub fn verify_lens<S, A, L>(lens: &L, source: &S, value: &A, other: &A) -> Result<(), LawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq,
    A: Clone + PartialEq,
{
    let viewed = lens.get(source).clone();
    if lens.set(source.clone(), viewed) != *source {
        return Err(LawViolation::GetPut);
    }

    let written = lens.set(source.clone(), value.clone());
    if lens.get(&written) != value {
        return Err(LawViolation::PutGet);
    }

    let twice = lens.set(written, other.clone());
    if twice != lens.set(source.clone(), other.clone()) {
        return Err(LawViolation::PutPut);
    }

    Ok(())
}
