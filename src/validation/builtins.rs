//! Validators for raw text input.
//!
//! Each one starts from the `String` an input field holds. Empty input fails
//! with `"is required"` before any parsing; wrap with
//! [`Validator::optional`] or [`Validator::or_default`] to accept it.

use super::refined::{NonEmptyString, NonNegative};
#[cfg(feature = "fields")]
use super::refined::{DateString, Email, Phone};
use super::Validator;

/// Rejects the empty string.
pub fn non_empty() -> Validator<String, NonEmptyString> {
    Validator::from_prism(NonEmptyString::prism(), "is required")
}

/// Parses a finite decimal number, ignoring surrounding whitespace.
///
/// Input that is only whitespace reads as zero.
pub fn number() -> Validator<String, f64> {
    non_empty().and_then(Validator::new(|text: NonEmptyString| {
        let trimmed = text.as_str().trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| "must be a number".to_string())
    }))
}

/// Parses a whole number.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn integer() -> Validator<String, i64> {
    number().and_then(Validator::new(|value: f64| {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(value as i64)
        } else {
            Err("must be an integer".to_string())
        }
    }))
}

/// Parses a number `>= 0`.
pub fn non_negative() -> Validator<String, NonNegative> {
    number().and_then(Validator::from_prism(NonNegative::prism(), "must be positive"))
}

/// Parses a whole number `>= 0`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn natural_number() -> Validator<String, u64> {
    number().and_then(Validator::new(|value: f64| {
        if value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64 {
            Ok(value as u64)
        } else {
            Err("must be a non-negative integer".to_string())
        }
    }))
}

/// Accepts loosely formed email addresses.
#[cfg(feature = "fields")]
pub fn email() -> Validator<String, Email> {
    Validator::from_prism(Email::prism(), "must be a valid email address")
}

/// Accepts `###-###-####` phone numbers with an optional `+#` country code.
#[cfg(feature = "fields")]
pub fn phone() -> Validator<String, Phone> {
    Validator::from_prism(
        Phone::prism(),
        "must be a dash separated 10 digit phone number with optional country code in the form +# ###-###-####",
    )
}

/// Accepts `YYYY-MM-DD` or `MM/DD/YYYY` dates.
#[cfg(feature = "fields")]
pub fn date() -> Validator<String, DateString> {
    Validator::from_prism(
        DateString::prism(),
        "must be a valid date in the form MM/DD/YYYY or YYYY-MM-DD",
    )
}
