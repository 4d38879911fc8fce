//! Refined value types.
//!
//! Each type can only be obtained through a checking constructor, so holding
//! one is proof that the check passed. Every type exposes a `prism()` from its
//! raw representation, which [`Validator::from_prism`] turns into a validator.
//!
//! [`Validator::from_prism`]: super::Validator::from_prism

use std::fmt;

#[cfg(feature = "fields")]
use std::sync::LazyLock;

#[cfg(feature = "fields")]
use chrono::NaiveDate;
#[cfg(feature = "fields")]
use regex::Regex;

use crate::optics::{FunctionPrism, Prism};

/// A string with at least one character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Accepts any string except `""`.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        (!value.is_empty()).then_some(Self(value))
    }

    /// Borrows the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the text.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// `String` to `NonEmptyString`.
    pub fn prism() -> impl Prism<String, Self> + Clone {
        FunctionPrism::new(
            |value: &String| Self::parse(value.clone()),
            |value: Self| value.0,
        )
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// A finite number greater than or equal to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NonNegative(f64);

impl NonNegative {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// Accepts finite values `>= 0`.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self(value))
    }

    /// The number.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// `f64` to `NonNegative`.
    pub fn prism() -> impl Prism<f64, Self> + Clone {
        FunctionPrism::new(|value: &f64| Self::new(*value), |value: Self| value.0)
    }
}

impl fmt::Display for NonNegative {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// An amount of US dollars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Usd(NonNegative);

impl Usd {
    /// The amount in dollars.
    pub const fn dollars(self) -> f64 {
        self.0.get()
    }

    /// `f64` to `Usd`, failing for negative or non-finite amounts.
    pub fn prism() -> impl Prism<f64, Self> + Clone {
        FunctionPrism::new(
            |value: &f64| NonNegative::new(*value).map(Self),
            |value: Self| value.dollars(),
        )
    }
}

impl From<NonNegative> for Usd {
    fn from(value: NonNegative) -> Self {
        Self(value)
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "${:.2}", self.dollars())
    }
}

#[cfg(feature = "fields")]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("email pattern is valid"));

#[cfg(feature = "fields")]
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+\d+ )?\d{3}-\d{3}-\d{4}$").expect("phone pattern is valid")
});

/// A loosely checked email address: non-blank text around an `@`.
#[cfg(feature = "fields")]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Email(String);

#[cfg(feature = "fields")]
impl Email {
    /// Accepts text containing `non-space@non-space`.
    pub fn parse(value: &str) -> Option<Self> {
        EMAIL_PATTERN
            .is_match(value)
            .then(|| Self(value.to_string()))
    }

    /// Borrows the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `String` to `Email`.
    pub fn prism() -> impl Prism<String, Self> + Clone {
        FunctionPrism::new(|value: &String| Self::parse(value), |value: Self| value.0)
    }
}

/// A phone number of the form `###-###-####`, optionally preceded by a
/// `+#` country code and a space.
#[cfg(feature = "fields")]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Phone(String);

#[cfg(feature = "fields")]
impl Phone {
    /// Accepts `555-123-4567` and `+1 555-123-4567`.
    pub fn parse(value: &str) -> Option<Self> {
        PHONE_PATTERN
            .is_match(value)
            .then(|| Self(value.to_string()))
    }

    /// Borrows the number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `String` to `Phone`.
    pub fn prism() -> impl Prism<String, Self> + Clone {
        FunctionPrism::new(|value: &String| Self::parse(value), |value: Self| value.0)
    }
}

/// A calendar date normalized to `YYYY-MM-DD`.
#[cfg(feature = "fields")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateString(NaiveDate);

#[cfg(feature = "fields")]
impl DateString {
    const ISO: &'static str = "%Y-%m-%d";
    const US: &'static str = "%m/%d/%Y";

    /// Accepts `YYYY-MM-DD` or `MM/DD/YYYY`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        NaiveDate::parse_from_str(value, Self::ISO)
            .or_else(|_| NaiveDate::parse_from_str(value, Self::US))
            .ok()
            .map(Self)
    }

    /// The parsed date.
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// `String` to `DateString`.
    ///
    /// Reviewing always produces the `YYYY-MM-DD` form, so a `MM/DD/YYYY`
    /// source does not survive a round trip unchanged.
    pub fn prism() -> impl Prism<String, Self> + Clone {
        FunctionPrism::new(|value: &String| Self::parse(value), |value: Self| value.to_string())
    }
}

#[cfg(feature = "fields")]
impl fmt::Display for DateString {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.format(Self::ISO))
    }
}

#[cfg(all(feature = "fields", feature = "serde"))]
impl serde::Serialize for DateString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
