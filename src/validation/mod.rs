//! Validation: validators, refined types, and modification tracking.
//!
//! A form's raw output is turned into a domain value by a [`Validator`],
//! attached with [`Form::validate_with`](crate::form::Form::validate_with) or
//! [`Form::validate_leaf`](crate::form::Form::validate_leaf). The attached form
//! runs over [`Validated`] state so that errors stay hidden until the user
//! has touched the field.
//!
//! # Examples
//!
//! ```
//! use formlets::simple::leaf;
//! use formlets::validation::{Bounds, Validated, Validator, natural_number};
//!
//! let year = leaf::<String>().validate_leaf(
//!     natural_number()
//!         .and_then(Validator::bounded(Bounds::between(1900, 2100)))
//!         .with_label("Year"),
//! );
//!
//! assert_eq!(year.revalidate(&Validated::fresh("1999".into())), Some(1999));
//! assert_eq!(year.revalidate(&Validated::fresh("1800".into())), None);
//! ```

mod attach;
mod builtins;
mod refined;
mod validated;
mod validator;

#[cfg(feature = "fields")]
pub use builtins::{date, email, phone};
pub use builtins::{integer, natural_number, non_empty, non_negative, number};
#[cfg(feature = "fields")]
pub use refined::{DateString, Email, Phone};
pub use refined::{NonEmptyString, NonNegative, Usd};
pub use validated::{MarkModified, Validated};
pub use validator::{Bounds, Validator};
