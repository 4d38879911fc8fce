//! Algebraic structures used to merge the result channels of forms.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Combinable`]: An explicitly passed merge capability, used by the
//!   parallel and sequential form algebras
//!
//! # Examples
//!
//! ```rust
//! use formlets::typeclass::{Combinable, Monoid, Natural, Semigroup};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let ui = Natural::<Vec<&str>>::new();
//! assert_eq!(ui.merge(ui.empty(), vec!["field"]), vec!["field"]);
//! ```

mod combinable;
mod monoid;
mod semigroup;

pub use combinable::{Combinable, FirstWins, FnCombinable, Natural};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
