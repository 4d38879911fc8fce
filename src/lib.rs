//! # formlets
//!
//! Composable, validated input forms.
//!
//! ## Overview
//!
//! A [`Form`](form::Form) turns a piece of application state into three
//! things at once: an editor description to render, the validated result
//! (if the input is valid), and a structured report of per-field results.
//! Small forms combine into larger ones:
//!
//! - **Form algebra**: [`Parallel`](form::Parallel) and
//!   [`Sequential`](form::Sequential) composition, focusing with lenses
//! - **Validation**: composable validators, refined types, and error display
//!   gated on whether the user touched a field
//! - **Simple forms**: leaves, records, arrays, optional values and selects
//!   over a concrete UI tree
//! - **Optics**: Lens and Prism for focusing and refining state
//! - **Host**: a reference state owner that applies edits in order
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Lenses)]` and `#[derive(MarkModified)]` (default)
//! - `fields`: email, phone and date validators and the ready-made labelled
//!   fields (default)
//! - `serde`: serialization of configuration and refined values
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use formlets::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct Budget { amount: Validated<String>, year: Validated<String> }
//!
//! let form = RecordBuilder::<Budget, ()>::new()
//!     .field_at("amount", lens!(Budget, amount), fields::dollars("Amount"))
//!     .field_at("year", lens!(Budget, year), fields::year("Year", None))
//!     .build()
//!     .map(|(((), amount), year)| (amount.dollars(), year));
//!
//! let budget = Budget {
//!     amount: Validated::touched("250".into()),
//!     year: Validated::touched("2024".into()),
//! };
//! assert_eq!(form.revalidate(&budget), Some((250.0, 2024)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use formlets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::form::*;
    pub use crate::host::{FormHost, Rendered};
    pub use crate::lens;
    pub use crate::optics::*;
    #[cfg(feature = "fields")]
    pub use crate::simple::fields;
    pub use crate::simple::*;
    pub use crate::typeclass::*;
    pub use crate::validation::*;

    #[cfg(feature = "derive")]
    pub use formlets_derive::{Lenses, MarkModified};
}

pub mod form;
pub mod host;
pub mod laws;
pub mod optics;
pub mod simple;
pub mod typeclass;
pub mod validation;

#[cfg(feature = "derive")]
pub use formlets_derive::{Lenses, MarkModified};

static_assertions::assert_not_impl_any!(form::Form<(), (), (), ()>: Send, Sync);
static_assertions::assert_impl_all!(form::Form<(), (), (), ()>: Clone);
static_assertions::assert_impl_all!(laws::LawViolation: std::error::Error, Send, Sync);
