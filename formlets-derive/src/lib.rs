//! Derive macros for formlets.
//!
//! - [`Lenses`]: Generates a lens constructor per struct field, for focusing
//!   field forms onto a record
//! - [`MarkModified`]: Marks every validated field of a record as modified
//!
//! # Example
//!
//! ```rust,ignore
//! use formlets::prelude::*;
//!
//! #[derive(Clone, Debug, Lenses, MarkModified)]
//! struct Signup {
//!     email: Validated<String>,
//!     #[mark_modified(skip)]
//!     newsletter: bool,
//! }
//!
//! let form = RecordBuilder::<Signup>::new()
//!     .field_at("email", Signup::email_lens(), fields::email("Email", None))
//!     .field_at("newsletter", Signup::newsletter_lens(), fields::toggle("Newsletter"))
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod mark_modified;

use proc_macro::TokenStream;

/// Derive macro generating a lens constructor for every named field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl formlets::optics::Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// Generic structs are supported; call the constructor on the concrete type,
/// e.g. `Pair::<i32>::left_lens()`.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro implementing `formlets::validation::MarkModified` for a
/// struct by marking each field in turn.
///
/// Every field type must implement `MarkModified` unless the field carries
/// `#[mark_modified(skip)]`, in which case it is left unchanged.
#[proc_macro_derive(MarkModified, attributes(mark_modified))]
pub fn derive_mark_modified(input: TokenStream) -> TokenStream {
    mark_modified::derive_mark_modified_impl(input)
}
