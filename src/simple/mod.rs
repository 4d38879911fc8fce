//! A concrete form vocabulary: typed leaves, records, arrays, optional values
//! and selects, with a heterogeneous [`UiTree`] for renderers.
//!
//! # Examples
//!
//! ```
//! use formlets::form::{ChangeFn, EditContext};
//! use formlets::lens;
//! use formlets::simple::{RecordBuilder, UiTree, leaf};
//! use formlets::validation::{Validated, non_empty};
//!
//! #[derive(Clone, Debug)]
//! struct Contact { name: Validated<String>, vip: bool }
//!
//! let form = RecordBuilder::<Contact, ()>::new()
//!     .field_at("name", lens!(Contact, name), leaf::<String>().validate_leaf(non_empty().with_label("Name")))
//!     .field_at("vip", lens!(Contact, vip), leaf::<bool>())
//!     .build();
//!
//! let contact = Contact { name: Validated::touched(String::new()), vip: true };
//! let evaluation = form.evaluate(&contact);
//! assert!(evaluation.validate.is_none());
//!
//! let ui = UiTree::from(evaluation.edit.render(EditContext::new(ChangeFn::ignore())));
//! let name = ui.get("name").and_then(UiTree::as_field).expect("name field");
//! assert_eq!(name.error.as_deref(), Some("Name is required"));
//! ```

mod array;
mod children;
#[cfg(feature = "fields")]
pub mod fields;
mod record;
mod select;
mod ui;

pub use array::{ArrayOptions, array, maybe};
pub use children::{
    AnyValue, ArrayChildren, ChildNode, FieldChildren, IntoChildNode, MaybeChildren,
    RecordChildren, ResolvedNode,
};
pub use record::RecordBuilder;
pub use select::select;
pub use ui::{
    ActionLeaf, AnyField, ArrayRow, ArrayUi, FieldLeaf, Props, SelectItem, SelectUi, UiRecord,
    UiTree, ValueLeaf, leaf,
};
