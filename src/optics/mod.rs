//! Optics used to focus and refine form state.
//!
//! - [`Lens`]: a coherent get/set pair, used by
//!   [`Form::focus`](crate::form::Form::focus) to route edits of a field back
//!   into the containing record
//! - [`Prism`]: a partial view used to refine raw input into stronger types
//!
//! # Example with Lens
//!
//! ```
//! use formlets::optics::Lens;
//! use formlets::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```

mod lens;
mod prism;

pub use lens::{ComposedLens, FunctionLens, Lens};
pub use prism::{ComposedPrism, FunctionPrism, Prism};
