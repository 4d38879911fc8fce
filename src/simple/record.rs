//! Record forms: named fields over one state value.
//!
//! Every field is evaluated against the same record state, so fields are
//! independent: a field's editor only ever updates its own part of the
//! record, and an invalid field never hides the others.
//!
//! # Examples
//!
//! ```
//! use formlets::lens;
//! use formlets::simple::{RecordBuilder, leaf};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Draft { title: String, pages: u32 }
//!
//! let form = RecordBuilder::<Draft, ()>::new()
//!     .field_at("title", lens!(Draft, title), leaf::<String>())
//!     .field_at("pages", lens!(Draft, pages), leaf::<u32>())
//!     .build()
//!     .map(|(((), title), pages)| format!("{title} ({pages})"));
//!
//! let draft = Draft { title: "Notes".into(), pages: 3 };
//! let evaluation = form.evaluate(&draft);
//!
//! assert_eq!(evaluation.validate.as_deref(), Some("Notes (3)"));
//! assert_eq!(evaluation.children.keys().collect::<Vec<_>>(), vec!["title", "pages"]);
//! ```

use std::fmt;

use indexmap::IndexMap;

use super::children::{AnyValue, FieldChildren, IntoChildNode, RecordChildren};
use super::ui::{UiRecord, UiTree};
use crate::form::{Evaluation, Form, Parallel};
use crate::optics::Lens;
use crate::typeclass::FirstWins;

/// Accumulates named fields into a record form.
///
/// `A` is the left-nested tuple of the outputs so far, starting from `()`.
/// Field names should be unique; when one repeats, the first field's editor
/// and children are kept.
///
/// Fields added with [`entry`](Self::entry) also carry their starting value,
/// so [`build_with_defaults`](Self::build_with_defaults) can hand back an
/// initial state along with the form.
pub struct RecordBuilder<S, A> {
    parallel: Parallel<FirstWins, FirstWins>,
    form: Form<UiRecord, S, A, RecordChildren>,
    defaults: Box<dyn FnOnce(S) -> S>,
}

impl<S: 'static> RecordBuilder<S, ()> {
    /// A record with no fields, always valid with `()`.
    pub fn new() -> Self {
        let parallel = Parallel::new(FirstWins, FirstWins);
        Self {
            form: parallel.of(()),
            parallel,
            defaults: Box::new(|state| state),
        }
    }
}

impl<S: 'static> Default for RecordBuilder<S, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static, A: 'static> RecordBuilder<S, A> {
    /// Adds a field whose form already runs over the record state.
    #[must_use]
    pub fn field<U, B, C>(self, name: impl Into<String>, form: Form<U, S, B, C>) -> RecordBuilder<S, (A, B)>
    where
        U: Into<UiTree> + 'static,
        B: Clone + fmt::Debug + 'static,
        C: IntoChildNode + 'static,
    {
        RecordBuilder {
            form: self.parallel.product(self.form, named(name.into(), form)),
            parallel: self.parallel,
            defaults: self.defaults,
        }
    }

    /// Adds a field whose form runs over the part of the record `lens`
    /// focuses on.
    #[must_use]
    pub fn field_at<T, L, U, B, C>(
        self,
        name: impl Into<String>,
        lens: L,
        form: Form<U, T, B, C>,
    ) -> RecordBuilder<S, (A, B)>
    where
        T: Clone + 'static,
        L: Lens<S, T> + 'static,
        U: Into<UiTree> + 'static,
        B: Clone + fmt::Debug + 'static,
        C: IntoChildNode + 'static,
    {
        self.field(name, form.focus(lens))
    }

    /// Adds a field like [`field_at`](Self::field_at) and records `default`
    /// as its part of the initial state.
    #[must_use]
    pub fn entry<T, L, U, B, C>(
        self,
        name: impl Into<String>,
        lens: L,
        form: Form<U, T, B, C>,
        default: T,
    ) -> RecordBuilder<S, (A, B)>
    where
        T: Clone + 'static,
        L: Lens<S, T> + Clone + 'static,
        U: Into<UiTree> + 'static,
        B: Clone + fmt::Debug + 'static,
        C: IntoChildNode + 'static,
    {
        let RecordBuilder {
            parallel,
            form,
            defaults,
        } = self.field_at(name, lens.clone(), form);
        RecordBuilder {
            parallel,
            form,
            defaults: Box::new(move |state| lens.set(defaults(state), default)),
        }
    }

    /// The record form.
    pub fn build(self) -> Form<UiRecord, S, A, RecordChildren> {
        self.form
    }

    /// The record form and `seed` with every entry's default written into it.
    pub fn build_from(self, seed: S) -> (Form<UiRecord, S, A, RecordChildren>, S) {
        let initial = (self.defaults)(seed);
        (self.form, initial)
    }

    /// The record form and an initial state made of `S::default()` with
    /// every entry's default written into it.
    pub fn build_with_defaults(self) -> (Form<UiRecord, S, A, RecordChildren>, S)
    where
        S: Default,
    {
        self.build_from(S::default())
    }
}

impl<S, A> fmt::Debug for RecordBuilder<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("RecordBuilder").finish_non_exhaustive()
    }
}

/// Wraps a field's editor and children under its name.
fn named<S, U, B, C>(name: String, form: Form<U, S, B, C>) -> Form<UiRecord, S, B, RecordChildren>
where
    S: 'static,
    U: Into<UiTree> + 'static,
    B: Clone + fmt::Debug + 'static,
    C: IntoChildNode + 'static,
{
    Form::new(move |state: &S| {
        let Evaluation {
            edit,
            validate,
            children,
        } = form.evaluate(state);
        let field = FieldChildren {
            result: children.into_child_node(),
            value: validate.clone().map(AnyValue::new),
        };
        let key = name.clone();
        Evaluation {
            edit: edit.map(move |ui| IndexMap::from([(key, ui.into())])),
            validate,
            children: IndexMap::from([(name.clone(), field)]),
        }
    })
}
