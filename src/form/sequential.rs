//! Sequential (monadic) composition of forms.
//!
//! Used when a field only makes sense once a previous field is valid, for
//! example a range whose bounds come from another field's parsed value.
//!
//! # Short-circuit
//!
//! ```text
//! fa(s).validate == None  ==>  chain(fa, f)(s) == fa(s) with validate = None
//! ```
//!
//! `f` is never called in that case, so the dependent form leaves no trace in
//! the editor or the children. Because of this, `Sequential::ap` differs from
//! [`Parallel::ap`](super::Parallel::ap): it does not render the argument
//! form while the function form is invalid.

use std::fmt;
use std::rc::Rc;

use super::parallel::pure;
use super::{Evaluation, Form};
use crate::typeclass::{Combinable, Natural};

/// The monad and alternative instance of [`Form`].
///
/// # Examples
///
/// ```
/// use formlets::form::Sequential;
/// use formlets::simple::leaf;
///
/// let sequential = Sequential::natural::<Vec<String>, ()>();
/// let limit = leaf::<i32>()
///     .map_ui(|leaf| vec![format!("limit {}", leaf.value)]);
///
/// let within = sequential.chain(limit, |limit| {
///     leaf::<i32>()
///         .map_ui(|leaf| vec![format!("value {}", leaf.value)])
///         .map(move |value| value.min(limit))
/// });
/// assert_eq!(within.revalidate(&5), Some(5));
/// ```
pub struct Sequential<MU, MC> {
    ui: Rc<MU>,
    children: Rc<MC>,
}

impl Sequential<(), ()> {
    /// The instance given by the `Monoid` implementations of `U` and `C`.
    #[must_use]
    pub fn natural<U, C>() -> Sequential<Natural<U>, Natural<C>> {
        Sequential::new(Natural::new(), Natural::new())
    }
}

impl<MU, MC> Sequential<MU, MC> {
    /// Binds the UI and children merge capabilities.
    #[must_use]
    pub fn new(ui: MU, children: MC) -> Self {
        Self {
            ui: Rc::new(ui),
            children: Rc::new(children),
        }
    }

    /// A form that ignores its state and always yields `value`.
    pub fn of<U, I, A, C>(&self, value: A) -> Form<U, I, A, C>
    where
        MU: Combinable<U> + 'static,
        MC: Combinable<C> + 'static,
        U: 'static,
        I: 'static,
        A: Clone + 'static,
        C: 'static,
    {
        pure(Rc::clone(&self.ui), Rc::clone(&self.children), value)
    }

    /// Transforms the validated output.
    pub fn map<U, I, A, B, C, F>(&self, form: Form<U, I, A, C>, function: F) -> Form<U, I, B, C>
    where
        U: 'static,
        I: 'static,
        A: 'static,
        B: 'static,
        C: 'static,
        F: Fn(A) -> B + 'static,
    {
        form.map(function)
    }

    /// Evaluates `first`, and only when it is valid builds the dependent form
    /// from its result and evaluates it against the same state.
    ///
    /// When both run, editors and children are merged and the dependent
    /// form's result is the result. When `first` is invalid, its own editor
    /// and children are returned unchanged with no result.
    pub fn chain<U, I, A, B, C, F>(&self, first: Form<U, I, A, C>, function: F) -> Form<U, I, B, C>
    where
        MU: Combinable<U> + 'static,
        MC: Combinable<C> + 'static,
        U: 'static,
        I: 'static,
        A: 'static,
        B: 'static,
        C: 'static,
        F: Fn(A) -> Form<U, I, B, C> + 'static,
    {
        let ui = Rc::clone(&self.ui);
        let children = Rc::clone(&self.children);
        Form::new(move |state| {
            let Evaluation {
                edit,
                validate,
                children: first_children,
            } = first.evaluate(state);
            match validate {
                Some(value) => {
                    let dependent = function(value).evaluate(state);
                    Evaluation {
                        edit: edit.merge(dependent.edit, Rc::clone(&ui)),
                        validate: dependent.validate,
                        children: children.merge(first_children, dependent.children),
                    }
                }
                None => Evaluation {
                    edit,
                    validate: None,
                    children: first_children,
                },
            }
        })
    }

    /// Applies a form of functions to a form of arguments, through
    /// [`chain`](Self::chain).
    ///
    /// The argument form is not evaluated while the function form is invalid.
    pub fn ap<U, I, A, B, C, F>(
        &self,
        functions: Form<U, I, F, C>,
        arguments: Form<U, I, A, C>,
    ) -> Form<U, I, B, C>
    where
        MU: Combinable<U> + 'static,
        MC: Combinable<C> + 'static,
        U: 'static,
        I: 'static,
        A: 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A) -> B + 'static,
    {
        let outer = self.clone();
        self.chain(functions, move |function| {
            let inner = outer.clone();
            outer.chain(arguments.clone(), move |argument| inner.of(function(argument)))
        })
    }

    /// Evaluates `first`; when it is invalid, builds and evaluates the
    /// alternative instead.
    ///
    /// The alternative is only constructed when needed.
    pub fn alt<U, I, A, C, F>(&self, first: Form<U, I, A, C>, alternative: F) -> Form<U, I, A, C>
    where
        U: 'static,
        I: 'static,
        A: 'static,
        C: 'static,
        F: Fn() -> Form<U, I, A, C> + 'static,
    {
        Form::new(move |state| {
            let evaluation = first.evaluate(state);
            if evaluation.validate.is_some() {
                evaluation
            } else {
                alternative().evaluate(state)
            }
        })
    }
}

impl<MU, MC> Clone for Sequential<MU, MC> {
    fn clone(&self) -> Self {
        Self {
            ui: Rc::clone(&self.ui),
            children: Rc::clone(&self.children),
        }
    }
}

impl<MU, MC> fmt::Debug for Sequential<MU, MC> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Sequential").finish_non_exhaustive()
    }
}
