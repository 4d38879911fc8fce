//! The form algebra.
//!
//! A [`Form<U, I, A, C>`] is a pure function from input state `I` to an
//! [`Evaluation`] made of three independent channels:
//!
//! - `edit`: renders an editor description `U` once given an [`EditContext`]
//! - `validate`: the parsed result `A`, or `None` while the form is invalid
//! - `children`: a structured report `C` of per-field results
//!
//! Forms are combined in two ways:
//!
//! - [`Parallel`]: siblings evaluated against the same state, every channel
//!   merged, valid only when every sibling is valid
//! - [`Sequential`]: the second form is only built from the first form's
//!   result, short-circuiting when the first form is invalid
//!
//! and narrowed onto sub-state with [`Form::focus`].
//!
//! # Examples
//!
//! ```
//! use formlets::form::{ChangeFn, EditContext, Form};
//! use formlets::simple::leaf;
//!
//! let length = leaf::<String>().map(|text| text.len());
//! let evaluation = length.evaluate(&"hello".to_string());
//!
//! assert_eq!(evaluation.validate, Some(5));
//! let ui = evaluation.edit.render(EditContext::new(ChangeFn::ignore()));
//! assert_eq!(ui.value, "hello");
//! ```

mod change;
mod parallel;
mod sequential;

use std::fmt;
use std::rc::Rc;

pub use change::{ChangeFn, EditContext, Update};
pub use parallel::Parallel;
pub use sequential::Sequential;

use crate::optics::{FunctionLens, Lens};
use crate::typeclass::Combinable;

/// A one-shot renderer for an editor description.
pub struct Edit<U, I> {
    render: Box<dyn FnOnce(EditContext<I>) -> U>,
}

impl<U: 'static, I: 'static> Edit<U, I> {
    /// Wraps a render function.
    pub fn new<F>(render: F) -> Self
    where
        F: FnOnce(EditContext<I>) -> U + 'static,
    {
        Self {
            render: Box::new(render),
        }
    }

    /// Renders the editor.
    pub fn render(self, context: EditContext<I>) -> U {
        (self.render)(context)
    }

    /// Transforms the rendered description.
    #[must_use]
    pub fn map<V, F>(self, function: F) -> Edit<V, I>
    where
        V: 'static,
        F: FnOnce(U) -> V + 'static,
    {
        Edit::new(move |context| function(self.render(context)))
    }

    /// Adapts the context this editor is rendered with.
    #[must_use]
    pub fn with_context<J, F>(self, adapt: F) -> Edit<U, J>
    where
        J: 'static,
        F: FnOnce(EditContext<J>) -> EditContext<I> + 'static,
    {
        Edit::new(move |context| self.render(adapt(context)))
    }

    /// Renders both editors with the same context and merges the results.
    ///
    /// Both sides are always rendered.
    #[must_use]
    pub fn merge<M>(self, other: Self, combinable: M) -> Self
    where
        M: Combinable<U> + 'static,
    {
        Self::new(move |context: EditContext<I>| {
            let left = self.render(context.clone());
            let right = other.render(context);
            combinable.merge(left, right)
        })
    }
}

impl<U, I> fmt::Debug for Edit<U, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Edit").finish_non_exhaustive()
    }
}

/// The result of evaluating a form against one state value.
pub struct Evaluation<U, I, A, C> {
    /// Renders the editor description.
    pub edit: Edit<U, I>,
    /// The validated output, `None` while any required part is invalid.
    pub validate: Option<A>,
    /// Per-part results, available even when `validate` is `None`.
    pub children: C,
}

impl<U, I, A: fmt::Debug, C: fmt::Debug> fmt::Debug for Evaluation<U, I, A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Evaluation")
            .field("validate", &self.validate)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// A composable, validated editor over state `I`.
///
/// # Type Parameters
///
/// - `U`: the editor description produced by rendering
/// - `I`: the input state the form reads and updates
/// - `A`: the validated output
/// - `C`: the children report
///
/// Forms are immutable definitions; cloning one is cheap and evaluating one
/// never retains the state it was given.
pub struct Form<U, I, A, C> {
    run: Rc<dyn Fn(&I) -> Evaluation<U, I, A, C>>,
}

impl<U, I, A, C> Clone for Form<U, I, A, C> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<U, I, A, C> fmt::Debug for Form<U, I, A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Form").finish_non_exhaustive()
    }
}

impl<U, I, A, C> Form<U, I, A, C>
where
    U: 'static,
    I: 'static,
    A: 'static,
    C: 'static,
{
    /// Creates a form from its evaluation function.
    ///
    /// The function must be pure: the same state must always produce an
    /// equivalent evaluation.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&I) -> Evaluation<U, I, A, C> + 'static,
    {
        Self { run: Rc::new(run) }
    }

    /// Evaluates the form against a state value.
    pub fn evaluate(&self, state: &I) -> Evaluation<U, I, A, C> {
        (self.run)(state)
    }

    /// Evaluates the form and returns only its validated output.
    pub fn revalidate(&self, state: &I) -> Option<A> {
        self.evaluate(state).validate
    }

    /// Transforms the validated output, leaving the editor and children untouched.
    ///
    /// ```
    /// use formlets::simple::leaf;
    ///
    /// let doubled = leaf::<i32>().map(|value| value * 2);
    /// assert_eq!(doubled.revalidate(&21), Some(42));
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Form<U, I, B, C>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Form::new(move |state| {
            let Evaluation {
                edit,
                validate,
                children,
            } = self.evaluate(state);
            Evaluation {
                edit,
                validate: validate.map(&function),
                children,
            }
        })
    }

    /// Transforms the editor description.
    #[must_use]
    pub fn map_ui<V, F>(self, function: F) -> Form<V, I, A, C>
    where
        V: 'static,
        F: Fn(U) -> V + 'static,
    {
        let function = Rc::new(function);
        Form::new(move |state| {
            let Evaluation {
                edit,
                validate,
                children,
            } = self.evaluate(state);
            let function = Rc::clone(&function);
            Evaluation {
                edit: edit.map(move |ui| function(ui)),
                validate,
                children,
            }
        })
    }

    /// Transforms the children report.
    #[must_use]
    pub fn map_children<D, F>(self, function: F) -> Form<U, I, A, D>
    where
        D: 'static,
        F: Fn(C) -> D + 'static,
    {
        Form::new(move |state| {
            let Evaluation {
                edit,
                validate,
                children,
            } = self.evaluate(state);
            Evaluation {
                edit,
                validate,
                children: function(children),
            }
        })
    }

    /// Discards the validated output while keeping the editor and children.
    #[must_use]
    pub fn invalidate<B: 'static>(self) -> Form<U, I, B, C> {
        Form::new(move |state| {
            let Evaluation { edit, children, .. } = self.evaluate(state);
            Evaluation {
                edit,
                validate: None,
                children,
            }
        })
    }

    /// Focuses the form onto a part of a larger state.
    ///
    /// The inner form is evaluated at `lens.get(whole)`, and every update it
    /// emits is rewritten into an update of the whole with `lens.modify`.
    /// Edits vanish silently unless the lens is coherent; see
    /// [`verify_lens`](crate::laws::verify_lens).
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use formlets::form::{ChangeFn, EditContext, Update};
    /// use formlets::lens;
    /// use formlets::simple::leaf;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_form = leaf::<i32>().focus(lens!(Point, x));
    /// let point = Point { x: 1, y: 2 };
    ///
    /// let state = Rc::new(RefCell::new(point.clone()));
    /// let target = Rc::clone(&state);
    /// let on_change = ChangeFn::new(move |update: Update<Point>| {
    ///     let current = target.borrow().clone();
    ///     *target.borrow_mut() = update(current);
    /// });
    ///
    /// let ui = x_form.evaluate(&point).edit.render(EditContext::new(on_change));
    /// ui.on_change.set(7);
    /// assert_eq!(*state.borrow(), Point { x: 7, y: 2 });
    /// ```
    #[must_use]
    pub fn focus<S, L>(self, lens: L) -> Form<U, S, A, C>
    where
        S: 'static,
        I: Clone,
        L: Lens<S, I> + 'static,
    {
        let lens = Rc::new(lens);
        Form::new(move |whole: &S| {
            let Evaluation {
                edit,
                validate,
                children,
            } = self.evaluate(lens.get(whole));
            let lens = Rc::clone(&lens);
            Evaluation {
                edit: edit.with_context(move |context: EditContext<S>| {
                    context.lift(move |update: Update<I>| {
                        let lens = Rc::clone(&lens);
                        Box::new(move |source: S| lens.modify(source, update))
                    })
                }),
                validate,
                children,
            }
        })
    }

    /// Focuses the form with a plain getter/setter pair.
    #[must_use]
    pub fn focus_with<S, G, St>(self, getter: G, setter: St) -> Form<U, S, A, C>
    where
        S: 'static,
        I: Clone,
        G: Fn(&S) -> &I + 'static,
        St: Fn(S, I) -> S + 'static,
    {
        self.focus(FunctionLens::new(getter, setter))
    }
}
