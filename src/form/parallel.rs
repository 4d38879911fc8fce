//! Parallel (applicative) composition of forms.
//!
//! Sibling forms are evaluated against the same state. Their editors are
//! always both rendered, their children always both reported, and the
//! combined result is valid only when every sibling is valid:
//!
//! ```text
//! ap(fab, fa)(s).validate == fab(s).validate.zip(fa(s).validate).map(|(f, a)| f(a))
//! ```

use std::fmt;
use std::rc::Rc;

use super::{Evaluation, Form};
use crate::typeclass::{Combinable, Natural};

/// The applicative instance of [`Form`] for a pair of merge capabilities.
///
/// # Examples
///
/// ```
/// use formlets::form::Parallel;
/// use formlets::simple::leaf;
///
/// let parallel = Parallel::natural::<Vec<String>, ()>();
/// let label = leaf::<i32>().map_ui(|leaf| vec![format!("value {}", leaf.value)]);
///
/// let sum = parallel.map2(label.clone(), label, |a, b| a + b);
/// assert_eq!(sum.revalidate(&2), Some(4));
/// ```
pub struct Parallel<MU, MC> {
    ui: Rc<MU>,
    children: Rc<MC>,
}

impl Parallel<(), ()> {
    /// The instance given by the `Monoid` implementations of `U` and `C`.
    #[must_use]
    pub fn natural<U, C>() -> Parallel<Natural<U>, Natural<C>> {
        Parallel::new(Natural::new(), Natural::new())
    }
}

impl<MU, MC> Parallel<MU, MC> {
    /// Binds the UI and children merge capabilities.
    #[must_use]
    pub fn new(ui: MU, children: MC) -> Self {
        Self {
            ui: Rc::new(ui),
            children: Rc::new(children),
        }
    }

    /// A form that ignores its state and always yields `value`, with an empty
    /// editor and empty children.
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

    /// Combines two forms with a binary function.
    ///
    /// Both forms are evaluated and both editors rendered, whatever their
    /// validity.
    pub fn map2<U, I, A, B, R, C, F>(
        &self,
        first: Form<U, I, A, C>,
        second: Form<U, I, B, C>,
        function: F,
    ) -> Form<U, I, R, C>
    where
        MU: Combinable<U> + 'static,
        MC: Combinable<C> + 'static,
        U: 'static,
        I: 'static,
        A: 'static,
        B: 'static,
        R: 'static,
        C: 'static,
        F: Fn(A, B) -> R + 'static,
    {
        let ui = Rc::clone(&self.ui);
        let children = Rc::clone(&self.children);
        Form::new(move |state| {
            let left = first.evaluate(state);
            let right = second.evaluate(state);
            Evaluation {
                edit: left.edit.merge(right.edit, Rc::clone(&ui)),
                validate: left
                    .validate
                    .zip(right.validate)
                    .map(|(a, b)| function(a, b)),
                children: children.merge(left.children, right.children),
            }
        })
    }

    /// Applies a form of functions to a form of arguments.
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
        B: 'static,
        C: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.map2(functions, arguments, |function, argument| function(argument))
    }

    /// Pairs the results of two forms.
    pub fn product<U, I, A, B, C>(
        &self,
        first: Form<U, I, A, C>,
        second: Form<U, I, B, C>,
    ) -> Form<U, I, (A, B), C>
    where
        MU: Combinable<U> + 'static,
        MC: Combinable<C> + 'static,
        U: 'static,
        I: 'static,
        A: 'static,
        B: 'static,
        C: 'static,
    {
        self.map2(first, second, |a, b| (a, b))
    }

    /// Turns a list of forms into a form of the list of their results.
    ///
    /// Valid only when every form is valid; editors and children are merged
    /// in order.
    pub fn sequence<U, I, A, C>(&self, forms: Vec<Form<U, I, A, C>>) -> Form<U, I, Vec<A>, C>
    where
        MU: Combinable<U> + 'static,
        MC: Combinable<C> + 'static,
        U: 'static,
        I: 'static,
        A: Clone + 'static,
        C: 'static,
    {
        forms
            .into_iter()
            .fold(self.of(Vec::new()), |accumulator, form| {
                self.map2(accumulator, form, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

pub(super) fn pure<U, I, A, C, MU, MC>(ui: Rc<MU>, children: Rc<MC>, value: A) -> Form<U, I, A, C>
where
    MU: Combinable<U> + 'static,
    MC: Combinable<C> + 'static,
    U: 'static,
    I: 'static,
    A: Clone + 'static,
    C: 'static,
{
    Form::new(move |_| {
        let ui = Rc::clone(&ui);
        Evaluation {
            edit: super::Edit::new(move |_| ui.empty()),
            validate: Some(value.clone()),
            children: children.empty(),
        }
    })
}

impl<MU, MC> Clone for Parallel<MU, MC> {
    fn clone(&self) -> Self {
        Self {
            ui: Rc::clone(&self.ui),
            children: Rc::clone(&self.children),
        }
    }
}

impl<MU, MC> fmt::Debug for Parallel<MU, MC> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Parallel").finish_non_exhaustive()
    }
}
