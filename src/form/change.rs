//! The state-update channel between rendered editors and the host.
//!
//! Editors never mutate state. They hand an [`Update`] (a state
//! transformation) to a [`ChangeFn`], and the host decides when to apply it.
//! Combinators that narrow the state a form sees ([`focus`], arrays, the
//! validation layer) widen the updates flowing back out with
//! [`ChangeFn::lift`].
//!
//! [`focus`]: super::Form::focus

use std::fmt;
use std::rc::Rc;

/// A pending state transformation.
pub type Update<I> = Box<dyn FnOnce(I) -> I>;

/// A shared callback that requests a state transformation.
///
/// Calling a `ChangeFn` is fire-and-forget: the host may apply the update
/// immediately or queue it, as long as updates are applied in issue order.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use formlets::form::{ChangeFn, Update};
///
/// let state = Rc::new(RefCell::new(1));
/// let target = Rc::clone(&state);
/// let on_change = ChangeFn::new(move |update: Update<i32>| {
///     let current = *target.borrow();
///     *target.borrow_mut() = update(current);
/// });
///
/// on_change.apply(|value| value + 41);
/// assert_eq!(*state.borrow(), 42);
/// ```
pub struct ChangeFn<I> {
    callback: Rc<dyn Fn(Update<I>)>,
}

impl<I: 'static> ChangeFn<I> {
    /// Wraps a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Update<I>) + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// A callback that discards every update.
    pub fn ignore() -> Self {
        Self::new(|_| {})
    }

    /// Requests an already boxed update.
    pub fn call(&self, update: Update<I>) {
        (self.callback)(update);
    }

    /// Requests the given state transformation.
    pub fn apply<F>(&self, update: F)
    where
        F: FnOnce(I) -> I + 'static,
    {
        self.call(Box::new(update));
    }

    /// Requests that the state be replaced by `value`.
    pub fn set(&self, value: I) {
        self.apply(move |_| value);
    }

    /// Derives a callback for a part of the state.
    ///
    /// `lift` turns an update of the part into an update of the whole; the
    /// derived callback forwards the lifted update to `self`.
    #[must_use]
    pub fn lift<A, F>(&self, lift: F) -> ChangeFn<A>
    where
        A: 'static,
        F: Fn(Update<A>) -> Update<I> + 'static,
    {
        let outer = self.clone();
        ChangeFn::new(move |update| outer.call(lift(update)))
    }
}

impl<I> Clone for ChangeFn<I> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<I> fmt::Debug for ChangeFn<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ChangeFn").finish_non_exhaustive()
    }
}

/// What an editor receives when it is rendered.
pub struct EditContext<I> {
    /// Where the editor sends state updates.
    pub on_change: ChangeFn<I>,
    /// An error message to display, if any.
    pub error: Option<String>,
}

impl<I: 'static> EditContext<I> {
    /// A context without an error.
    pub fn new(on_change: ChangeFn<I>) -> Self {
        Self {
            on_change,
            error: None,
        }
    }

    /// Replaces the error message.
    #[must_use]
    pub fn with_error(self, error: Option<String>) -> Self {
        Self { error, ..self }
    }

    /// Narrows the context to a part of the state, keeping the error.
    #[must_use]
    pub fn lift<A, F>(self, lift: F) -> EditContext<A>
    where
        A: 'static,
        F: Fn(Update<A>) -> Update<I> + 'static,
    {
        EditContext {
            on_change: self.on_change.lift(lift),
            error: self.error,
        }
    }
}

impl<I> Clone for EditContext<I> {
    fn clone(&self) -> Self {
        Self {
            on_change: self.on_change.clone(),
            error: self.error.clone(),
        }
    }
}

impl<I> fmt::Debug for EditContext<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EditContext")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
