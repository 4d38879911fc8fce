//! A minimal host: owns the state, queues edits, and re-evaluates on demand.
//!
//! Forms never mutate state; their editors send [`Update`]s through a
//! [`ChangeFn`]. `FormHost` queues those updates and applies them strictly in
//! the order they were issued when [`FormHost::flush`] is called.
//!
//! # Examples
//!
//! ```
//! use formlets::host::FormHost;
//! use formlets::simple::leaf;
//! use formlets::validation::{Validated, number};
//!
//! let form = leaf::<String>().validate_leaf(number().with_label("Amount"));
//! let mut host = FormHost::new(form, Validated::fresh(String::new()));
//!
//! let rendered = host.render();
//! assert_eq!(rendered.ui.error, None);
//!
//! rendered.ui.on_change.set("12".into());
//! assert_eq!(host.flush(), 1);
//! assert_eq!(host.render().validated, Some(12.0));
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::form::{ChangeFn, EditContext, Evaluation, Form, Update};
use crate::validation::MarkModified;

/// One rendering of a form against the host's current state.
#[derive(Debug)]
pub struct Rendered<U, A, C> {
    /// The rendered editor description.
    pub ui: U,
    /// The validated output, if any.
    pub validated: Option<A>,
    /// The children report.
    pub children: C,
}

/// Owns a form's state and applies its edits in order.
pub struct FormHost<U, I, A, C> {
    form: Form<U, I, A, C>,
    initial: I,
    state: I,
    pending: Rc<RefCell<VecDeque<Update<I>>>>,
}

impl<U, I, A, C> FormHost<U, I, A, C>
where
    U: 'static,
    I: Clone + 'static,
    A: 'static,
    C: 'static,
{
    /// Hosts `form`, starting from `initial`.
    pub fn new(form: Form<U, I, A, C>, initial: I) -> Self {
        Self {
            form,
            state: initial.clone(),
            initial,
            pending: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// A callback that queues updates for the next [`flush`](Self::flush).
    pub fn on_change(&self) -> ChangeFn<I> {
        let pending = Rc::clone(&self.pending);
        ChangeFn::new(move |update| {
            let mut queue = pending.borrow_mut();
            queue.push_back(update);
            trace!(queued = queue.len(), "form update queued");
        })
    }

    /// Evaluates the form and renders its editor.
    pub fn render(&self) -> Rendered<U, A, C> {
        let Evaluation {
            edit,
            validate,
            children,
        } = self.form.evaluate(&self.state);
        Rendered {
            ui: edit.render(EditContext::new(self.on_change())),
            validated: validate,
            children,
        }
    }

    /// Applies every queued update in issue order and returns how many ran.
    ///
    /// Updates queued while flushing are applied in the same pass.
    pub fn flush(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(update) = next else { break };
            self.state = update(self.state.clone());
            applied += 1;
        }
        if applied > 0 {
            debug!(applied, "form updates applied");
        }
        applied
    }

    /// Number of updates waiting for [`flush`](Self::flush).
    pub fn pending_updates(&self) -> usize {
        self.pending.borrow().len()
    }

    /// The current state.
    pub const fn state(&self) -> &I {
        &self.state
    }

    /// Replaces the state. Queued updates are kept and apply on top of it.
    pub fn set_state(&mut self, state: I) {
        self.state = state;
    }

    /// Restores the initial state and drops queued updates.
    pub fn reset(&mut self) {
        let dropped = {
            let mut queue = self.pending.borrow_mut();
            let dropped = queue.len();
            queue.clear();
            dropped
        };
        debug!(dropped, "form reset");
        self.state = self.initial.clone();
    }
}

impl<U, I, A, C> FormHost<U, I, A, C>
where
    U: 'static,
    I: Clone + MarkModified + 'static,
    A: 'static,
    C: 'static,
{
    /// Marks every validated part of the state as modified, revealing all
    /// errors.
    pub fn touch_all(&mut self) {
        self.state = self.state.clone().mark_modified();
    }

    /// Applies queued updates, reveals all errors, and returns the validated
    /// output if there is one.
    pub fn submit(&mut self) -> Option<A> {
        self.flush();
        self.touch_all();
        let result = self.form.revalidate(&self.state);
        debug!(valid = result.is_some(), "form submitted");
        result
    }
}

impl<U, I: fmt::Debug, A, C> fmt::Debug for FormHost<U, I, A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FormHost")
            .field("state", &self.state)
            .field("pending", &self.pending.borrow().len())
            .finish_non_exhaustive()
    }
}
