//! Variable-length list forms and the optional-value adapter.

use tracing::trace;

use super::children::{ArrayChildren, MaybeChildren};
use super::ui::{ActionLeaf, ArrayRow, ArrayUi};
use crate::form::{ChangeFn, Edit, EditContext, Evaluation, Form, Update};

/// Length limits for [`array`].
///
/// The add action is disabled once the list holds `max_len` elements, and
/// every delete action is disabled while it holds `min_len` or fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrayOptions {
    /// Fewest elements a user can delete down to.
    pub min_len: usize,
    /// Most elements a user can add up to; unlimited when `None`.
    pub max_len: Option<usize>,
}

impl ArrayOptions {
    /// No limits.
    pub const fn new() -> Self {
        Self {
            min_len: 0,
            max_len: None,
        }
    }

    /// Sets the lower limit.
    #[must_use]
    pub const fn with_min_len(self, min_len: usize) -> Self {
        Self { min_len, ..self }
    }

    /// Sets the upper limit.
    #[must_use]
    pub const fn with_max_len(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }

    /// Whether a list of `len` elements can grow.
    pub fn allows_add(&self, len: usize) -> bool {
        self.max_len.is_none_or(|max_len| len < max_len)
    }

    /// Whether a list of `len` elements can shrink.
    pub const fn allows_delete(&self, len: usize) -> bool {
        len > self.min_len
    }
}

/// Lifts a form over one element into a form over a list of elements.
///
/// - The editor has an add action appending `default`, and per row a delete
///   action and the element's editor. Each row's updates replace only that
///   row; updates for a row that no longer exists are ignored.
/// - The list is valid only when every element is.
/// - The children hold each row's children and result in index order.
///
/// Each row is evaluated once per evaluation of the list.
///
/// ```
/// use formlets::simple::{ArrayOptions, array, leaf};
///
/// let form = array(leaf::<i32>(), 0, ArrayOptions::new().with_max_len(2));
/// let evaluation = form.evaluate(&vec![1, 2]);
///
/// assert_eq!(evaluation.validate, Some(vec![1, 2]));
/// assert_eq!(evaluation.children.values, vec![Some(1), Some(2)]);
/// ```
pub fn array<U, I, A, C>(
    form: Form<U, I, A, C>,
    default: I,
    options: ArrayOptions,
) -> Form<ArrayUi<U>, Vec<I>, Vec<A>, ArrayChildren<C, A>>
where
    U: 'static,
    I: Clone + 'static,
    A: Clone + 'static,
    C: 'static,
{
    Form::new(move |rows: &Vec<I>| {
        let len = rows.len();
        let mut edits = Vec::with_capacity(len);
        let mut results = Vec::with_capacity(len);
        let mut values = Vec::with_capacity(len);
        for row in rows {
            let Evaluation {
                edit,
                validate,
                children,
            } = form.evaluate(row);
            edits.push(edit);
            values.push(validate);
            results.push(children);
        }
        let validate = values.iter().cloned().collect::<Option<Vec<A>>>();
        let default = default.clone();

        Evaluation {
            edit: Edit::new(move |context: EditContext<Vec<I>>| {
                let on_change = context.on_change;
                let add = if options.allows_add(len) {
                    add_action(on_change.clone(), default)
                } else {
                    ActionLeaf::disabled("add")
                };
                let rows = edits
                    .into_iter()
                    .enumerate()
                    .map(|(index, edit)| ArrayRow {
                        delete: if options.allows_delete(len) {
                            delete_action(on_change.clone(), index)
                        } else {
                            ActionLeaf::disabled("delete")
                        },
                        editor: edit.render(EditContext::new(row_change(&on_change, index))),
                    })
                    .collect();
                ArrayUi { add, rows }
            }),
            validate,
            children: ArrayChildren { results, values },
        }
    })
}

fn add_action<I: Clone + 'static>(on_change: ChangeFn<Vec<I>>, default: I) -> ActionLeaf {
    ActionLeaf::enabled("add", move || {
        let default = default.clone();
        on_change.apply(move |mut rows: Vec<I>| {
            trace!(len = rows.len(), "array row added");
            rows.push(default);
            rows
        });
    })
}

fn delete_action<I: 'static>(on_change: ChangeFn<Vec<I>>, index: usize) -> ActionLeaf {
    ActionLeaf::enabled("delete", move || {
        on_change.apply(move |mut rows: Vec<I>| {
            if index < rows.len() {
                trace!(index, "array row deleted");
                rows.remove(index);
            }
            rows
        });
    })
}

fn row_change<I: Clone + 'static>(on_change: &ChangeFn<Vec<I>>, index: usize) -> ChangeFn<I> {
    on_change.lift(move |update: Update<I>| {
        Box::new(move |mut rows: Vec<I>| {
            if let Some(row) = rows.get_mut(index) {
                *row = update(row.clone());
            }
            rows
        })
    })
}

/// Lifts a form over a value into a form over an optional value.
///
/// Built on [`array`] with at most one row: the add action creates the value
/// from `default` and the delete action clears it.
///
/// ```
/// use formlets::simple::{leaf, maybe};
///
/// let form = maybe(leaf::<String>(), String::new());
///
/// assert_eq!(form.revalidate(&None), Some(None));
/// assert_eq!(form.revalidate(&Some("x".into())), Some(Some("x".to_string())));
/// ```
pub fn maybe<U, I, A, C>(
    form: Form<U, I, A, C>,
    default: I,
) -> Form<ArrayUi<U>, Option<I>, Option<A>, MaybeChildren<C, A>>
where
    U: 'static,
    I: Clone + 'static,
    A: Clone + 'static,
    C: 'static,
{
    let rows = array(form, default, ArrayOptions::new().with_max_len(1));
    Form::new(move |state: &Option<I>| {
        let Evaluation {
            edit,
            validate,
            children,
        } = rows.evaluate(&state.iter().cloned().collect());
        Evaluation {
            edit: edit.with_context(|context: EditContext<Option<I>>| {
                context.lift(|update: Update<Vec<I>>| {
                    Box::new(move |current: Option<I>| {
                        update(current.into_iter().collect()).into_iter().next()
                    })
                })
            }),
            validate: validate.map(|values| values.into_iter().next()),
            children: MaybeChildren {
                result: children.results.into_iter().next(),
                value: children.values.into_iter().next().flatten(),
            },
        }
    })
}
