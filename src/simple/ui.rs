//! The concrete editor description produced by the ready-made forms.
//!
//! Leaves are typed ([`FieldLeaf<I>`], [`ValueLeaf<I>`], [`ActionLeaf`]).
//! Records mix fields of different types, so they store their children as a
//! [`UiTree`], where field leaves are type-erased into an [`AnyField`] that
//! a renderer downcasts back to the value type it knows how to draw.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::children::AnyValue;
use crate::form::{ChangeFn, Edit, EditContext, Evaluation, Form};
use crate::typeclass::{Monoid, Semigroup};

/// Presentation hints attached to a field, such as `label` or `required`.
///
/// Merging is last-wins per key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Props(IndexMap<String, String>);

impl Props {
    /// No props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one prop.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Shorthand for `with("label", label)`.
    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        self.with("label", label)
    }

    /// Reads one prop.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is set to `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Whether no prop is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Semigroup for Props {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl Monoid for Props {
    fn empty() -> Self {
        Self::default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// An editable value.
#[derive(Debug, Clone)]
pub struct FieldLeaf<I> {
    /// The current value.
    pub value: I,
    /// Sends edits of the value.
    pub on_change: ChangeFn<I>,
    /// The error to display, if any.
    pub error: Option<String>,
    /// Presentation hints.
    pub props: Props,
}

/// A read-only value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueLeaf<I> {
    /// The displayed value.
    pub value: I,
}

/// A button-like action. Disabled actions have no `run`.
#[derive(Clone)]
pub struct ActionLeaf {
    run: Option<Rc<dyn Fn()>>,
    /// What the action is called.
    pub label: String,
}

impl ActionLeaf {
    /// An action that calls `run` when triggered.
    pub fn enabled<F>(label: impl Into<String>, run: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            run: Some(Rc::new(run)),
            label: label.into(),
        }
    }

    /// An action that cannot be triggered.
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            run: None,
            label: label.into(),
        }
    }

    /// Whether triggering does anything.
    pub fn is_enabled(&self) -> bool {
        self.run.is_some()
    }

    /// Runs the action. Returns `false` when it is disabled.
    pub fn trigger(&self) -> bool {
        self.run.as_ref().is_some_and(|run| {
            run();
            true
        })
    }
}

impl fmt::Debug for ActionLeaf {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ActionLeaf")
            .field("label", &self.label)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// A choice offered by a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    /// What the user sees.
    pub label: String,
    /// The string form of the option's value.
    pub value: String,
}

/// A single-choice select: the options and the field holding the chosen
/// option's string form (`""` when nothing is chosen).
#[derive(Debug, Clone)]
pub struct SelectUi {
    /// The options, in order.
    pub items: Vec<ValueLeaf<SelectItem>>,
    /// The chosen option.
    pub select: FieldLeaf<String>,
}

/// One row of an array editor.
#[derive(Debug, Clone)]
pub struct ArrayRow<U> {
    /// Removes this row.
    pub delete: ActionLeaf,
    /// The row's editor.
    pub editor: U,
}

/// A variable-length list editor.
#[derive(Debug, Clone)]
pub struct ArrayUi<U> {
    /// Appends a row holding the default value.
    pub add: ActionLeaf,
    /// One entry per element, in index order.
    pub rows: Vec<ArrayRow<U>>,
}

impl<U> ArrayUi<U> {
    /// Transforms every row editor.
    #[must_use]
    pub fn map<V, F>(self, mut function: F) -> ArrayUi<V>
    where
        F: FnMut(U) -> V,
    {
        ArrayUi {
            add: self.add,
            rows: self
                .rows
                .into_iter()
                .map(|row| ArrayRow {
                    delete: row.delete,
                    editor: function(row.editor),
                })
                .collect(),
        }
    }
}

/// A field leaf whose value type has been erased.
#[derive(Clone)]
pub struct AnyField {
    leaf: Rc<dyn Any>,
    /// The error to display, if any.
    pub error: Option<String>,
    /// Presentation hints.
    pub props: Props,
}

impl AnyField {
    /// Erases the value type of a leaf.
    pub fn new<I: 'static>(leaf: FieldLeaf<I>) -> Self {
        Self {
            error: leaf.error.clone(),
            props: leaf.props.clone(),
            leaf: Rc::new(leaf),
        }
    }

    /// Recovers the typed leaf when `I` is its value type.
    pub fn downcast<I: 'static>(&self) -> Option<&FieldLeaf<I>> {
        self.leaf.downcast_ref::<FieldLeaf<I>>()
    }

    /// Whether the value type is `I`.
    pub fn is<I: 'static>(&self) -> bool {
        self.leaf.is::<FieldLeaf<I>>()
    }
}

impl fmt::Debug for AnyField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AnyField")
            .field("error", &self.error)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// Named children of a record editor, in declaration order.
pub type UiRecord = IndexMap<String, UiTree>;

/// A heterogeneous editor description.
#[derive(Debug, Clone)]
pub enum UiTree {
    /// An editable value.
    Field(AnyField),
    /// A button.
    Action(ActionLeaf),
    /// A read-only value.
    Value(AnyValue),
    /// Named sub-editors.
    Record(UiRecord),
    /// A list editor.
    Array(ArrayUi<UiTree>),
    /// A single-choice select.
    Select(SelectUi),
}

impl UiTree {
    /// The named child of a record.
    pub fn get(&self, name: &str) -> Option<&Self> {
        self.as_record().and_then(|record| record.get(name))
    }

    /// The named children, if this is a record.
    pub fn as_record(&self) -> Option<&UiRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The erased field, if this is one.
    pub fn as_field(&self) -> Option<&AnyField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    /// The action, if this is one.
    pub fn as_action(&self) -> Option<&ActionLeaf> {
        match self {
            Self::Action(action) => Some(action),
            _ => None,
        }
    }

    /// The list editor, if this is one.
    pub fn as_array(&self) -> Option<&ArrayUi<Self>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// The select, if this is one.
    pub fn as_select(&self) -> Option<&SelectUi> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    /// The typed field leaf at this node.
    pub fn field<I: 'static>(&self) -> Option<&FieldLeaf<I>> {
        self.as_field().and_then(AnyField::downcast::<I>)
    }
}

impl<I: 'static> From<FieldLeaf<I>> for UiTree {
    fn from(leaf: FieldLeaf<I>) -> Self {
        Self::Field(AnyField::new(leaf))
    }
}

impl<I: fmt::Debug + 'static> From<ValueLeaf<I>> for UiTree {
    fn from(leaf: ValueLeaf<I>) -> Self {
        Self::Value(AnyValue::new(leaf.value))
    }
}

impl From<ActionLeaf> for UiTree {
    fn from(action: ActionLeaf) -> Self {
        Self::Action(action)
    }
}

impl From<UiRecord> for UiTree {
    fn from(record: UiRecord) -> Self {
        Self::Record(record)
    }
}

impl<U: Into<Self>> From<ArrayUi<U>> for UiTree {
    fn from(array: ArrayUi<U>) -> Self {
        Self::Array(array.map(Into::into))
    }
}

impl From<SelectUi> for UiTree {
    fn from(select: SelectUi) -> Self {
        Self::Select(select)
    }
}

/// The atomic editor: shows the current value, accepts any edit, and is
/// always valid with the value itself.
pub fn leaf<I: Clone + 'static>() -> Form<FieldLeaf<I>, I, I, ()> {
    Form::new(|state: &I| {
        let value = state.clone();
        Evaluation {
            edit: Edit::new(move |context: EditContext<I>| FieldLeaf {
                value,
                on_change: context.on_change,
                error: context.error,
                props: Props::new(),
            }),
            validate: Some(state.clone()),
            children: (),
        }
    })
}

impl<V, I, A, C> Form<FieldLeaf<V>, I, A, C>
where
    V: 'static,
    I: 'static,
    A: 'static,
    C: 'static,
{
    /// Merges `props` into the rendered leaf, overriding existing keys.
    #[must_use]
    pub fn with_props(self, props: Props) -> Self {
        self.map_ui(move |mut leaf: FieldLeaf<V>| {
            leaf.props = leaf.props.combine(props.clone());
            leaf
        })
    }
}
