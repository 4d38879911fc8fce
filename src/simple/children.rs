//! Per-field results reported by record and array forms.
//!
//! Every builder reports the typed children of its parts (`ArrayChildren`,
//! `MaybeChildren`, `RecordChildren`, or a leaf's `Option<T>`). A record
//! mixes parts of different types, so it converts each into a [`ChildNode`]
//! with type-erased leaf values.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// Object-safe view of a debuggable value that can be downcast.
trait ErasedValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug> ErasedValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A shared, type-erased value.
///
/// ```
/// use formlets::simple::AnyValue;
///
/// let value = AnyValue::new(42_u32);
/// assert_eq!(value.downcast_ref::<u32>(), Some(&42));
/// assert_eq!(value.downcast_ref::<i32>(), None);
/// assert_eq!(format!("{value:?}"), "42");
/// ```
#[derive(Clone)]
pub struct AnyValue(Rc<dyn ErasedValue>);

impl AnyValue {
    /// Erases the type of `value`.
    pub fn new<T: Any + fmt::Debug>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Borrows the value when it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// Whether the value has type `T`.
    pub fn is<T: Any>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}

/// A children report with the value types erased.
#[derive(Debug, Clone, Default)]
pub enum ChildNode {
    /// Nothing to report.
    #[default]
    Empty,
    /// A leaf result: `None` while the leaf is invalid.
    Leaf(Option<AnyValue>),
    /// Named parts.
    Record(IndexMap<String, ChildNode>),
    /// Indexed parts.
    Sequence(Vec<ChildNode>),
}

/// A [`ChildNode`] in which every leaf is valid.
#[derive(Debug, Clone)]
pub enum ResolvedNode {
    /// Nothing to report.
    Empty,
    /// A valid leaf.
    Leaf(AnyValue),
    /// Named parts.
    Record(IndexMap<String, ResolvedNode>),
    /// Indexed parts.
    Sequence(Vec<ResolvedNode>),
}

impl ChildNode {
    /// The named part of a record.
    pub fn get(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    /// The indexed part of a sequence.
    pub fn at(&self, index: usize) -> Option<&Self> {
        match self {
            Self::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    /// The value of a valid leaf of type `T`.
    pub fn value_as<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Leaf(Some(value)) => value.downcast_ref(),
            _ => None,
        }
    }

    /// Whether every leaf below this node is valid.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Leaf(value) => value.is_some(),
            Self::Record(fields) => fields.values().all(Self::is_complete),
            Self::Sequence(items) => items.iter().all(Self::is_complete),
        }
    }

    /// Strips the optionality of leaves, or `None` if any leaf is invalid.
    pub fn collapse(self) -> Option<ResolvedNode> {
        match self {
            Self::Empty => Some(ResolvedNode::Empty),
            Self::Leaf(value) => value.map(ResolvedNode::Leaf),
            Self::Record(fields) => fields
                .into_iter()
                .map(|(name, node)| node.collapse().map(|node| (name, node)))
                .collect::<Option<IndexMap<_, _>>>()
                .map(ResolvedNode::Record),
            Self::Sequence(items) => items
                .into_iter()
                .map(Self::collapse)
                .collect::<Option<Vec<_>>>()
                .map(ResolvedNode::Sequence),
        }
    }

    /// `self`, or a leaf holding `value` when `self` is empty.
    #[must_use]
    pub fn or_leaf(self, value: Option<AnyValue>) -> Self {
        match self {
            Self::Empty => Self::Leaf(value),
            other => other,
        }
    }
}

/// Conversion of a typed children report into a [`ChildNode`].
pub trait IntoChildNode {
    /// Erases the report.
    fn into_child_node(self) -> ChildNode;
}

impl IntoChildNode for () {
    fn into_child_node(self) -> ChildNode {
        ChildNode::Empty
    }
}

impl<T: Any + fmt::Debug> IntoChildNode for Option<T> {
    fn into_child_node(self) -> ChildNode {
        ChildNode::Leaf(self.map(AnyValue::new))
    }
}

impl IntoChildNode for ChildNode {
    fn into_child_node(self) -> ChildNode {
        self
    }
}

/// What a field of a record reports: its own children and its result.
#[derive(Debug, Clone)]
pub struct FieldChildren {
    /// The field form's children.
    pub result: ChildNode,
    /// The field form's validated output.
    pub value: Option<AnyValue>,
}

impl FieldChildren {
    /// The validated output when it has type `T`.
    pub fn value_as<T: Any>(&self) -> Option<&T> {
        self.value.as_ref().and_then(AnyValue::downcast_ref::<T>)
    }
}

/// Children of a record form, keyed by field name in declaration order.
pub type RecordChildren = IndexMap<String, FieldChildren>;

impl IntoChildNode for RecordChildren {
    fn into_child_node(self) -> ChildNode {
        ChildNode::Record(
            self.into_iter()
                .map(|(name, field)| (name, field.result.or_leaf(field.value)))
                .collect(),
        )
    }
}

/// Children of an array form.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayChildren<C, A> {
    /// Each row's children, in index order.
    pub results: Vec<C>,
    /// Each row's validated output, in index order.
    pub values: Vec<Option<A>>,
}

impl<C: IntoChildNode, A: Any + fmt::Debug> IntoChildNode for ArrayChildren<C, A> {
    fn into_child_node(self) -> ChildNode {
        ChildNode::Sequence(
            self.results
                .into_iter()
                .zip(self.values)
                .map(|(result, value)| result.into_child_node().or_leaf(value.map(AnyValue::new)))
                .collect(),
        )
    }
}

/// Children of an optional form.
#[derive(Debug, Clone, PartialEq)]
pub struct MaybeChildren<C, A> {
    /// The inner form's children, when a value is present.
    pub result: Option<C>,
    /// The inner form's validated output, when present and valid.
    pub value: Option<A>,
}

impl<C: IntoChildNode, A: Any + fmt::Debug> IntoChildNode for MaybeChildren<C, A> {
    fn into_child_node(self) -> ChildNode {
        match self.result {
            Some(result) => result
                .into_child_node()
                .or_leaf(self.value.map(AnyValue::new)),
            None => ChildNode::Empty,
        }
    }
}
