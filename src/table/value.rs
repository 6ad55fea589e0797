use crate::table::{ResourceId, ResourceName};

/// A single attribute reference inside a [`Styleable`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StyleableAttr {
    /// Fully qualified name of the referenced attribute
    pub name: ResourceName,
    /// Id assigned to the referenced attribute
    pub id: ResourceId,
}

impl StyleableAttr {
    /// Creates a new attribute reference
    #[must_use]
    pub fn new(name: ResourceName, id: ResourceId) -> Self {
        StyleableAttr { name, id }
    }
}

/// A `declare-styleable` group: a named set of attribute references.
///
/// The storage order carries no meaning. Generated code always lists the attributes
/// sorted by [`ResourceId`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Styleable {
    /// The referenced attributes
    pub entries: Vec<StyleableAttr>,
}

impl Styleable {
    /// Creates an empty styleable
    #[must_use]
    pub fn new() -> Self {
        Styleable::default()
    }

    /// Appends an attribute reference, returning `self` for chaining
    #[must_use]
    pub fn attr(mut self, name: ResourceName, id: ResourceId) -> Self {
        self.entries.push(StyleableAttr::new(name, id));
        self
    }
}

/// A compiled resource value.
///
/// Only the distinction between styleables and everything else matters when rendering
/// symbols. All other compiled values are carried as an opaque [`Value::Item`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    /// Any non-styleable compiled value
    Item(String),
    /// A styleable attribute group
    Styleable(Styleable),
}

impl Value {
    /// Returns the styleable payload, if this is one
    #[must_use]
    pub fn as_styleable(&self) -> Option<&Styleable> {
        match self {
            Value::Styleable(styleable) => Some(styleable),
            Value::Item(_) => None,
        }
    }
}

impl From<Styleable> for Value {
    fn from(styleable: Styleable) -> Self {
        Value::Styleable(styleable)
    }
}
