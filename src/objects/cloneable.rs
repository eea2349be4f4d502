//! Objects that produce independent copies of themselves.

use std::fmt;

/// Object-safe copy capability.
///
/// Lets copies be taken through a `&dyn Cloneable` without knowing the
/// concrete type. Each concrete type implements it directly; a box of a
/// capability object is not itself a capability object.
pub trait Cloneable: fmt::Debug {
    /// Returns an independently owned copy of `self`.
    fn clone_boxed(&self) -> Box<dyn Cloneable>;

    /// Short description used in diagnostics.
    fn label(&self) -> &str;
}

impl Clone for Box<dyn Cloneable> {
    fn clone(&self) -> Self {
        (**self).clone_boxed()
    }
}

/// Cloneable value carrying a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteCloneable {
    label: String,
}

impl ConcreteCloneable {
    /// Creates a value with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Cloneable for ConcreteCloneable {
    fn clone_boxed(&self) -> Box<dyn Cloneable> {
        Box::new(self.clone())
    }

    fn label(&self) -> &str {
        &self.label
    }
}
