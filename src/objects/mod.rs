//! Demonstration objects and the capabilities they expose.

pub mod cloneable;
pub mod printable;
pub mod store;

pub use cloneable::{Cloneable, ConcreteCloneable};
pub use printable::{classify, print_to, ConcretePrintable, Printable, PrintableKind, Rendered};
pub use store::ObjectStore;
