//! Service context bundling the ports and the shared instance.

use std::rc::Rc;

use crate::adapters::live::id_gen::SequentialIdGenerator;
use crate::adapters::replaying::ReplayingIdGenerator;
use crate::ports::{Id, IdGenerator};

/// Object kind whose identifiers the demo generates.
pub type IntObject = i32;

/// Marker value that exists once per [`ServiceContext`].
///
/// Only the context can construct it, so every handle a caller sees points
/// at the same value.
#[derive(Debug)]
pub struct SharedInstance {
    _private: (),
}

/// Bundles the ports the commands run against.
///
/// Built once by the composition root and passed by reference to every
/// command. Constructors wire up different adapter implementations.
pub struct ServiceContext {
    /// ID generator for int objects.
    pub id_gen: Box<dyn IdGenerator<IntObject>>,
    instance: Rc<SharedInstance>,
}

impl ServiceContext {
    /// Creates a live context with a sequential ID generator.
    #[must_use]
    pub fn live() -> Self {
        Self::with_id_gen(Box::new(SequentialIdGenerator::new()))
    }

    /// Creates a context whose ID generator replays `ids` in order.
    #[must_use]
    pub fn replaying(ids: impl IntoIterator<Item = Id<IntObject>>) -> Self {
        Self::with_id_gen(Box::new(ReplayingIdGenerator::new(ids)))
    }

    fn with_id_gen(id_gen: Box<dyn IdGenerator<IntObject>>) -> Self {
        Self { id_gen, instance: Rc::new(SharedInstance { _private: () }) }
    }

    /// Returns a handle to this context's shared instance.
    #[must_use]
    pub fn instance(&self) -> Rc<SharedInstance> {
        Rc::clone(&self.instance)
    }
}
