//! Live adapter for the `IdGenerator` port.

use tracing::debug;

use crate::error::IdError;
use crate::ports::{Id, IdGenerator};

/// Counter-backed generator handing out `1, 2, 3, ...`.
///
/// The counter never wraps. Once it reaches `u64::MAX` every further call
/// returns [`IdError::Exhausted`].
#[derive(Debug)]
pub struct SequentialIdGenerator<T> {
    last: u64,
    kind: std::marker::PhantomData<fn() -> T>,
}

impl<T> SequentialIdGenerator<T> {
    /// Creates a generator whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Creates a generator that continues after `last`.
    #[must_use]
    pub fn starting_after(last: u64) -> Self {
        Self { last, kind: std::marker::PhantomData }
    }
}

impl<T> Default for SequentialIdGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdGenerator<T> for SequentialIdGenerator<T> {
    fn next_id(&mut self) -> Result<Id<T>, IdError> {
        let next = self.last.checked_add(1).ok_or(IdError::Exhausted)?;
        self.last = next;
        debug!(id = next, "generated id");
        Ok(Id::new_unchecked(next))
    }
}
