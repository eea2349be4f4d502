//! Identifier-keyed object lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::error::DomainError;
use crate::ports::Id;

/// Maps identifiers of kind `T` to stored values.
#[derive(Debug)]
pub struct ObjectStore<T> {
    entries: HashMap<Id<T>, T>,
}

impl<T> ObjectStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Stores `value` under `id`, returning any value it replaced.
    pub fn insert(&mut self, id: Id<T>, value: T) -> Option<T> {
        self.entries.insert(id, value)
    }

    /// Looks up the value stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if nothing is stored under `id`.
    pub fn get(&self, id: Id<T>) -> Result<&T, DomainError> {
        self.entries.get(&id).ok_or_else(|| {
            debug!(%id, "lookup missed");
            DomainError::NotFound
        })
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for ObjectStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
