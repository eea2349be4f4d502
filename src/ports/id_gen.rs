//! ID generator port for producing typed identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::{DomainError, IdError};

/// Identifier for an object of kind `T`.
///
/// The raw value `0` is reserved as invalid, so every `Id` holds a value of
/// at least 1. The phantom kind keeps ids for different object kinds from
/// being mixed up.
pub struct Id<T> {
    raw: u64,
    kind: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Raw value reserved as invalid.
    pub const INVALID: u64 = 0;

    pub(crate) fn new_unchecked(raw: u64) -> Self {
        debug_assert_ne!(raw, Self::INVALID);
        Self { raw, kind: PhantomData }
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.raw
    }
}

impl<T> TryFrom<u64> for Id<T> {
    type Error = DomainError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        if raw == Self::INVALID {
            return Err(DomainError::InvalidId);
        }
        Ok(Self::new_unchecked(raw))
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.raw)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Generates identifiers for objects of kind `T`.
///
/// Abstracting ID generation allows a predictable sequence to be
/// substituted during tests.
pub trait IdGenerator<T> {
    /// Produces the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Exhausted`] when no further identifier can be
    /// produced.
    fn next_id(&mut self) -> Result<Id<T>, IdError>;
}
