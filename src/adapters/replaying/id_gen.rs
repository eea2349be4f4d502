//! Replaying adapter for the `IdGenerator` port.

use std::collections::VecDeque;

use crate::error::IdError;
use crate::ports::{Id, IdGenerator};

/// Replays a fixed list of identifiers in order.
pub struct ReplayingIdGenerator<T> {
    ids: VecDeque<Id<T>>,
}

impl<T> ReplayingIdGenerator<T> {
    /// Creates a generator that hands out `ids` front to back.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = Id<T>>) -> Self {
        Self { ids: ids.into_iter().collect() }
    }
}

impl<T> IdGenerator<T> for ReplayingIdGenerator<T> {
    fn next_id(&mut self) -> Result<Id<T>, IdError> {
        self.ids.pop_front().ok_or(IdError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_exhausts() {
        let ids = [40, 41].map(|raw| Id::<i32>::try_from(raw).unwrap());
        let mut gen = ReplayingIdGenerator::new(ids);
        assert_eq!(gen.next_id().unwrap().get(), 40);
        assert_eq!(gen.next_id().unwrap().get(), 41);
        assert_eq!(gen.next_id(), Err(IdError::Exhausted));
    }
}
