//! Liveness tracking for async completions.
//!
//! Each stateful component holds a `Generation`. An operation takes a ticket
//! before it awaits a collaborator and only writes its result back if the
//! ticket is still current. `advance` invalidates every outstanding ticket,
//! which is how a reset or a newer request discards stale responses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub(crate) struct Generation(AtomicU64);

impl Generation {
    pub(crate) fn ticket(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Invalidates outstanding tickets and returns the new current one.
    pub(crate) fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.ticket() == ticket
    }
}

// Locks guard plain data and are never held across an await, so a poisoned
// lock still holds a consistent value.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_invalidates_ticket() {
        let generation = Generation::default();
        let ticket = generation.ticket();
        assert!(generation.is_current(ticket));

        let next = generation.advance();
        assert!(!generation.is_current(ticket));
        assert!(generation.is_current(next));
    }
}
