//! Last-write-wins holder for the currently displayed region.
//!
//! Overlapping searches race: the user types a new query before the
//! previous one resolves. Only the result of the most recently begun
//! search may become visible. Callers take a [`SearchToken`] before
//! issuing a search and commit the resolved region with it; a token
//! from a superseded search is rejected and its result dropped.

use std::sync::{Arc, Mutex, PoisonError};

use crate::ResolvedRegion;

/// Opaque handle tying a search to its begin generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken {
    generation: u64,
}

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    current: Option<Arc<ResolvedRegion>>,
}

/// Atomically swapped "current overlay" state.
///
/// Cheap to share: clone an `Arc<SelectionState>` into each search
/// task. The resolution pipeline itself stays stateless; this is the
/// single place where visible state changes hands.
#[derive(Debug, Default)]
pub struct SelectionState {
    inner: Mutex<Inner>,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new search, superseding any search still in flight.
    pub fn begin(&self) -> SearchToken {
        let mut inner = self.lock();
        inner.generation += 1;
        SearchToken {
            generation: inner.generation,
        }
    }

    /// Commits a resolved region for the search identified by `token`.
    ///
    /// Returns `false` (and drops the region) when a newer search has
    /// begun or the selection was cleared since the token was taken.
    pub fn commit(&self, token: SearchToken, region: ResolvedRegion) -> bool {
        let mut inner = self.lock();
        if token.generation == inner.generation {
            inner.current = Some(Arc::new(region));
            true
        } else {
            false
        }
    }

    /// Clears the selection and invalidates outstanding tokens.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.current = None;
    }

    /// The currently committed region, if any.
    #[must_use]
    pub fn current(&self) -> Option<Arc<ResolvedRegion>> {
        self.lock().current.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
