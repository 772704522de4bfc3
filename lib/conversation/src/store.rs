//! Append-only turn store.
//!
//! The store is the ground truth for a session's conversation. It is an
//! owned handle rather than process-wide state: create one per session,
//! clone it into whatever needs to read it, and drop it when the session
//! ends.

use crate::turn::Turn;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tracing::debug;

/// Chronological log of turns, oldest first.
///
/// Cloning yields another handle onto the same log.
#[derive(Debug, Clone, Default)]
pub struct TurnStore {
    turns: Arc<RwLock<Vec<Turn>>>,
}

impl TurnStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user turn followed by a model turn.
    ///
    /// Both turns are pushed under one write lock, so readers never see
    /// half of a pair.
    pub fn append(&self, prompt: impl Into<String>, response: impl Into<String>) {
        let user = Turn::user(prompt);
        let model = Turn::model(response);

        let mut turns = self.turns.write().unwrap_or_else(PoisonError::into_inner);
        turns.push(user);
        turns.push(model);

        debug!(store_size = turns.len(), "appended turn pair");
    }

    /// Runs `f` against the current turns without copying them.
    pub fn read<R>(&self, f: impl FnOnce(&[Turn]) -> R) -> R {
        f(&self.guard())
    }

    /// Returns a copy of every turn, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Turn> {
        self.guard().clone()
    }

    /// Returns the number of turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns whether the store has no turns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> RwLockReadGuard<'_, Vec<Turn>> {
        self.turns.read().unwrap_or_else(PoisonError::into_inner)
    }
}
