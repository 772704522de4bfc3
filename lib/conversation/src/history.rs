//! Session-local input history for prompt navigation.
//!
//! The view is seeded once from the backend's input history and then
//! updated locally as the user submits prompts. It is never reconciled
//! with the turn store after seeding.
//!
//! Initialization is a one-shot state machine:
//!
//! ```text
//! Uninitialized --initialize()--> Pending --backend returns--> Initialized
//! ```
//!
//! The `Uninitialized -> Pending` step happens under the view's lock before
//! the backend is awaited, so two overlapping `initialize()` calls can never
//! both query the backend.

use crate::backend::ContextBackend;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use tracing::{debug, warn};

/// Initialization state of a [`ClientHistoryView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// `initialize()` has not been called.
    Uninitialized,
    /// The backend query is in flight.
    Pending,
    /// Seeding finished, successfully or not.
    Initialized,
}

#[derive(Debug)]
struct ViewInner {
    state: HistoryState,
    entries: Vec<String>,
}

/// Ordered list of past user inputs, oldest first, with no duplicates
/// introduced by [`add_input`](Self::add_input).
pub struct ClientHistoryView {
    backend: Arc<dyn ContextBackend>,
    inner: Mutex<ViewInner>,
    initialized: Notify,
}

impl ClientHistoryView {
    /// Creates an uninitialized, empty view over `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn ContextBackend>) -> Self {
        Self {
            backend,
            inner: Mutex::new(ViewInner {
                state: HistoryState::Uninitialized,
                entries: Vec::new(),
            }),
            initialized: Notify::new(),
        }
    }

    /// Seeds the history from the backend, at most once.
    ///
    /// A call made while another is in flight waits for it and then
    /// returns; a call made afterwards returns immediately. A backend
    /// failure is logged and leaves the history empty; it is not retried.
    /// Seeding replaces any inputs added before it completes.
    pub async fn initialize(&self) {
        loop {
            let notified = self.initialized.notified();
            {
                let mut inner = self.lock();
                match inner.state {
                    HistoryState::Initialized => return,
                    HistoryState::Pending => {}
                    HistoryState::Uninitialized => {
                        inner.state = HistoryState::Pending;
                        break;
                    }
                }
            }
            notified.await;
        }

        let pending = PendingInitialization {
            view: self,
            loaded: None,
        };

        let entries = match self.backend.retrieve_input_history().await {
            Ok(mut newest_first) => {
                newest_first.reverse();
                debug!(entries = newest_first.len(), "seeded input history");
                newest_first
            }
            Err(report) => {
                warn!(
                    error = ?report,
                    "failed to initialize input history from context backend"
                );
                Vec::new()
            }
        };

        pending.finish(entries);
    }

    /// Records a submitted input as the most recent entry.
    ///
    /// Surrounding whitespace is trimmed and blank inputs are ignored. An
    /// input already in the history moves to the end instead of repeating.
    pub fn add_input(&self, raw: &str) {
        let input = raw.trim();
        if input.is_empty() {
            return;
        }
        move_to_end(&mut self.lock().entries, input);
    }

    /// Returns a copy of the history, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }

    /// Returns the initialization state.
    #[must_use]
    pub fn state(&self) -> HistoryState {
        self.lock().state
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, ViewInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Moves the view to `Initialized` when dropped, so an abandoned
/// `initialize()` future cannot leave it stuck in `Pending`.
struct PendingInitialization<'a> {
    view: &'a ClientHistoryView,
    loaded: Option<Vec<String>>,
}

impl PendingInitialization<'_> {
    fn finish(mut self, entries: Vec<String>) {
        self.loaded = Some(entries);
    }
}

impl Drop for PendingInitialization<'_> {
    fn drop(&mut self) {
        let entries = self.loaded.take().unwrap_or_else(|| {
            warn!("input history initialization dropped before completing");
            Vec::new()
        });

        {
            let mut inner = self.view.lock();
            inner.entries = entries;
            inner.state = HistoryState::Initialized;
        }
        self.view.initialized.notify_waiters();
    }
}

/// Appends `entry`, first removing any existing occurrence of it.
///
/// Unlike [`collapse_consecutive_repeats`](crate::projection::collapse_consecutive_repeats),
/// this removes repeats anywhere in the list, so the result never holds
/// two equal entries if the input did not.
pub fn move_to_end(history: &mut Vec<String>, entry: &str) {
    history.retain(|existing| existing != entry);
    history.push(entry.to_owned());
}
