//! Conversation session wiring.
//!
//! A session owns one input-history view and shares a backend. Prompts flow
//! through it in this order: the prompt is added to the view, context for it
//! is fetched from the backend, and once the model has answered the pair is
//! recorded back to the backend.

use crate::backend::ContextBackend;
use crate::error::BackendError;
use crate::history::ClientHistoryView;
use crate::turn::Turn;
use menage_core::SessionId;
use std::sync::Arc;
use tracing::{debug, instrument};

/// One user's conversation from start to end.
pub struct ConversationSession {
    id: SessionId,
    backend: Arc<dyn ContextBackend>,
    history: ClientHistoryView,
}

impl ConversationSession {
    /// Creates a session over `backend`. Call [`start`](Self::start) before use.
    #[must_use]
    pub fn new(backend: Arc<dyn ContextBackend>) -> Self {
        Self {
            id: SessionId::new(),
            history: ClientHistoryView::new(Arc::clone(&backend)),
            backend,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the session's input history.
    #[must_use]
    pub fn history(&self) -> &ClientHistoryView {
        &self.history
    }

    /// Seeds the input history from the backend.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn start(&self) {
        self.history.initialize().await;
        debug!(entries = self.history.len(), "session started");
    }

    /// Records `prompt` in the input history and returns the context the
    /// backend considers relevant to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be queried. The prompt stays
    /// in the input history either way.
    #[instrument(skip(self, prompt), fields(session_id = %self.id))]
    pub async fn submit(&self, prompt: &str) -> menage_core::Result<Vec<Turn>, BackendError> {
        self.history.add_input(prompt);
        self.backend.retrieve_context(prompt).await
    }

    /// Saves a prompt and the model's response as one turn pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot store the pair.
    #[instrument(skip(self, prompt, response), fields(session_id = %self.id))]
    pub async fn record(&self, prompt: &str, response: &str) -> menage_core::Result<(), BackendError> {
        self.backend.save_turn_pair(prompt, response).await
    }
}
