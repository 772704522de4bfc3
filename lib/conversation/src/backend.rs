//! Context backend interface.
//!
//! The UI-facing pieces talk to the conversation log only through
//! [`ContextBackend`], so a durable store can replace the in-memory one
//! without touching them.

use crate::error::BackendError;
use crate::projection::InputHistoryProjector;
use crate::retrieval::{RelevanceRetriever, RetrievalConfig};
use crate::store::TurnStore;
use crate::turn::Turn;
use async_trait::async_trait;
use rootcause::prelude::Report;
use tracing::{debug, instrument};

/// Storage and retrieval of conversation turns.
#[async_trait]
pub trait ContextBackend: Send + Sync {
    /// Persists a prompt and its response as one turn pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot store the pair.
    async fn save_turn_pair(
        &self,
        prompt: &str,
        response: &str,
    ) -> Result<(), Report<BackendError>>;

    /// Returns past turns relevant to `prompt`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be queried.
    async fn retrieve_context(&self, prompt: &str) -> Result<Vec<Turn>, Report<BackendError>>;

    /// Returns past user inputs, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be queried.
    async fn retrieve_input_history(&self) -> Result<Vec<String>, Report<BackendError>>;
}

/// Process-local backend over a [`TurnStore`]. Never fails.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    store: TurnStore,
    retriever: RelevanceRetriever,
    projector: InputHistoryProjector,
}

impl InMemoryBackend {
    /// Creates a backend over a fresh, empty store.
    #[must_use]
    pub fn new(config: RetrievalConfig) -> Self {
        Self::with_store(TurnStore::new(), config)
    }

    /// Creates a backend over an existing store.
    #[must_use]
    pub fn with_store(store: TurnStore, config: RetrievalConfig) -> Self {
        Self {
            retriever: RelevanceRetriever::new(store.clone(), config),
            projector: InputHistoryProjector::new(store.clone()),
            store,
        }
    }

    /// Returns a handle onto the underlying store.
    #[must_use]
    pub fn store(&self) -> &TurnStore {
        &self.store
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new(RetrievalConfig::default())
    }
}

#[async_trait]
impl ContextBackend for InMemoryBackend {
    #[instrument(skip_all)]
    async fn save_turn_pair(
        &self,
        prompt: &str,
        response: &str,
    ) -> Result<(), Report<BackendError>> {
        self.store.append(prompt, response);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn retrieve_context(&self, prompt: &str) -> Result<Vec<Turn>, Report<BackendError>> {
        let turns = self.retriever.retrieve(prompt);
        debug!(turns = turns.len(), "retrieved context");
        Ok(turns)
    }

    #[instrument(skip(self))]
    async fn retrieve_input_history(&self) -> Result<Vec<String>, Report<BackendError>> {
        Ok(self.projector.project())
    }
}
