//! Conversational context for menage.
//!
//! This crate provides:
//!
//! - **Turn Store**: Append-only log of user/model turns
//! - **Relevance Retriever**: Keyword selection of past turns with a recency fallback
//! - **Input History Projector**: Past user inputs derived from the store
//! - **Client History View**: Session-local input history, seeded once
//! - **Context Backend**: The async boundary in front of the store

pub mod backend;
pub mod error;
pub mod history;
pub mod matcher;
pub mod projection;
pub mod retrieval;
pub mod session;
pub mod store;
pub mod turn;

pub use backend::{ContextBackend, InMemoryBackend};
pub use error::BackendError;
pub use history::{ClientHistoryView, HistoryState};
pub use matcher::{EmptyTokenPolicy, KeywordSet, MatchStrategy};
pub use projection::InputHistoryProjector;
pub use retrieval::{RelevanceRetriever, RetrievalConfig};
pub use session::ConversationSession;
pub use store::TurnStore;
pub use turn::{Turn, TurnRole};
