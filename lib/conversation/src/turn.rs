//! Turn types for the conversation log.

use chrono::{DateTime, Utc};
use menage_core::TurnId;
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Input typed by the user.
    User,
    /// Response produced by the model.
    Model,
}

/// One role-tagged message in the conversation log.
///
/// Turns are created by [`TurnStore::append`](crate::TurnStore::append) in
/// user/model pairs and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn identifier.
    pub id: TurnId,
    /// Who produced the turn.
    pub role: TurnRole,
    /// Message text.
    pub text: String,
    /// When the turn was appended.
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Creates a turn stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates a user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    /// Creates a model turn.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Model, text)
    }

    /// Returns true for turns typed by the user.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == TurnRole::User
    }
}
