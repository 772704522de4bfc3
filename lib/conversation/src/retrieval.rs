//! Relevance retrieval over the turn store.
//!
//! Selection is first-match-any-keyword, not scored: every turn whose text
//! matches at least one prompt keyword is returned, in store order. When
//! nothing matches, the most recent turns are returned instead.

use crate::matcher::{EmptyTokenPolicy, KeywordSet, MatchStrategy};
use crate::store::TurnStore;
use crate::turn::Turn;
use serde::Deserialize;
use tracing::debug;

/// Retrieval tuning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetrievalConfig {
    /// How keywords are matched against turn text.
    #[serde(default)]
    pub match_strategy: MatchStrategy,

    /// Whether edge whitespace in a prompt yields a match-everything token.
    #[serde(default)]
    pub empty_tokens: EmptyTokenPolicy,

    /// Number of most recent turns returned when no turn matches.
    #[serde(default = "default_fallback_window")]
    pub fallback_window: usize,
}

fn default_fallback_window() -> usize {
    10
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            match_strategy: MatchStrategy::default(),
            empty_tokens: EmptyTokenPolicy::default(),
            fallback_window: default_fallback_window(),
        }
    }
}

/// Selects past turns relevant to a new prompt.
#[derive(Debug, Clone)]
pub struct RelevanceRetriever {
    store: TurnStore,
    config: RetrievalConfig,
}

impl RelevanceRetriever {
    /// Creates a retriever reading from `store`.
    #[must_use]
    pub fn new(store: TurnStore, config: RetrievalConfig) -> Self {
        Self { store, config }
    }

    /// Returns the turns relevant to `prompt`, oldest first.
    ///
    /// Falls back to the last `fallback_window` turns when no turn matches
    /// a keyword, and to an empty list when the store is empty.
    #[must_use]
    pub fn retrieve(&self, prompt: &str) -> Vec<Turn> {
        let keywords = KeywordSet::from_prompt(prompt, self.config.empty_tokens);
        let strategy = self.config.match_strategy;

        self.store.read(|turns| {
            let matched: Vec<Turn> = turns
                .iter()
                .filter(|turn| strategy.matches(&turn.text, &keywords))
                .cloned()
                .collect();

            if !matched.is_empty() {
                debug!(
                    keywords = keywords.len(),
                    matched = matched.len(),
                    "found relevant turns by keyword"
                );
                return matched;
            }

            let start = turns.len().saturating_sub(self.config.fallback_window);
            debug!(
                returned = turns.len() - start,
                "no keyword match, falling back to recent turns"
            );
            turns[start..].to_vec()
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }
}
