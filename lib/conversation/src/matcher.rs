//! Keyword tokenizing and matching for relevance retrieval.
//!
//! Tokenizing and matching are kept apart so the matching policy can be
//! swapped without touching how a prompt is broken into keywords.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to do with the empty token an edge-whitespace prompt produces.
///
/// Splitting `" tea"` or `""` on whitespace runs yields an empty token, and
/// an empty string is a substring of every text. `Keep` preserves that
/// vacuous match-everything behavior; `Drop` discards the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTokenPolicy {
    /// Discard empty tokens.
    #[default]
    Drop,
    /// Keep the empty token produced by leading/trailing whitespace.
    Keep,
}

/// How a keyword is tested against turn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The keyword appears anywhere in the text ("rain" matches "training").
    #[default]
    Substring,
    /// The keyword equals one whitespace-delimited word of the text.
    WholeWord,
}

impl MatchStrategy {
    /// Returns true if `text` matches any keyword.
    ///
    /// `text` is lower-cased here; keywords are already lower-case.
    #[must_use]
    pub fn matches(&self, text: &str, keywords: &KeywordSet) -> bool {
        let text = text.to_lowercase();
        match self {
            Self::Substring => keywords.iter().any(|keyword| text.contains(keyword)),
            Self::WholeWord => text.split_whitespace().any(|word| keywords.contains(word)),
        }
    }
}

/// The distinct lower-case keywords of a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
}

impl KeywordSet {
    /// Lower-cases `prompt` and splits it on runs of whitespace.
    #[must_use]
    pub fn from_prompt(prompt: &str, empty_tokens: EmptyTokenPolicy) -> Self {
        let lowered = prompt.to_lowercase();
        let mut keywords: BTreeSet<String> =
            lowered.split_whitespace().map(str::to_owned).collect();

        if empty_tokens == EmptyTokenPolicy::Keep && has_edge_whitespace(&lowered) {
            keywords.insert(String::new());
        }

        Self { keywords }
    }

    /// Iterates keywords in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Returns whether `word` is one of the keywords.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns the number of distinct keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns whether there are no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Whether splitting on whitespace runs would leave an empty leading or
/// trailing piece.
fn has_edge_whitespace(s: &str) -> bool {
    s.is_empty() || s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(prompt: &str) -> KeywordSet {
        KeywordSet::from_prompt(prompt, EmptyTokenPolicy::Drop)
    }

    #[test]
    fn tokenizer_lowercases_and_splits() {
        let set = keywords("Clean  the\tKITCHEN\n");
        let tokens: Vec<&str> = set.iter().collect();
        assert_eq!(tokens, ["clean", "kitchen", "the"]);
    }

    #[test]
    fn tokenizer_collapses_duplicates() {
        assert_eq!(keywords("tea Tea TEA").len(), 1);
    }

    #[test]
    fn drop_policy_yields_nothing_for_blank_prompts() {
        assert!(keywords("").is_empty());
        assert!(keywords("   \t ").is_empty());
    }

    #[test]
    fn keep_policy_adds_empty_token_on_edge_whitespace() {
        let blank = KeywordSet::from_prompt("", EmptyTokenPolicy::Keep);
        assert!(blank.contains(""));
        assert_eq!(blank.len(), 1);

        let padded = KeywordSet::from_prompt(" tea", EmptyTokenPolicy::Keep);
        assert!(padded.contains(""));
        assert!(padded.contains("tea"));

        let interior = KeywordSet::from_prompt("green tea", EmptyTokenPolicy::Keep);
        assert!(!interior.contains(""));
    }

    #[test]
    fn substring_matches_inside_words() {
        let set = keywords("rain");
        assert!(MatchStrategy::Substring.matches("Training schedule", &set));
        assert!(!MatchStrategy::Substring.matches("Sunny all week", &set));
    }

    #[test]
    fn substring_is_case_insensitive() {
        let set = keywords("Laundry");
        assert!(MatchStrategy::Substring.matches("Did the LAUNDRY today", &set));
    }

    #[test]
    fn whole_word_requires_exact_word() {
        let set = keywords("rain");
        assert!(!MatchStrategy::WholeWord.matches("Training schedule", &set));
        assert!(MatchStrategy::WholeWord.matches("Expect Rain tomorrow", &set));
    }

    #[test]
    fn empty_keyword_set_matches_nothing() {
        let set = keywords("");
        assert!(!MatchStrategy::Substring.matches("anything", &set));
        assert!(!MatchStrategy::WholeWord.matches("anything", &set));
    }

    #[test]
    fn kept_empty_token_matches_everything_by_substring() {
        let set = KeywordSet::from_prompt("", EmptyTokenPolicy::Keep);
        assert!(MatchStrategy::Substring.matches("anything", &set));
        assert!(MatchStrategy::Substring.matches("", &set));
    }

    #[test]
    fn strategy_deserializes_snake_case() {
        let strategy: MatchStrategy =
            serde_json::from_str("\"whole_word\"").expect("deserialize");
        assert_eq!(strategy, MatchStrategy::WholeWord);
    }
}
