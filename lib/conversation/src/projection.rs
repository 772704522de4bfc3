//! Projection of past user inputs from the turn store.

use crate::store::TurnStore;
use tracing::debug;

/// Derives the list of past user inputs from a turn store.
///
/// Each call recomputes from the store's current contents; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct InputHistoryProjector {
    store: TurnStore,
}

impl InputHistoryProjector {
    /// Creates a projector reading from `store`.
    #[must_use]
    pub fn new(store: TurnStore) -> Self {
        Self { store }
    }

    /// Returns user inputs newest first, with immediate repeats collapsed.
    #[must_use]
    pub fn project(&self) -> Vec<String> {
        let newest_first: Vec<String> = self.store.read(|turns| {
            turns
                .iter()
                .rev()
                .filter(|turn| turn.is_user())
                .map(|turn| turn.text.clone())
                .collect()
        });

        let inputs = collapse_consecutive_repeats(newest_first);
        debug!(inputs = inputs.len(), "projected input history");
        inputs
    }
}

/// Drops an entry only when it equals the entry right before it.
///
/// `["a", "a", "b", "a"]` becomes `["a", "b", "a"]`: a repeat separated by
/// another entry survives. Compare [`move_to_end`](crate::history::move_to_end),
/// which removes every earlier occurrence.
#[must_use]
pub fn collapse_consecutive_repeats(mut entries: Vec<String>) -> Vec<String> {
    entries.dedup();
    entries
}
