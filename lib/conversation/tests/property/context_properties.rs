use menage_conversation::{
    ClientHistoryView, EmptyTokenPolicy, InMemoryBackend, InputHistoryProjector, KeywordSet,
    RelevanceRetriever, RetrievalConfig, TurnStore,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn store_with(pairs: &[(String, String)]) -> TurnStore {
    let store = TurnStore::new();
    for (prompt, response) in pairs {
        store.append(prompt.as_str(), response.as_str());
    }
    store
}

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-d ]{0,12}", "[a-d ]{0,12}"), 0..12)
}

proptest! {
    #[test]
    fn retrieval_preserves_store_order(pairs in pairs(), prompt in "[a-f ]{0,10}") {
        let store = store_with(&pairs);
        let retriever = RelevanceRetriever::new(store.clone(), RetrievalConfig::default());

        let all = store.snapshot();
        let positions: Vec<usize> = retriever
            .retrieve(&prompt)
            .iter()
            .map(|turn| {
                all.iter()
                    .position(|t| t.id == turn.id)
                    .expect("retrieved turn comes from the store")
            })
            .collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unmatched_prompt_returns_recent_window(pairs in pairs(), prompt in "[x-z ]{0,10}") {
        let store = store_with(&pairs);
        let retriever = RelevanceRetriever::new(store.clone(), RetrievalConfig::default());

        let found = retriever.retrieve(&prompt);

        let all = store.snapshot();
        let expected = &all[all.len().saturating_sub(10)..];
        prop_assert_eq!(found.as_slice(), expected);
    }

    #[test]
    fn matched_turns_contain_a_keyword(pairs in pairs(), prompt in "[a-f ]{0,10}") {
        let store = store_with(&pairs);
        let retriever = RelevanceRetriever::new(store.clone(), RetrievalConfig::default());
        let keywords = KeywordSet::from_prompt(&prompt, EmptyTokenPolicy::Drop);

        let any_match = store
            .snapshot()
            .iter()
            .any(|t| keywords.iter().any(|k| t.text.contains(k)));
        if !any_match {
            return Ok(());
        }

        for turn in retriever.retrieve(&prompt) {
            prop_assert!(keywords.iter().any(|k| turn.text.contains(k)));
        }
    }

    #[test]
    fn projection_has_no_adjacent_repeats(pairs in pairs()) {
        let store = store_with(&pairs);

        let inputs = InputHistoryProjector::new(store).project();

        prop_assert!(inputs.len() <= pairs.len());
        prop_assert!(inputs.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn add_input_never_duplicates(inputs in prop::collection::vec("[ab ]{0,4}", 0..20)) {
        let view = ClientHistoryView::new(Arc::new(InMemoryBackend::default()));

        for input in &inputs {
            view.add_input(input);
        }

        let entries = view.entries();
        let unique: HashSet<&String> = entries.iter().collect();
        prop_assert_eq!(unique.len(), entries.len());
        prop_assert!(entries.iter().all(|e| !e.is_empty() && e.trim() == e));

        if let Some(last) = inputs.iter().rev().map(|s| s.trim()).find(|s| !s.is_empty()) {
            prop_assert_eq!(entries.last().map(String::as_str), Some(last));
        }
    }

    #[test]
    fn blank_inputs_leave_history_unchanged(
        seed in prop::collection::vec("[ab]{1,3}", 0..5),
        blank in "[ \t\n]{0,5}",
    ) {
        let view = ClientHistoryView::new(Arc::new(InMemoryBackend::default()));
        for input in &seed {
            view.add_input(input);
        }
        let before = view.entries();

        view.add_input(&blank);

        prop_assert_eq!(view.entries(), before);
    }
}
