//! Canned responses for the shell.
//!
//! The shell has no model attached; it answers with a short summary of
//! what the context backend recalled so the retrieval path is visible.

use menage_conversation::{Turn, TurnRole};

/// Builds a response to `prompt` from the recalled `context`.
#[must_use]
pub fn compose_response(prompt: &str, context: &[Turn]) -> String {
    let prompt = prompt.trim();
    let Some(latest_user) = context.iter().rev().find(|t| t.role == TurnRole::User) else {
        return format!("Noted: \"{prompt}\". Nothing earlier to go on yet.");
    };

    format!(
        "Noted: \"{prompt}\". Recalled {} earlier turn(s); most recently you asked \"{}\".",
        context.len(),
        latest_user.text
    )
}

/// Renders recalled turns one per line.
#[must_use]
pub fn render_context(context: &[Turn]) -> String {
    context
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                TurnRole::User => "you",
                TurnRole::Model => "menage",
            };
            format!("  [{speaker}] {}", turn.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
