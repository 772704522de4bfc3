use menage_conversation::{ConversationSession, InMemoryBackend};
use menage_repl::config::ReplConfig;
use menage_repl::responder::{compose_response, render_context};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match ReplConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        fallback_window = config.retrieval.fallback_window,
        "loaded configuration"
    );

    let backend = Arc::new(InMemoryBackend::new(config.retrieval.clone()));
    let session = ConversationSession::new(backend);
    session.start().await;
    tracing::info!(session_id = %session.id(), "session started");

    println!("menage: type a prompt, /history to list inputs, /quit to leave");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "failed to read from stdin");
                return ExitCode::FAILURE;
            }
        };

        let prompt = line.trim();
        match prompt {
            "" => continue,
            "/quit" => break,
            "/history" => {
                for (i, entry) in session.history().entries().iter().enumerate() {
                    println!("{:>3}  {entry}", i + 1);
                }
                continue;
            }
            _ => {}
        }

        let context = match session.submit(prompt).await {
            Ok(context) => context,
            Err(report) => {
                tracing::warn!(error = ?report, "context retrieval failed");
                Vec::new()
            }
        };
        if config.show_context && !context.is_empty() {
            println!("{}", render_context(&context));
        }

        let response = compose_response(prompt, &context);
        println!("{response}");

        if let Err(report) = session.record(prompt, &response).await {
            tracing::warn!(error = ?report, "failed to record turn pair");
        }
    }

    tracing::info!(session_id = %session.id(), "session ended");
    ExitCode::SUCCESS
}
