//! Adaptive Assistant - CLI entry point

use adaptive_assistant::assistant::AdaptiveAssistant;
use adaptive_assistant::cli::Args;
use adaptive_assistant::llm::{LlmClient, LlmConfig};
use adaptive_assistant::repl::ReplSession;
use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // No API key means no backend, not an error: the assistant still
    // runs in tool/fallback mode. Flags win over plain environment
    // values (clap already folds the env vars into the args).
    let llm = match LlmConfig::from_env() {
        Some(mut config) => {
            config.base_url = args.base_url;
            config.model = args.model;
            Some(Arc::new(
                LlmClient::new(config).context("Failed to build backend client")?,
            ))
        }
        None => None,
    };

    let backend_model = llm.as_ref().map(|client| client.model().to_string());
    let mut assistant = AdaptiveAssistant::new(llm);

    let mut repl = ReplSession::new().context("Failed to initialize REPL")?;
    repl.show_welcome(env!("CARGO_PKG_VERSION"), backend_model.as_deref());
    repl.run(&mut assistant).await
}
