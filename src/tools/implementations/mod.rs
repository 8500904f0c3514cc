//! Built-in tool implementations
//!
//! Tools:
//! - GeneratedTool: synthesized on demand for an unknown task name;
//!   defers to the generation backend, falls back to a literal string
//! - VerificationTool: fixed fact-checking step registered by an
//!   approved improvement

use crate::llm::{ChatMessage, LlmClient};
use crate::tools::types::Tool;
use async_trait::async_trait;
use std::sync::Arc;

/// System preamble for synthesized tools
const GENERATED_TOOL_PROMPT: &str = "Tu es un outil spécialisé créé par un assistant IA. \
     Ta mission est d'aider l'utilisateur avec précision, \
     en limitant les erreurs et en favorisant le bien commun.";

/// Tool synthesized for a task name with no registered implementation
///
/// Runs against the generation backend when one is configured; any
/// backend failure (or its absence) degrades to a literal placeholder
/// so the tool never fails outward.
pub struct GeneratedTool {
    name: String,
    description: String,
    llm: Option<Arc<LlmClient>>,
}

impl GeneratedTool {
    /// Create a generated tool bound to `task`
    pub fn new(task: impl Into<String>, llm: Option<Arc<LlmClient>>) -> Self {
        Self {
            name: task.into(),
            description: "Outil généré automatiquement.".to_string(),
            llm,
        }
    }

    fn fallback(&self, payload: &str) -> String {
        format!("Outil '{}' généré pour: {}", self.name, payload)
    }
}

#[async_trait]
impl Tool for GeneratedTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn run(&self, payload: &str) -> String {
        if let Some(llm) = &self.llm {
            let messages = [
                ChatMessage::system(GENERATED_TOOL_PROMPT),
                ChatMessage::user(payload),
            ];
            if let Ok(content) = llm.generate(&messages).await {
                return content;
            }
        }
        self.fallback(payload)
    }
}

/// Fact-checking step added by an approved improvement proposal
pub struct VerificationTool {
    description: String,
}

impl VerificationTool {
    /// Create the verification tool
    pub fn new() -> Self {
        Self {
            description: "Outil de vérification pour limiter les erreurs.".to_string(),
        }
    }
}

impl Default for VerificationTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for VerificationTool {
    fn name(&self) -> &str {
        "verification"
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn run(&self, payload: &str) -> String {
        format!(
            "Vérifie les faits et sources pour limiter les erreurs. Contexte: {}",
            payload
        )
    }
}
