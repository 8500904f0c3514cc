//! Error types for the adaptive assistant
//!
//! Backend failures carry French display strings because they become
//! user-visible text: the controller surfaces them verbatim, and the
//! failure-marker scan ("échec", "réponse llm") relies on that wording
//! to count the turn as an error.

use thiserror::Error;

/// Main error type for the assistant system
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Transport-level failure talking to the generation backend
    #[error("Échec de la requête LLM: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend answered with no choices
    #[error("Réponse LLM vide.")]
    EmptyResponse,

    /// Backend answered with a choice but no message content
    #[error("Réponse LLM sans contenu.")]
    MissingContent,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;
