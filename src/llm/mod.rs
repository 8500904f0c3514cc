//! Generation backend client
//!
//! Chat-completions client for the remote text-generation service.
//! Absence of credentials disables the backend entirely (not an
//! error); transport failures surface as [`crate::AssistantError`]
//! values the controller converts to user-visible text.

pub mod client;

pub use client::{ChatMessage, LlmClient, LlmConfig};
