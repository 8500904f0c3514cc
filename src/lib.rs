//! Adaptive Assistant - Self-adjusting dialogue agent
//!
//! A terminal assistant that answers user turns, records each exchange,
//! and nudges a single caution-level parameter from observed error
//! signals. Proposed behavioral changes pass through a gating judge
//! before they take effect.
//!
//! # Architecture
//!
//! - **learning**: append-only interaction log + caution tuner
//! - **judge**: keyword-based approval gate for improvement proposals
//! - **assistant**: controller orchestrating one turn and its adaptation step
//! - **tools**: named capability registry with on-demand synthesis
//! - **llm**: chat-completions backend client
//! - **repl**: interactive front end

pub mod errors;
pub mod types;
pub mod learning;
pub mod judge;
pub mod tools;
pub mod llm;
pub mod assistant;
pub mod repl;
pub mod cli;

// Re-export commonly used types
pub use assistant::AdaptiveAssistant;
pub use errors::{AssistantError, Result};
pub use types::Interaction;
