//! Tool capability layer
//!
//! Tools are named capabilities mapping a text payload to a text
//! result. The registry resolves them by exact key; unknown keys are
//! synthesized on demand by the controller.

pub mod implementations;
pub mod registry;
pub mod types;

pub use implementations::{GeneratedTool, VerificationTool};
pub use registry::ToolRegistry;
pub use types::Tool;
