//! Shared record types
//!
//! Core value types shared across the learning log and the controller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed exchange between the user and the assistant.
///
/// Built once per turn by the controller and never mutated afterwards;
/// the learning log owns the chronological history of these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Raw user input for the turn
    pub user_input: String,

    /// Text returned to the user
    pub assistant_response: String,

    /// Number of failure markers detected in the response (0 or 1)
    pub errors_detected: u32,

    /// When the exchange completed
    pub timestamp: DateTime<Utc>,
}

impl Interaction {
    /// Create a new interaction record, timestamped now
    pub fn new(user_input: impl Into<String>, assistant_response: impl Into<String>, errors_detected: u32) -> Self {
        Self {
            user_input: user_input.into(),
            assistant_response: assistant_response.into(),
            errors_detected,
            timestamp: Utc::now(),
        }
    }

    /// Whether this turn tripped the failure-marker scan
    pub fn has_errors(&self) -> bool {
        self.errors_detected > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_construction() {
        let interaction = Interaction::new("bonjour", "salut", 0);
        assert_eq!(interaction.user_input, "bonjour");
        assert_eq!(interaction.assistant_response, "salut");
        assert!(!interaction.has_errors());
    }

    #[test]
    fn test_has_errors() {
        let interaction = Interaction::new("q", "Échec de la requête LLM.", 1);
        assert!(interaction.has_errors());
    }
}
