//! Controller-owned state and improvement proposals
//!
//! All mutable policy state lives here, owned exclusively by one
//! controller instance. `caution_level` is only written through the
//! tuner's adjustment and an approved proposal's change effect.

use crate::tools::ToolRegistry;
use crate::types::Interaction;

/// Caution level a fresh assistant starts from
pub const INITIAL_CAUTION: f64 = 0.5;

/// Effect applied to the assistant state when a proposal is approved
pub type ProposalChange = Box<dyn FnOnce(&mut AssistantState) + Send>;

/// Mutable state owned by one assistant controller
pub struct AssistantState {
    /// Every interaction ever handled, in chronological order
    pub knowledge: Vec<Interaction>,

    /// Registered tools, keyed by exact name
    pub tools: ToolRegistry,

    /// Scalar in [0.1, 1.0] biasing behavior toward verification
    pub caution_level: f64,

    /// Descriptions of improvements applied so far, in order
    pub improvements_applied: Vec<String>,
}

impl AssistantState {
    /// Create a fresh state with no history and default caution
    pub fn new() -> Self {
        Self {
            knowledge: Vec::new(),
            tools: ToolRegistry::new(),
            caution_level: INITIAL_CAUTION,
            improvements_applied: Vec::new(),
        }
    }
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate behavioral change, evaluated and applied within one turn
///
/// Ephemeral by design: constructed, judged, and (if approved)
/// consumed in the same turn, never stored.
pub struct ImprovementProposal {
    /// What the change does
    pub description: String,
    /// Why the change is warranted now
    pub rationale: String,
    /// What the change is expected to achieve
    pub expected_impact: String,
    /// The change itself
    pub change: ProposalChange,
}
