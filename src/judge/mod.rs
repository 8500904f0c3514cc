//! Improvement judge
//!
//! Gatekeeper deciding whether a proposed behavioral change may be
//! applied. The current policy is a keyword classifier over the
//! proposal's justification text, not semantic understanding; it sits
//! behind a narrow text-triple interface so a richer policy can
//! replace it without touching the controller.

/// Terms that indicate potential harm; checked first, always win
const DENYLIST: [&str; 3] = ["nuire", "dommage", "biais"];

/// Terms that indicate expected benefit
const ALLOWLIST: [&str; 3] = ["erreur", "fiable", "bien commun"];

/// Outcome of one proposal evaluation
#[derive(Debug, Clone)]
pub struct JudgeDecision {
    /// Whether the proposal may be applied
    pub approved: bool,
    /// Human-readable justification for the outcome
    pub reason: String,
}

/// Stateless policy approving or rejecting improvement proposals
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovementJudge;

impl ImprovementJudge {
    /// Create a judge
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a proposal from its justification text
    ///
    /// The three fields are lowercased and concatenated. The denylist
    /// is checked before the allowlist regardless of matches, so
    /// harm-indicating language cannot be neutralized by co-occurring
    /// benefit language.
    pub fn evaluate(&self, description: &str, rationale: &str, expected_impact: &str) -> JudgeDecision {
        let combined = format!("{} {} {}", description, rationale, expected_impact).to_lowercase();

        if DENYLIST.iter().any(|term| combined.contains(term)) {
            return JudgeDecision {
                approved: false,
                reason: "Rejet: l'amélioration pourrait nuire au bien commun.".to_string(),
            };
        }

        if ALLOWLIST.iter().any(|term| combined.contains(term)) {
            return JudgeDecision {
                approved: true,
                reason: "Approuvé: amélioration alignée avec l'impact positif.".to_string(),
            };
        }

        JudgeDecision {
            approved: false,
            reason: "Rejet: impact positif insuffisamment démontré.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denylist_rejects() {
        let judge = ImprovementJudge::new();
        let decision = judge.evaluate("Introduire un biais utile", "", "");
        assert!(!decision.approved);
        assert!(decision.reason.contains("nuire"));
    }

    #[test]
    fn test_denylist_takes_precedence_over_allowlist() {
        // "biais" must reject even when "fiable" also matches
        let judge = ImprovementJudge::new();
        let decision = judge.evaluate(
            "Ajuster le biais du classement",
            "Rend le système plus fiable",
            "",
        );
        assert!(!decision.approved);
    }

    #[test]
    fn test_allowlist_approves() {
        let judge = ImprovementJudge::new();
        let decision = judge.evaluate(
            "Ajouter une vérification",
            "",
            "Impact positif pour le bien commun",
        );
        assert!(decision.approved);
        assert!(decision.reason.contains("Approuvé"));
    }

    #[test]
    fn test_neutral_text_rejected() {
        let judge = ImprovementJudge::new();
        let decision = judge.evaluate("Changer la couleur du prompt", "Préférence", "Esthétique");
        assert!(!decision.approved);
        assert!(decision.reason.contains("insuffisamment"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let judge = ImprovementJudge::new();
        let decision = judge.evaluate("Servir le BIEN COMMUN", "", "");
        assert!(decision.approved);
    }
}
