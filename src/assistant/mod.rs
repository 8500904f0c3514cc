//! Assistant controller
//!
//! Orchestrates one full turn and the adaptation step that follows it:
//! resolve a responder (explicit tool prefix, inferred tool, backend,
//! or fixed fallback), scan the response for failure markers, record
//! the interaction, tune the caution level, and maybe propose an
//! improvement to the judge.
//!
//! Turn flow: Idle -> Responding -> Recording -> ProposingOrSkipping
//! -> (Judging -> Applying | Skipped) -> Idle. Driven once per
//! external call; `&mut self` serializes turns by construction.

pub mod state;

use crate::judge::{ImprovementJudge, JudgeDecision};
use crate::learning::{LearningLog, PerformanceTuner, CAUTION_MAX};
use crate::llm::{ChatMessage, LlmClient};
use crate::tools::{GeneratedTool, Tool, VerificationTool};
use crate::types::Interaction;
use std::sync::Arc;

pub use state::{AssistantState, ImprovementProposal, ProposalChange};

/// Phrases marking a response as a failed turn
///
/// The no-backend fallback message is deliberately absent: a missing
/// API key degrades silently and must not feed the error loop, while
/// backend failures always surface "échec" or "réponse llm" text.
const ERROR_MARKERS: [&str; 3] = ["échec", "erreur", "réponse llm"];

/// Caution bump applied by an approved improvement
const IMPROVEMENT_CAUTION_STEP: f64 = 0.05;

/// Recent error rate above which improvements are proposed even on a
/// clean turn
const ERROR_RATE_THRESHOLD: f64 = 0.2;

/// Tool name used when an explicit prefix carries no task
const DEFAULT_TOOL_TASK: &str = "outil-par-defaut";

/// Reply used when no backend is configured and no tool matched
const NO_BACKEND_FALLBACK: &str = "Je n'ai pas de LLM configuré. Définissez OPENAI_API_KEY pour \
     activer un modèle, ou utilisez le mode outil. \
     J'apprends de cette interaction et j'améliore mes réponses \
     pour servir le bien commun.";

/// Keyword -> task table for tool inference, first match wins
const TASK_KEYWORDS: [(&str, &str); 9] = [
    ("résume", "resume"),
    ("résumé", "resume"),
    ("resume", "resume"),
    ("analyse", "analyse"),
    ("analyser", "analyse"),
    ("traduire", "traduction"),
    ("traduction", "traduction"),
    ("plan", "plan"),
    ("checklist", "checklist"),
];

/// Self-adjusting dialogue agent
///
/// Owns the single [`AssistantState`] instance; one `interact` call
/// runs to completion before the next starts.
pub struct AdaptiveAssistant {
    state: AssistantState,
    judge: ImprovementJudge,
    tuner: PerformanceTuner,
    learning_log: LearningLog,
    llm: Option<Arc<LlmClient>>,
}

impl AdaptiveAssistant {
    /// Create an assistant with an optional generation backend
    pub fn new(llm: Option<Arc<LlmClient>>) -> Self {
        Self {
            state: AssistantState::new(),
            judge: ImprovementJudge::new(),
            tuner: PerformanceTuner::new(),
            learning_log: LearningLog::new(),
            llm,
        }
    }

    /// Register a tool for exact-name lookup
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        self.state.tools.register(tool);
    }

    /// Resolve a tool by task name, synthesizing one on a miss
    ///
    /// Synthesized tools defer to the generation backend with a fixed
    /// preamble and fall back to a literal placeholder; they are
    /// registered for reuse, so repeated calls return the same tool.
    pub fn ensure_tool(&mut self, task: &str) -> Arc<dyn Tool> {
        if let Some(tool) = self.state.tools.get(task) {
            return tool;
        }

        let tool: Arc<dyn Tool> = Arc::new(GeneratedTool::new(task, self.llm.clone()));
        self.state.tools.register(tool.clone());
        tool
    }

    /// Handle one full turn: respond, record, tune, maybe improve
    pub async fn interact(&mut self, user_input: &str) -> String {
        let response = self.generate_response(user_input).await;
        let errors_detected = self.assess_errors(&response);
        let interaction = Interaction::new(user_input, response.clone(), errors_detected);

        self.learn_from_interaction(interaction.clone());
        self.attempt_improvement(&interaction);

        response
    }

    /// Append the interaction and adjust the caution level
    pub fn learn_from_interaction(&mut self, interaction: Interaction) {
        let errors_detected = interaction.errors_detected;
        self.state.knowledge.push(interaction.clone());
        self.learning_log.record(interaction);
        self.state.caution_level = self.tuner.adjust(self.state.caution_level, errors_detected);
    }

    /// Propose, judge, and maybe apply an improvement for this turn
    ///
    /// Returns `None` when no proposal is warranted: empty history, or
    /// a clean turn while the recent error rate stays below the
    /// threshold. A rejected proposal is a normal outcome with no side
    /// effect; the decision is returned either way.
    pub fn attempt_improvement(&mut self, interaction: &Interaction) -> Option<JudgeDecision> {
        let proposal = self.propose_improvement(interaction)?;
        let decision = self.judge.evaluate(
            &proposal.description,
            &proposal.rationale,
            &proposal.expected_impact,
        );

        if decision.approved {
            let ImprovementProposal { description, change, .. } = proposal;
            change(&mut self.state);
            self.state.improvements_applied.push(description);
        }

        Some(decision)
    }

    /// One-line state summary: `Interactions: <n>, Tools: <n>, Caution: <x.xx>`
    pub fn summary(&self) -> String {
        format!(
            "Interactions: {}, Tools: {}, Caution: {:.2}",
            self.state.knowledge.len(),
            self.state.tools.len(),
            self.state.caution_level
        )
    }

    /// Controller-owned state (read-only)
    pub fn state(&self) -> &AssistantState {
        &self.state
    }

    /// Interaction history with derived error statistics (read-only)
    pub fn learning_log(&self) -> &LearningLog {
        &self.learning_log
    }

    async fn generate_response(&mut self, user_input: &str) -> String {
        if let Some(task) = parse_tool_prefix(user_input) {
            let tool = self.ensure_tool(&task);
            return tool.run(user_input).await;
        }

        if let Some(task) = infer_tool_task(user_input) {
            let tool = self.ensure_tool(task);
            return tool.run(user_input).await;
        }

        if let Some(llm) = self.llm.clone() {
            return self.generate_with_llm(&llm, user_input).await;
        }

        NO_BACKEND_FALLBACK.to_string()
    }

    async fn generate_with_llm(&self, llm: &LlmClient, user_input: &str) -> String {
        let system_prompt = format!(
            "Tu es un assistant IA qui évolue et s'améliore en continu. \
             Tu apprends de chaque interaction, proposes des améliorations \
             bénéfiques au bien commun, limites les erreurs, et maximises \
             l'impact positif. Sois clair, honnête et prudent. \
             Niveau de prudence actuel: {:.2}.",
            self.state.caution_level
        );
        let messages = [ChatMessage::system(system_prompt), ChatMessage::user(user_input)];

        match llm.generate(&messages).await {
            Ok(content) => content,
            // The surfaced error text carries a failure marker, which
            // is how backend outages feed back into increased caution.
            Err(err) => format!("{} Utilisez OPENAI_API_KEY/OPENAI_MODEL pour activer le LLM.", err),
        }
    }

    fn assess_errors(&self, response: &str) -> u32 {
        let lowered = response.to_lowercase();
        if ERROR_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            1
        } else {
            0
        }
    }

    fn propose_improvement(&self, interaction: &Interaction) -> Option<ImprovementProposal> {
        if self.state.knowledge.is_empty() {
            return None;
        }

        let recent_error_rate = self.learning_log.recent_error_rate();
        if !interaction.has_errors() && recent_error_rate < ERROR_RATE_THRESHOLD {
            return None;
        }

        let change: ProposalChange = Box::new(|state: &mut AssistantState| {
            state.caution_level = (state.caution_level + IMPROVEMENT_CAUTION_STEP).min(CAUTION_MAX);
            if !state.tools.contains("verification") {
                state.tools.register(Arc::new(VerificationTool::new()));
            }
        });

        Some(ImprovementProposal {
            description: "Renforcer la prudence et ajouter une étape de vérification \
                 pour réduire les erreurs."
                .to_string(),
            rationale: "Les interactions récentes montrent des signes d'erreur ou \
                 d'incertitude; une vérification améliore la fiabilité."
                .to_string(),
            expected_impact: "Moins d'erreurs, meilleure diffusion de la connaissance et \
                 impact positif pour le bien commun."
                .to_string(),
            change,
        })
    }
}

/// Extract the task name from an explicit `outil:`/`tool:` prefix
fn parse_tool_prefix(user_input: &str) -> Option<String> {
    let rest = user_input
        .strip_prefix("outil:")
        .or_else(|| user_input.strip_prefix("tool:"))?;
    let task = rest.trim();
    if task.is_empty() {
        Some(DEFAULT_TOOL_TASK.to_string())
    } else {
        Some(task.to_string())
    }
}

/// Infer a tool task from keywords in the lowercased input
fn infer_tool_task(user_input: &str) -> Option<&'static str> {
    let lowered = user_input.to_lowercase();
    TASK_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, task)| *task)
}
