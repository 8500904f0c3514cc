//! Learning log and caution tuner
//!
//! The log is the append-only history of interactions with a derived
//! sliding-window error rate. The tuner is a pure control law mapping
//! one turn's error signal to a caution adjustment; error increments
//! are 5x larger than decay decrements, biasing the assistant toward
//! caution after any detected error.

use crate::types::Interaction;

/// Lower bound for the caution level
pub const CAUTION_MIN: f64 = 0.1;

/// Upper bound for the caution level
pub const CAUTION_MAX: f64 = 1.0;

/// Caution step applied when a turn shows errors
const ERROR_INCREMENT: f64 = 0.1;

/// Caution decay applied on a clean turn
const CLEAN_DECAY: f64 = 0.02;

/// Number of recent entries considered by the default error rate
pub const DEFAULT_ERROR_WINDOW: usize = 5;

/// Append-only record of interactions with derived error statistics
#[derive(Debug, Default)]
pub struct LearningLog {
    history: Vec<Interaction>,
}

impl LearningLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interaction to the history
    ///
    /// Complexity: O(1) amortized. No validation, side effect only.
    pub fn record(&mut self, interaction: Interaction) {
        self.history.push(interaction);
    }

    /// Full chronological history, oldest first
    pub fn history(&self) -> &[Interaction] {
        &self.history
    }

    /// Number of recorded interactions
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Error rate over the most recent [`DEFAULT_ERROR_WINDOW`] entries
    pub fn recent_error_rate(&self) -> f64 {
        self.error_rate_over(DEFAULT_ERROR_WINDOW)
    }

    /// Error rate over the most recent `window` entries
    ///
    /// Counts entries with at least one detected error among the last
    /// `window` entries (or all entries if fewer exist) and divides by
    /// the number considered. Returns 0.0 on an empty log.
    pub fn error_rate_over(&self, window: usize) -> f64 {
        if self.history.is_empty() || window == 0 {
            return 0.0;
        }

        let considered = self.history.len().min(window);
        let recent = &self.history[self.history.len() - considered..];
        let errored = recent.iter().filter(|i| i.has_errors()).count();

        errored as f64 / considered as f64
    }
}

/// Pure scalar control law for the caution level
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceTuner;

impl PerformanceTuner {
    /// Create a tuner
    pub fn new() -> Self {
        Self
    }

    /// Map one turn's error signal to the next caution level
    ///
    /// Deterministic and memoryless: a turn with errors steps caution
    /// up by 0.1 (capped at 1.0), a clean turn decays it by 0.02
    /// (floored at 0.1).
    pub fn adjust(&self, caution_level: f64, errors_detected: u32) -> f64 {
        if errors_detected > 0 {
            (caution_level + ERROR_INCREMENT).min(CAUTION_MAX)
        } else {
            (caution_level - CLEAN_DECAY).max(CAUTION_MIN)
        }
    }
}
