//! Display manager for the REPL terminal UI
//!
//! Color-coded output for the banner, responses, and the per-turn
//! state summary.

use colored::*;

/// Display manager for REPL output
#[derive(Debug, Default)]
pub struct DisplayManager;

impl DisplayManager {
    /// Create a new display manager
    pub fn new() -> Self {
        DisplayManager
    }

    /// Show the welcome banner
    pub fn show_banner(&self, version: &str, backend: Option<&str>) {
        let width = 64;
        let backend_info = match backend {
            Some(model) => format!("  Backend: {}", model),
            None => "  Backend: none (set OPENAI_API_KEY to enable)".to_string(),
        };

        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", format!("  Adaptive Assistant {}", version).bold().cyan());
        println!("{}", backend_info.dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Type your request ({} or {} to leave)\n",
            "quit".green(),
            "exit".green()
        );
    }

    /// Print the assistant's response for a turn
    pub fn show_response(&self, response: &str) {
        println!("{}", response);
    }

    /// Print the one-line state summary after a turn
    pub fn show_summary(&self, summary: &str) {
        println!("{}", summary.dimmed());
    }

    /// Print an error message
    pub fn show_error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}
