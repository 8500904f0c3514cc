//! REPL (Read-Eval-Print Loop) for the interactive front end
//!
//! Reads lines from standard input, hands each one to the assistant
//! controller, and prints the response followed by a one-line state
//! summary. Terminates on `quit`/`exit` (case-insensitive) or EOF.

pub mod display;
pub mod input;

use anyhow::Result;

use crate::assistant::AdaptiveAssistant;
pub use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    display_manager: DisplayManager,
}

impl ReplSession {
    /// Create a new REPL session
    pub fn new() -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::new()?,
            display_manager: DisplayManager::new(),
        })
    }

    /// Show the welcome banner
    pub fn show_welcome(&self, version: &str, backend: Option<&str>) {
        self.display_manager.show_banner(version, backend);
    }

    /// Run the loop until the user quits
    ///
    /// One turn per line: the controller runs to completion before the
    /// next line is read, so no two turns are ever in flight. Readline
    /// failures are shown to the user and end the session.
    pub async fn run(&mut self, assistant: &mut AdaptiveAssistant) -> Result<()> {
        loop {
            let line = match self.input_handler.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    self.display_manager.show_error(&err.to_string());
                    break;
                }
            };

            if line.is_empty() {
                continue;
            }

            if is_exit_command(&line) {
                break;
            }

            let response = assistant.interact(&line).await;
            self.display_manager.show_response(&response);
            self.display_manager.show_summary(&assistant.summary());
        }

        Ok(())
    }
}

/// Whether the input terminates the session
fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}
