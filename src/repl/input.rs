//! Input handler for the REPL using rustyline
//!
//! Provides readline functionality with in-session history and
//! graceful EOF/interrupt handling.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Input handler managing the readline interface
pub struct InputHandler {
    editor: DefaultEditor,
    prompt: String,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            prompt: "> ".to_string(),
        })
    }

    /// Read a line of input from the user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input (trimmed, may be empty)
    /// - Ok(None) for EOF (Ctrl-D) or interrupt (Ctrl-C)
    /// - Err for other readline failures
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
