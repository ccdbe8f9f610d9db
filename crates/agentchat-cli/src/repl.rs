use agentchat_core::{EventSource, UiEvent};
use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What a line typed at the prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Event(UiEvent),
    Exit,
}

pub fn parse_line(line: &str) -> LineCommand {
    match line.trim() {
        "exit" | "quit" => LineCommand::Exit,
        "/logout" => LineCommand::Event(UiEvent::Logout),
        _ => LineCommand::Event(UiEvent::Submit {
            text: line.to_string(),
        }),
    }
}

/// Reads events from the terminal prompt
pub struct ReplEvents {
    editor: DefaultEditor,
    prompt: String,
}

impl ReplEvents {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            prompt: format!("{} ", ">".bright_green().bold()),
        })
    }
}

#[async_trait(?Send)]
impl EventSource for ReplEvents {
    async fn next_event(&mut self) -> Option<UiEvent> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        log::warn!("Failed to record prompt history: {}", e);
                    }
                }
                match parse_line(&line) {
                    LineCommand::Event(event) => Some(event),
                    LineCommand::Exit => None,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                None
            }
        }
    }
}
