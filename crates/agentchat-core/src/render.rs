use std::cell::Cell;
use std::rc::Rc;

use crate::config::ChatConfig;
use crate::error::SurfaceError;
use crate::format::{escape_html, format_message};
use crate::history::HistoryStore;
use crate::record::{MessageRecord, Role};
use crate::surface::{DisplaySurface, MessageBody, RenderedMessage};

/// Draws chat turns onto a display surface.
///
/// `render` draws and persists a live message; `replay` draws records that
/// are already persisted. Both go through the same draw step.
pub struct MessageRenderer {
    surface: Rc<dyn DisplaySurface>,
    history: HistoryStore,
    user_label: String,
    assistant_label: String,
    escape_assistant_markup: bool,
    placeholder_cleared: Cell<bool>,
}

impl MessageRenderer {
    pub fn new(surface: Rc<dyn DisplaySurface>, history: HistoryStore, config: &ChatConfig) -> Self {
        Self {
            surface,
            history,
            user_label: config.user_label.clone(),
            assistant_label: config.assistant_label.clone(),
            escape_assistant_markup: config.escape_assistant_markup,
            placeholder_cleared: Cell::new(false),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Draw a live message and append it to the history
    pub fn render(&self, content: &str, role: Role) -> Result<(), SurfaceError> {
        self.draw(content, role)?;
        self.history.append(content, role);
        Ok(())
    }

    /// Draw persisted records without writing them again
    pub fn replay(&self, records: &[MessageRecord]) -> Result<(), SurfaceError> {
        for record in records {
            self.draw(&record.content, record.role)?;
        }
        Ok(())
    }

    /// Load the persisted transcript and replay it; returns how many were drawn
    pub fn restore(&self) -> Result<usize, SurfaceError> {
        let records = self.history.load();
        self.replay(&records)?;
        if !records.is_empty() {
            log::info!("Restored {} messages from session history", records.len());
        }
        Ok(records.len())
    }

    /// Build the element for a message without drawing it
    pub fn build(&self, content: &str, role: Role) -> RenderedMessage {
        let (label, body) = match role {
            Role::User => (
                self.user_label.clone(),
                MessageBody::Text(content.to_string()),
            ),
            Role::Assistant => {
                let markup = if self.escape_assistant_markup {
                    format_message(&escape_html(content))
                } else {
                    format_message(content)
                };
                (self.assistant_label.clone(), MessageBody::Markup(markup))
            }
        };
        RenderedMessage { role, label, body }
    }

    fn draw(&self, content: &str, role: Role) -> Result<(), SurfaceError> {
        // The placeholder is never re-added, so one removal is enough.
        if !self.placeholder_cleared.replace(true) {
            self.surface.remove_placeholder();
        }

        let message = self.build(content, role);
        self.surface.append_message(&message)?;
        self.surface.scroll_to_latest();
        Ok(())
    }
}
