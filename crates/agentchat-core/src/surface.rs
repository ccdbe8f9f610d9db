use crate::error::SurfaceError;
use crate::record::Role;

/// Content of a rendered message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Shown literally; the surface must not interpret it
    Text(String),
    /// Display markup produced by the formatter
    Markup(String),
}

impl MessageBody {
    pub fn as_str(&self) -> &str {
        match self {
            MessageBody::Text(s) | MessageBody::Markup(s) => s,
        }
    }
}

/// A message ready to be appended to the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub role: Role,
    pub label: String,
    pub body: MessageBody,
}

impl RenderedMessage {
    /// Class list the browser uses for the message container
    pub fn class_name(&self) -> String {
        format!("message {}", self.role)
    }
}

/// Append-only transcript the renderer draws into
pub trait DisplaySurface {
    /// Remove the welcome placeholder; returns whether one was present
    fn remove_placeholder(&self) -> bool;

    fn append_message(&self, message: &RenderedMessage) -> Result<(), SurfaceError>;

    /// Scroll so the latest message is visible
    fn scroll_to_latest(&self);
}
