//! Core chat session for agentchat
//!
//! This crate holds everything the chat widget does that is independent of
//! where it runs: the message records, the session-scoped history, the text
//! formatter, the renderer and the two controllers. The browser and terminal
//! front ends plug in by implementing the collaborator traits.

pub mod config;
pub mod controller;
pub mod controls;
pub mod error;
pub mod events;
pub mod format;
pub mod history;
pub mod protocol;
pub mod record;
pub mod render;
pub mod session;
pub mod storage;
pub mod surface;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ChatConfig;
pub use controller::{ChatController, SendState, SubmitOutcome};
pub use controls::{ChatInput, SendControl};
pub use error::{ChatError, HistoryError, StorageError, SurfaceError, TransportError};
pub use events::{ChatApp, Collaborators, EventOutcome, EventSource, UiEvent};
pub use format::{escape_html, format_message};
pub use history::HistoryStore;
pub use protocol::{ChatRequest, ChatResponse, LoginRequest, LoginResponse, LogoutResponse};
pub use record::{MessageRecord, Role};
pub use render::MessageRenderer;
pub use session::{LoginOutcome, LogoutOutcome, Navigator, SessionController};
pub use storage::{MemoryStorage, SessionStorage};
pub use surface::{DisplaySurface, MessageBody, RenderedMessage};
pub use transport::{ChatTransport, SessionTransport};

/// Storage key the deployed page keeps its transcript under
pub const DEFAULT_STORAGE_KEY: &str = "agent_chat_history";
