//! Terminal front end for agentchat
//!
//! Drives the same chat session as the browser widget: reqwest stands in for
//! `fetch`, stdout for the message list and an in-memory store for
//! `sessionStorage`, so the history lasts as long as the process.

pub mod cli;
pub mod http;
pub mod repl;
pub mod terminal;

use agentchat_core::{ChatApp, ChatConfig, Collaborators, MemoryStorage};
use std::rc::Rc;

pub use cli::Cli;
pub use http::HttpTransport;
pub use repl::ReplEvents;
pub use terminal::{TerminalInput, TerminalNavigator, TerminalStatus, TerminalSurface};

/// A chat session wired to the terminal
pub struct TerminalChat {
    pub app: ChatApp,
    pub surface: Rc<TerminalSurface>,
    pub navigator: Rc<TerminalNavigator>,
}

impl TerminalChat {
    pub fn new(config: &ChatConfig, transport: Rc<HttpTransport>) -> Self {
        let surface = Rc::new(TerminalSurface::new());
        let navigator = Rc::new(TerminalNavigator::default());

        let app = ChatApp::new(
            config,
            Collaborators {
                storage: Rc::new(MemoryStorage::new()),
                surface: surface.clone(),
                input: Rc::new(TerminalInput),
                button: Rc::new(TerminalStatus::default()),
                chat_transport: transport.clone(),
                session_transport: transport,
                navigator: navigator.clone(),
            },
        );

        Self {
            app,
            surface,
            navigator,
        }
    }
}
