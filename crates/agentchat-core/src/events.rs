//! Event wiring for the chat page.
//!
//! Front ends turn their native events (form submit, button click, a line
//! read from the terminal) into [`UiEvent`]s and feed them through an
//! [`EventSource`]. [`ChatApp::run`] starts handling each event as soon as it
//! arrives; the only suspension points are the requests made by the
//! controllers.

use async_trait::async_trait;
use futures::channel::mpsc::UnboundedReceiver;
use futures::future::{self, Either, LocalBoxFuture};
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use std::rc::Rc;

use crate::config::ChatConfig;
use crate::controller::{ChatController, SubmitOutcome};
use crate::controls::{ChatInput, SendControl};
use crate::error::ChatError;
use crate::history::HistoryStore;
use crate::render::MessageRenderer;
use crate::session::{LogoutOutcome, Navigator, SessionController};
use crate::storage::SessionStorage;
use crate::surface::DisplaySurface;
use crate::transport::{ChatTransport, SessionTransport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The chat form was submitted with this input text
    Submit { text: String },
    /// The logout button was clicked
    Logout,
}

#[async_trait(?Send)]
pub trait EventSource {
    /// Wait for the next event; `None` once the source is closed
    async fn next_event(&mut self) -> Option<UiEvent>;
}

#[async_trait(?Send)]
impl EventSource for UnboundedReceiver<UiEvent> {
    async fn next_event(&mut self) -> Option<UiEvent> {
        self.next().await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Submitted(SubmitOutcome),
    LoggedOut(LogoutOutcome),
}

/// Platform pieces a chat page is assembled from
pub struct Collaborators {
    pub storage: Rc<dyn SessionStorage>,
    pub surface: Rc<dyn DisplaySurface>,
    pub input: Rc<dyn ChatInput>,
    pub button: Rc<dyn SendControl>,
    pub chat_transport: Rc<dyn ChatTransport>,
    pub session_transport: Rc<dyn SessionTransport>,
    pub navigator: Rc<dyn Navigator>,
}

/// One chat page: the history, the renderer and both controllers, sharing
/// a single storage key.
pub struct ChatApp {
    renderer: Rc<MessageRenderer>,
    chat: ChatController,
    session: SessionController,
}

impl ChatApp {
    pub fn new(config: &ChatConfig, parts: Collaborators) -> Self {
        let history = HistoryStore::new(parts.storage, &config.storage_key);
        let renderer = Rc::new(MessageRenderer::new(parts.surface, history.clone(), config));
        let chat = ChatController::new(
            renderer.clone(),
            parts.chat_transport,
            parts.input,
            parts.button,
            config,
        );
        let session =
            SessionController::new(history, parts.session_transport, parts.navigator, config);

        Self {
            renderer,
            chat,
            session,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        self.renderer.history()
    }

    pub fn renderer(&self) -> &MessageRenderer {
        &self.renderer
    }

    pub fn chat(&self) -> &ChatController {
        &self.chat
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Replay the stored transcript and focus the input
    pub fn start(&self) -> Result<usize, ChatError> {
        let restored = self.renderer.restore()?;
        self.chat.input().focus();
        Ok(restored)
    }

    pub async fn handle(&self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::Submit { text } => EventOutcome::Submitted(self.chat.submit(&text).await),
            UiEvent::Logout => EventOutcome::LoggedOut(self.session.logout().await),
        }
    }

    /// Handle events as they arrive until the source closes or the user logs
    /// out. Returns how many events were handled.
    ///
    /// Reading the source continues while earlier events are still pending,
    /// so a logout goes out even if a chat request never completes, and a
    /// second submit reaches the controller (and is turned away) while one is
    /// in flight. Handlers still pending after a logout are dropped.
    pub async fn run<E>(&self, events: &mut E) -> usize
    where
        E: EventSource + ?Sized,
    {
        let mut in_flight: FuturesUnordered<LocalBoxFuture<'_, EventOutcome>> =
            FuturesUnordered::new();
        let mut open = true;
        let mut handled = 0;

        loop {
            let step = if !open {
                match in_flight.next().await {
                    Some(outcome) => Step::Finished(outcome),
                    None => break,
                }
            } else if in_flight.is_empty() {
                Step::Received(events.next_event().await)
            } else {
                // Pending handlers are polled first so each one runs up to its
                // request before the next event is read.
                match future::select(in_flight.next(), events.next_event()).await {
                    Either::Left((Some(outcome), _)) => Step::Finished(outcome),
                    Either::Left((None, _)) => continue,
                    Either::Right((event, _)) => Step::Received(event),
                }
            };

            match step {
                Step::Received(Some(event)) => {
                    log::debug!("Handling {:?}", event);
                    in_flight.push(self.handle(event).boxed_local());
                }
                Step::Received(None) => open = false,
                Step::Finished(outcome) => {
                    handled += 1;
                    if let EventOutcome::LoggedOut(_) = outcome {
                        break;
                    }
                }
            }
        }
        handled
    }

    /// Like [`ChatApp::run`], but each event is handled to completion before
    /// the next one is read. For sources that block the thread while waiting
    /// for input, such as a terminal prompt.
    pub async fn run_sequential<E>(&self, events: &mut E) -> usize
    where
        E: EventSource + ?Sized,
    {
        let mut handled = 0;
        while let Some(event) = events.next_event().await {
            log::debug!("Handling {:?}", event);
            let outcome = self.handle(event).await;
            handled += 1;
            if let EventOutcome::LoggedOut(_) = outcome {
                break;
            }
        }
        handled
    }
}

enum Step {
    Received(Option<UiEvent>),
    Finished(EventOutcome),
}
