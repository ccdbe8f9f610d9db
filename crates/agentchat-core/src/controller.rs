use std::cell::Cell;
use std::rc::Rc;

use crate::config::ChatConfig;
use crate::controls::{ChatInput, SendControl};
use crate::error::TransportError;
use crate::protocol::{ChatRequest, ChatResponse};
use crate::record::Role;
use crate::render::MessageRenderer;
use crate::transport::ChatTransport;

/// Whether a chat request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
}

/// What a submission ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing rendered or sent
    Ignored,
    /// A request was already in flight
    Busy,
    /// The server answered and its reply was rendered
    Replied,
    /// The server answered `success: false`
    Rejected,
    /// No usable reply; the generic error was rendered
    Failed(TransportError),
}

/// Drives one submit control through Idle -> Sending -> Idle
pub struct ChatController {
    renderer: Rc<MessageRenderer>,
    transport: Rc<dyn ChatTransport>,
    input: Rc<dyn ChatInput>,
    button: Rc<dyn SendControl>,
    state: Cell<SendState>,
    send_label: String,
    sending_label: String,
    request_error_message: String,
    network_error_message: String,
}

impl ChatController {
    pub fn new(
        renderer: Rc<MessageRenderer>,
        transport: Rc<dyn ChatTransport>,
        input: Rc<dyn ChatInput>,
        button: Rc<dyn SendControl>,
        config: &ChatConfig,
    ) -> Self {
        Self {
            renderer,
            transport,
            input,
            button,
            state: Cell::new(SendState::Idle),
            send_label: config.send_label.clone(),
            sending_label: config.sending_label.clone(),
            request_error_message: config.request_error_message.clone(),
            network_error_message: config.network_error_message.clone(),
        }
    }

    pub fn state(&self) -> SendState {
        self.state.get()
    }

    pub fn input(&self) -> &Rc<dyn ChatInput> {
        &self.input
    }

    /// Submit the text of the input field.
    ///
    /// The user message is rendered before the request goes out and the reply
    /// after it returns. The control is back to Idle when this resolves,
    /// whatever the outcome.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let message = text.trim();
        if message.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.state.get() == SendState::Sending {
            log::debug!("Submission ignored, a request is already in flight");
            return SubmitOutcome::Busy;
        }

        self.show(message, Role::User);
        self.input.clear();

        let _sending = self.begin_sending();

        let request = ChatRequest {
            message: message.to_string(),
        };
        log::debug!("Sending chat message ({} chars)", message.len());

        match self.transport.send_message(&request).await {
            Ok(ChatResponse {
                success: true,
                message: Some(reply),
            }) => {
                self.show(&reply, Role::Assistant);
                SubmitOutcome::Replied
            }
            Ok(ChatResponse {
                success: true,
                message: None,
            }) => {
                let error = TransportError::Decode("reply has no message".to_string());
                log::error!("Chat request failed: {}", error);
                self.show(&self.network_error_message, Role::Assistant);
                SubmitOutcome::Failed(error)
            }
            Ok(ChatResponse {
                success: false,
                message,
            }) => {
                log::warn!("Chat request rejected: {:?}", message);
                let text = message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| self.request_error_message.clone());
                self.show(&text, Role::Assistant);
                SubmitOutcome::Rejected
            }
            Err(error) => {
                log::error!("Chat request failed: {}", error);
                self.show(&self.network_error_message, Role::Assistant);
                SubmitOutcome::Failed(error)
            }
        }
    }

    fn show(&self, content: &str, role: Role) {
        if let Err(e) = self.renderer.render(content, role) {
            log::error!("Failed to render {} message: {}", role, e);
        }
    }

    fn begin_sending(&self) -> SendingGuard<'_> {
        self.state.set(SendState::Sending);
        self.button.set_enabled(false);
        self.button.set_label(&self.sending_label);
        SendingGuard { controller: self }
    }
}

/// Returns the control to Idle on every exit path, including cancellation
struct SendingGuard<'a> {
    controller: &'a ChatController,
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        let controller = self.controller;
        controller.button.set_enabled(true);
        controller.button.set_label(&controller.send_label);
        controller.input.focus();
        controller.state.set(SendState::Idle);
    }
}
