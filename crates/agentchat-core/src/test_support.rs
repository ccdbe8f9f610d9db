//! Recording fakes for the collaborator traits

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::controls::{ChatInput, SendControl};
use crate::error::{StorageError, SurfaceError, TransportError};
use crate::protocol::{ChatRequest, ChatResponse, LoginRequest, LoginResponse, LogoutResponse};
use crate::session::Navigator;
use crate::storage::SessionStorage;
use crate::surface::{DisplaySurface, RenderedMessage};
use crate::transport::{ChatTransport, SessionTransport};

/// Shared, ordered log of what every fake saw
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

pub struct FailingStorage;

impl SessionStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("storage disabled".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    journal: Journal,
    placeholder: Cell<bool>,
    removals: Cell<usize>,
    scrolls: Cell<usize>,
    fail: Cell<bool>,
    messages: RefCell<Vec<RenderedMessage>>,
}

impl RecordingSurface {
    pub fn with_placeholder() -> Self {
        Self::with_journal(Journal::default())
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            placeholder: Cell::new(true),
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<RenderedMessage> {
        self.messages.borrow().clone()
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder.get()
    }

    pub fn placeholder_removals(&self) -> usize {
        self.removals.get()
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }

    pub fn fail_appends(&self) {
        self.fail.set(true);
    }
}

impl DisplaySurface for RecordingSurface {
    fn remove_placeholder(&self) -> bool {
        self.removals.set(self.removals.get() + 1);
        self.placeholder.replace(false)
    }

    fn append_message(&self, message: &RenderedMessage) -> Result<(), SurfaceError> {
        if self.fail.get() {
            return Err(SurfaceError("detached".to_string()));
        }
        self.journal
            .record(format!("render {}: {}", message.role, message.body.as_str()));
        self.messages.borrow_mut().push(message.clone());
        Ok(())
    }

    fn scroll_to_latest(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeInput {
    journal: Journal,
}

impl FakeInput {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl ChatInput for FakeInput {
    fn clear(&self) {
        self.journal.record("input clear");
    }

    fn focus(&self) {
        self.journal.record("input focus");
    }
}

pub struct FakeButton {
    journal: Journal,
    enabled: Cell<bool>,
    label: RefCell<String>,
}

impl FakeButton {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            enabled: Cell::new(true),
            label: RefCell::new("Send".to_string()),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }
}

impl SendControl for FakeButton {
    fn set_enabled(&self, enabled: bool) {
        self.journal.record(format!("button enabled={}", enabled));
        self.enabled.set(enabled);
    }

    fn set_label(&self, label: &str) {
        self.journal.record(format!("button label={}", label));
        *self.label.borrow_mut() = label.to_string();
    }
}

/// Transport answering from queued replies
#[derive(Default)]
pub struct ScriptedTransport {
    journal: Journal,
    chat_replies: RefCell<VecDeque<Result<ChatResponse, TransportError>>>,
    login_replies: RefCell<VecDeque<Result<LoginResponse, TransportError>>>,
    logout_replies: RefCell<VecDeque<Result<LogoutResponse, TransportError>>>,
    chat_requests: RefCell<Vec<ChatRequest>>,
    login_requests: RefCell<Vec<LoginRequest>>,
    logout_calls: Cell<usize>,
    hang_chat: Cell<bool>,
}

impl ScriptedTransport {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            ..Default::default()
        }
    }

    pub fn push_chat(&self, reply: Result<ChatResponse, TransportError>) {
        self.chat_replies.borrow_mut().push_back(reply);
    }

    pub fn push_login(&self, reply: Result<LoginResponse, TransportError>) {
        self.login_replies.borrow_mut().push_back(reply);
    }

    pub fn push_logout(&self, reply: Result<LogoutResponse, TransportError>) {
        self.logout_replies.borrow_mut().push_back(reply);
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.borrow().clone()
    }

    pub fn login_requests(&self) -> Vec<LoginRequest> {
        self.login_requests.borrow().clone()
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.get()
    }

    /// Chat requests from now on never get an answer
    pub fn hang_chat(&self) {
        self.hang_chat.set(true);
    }
}

/// Suspends once, like a real request would
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

fn unscripted() -> TransportError {
    TransportError::Request("no scripted reply".to_string())
}

#[async_trait(?Send)]
impl ChatTransport for ScriptedTransport {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.journal.record(format!("send {}", request.message));
        self.chat_requests.borrow_mut().push(request.clone());
        if self.hang_chat.get() {
            futures::future::pending::<()>().await;
        }
        YieldNow(false).await;
        self.chat_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }
}

#[async_trait(?Send)]
impl SessionTransport for ScriptedTransport {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, TransportError> {
        self.journal.record(format!("login {}", request.email));
        self.login_requests.borrow_mut().push(request.clone());
        self.login_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn logout(&self) -> Result<LogoutResponse, TransportError> {
        self.journal.record("logout");
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    journal: Journal,
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            visited: RefCell::new(Vec::new()),
        }
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.journal.record(format!("navigate {}", location));
        self.visited.borrow_mut().push(location.to_string());
    }
}
