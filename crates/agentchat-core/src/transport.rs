//! Server capabilities the controllers depend on.
//!
//! Every method is one request. Futures are not `Send`: the widget runs on
//! a single thread and suspends only while a request is in flight.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::protocol::{ChatRequest, ChatResponse, LoginRequest, LoginResponse, LogoutResponse};

#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError>;
}

#[async_trait(?Send)]
pub trait SessionTransport {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, TransportError>;

    async fn logout(&self) -> Result<LogoutResponse, TransportError>;
}
