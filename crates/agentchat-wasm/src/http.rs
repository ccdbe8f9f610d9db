use agentchat_core::protocol::decode_response;
use agentchat_core::{
    ChatConfig, ChatRequest, ChatResponse, ChatTransport, LoginRequest, LoginResponse,
    LogoutResponse, SessionTransport, TransportError,
};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `fetch`-backed transport. The session cookie rides along because every
/// endpoint is same-origin by default.
pub struct FetchTransport {
    chat_url: String,
    login_url: String,
    logout_url: String,
}

impl FetchTransport {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            chat_url: config.chat_url(),
            login_url: config.login_url(),
            logout_url: config.logout_url(),
        }
    }

    async fn post_json<B, R>(&self, url: &str, body: Option<&B>) -> Result<R, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        log::debug!("POST {}", url);

        let builder = Request::post(url).header("Content-Type", "application/json");
        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        decode_response(status, &text)
    }
}

#[async_trait(?Send)]
impl ChatTransport for FetchTransport {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.post_json(&self.chat_url, Some(request)).await
    }
}

#[async_trait(?Send)]
impl SessionTransport for FetchTransport {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, TransportError> {
        self.post_json(&self.login_url, Some(request)).await
    }

    async fn logout(&self) -> Result<LogoutResponse, TransportError> {
        self.post_json::<(), _>(&self.logout_url, None).await
    }
}
