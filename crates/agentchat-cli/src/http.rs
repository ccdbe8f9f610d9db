use agentchat_core::protocol::decode_response;
use agentchat_core::{
    ChatConfig, ChatRequest, ChatResponse, ChatTransport, LoginRequest, LoginResponse,
    LogoutResponse, SessionTransport, TransportError,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// reqwest-backed transport.
///
/// Keeps a cookie jar so the session cookie set by `/login` is sent with every
/// later request, the way the browser does.
pub struct HttpTransport {
    client: reqwest::Client,
    chat_url: String,
    login_url: String,
    logout_url: String,
}

impl HttpTransport {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            chat_url: config.chat_url(),
            login_url: config.login_url(),
            logout_url: config.logout_url(),
        })
    }

    async fn post_json<B, R>(&self, url: &str, body: Option<&B>) -> Result<R, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        log::debug!("POST {}", url);

        let mut request = self
            .client
            .post(url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        decode_response(status.as_u16(), &text)
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.post_json(&self.chat_url, Some(request)).await
    }
}

#[async_trait(?Send)]
impl SessionTransport for HttpTransport {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, TransportError> {
        self.post_json(&self.login_url, Some(request)).await
    }

    async fn logout(&self) -> Result<LogoutResponse, TransportError> {
        self.post_json::<(), _>(&self.logout_url, None).await
    }
}
