use agentchat_core::ChatConfig;
use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock chat server mirroring the Flask endpoints
pub struct ChatMockServer {
    server: MockServer,
}

impl ChatMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn config(&self) -> ChatConfig {
        ChatConfig {
            base_url: self.uri(),
            ..Default::default()
        }
    }

    /// Successful chat reply for one message
    pub async fn mock_chat_reply(&self, request: &str, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "message": request })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": reply
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Chat reply that only succeeds with the session cookie
    pub async fn mock_chat_requires_cookie(&self, cookie: &str, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("cookie", cookie))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": reply
            })))
            .mount(&self.server)
            .await;
    }

    /// Any other chat request is unauthenticated, as the server reports it
    pub async fn mock_chat_unauthenticated(&self) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Not authenticated"
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_chat_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_login_success(&self, email: &str, cookie: &str) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({ "email": email, "password": "secret" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", format!("{}; Path=/", cookie).as_str())
                    .set_body_json(json!({ "success": true, "message": "Login successful" })),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_logout(&self, success: bool) {
        Mock::given(method("POST"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": success })))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
