use agentchat_core::ChatConfig;
use serde::Deserialize;

/// Ids and selectors of the chat page elements
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatElements {
    pub messages: String,
    pub form: String,
    pub input: String,
    pub logout_button: String,
    /// Selector of the send button, looked up inside the form
    pub send_button: String,
    /// Selector of the welcome placeholder, looked up inside the messages
    pub placeholder: String,
}

impl Default for ChatElements {
    fn default() -> Self {
        Self {
            messages: "chatMessages".to_string(),
            form: "chatForm".to_string(),
            input: "chatInput".to_string(),
            logout_button: "logoutBtn".to_string(),
            send_button: ".btn-send".to_string(),
            placeholder: ".welcome-message".to_string(),
        }
    }
}

/// Ids of the login page elements
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginElements {
    pub form: String,
    pub email: String,
    pub password: String,
    pub error: String,
}

impl Default for LoginElements {
    fn default() -> Self {
        Self {
            form: "loginForm".to_string(),
            email: "email".to_string(),
            password: "password".to_string(),
            error: "loginError".to_string(),
        }
    }
}

/// Everything a page entry point accepts from JavaScript. Keys are snake_case
/// throughout, the same names the TOML config uses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    #[serde(flatten)]
    pub chat: ChatConfig,
    pub elements: ChatElements,
    pub login_elements: LoginElements,
}
