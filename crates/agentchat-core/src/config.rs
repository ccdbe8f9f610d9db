use serde::{Deserialize, Serialize};

use crate::DEFAULT_STORAGE_KEY;

/// Everything about the widget that differs between deployments.
///
/// Every field has a default, so a partial document (or none at all) yields
/// the behaviour of the stock page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Prefix for endpoint paths; empty means same origin
    pub base_url: String,
    pub chat_endpoint: String,
    pub logout_endpoint: String,
    pub login_endpoint: String,
    /// Where to go after logging out
    pub login_location: String,
    /// Where to go after logging in
    pub home_location: String,
    pub storage_key: String,
    pub send_label: String,
    pub sending_label: String,
    pub user_label: String,
    pub assistant_label: String,
    /// Shown when the server answers `success: false` without a message
    pub request_error_message: String,
    /// Shown when the request fails or the reply cannot be decoded
    pub network_error_message: String,
    /// Escape assistant text before formatting instead of trusting it as markup
    pub escape_assistant_markup: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            chat_endpoint: "/api/chat".to_string(),
            logout_endpoint: "/logout".to_string(),
            login_endpoint: "/login".to_string(),
            login_location: "/login".to_string(),
            home_location: "/dashboard".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            send_label: "Send".to_string(),
            sending_label: "Thinking...".to_string(),
            user_label: "You".to_string(),
            assistant_label: "Assistant".to_string(),
            request_error_message: "Sorry, I encountered an error processing your request."
                .to_string(),
            network_error_message: "Sorry, I encountered an error. Please try again.".to_string(),
            escape_assistant_markup: false,
        }
    }
}

impl ChatConfig {
    /// Join `base_url` and an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn chat_url(&self) -> String {
        self.endpoint_url(&self.chat_endpoint)
    }

    pub fn logout_url(&self) -> String {
        self.endpoint_url(&self.logout_endpoint)
    }

    pub fn login_url(&self) -> String {
        self.endpoint_url(&self.login_endpoint)
    }
}
