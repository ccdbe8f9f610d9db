use std::rc::Rc;

use crate::config::ChatConfig;
use crate::error::TransportError;
use crate::history::HistoryStore;
use crate::protocol::{LoginRequest, LoginResponse};
use crate::transport::SessionTransport;

/// Moves the page somewhere else
pub trait Navigator {
    fn navigate(&self, location: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Server confirmed; history cleared
    LoggedOut,
    /// Server did not confirm; history kept
    Failed(Option<TransportError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    /// Server (or the local check) refused the credentials
    Rejected(String),
    /// No usable reply
    Failed(String),
}

const MISSING_CREDENTIALS: &str = "Email and password are required";
const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Logs the user in and out of the chat server
pub struct SessionController {
    history: HistoryStore,
    transport: Rc<dyn SessionTransport>,
    navigator: Rc<dyn Navigator>,
    login_location: String,
    home_location: String,
}

impl SessionController {
    pub fn new(
        history: HistoryStore,
        transport: Rc<dyn SessionTransport>,
        navigator: Rc<dyn Navigator>,
        config: &ChatConfig,
    ) -> Self {
        Self {
            history,
            transport,
            navigator,
            login_location: config.login_location.clone(),
            home_location: config.home_location.clone(),
        }
    }

    /// End the server session and leave for the login page.
    ///
    /// Navigation happens whatever the server says; the history is only
    /// cleared once the server confirms.
    pub async fn logout(&self) -> LogoutOutcome {
        let outcome = match self.transport.logout().await {
            Ok(response) if response.success => {
                self.history.clear();
                log::info!("Logged out, session history cleared");
                LogoutOutcome::LoggedOut
            }
            Ok(_) => {
                log::error!("Logout error: server did not confirm logout");
                LogoutOutcome::Failed(None)
            }
            Err(e) => {
                log::error!("Logout error: {}", e);
                LogoutOutcome::Failed(Some(e))
            }
        };

        self.navigator.navigate(&self.login_location);
        outcome
    }

    /// Authenticate and go to the home page on success
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return LoginOutcome::Rejected(MISSING_CREDENTIALS.to_string());
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.transport.login(&request).await {
            Ok(LoginResponse { success: true, .. }) => {
                log::info!("Logged in as {}", email);
                self.navigator.navigate(&self.home_location);
                LoginOutcome::Accepted
            }
            Ok(LoginResponse { message, .. }) => {
                log::warn!("Login rejected for {}: {:?}", email, message);
                LoginOutcome::Rejected(message.unwrap_or_else(|| LOGIN_FAILED.to_string()))
            }
            Err(e) => {
                log::error!("Login error: {}", e);
                LoginOutcome::Failed(LOGIN_FAILED.to_string())
            }
        }
    }
}
