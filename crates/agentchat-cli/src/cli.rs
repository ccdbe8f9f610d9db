use agentchat_core::ChatConfig;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Server used when neither the config file nor the flags name one
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// CLI arguments for agentchat
#[derive(Parser, Debug)]
#[command(name = "agentchat")]
#[command(about = "Terminal client for the agent chat server")]
#[command(version)]
pub struct Cli {
    /// Base URL of the chat server (e.g., http://localhost:5000)
    #[arg(long, value_name = "URL", env = "AGENTCHAT_SERVER")]
    pub server: Option<String>,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH", env = "AGENTCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log in with this email before chatting
    #[arg(long, value_name = "EMAIL", env = "AGENTCHAT_EMAIL")]
    pub email: Option<String>,

    /// Password for --email
    #[arg(long, value_name = "PASSWORD", env = "AGENTCHAT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Escape assistant replies instead of trusting them as markup
    #[arg(long)]
    pub escape_markup: bool,

    /// Enable verbose debug output (shows requests and replays)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Config file first, then flags on top
    pub fn load_config(&self) -> Result<ChatConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => ChatConfig::default(),
        };

        if let Some(server) = &self.server {
            config.base_url = server.clone();
        }
        if config.base_url.is_empty() {
            config.base_url = DEFAULT_SERVER.to_string();
        }
        if self.escape_markup {
            config.escape_assistant_markup = true;
        }

        Ok(config)
    }

    /// Credentials to log in with, if any were given
    pub fn credentials(&self) -> Result<Option<(String, String)>> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Ok(Some((email.clone(), password.clone()))),
            (Some(_), None) => {
                anyhow::bail!("--password or AGENTCHAT_PASSWORD is required with --email")
            }
            _ => Ok(None),
        }
    }
}

pub fn load_config_file(path: &Path) -> Result<ChatConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
