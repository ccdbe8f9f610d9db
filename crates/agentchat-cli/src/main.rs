use agentchat_cli::{Cli, HttpTransport, ReplEvents, TerminalChat};
use agentchat_core::LoginOutcome;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::rc::Rc;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.load_config()?;
    let transport = Rc::new(HttpTransport::new(&config)?);
    let chat = TerminalChat::new(&config, transport);

    if let Some((email, password)) = cli.credentials()? {
        match chat.app.session().login(&email, &password).await {
            LoginOutcome::Accepted => {
                println!("{}", format!("Logged in as {}", email).bright_black());
            }
            LoginOutcome::Rejected(message) | LoginOutcome::Failed(message) => {
                anyhow::bail!("Login failed: {}", message);
            }
        }
    }

    chat.surface.show_welcome(&config.base_url);
    chat.app.start().context("Failed to restore chat history")?;

    let mut events = ReplEvents::new()?;
    chat.app.run_sequential(&mut events).await;

    if chat.navigator.location().as_deref() == Some(config.login_location.as_str()) {
        println!("{}", "Logged out.".bright_black());
    }

    Ok(())
}
