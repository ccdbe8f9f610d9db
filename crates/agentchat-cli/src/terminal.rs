use agentchat_core::{
    ChatInput, DisplaySurface, MessageBody, Navigator, RenderedMessage, Role, SendControl,
    SurfaceError,
};
use colored::Colorize;
use std::cell::{Cell, RefCell};
use std::io::{self, Write};

/// A run of text with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

/// Split formatter markup into styled spans.
///
/// Understands what the formatter emits (`<strong>`, `<br>`) plus the
/// entities `escape_html` produces; any other tag is kept as text.
pub fn parse_markup(markup: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut bold = false;
    let mut rest = markup;

    while let Some(start) = rest.find('<') {
        push_text(&rest[..start], bold, &mut spans);
        let tail = &rest[start..];
        let (consumed, toggle) = if tail.starts_with("<strong>") {
            ("<strong>".len(), Some(true))
        } else if tail.starts_with("</strong>") {
            ("</strong>".len(), Some(false))
        } else if tail.starts_with("<br>") {
            push_text("\n", bold, &mut spans);
            ("<br>".len(), None)
        } else {
            push_text("<", bold, &mut spans);
            (1, None)
        };
        if let Some(on) = toggle {
            bold = on;
        }
        rest = &tail[consumed..];
    }
    push_text(rest, bold, &mut spans);
    spans
}

fn push_text(text: &str, bold: bool, spans: &mut Vec<Span>) {
    if text.is_empty() {
        return;
    }
    let text = unescape_entities(text);
    match spans.last_mut() {
        Some(last) if last.bold == bold => last.text.push_str(&text),
        _ => spans.push(Span { text, bold }),
    }
}

fn unescape_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Render a message as terminal text with ANSI styling
pub fn format_for_terminal(message: &RenderedMessage) -> String {
    let label = match message.role {
        Role::User => message.label.bright_green().bold(),
        Role::Assistant => message.label.bright_cyan().bold(),
    };

    let body = match &message.body {
        MessageBody::Text(text) => text.clone(),
        MessageBody::Markup(markup) => parse_markup(markup)
            .into_iter()
            .map(|span| {
                if span.bold {
                    span.text.bold().to_string()
                } else {
                    span.text
                }
            })
            .collect(),
    };

    format!("{}: {}", label, body)
}

/// Prints the transcript to stdout
pub struct TerminalSurface {
    welcome: Cell<bool>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            welcome: Cell::new(false),
        }
    }

    /// Print the welcome banner shown until the first message
    pub fn show_welcome(&self, server: &str) {
        println!("{}", "Agent Chat".bright_cyan().bold());
        println!("{}", format!("Connected to {}", server).bright_black());
        println!(
            "{}",
            "Ask a question, '/logout' to end the session, 'exit' to quit.".bright_black()
        );
        self.welcome.set(true);
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for TerminalSurface {
    fn remove_placeholder(&self) -> bool {
        let shown = self.welcome.replace(false);
        if shown {
            println!();
        }
        shown
    }

    fn append_message(&self, message: &RenderedMessage) -> Result<(), SurfaceError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", format_for_terminal(message))
            .map_err(|e| SurfaceError(e.to_string()))
    }

    fn scroll_to_latest(&self) {
        let _ = io::stdout().flush();
    }
}

/// The readline prompt; the line is consumed on submit, so there is nothing
/// to clear
#[derive(Default)]
pub struct TerminalInput;

impl ChatInput for TerminalInput {
    fn clear(&self) {}

    fn focus(&self) {
        let _ = io::stdout().flush();
    }
}

/// Shows the in-progress label while a request is in flight
#[derive(Default)]
pub struct TerminalStatus {
    enabled: Cell<bool>,
}

impl SendControl for TerminalStatus {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    fn set_label(&self, label: &str) {
        if !self.enabled.get() {
            println!("{}", label.bright_black().italic());
        }
    }
}

/// Remembers where the page would have gone
#[derive(Default)]
pub struct TerminalNavigator {
    location: RefCell<Option<String>>,
}

impl TerminalNavigator {
    pub fn location(&self) -> Option<String> {
        self.location.borrow().clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, location: &str) {
        log::info!("Navigating to {}", location);
        *self.location.borrow_mut() = Some(location.to_string());
    }
}
