//! Browser front end for agentchat
//!
//! Binds the core chat session to the page: `sessionStorage` for the
//! transcript, the DOM for the message list and controls, and `fetch` for
//! the server. Pages call `init_chat` or `init_login` once the module is
//! loaded.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod chat_page;
pub mod config;
mod dom;
pub mod http;
mod login_page;
pub mod storage;
pub mod surface;

pub use config::{ChatElements, LoginElements, PageConfig};
pub use http::FetchTransport;
pub use storage::BrowserSessionStorage;
pub use surface::{DomInput, DomSendButton, DomSurface, LocationNavigator};

/// Initialize the WASM module
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    log::info!("agentchat WASM initialized");
}

/// Wire up the chat page. `config` may be omitted to use the stock page layout.
#[wasm_bindgen]
pub async fn init_chat(config: JsValue) -> Result<(), JsValue> {
    let config = page_config(config)?;
    log::info!("Initializing chat page");
    chat_page::mount(config)
}

/// Wire up the login form
#[wasm_bindgen]
pub async fn init_login(config: JsValue) -> Result<(), JsValue> {
    let config = page_config(config)?;
    log::info!("Initializing login page");
    login_page::mount(config)
}

fn page_config(value: JsValue) -> Result<PageConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(PageConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid page config: {}", e)))
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
