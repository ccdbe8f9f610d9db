use std::rc::Rc;

use agentchat_core::{HistoryStore, LoginOutcome, SessionController};
use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlElement};

use crate::config::PageConfig;
use crate::dom;
use crate::http::FetchTransport;
use crate::storage::BrowserSessionStorage;
use crate::surface::LocationNavigator;

/// Attach the login form handler. A successful login navigates away; any
/// other outcome is written into the error element.
pub fn mount(config: PageConfig) -> Result<(), JsValue> {
    let window = crate::window()?;
    let document = crate::document()?;
    let ids = &config.login_elements;

    let form = dom::get_element_by_id(&document, &ids.form)?;
    let email = dom::get_input_by_id(&document, &ids.email)?;
    let password = dom::get_input_by_id(&document, &ids.password)?;
    let error = dom::get_html_element_by_id(&document, &ids.error)?;

    let history = HistoryStore::new(
        Rc::new(BrowserSessionStorage::new()?),
        &config.chat.storage_key,
    );
    let session = Rc::new(SessionController::new(
        history,
        Rc::new(FetchTransport::new(&config.chat)),
        Rc::new(LocationNavigator::new(window)),
        &config.chat,
    ));

    dom::add_event_listener(&form, "submit", move |event: Event| {
        event.prevent_default();
        dom::hide_element(&error);

        let session = session.clone();
        let error = error.clone();
        let email = email.value();
        let password = password.value();
        wasm_bindgen_futures::spawn_local(async move {
            match session.login(&email, &password).await {
                LoginOutcome::Accepted => {}
                LoginOutcome::Rejected(message) | LoginOutcome::Failed(message) => {
                    show_error(&error, &message);
                }
            }
        });
    })?;

    Ok(())
}

fn show_error(element: &HtmlElement, message: &str) {
    dom::set_text_content(element, message);
    dom::show_element(element);
}
