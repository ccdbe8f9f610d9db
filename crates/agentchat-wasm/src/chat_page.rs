use std::rc::Rc;

use agentchat_core::{ChatApp, Collaborators, UiEvent};
use futures::channel::mpsc::{self, UnboundedSender};
use wasm_bindgen::JsValue;
use web_sys::Event;

use crate::config::PageConfig;
use crate::dom;
use crate::http::FetchTransport;
use crate::storage::BrowserSessionStorage;
use crate::surface::{DomInput, DomSendButton, DomSurface, LocationNavigator};

/// Assemble the chat page and attach its listeners.
///
/// Listeners only forward events into a channel; a single task drains it
/// through `ChatApp::run`, which starts on each event as it arrives, so a
/// logout click is not held up by a pending chat request.
pub fn mount(config: PageConfig) -> Result<(), JsValue> {
    let window = crate::window()?;
    let document = crate::document()?;
    let ids = &config.elements;

    let messages = dom::get_element_by_id(&document, &ids.messages)?;
    let form = dom::get_element_by_id(&document, &ids.form)?;
    let input = dom::get_input_by_id(&document, &ids.input)?;
    let logout_button = dom::get_element_by_id(&document, &ids.logout_button)?;

    let transport = Rc::new(FetchTransport::new(&config.chat));
    let parts = Collaborators {
        storage: Rc::new(BrowserSessionStorage::new()?),
        surface: Rc::new(DomSurface::new(
            document.clone(),
            messages,
            &ids.placeholder,
        )),
        input: Rc::new(DomInput::new(input.clone())),
        button: Rc::new(DomSendButton::find(&form, &ids.send_button)?),
        chat_transport: transport.clone(),
        session_transport: transport,
        navigator: Rc::new(LocationNavigator::new(window)),
    };
    let app = ChatApp::new(&config.chat, parts);

    let (sender, mut events) = mpsc::unbounded();

    let submit_sender = sender.clone();
    dom::add_event_listener(&form, "submit", move |event: Event| {
        event.prevent_default();
        forward(
            &submit_sender,
            UiEvent::Submit {
                text: input.value(),
            },
        );
    })?;

    dom::add_event_listener(&logout_button, "click", move |event: Event| {
        event.prevent_default();
        forward(&sender, UiEvent::Logout);
    })?;

    wasm_bindgen_futures::spawn_local(async move {
        match app.start() {
            Ok(restored) => log::info!("Restored {} messages", restored),
            Err(e) => log::error!("Failed to restore chat history: {}", e),
        }

        let handled = app.run(&mut events).await;
        log::info!("Chat page stopped after {} events", handled);
    });

    Ok(())
}

fn forward(sender: &UnboundedSender<UiEvent>, event: UiEvent) {
    if let Err(e) = sender.unbounded_send(event) {
        log::warn!("Dropped UI event: {}", e);
    }
}
