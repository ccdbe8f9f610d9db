use agentchat_core::{
    ChatInput, DisplaySurface, MessageBody, Navigator, RenderedMessage, SendControl, SurfaceError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, Window};

use crate::dom;

fn surface_error(e: JsValue) -> SurfaceError {
    SurfaceError(format!("{:?}", e))
}

/// The message list element.
///
/// Each message becomes
/// `<div class="message {role}"><div class="message-label"/><div class="message-content"/></div>`.
pub struct DomSurface {
    document: Document,
    container: Element,
    placeholder_selector: String,
}

impl DomSurface {
    pub fn new(document: Document, container: Element, placeholder_selector: &str) -> Self {
        Self {
            document,
            container,
            placeholder_selector: placeholder_selector.to_string(),
        }
    }

    fn build(&self, message: &RenderedMessage) -> Result<Element, JsValue> {
        let wrapper = dom::create_element_with_class(&self.document, "div", &message.class_name())?;

        let label = dom::create_element_with_class(&self.document, "div", "message-label")?;
        dom::set_text_content(&label, &message.label);

        let content = dom::create_element_with_class(&self.document, "div", "message-content")?;
        match &message.body {
            MessageBody::Text(text) => dom::set_text_content(&content, text),
            MessageBody::Markup(html) => dom::set_inner_html(&content, html),
        }

        wrapper.append_child(&label)?;
        wrapper.append_child(&content)?;
        Ok(wrapper)
    }
}

impl DisplaySurface for DomSurface {
    fn remove_placeholder(&self) -> bool {
        match self.container.query_selector(&self.placeholder_selector) {
            Ok(Some(placeholder)) => {
                placeholder.remove();
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("Bad placeholder selector {}: {:?}", self.placeholder_selector, e);
                false
            }
        }
    }

    fn append_message(&self, message: &RenderedMessage) -> Result<(), SurfaceError> {
        let element = self.build(message).map_err(surface_error)?;
        self.container
            .append_child(&element)
            .map_err(surface_error)?;
        Ok(())
    }

    fn scroll_to_latest(&self) {
        dom::scroll_to_bottom(&self.container);
    }
}

pub struct DomInput {
    input: HtmlInputElement,
}

impl DomInput {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl ChatInput for DomInput {
    fn clear(&self) {
        self.input.set_value("");
    }

    fn focus(&self) {
        if let Err(e) = self.input.focus() {
            log::warn!("Failed to focus input: {:?}", e);
        }
    }
}

pub struct DomSendButton {
    button: HtmlButtonElement,
}

impl DomSendButton {
    pub fn new(button: HtmlButtonElement) -> Self {
        Self { button }
    }

    /// Find the send button inside `parent`
    pub fn find(parent: &Element, selector: &str) -> Result<Self, JsValue> {
        let button = dom::query_html_element(parent, selector)?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| JsValue::from_str(&format!("Element is not a button: {}", selector)))?;
        Ok(Self::new(button))
    }
}

impl SendControl for DomSendButton {
    fn set_enabled(&self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }

    fn set_label(&self, label: &str) {
        self.button.set_text_content(Some(label));
    }
}

/// Navigates by assigning `window.location.href`
pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, location: &str) {
        log::debug!("Navigating to {}", location);
        if let Err(e) = self.window.location().set_href(location) {
            log::error!("Failed to navigate to {}: {:?}", location, e);
        }
    }
}
