//! Binds the toggle controller to server-rendered markup.
//!
//! # Design
//! - Element lookup by id/name happens once, at attach time; the controller only sees handles.
//! - Checkboxes added after attach are not picked up.
//! - Attaching waits for `DOMContentLoaded` when the document is still loading.

use crate::core::config::{CONFIG_ELEMENT_ID, ToggleConfig};
use crate::core::toggle::{CheckboxHandle, LabelHandle, ToggleController};
use gloo::console;
use gloo::events::EventListener;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// Checkbox input element handle.
#[derive(Clone, Debug)]
pub struct DomCheckbox(HtmlInputElement);

impl CheckboxHandle for DomCheckbox {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.0.set_checked(checked);
    }
}

/// Button element whose text content is the label.
#[derive(Clone, Debug)]
pub struct DomLabel(HtmlElement);

impl LabelHandle for DomLabel {
    fn set_label(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Failures while binding to the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// No window/document is available.
    #[error("document is unavailable")]
    NoDocument,
    /// Button id did not match any element.
    #[error("toggle button '{id}' not found")]
    MissingButton {
        /// Configured button id.
        id: String,
    },
    /// Button id matched a non-HTML element.
    #[error("element '{id}' is not an HTML element")]
    NotHtmlElement {
        /// Configured button id.
        id: String,
    },
}

/// Live click binding. Dropping it detaches the handler.
pub struct ToggleBinding {
    listener: EventListener,
}

impl ToggleBinding {
    /// Keep the handler registered for the rest of the page's lifetime.
    pub fn forget(self) {
        self.listener.forget();
    }
}

/// Current document, if any.
///
/// # Errors
///
/// Returns [`AttachError::NoDocument`] outside a browser window.
pub fn document() -> Result<Document, AttachError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(AttachError::NoDocument)
}

/// Run `ready` once the document's structural content has been parsed.
pub fn when_ready<F>(document: &Document, ready: F)
where
    F: FnOnce(Document) + 'static,
{
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(document, "DOMContentLoaded", move |_event| ready(target)).forget();
    } else {
        ready(document.clone());
    }
}

/// Read the optional JSON override block, falling back to defaults when absent or invalid.
#[must_use]
pub fn page_config(document: &Document) -> ToggleConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let (config, rejected) = ToggleConfig::resolve(raw.as_deref());
    if let Some(err) = rejected {
        console::warn!("picker config ignored", err.to_string());
    }
    config
}

/// Bind the toggle button to the checkbox group currently in `document`.
///
/// # Errors
///
/// Returns [`AttachError`] when the configured button is absent or not an HTML element.
pub fn attach(document: &Document, config: &ToggleConfig) -> Result<ToggleBinding, AttachError> {
    let button = document
        .get_element_by_id(&config.button_id)
        .ok_or_else(|| AttachError::MissingButton {
            id: config.button_id.clone(),
        })?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AttachError::NotHtmlElement {
            id: config.button_id.clone(),
        })?;
    let checkboxes = collect_group(document, &config.group_name);
    let controller = ToggleController::new(DomLabel(button.clone()), checkboxes);
    console::debug!(
        "select-all toggle attached",
        config.group_name.clone(),
        controller.len()
    );
    let listener = EventListener::new(&button, "click", move |_event| {
        controller.activate();
    });
    Ok(ToggleBinding { listener })
}

fn collect_group(document: &Document, name: &str) -> Vec<DomCheckbox> {
    let nodes = document.get_elements_by_name(name);
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .map(DomCheckbox)
        .collect()
}
