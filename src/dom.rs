//! Thin wrappers over `window`/`document`. Anything absent comes back as
//! `LandingError::MissingElement` so callers can log it and keep going.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use yew::NodeRef;

use crate::error::LandingError;

pub fn window() -> Result<Window, LandingError> {
    web_sys::window().ok_or_else(|| LandingError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, LandingError> {
    window()?
        .document()
        .ok_or_else(|| LandingError::MissingElement("document".to_string()))
}

pub fn element_by_id(id: &str) -> Result<Element, LandingError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| LandingError::MissingElement(format!("#{}", id)))
}

/// Opens `url` in a new tab. A blocked popup counts as a missing element.
pub fn open_in_new_tab(url: &str) -> Result<(), LandingError> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .ok()
        .flatten()
        .map(|_| ())
        .ok_or_else(|| LandingError::MissingElement(format!("popup for {}", url)))
}

/// Natural content height of a rendered element, as `scrollHeight` reports it.
pub fn scroll_height(node: &NodeRef) -> Result<i32, LandingError> {
    node.get()
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| el.scroll_height())
        .ok_or_else(|| LandingError::MissingElement("faq answer".to_string()))
}
