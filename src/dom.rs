//! DOM helpers for binding the preview image.

use preview_core::constants::CONFIG_ATTRIBUTE;
use preview_core::{PreviewError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CssStyleDeclaration, Document, DocumentReadyState, HtmlElement,
    HtmlImageElement, Node,
};

/// Convert a thrown JS value into a [`PreviewError`].
pub fn js_error(value: JsValue) -> PreviewError {
    PreviewError::dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately if parsing already finished.
pub fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<()> {
    if document.ready_state() != DocumentReadyState::Loading {
        f();
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref(),
            &options,
        )
        .map_err(js_error)
}

/// Raw JSON configuration from the root element, if any.
pub fn config_attribute(document: &Document) -> Option<String> {
    document.document_element()?.get_attribute(CONFIG_ATTRIBUTE)
}

/// Look up the `<img>` with the given id.
pub fn image_by_id(document: &Document, id: &str) -> Result<HtmlImageElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PreviewError::missing_element(id))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| PreviewError::unexpected_element(id, "img"))
}

/// Create an element and cast it to the requested type.
pub fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T> {
    document
        .create_element(tag)
        .map_err(js_error)?
        .dyn_into::<T>()
        .map_err(|_| PreviewError::unexpected_element(tag, tag))
}

/// Wrap `element` in an inline-block `<span>` at its current position.
pub fn wrap_inline_block(document: &Document, element: &HtmlElement) -> Result<HtmlElement> {
    let wrapper: HtmlElement = create(document, "span")?;
    set_style(&wrapper.style(), "display", "inline-block")?;

    let node: &Node = element;
    if let Some(parent) = node.parent_node() {
        parent.insert_before(&wrapper, Some(node)).map_err(js_error)?;
    }
    wrapper.append_child(node).map_err(js_error)?;
    Ok(wrapper)
}

/// Set a single CSS property.
pub fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) -> Result<()> {
    style.set_property(property, value).map_err(js_error)
}

/// Set several CSS properties, stopping at the first failure.
pub fn set_styles(style: &CssStyleDeclaration, properties: &[(&str, &str)]) -> Result<()> {
    for (property, value) in properties {
        set_style(style, property, value)?;
    }
    Ok(())
}
