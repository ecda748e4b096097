//! [`HostWindow`] over the real browser window.

use preview_core::{HostWindow, PreviewError, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::dom::js_error;

/// The window this module runs in.
#[derive(Debug, Clone)]
pub struct BrowserWindow {
    window: Window,
}

impl BrowserWindow {
    /// Wrap the global `window`.
    pub fn current() -> Result<Self> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(PreviewError::NoWindow)
    }

    pub fn document(&self) -> Result<Document> {
        self.window.document().ok_or(PreviewError::NoDocument)
    }

    /// The query string of this page, including the leading `?`.
    pub fn query(&self) -> Result<String> {
        self.window.location().search().map_err(js_error)
    }

    // A cross-origin opener is a WindowProxy that fails `instanceof Window`,
    // so it is cast without checking.
    fn opener(&self) -> Option<Window> {
        let opener = self.window.opener().ok()?;
        if opener.is_null() || opener.is_undefined() {
            return None;
        }
        Some(opener.unchecked_into::<Window>())
    }
}

impl HostWindow for BrowserWindow {
    fn has_opener(&self) -> bool {
        self.opener()
            .is_some_and(|opener| !opener.closed().unwrap_or(false))
    }

    fn opener_href(&self) -> Result<String> {
        let opener = self.opener().ok_or(PreviewError::NoOpener)?;
        opener
            .location()
            .href()
            .map_err(|_| PreviewError::AccessDenied)
    }

    fn close_opener(&self) -> Result<()> {
        let opener = self.opener().ok_or(PreviewError::NoOpener)?;
        opener.close().map_err(js_error)
    }

    fn assign(&self, url: &str) -> Result<()> {
        self.window.location().assign(url).map_err(js_error)
    }

    fn open(&self, url: &str, target: &str) -> Result<()> {
        self.window
            .open_with_url_and_target(url, target)
            .map(|_| ())
            .map_err(js_error)
    }
}
