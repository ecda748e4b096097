use std::cell::RefCell;

use preview_core::constants::CONFIG_ATTRIBUTE;
use preview_core::{PreviewConfig, PreviewPage, Result};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::browser::BrowserWindow;
use crate::dom;
use crate::logging;
use crate::zoom_handler::ZoomHandler;

thread_local! {
    /// State of this preview page, set once the DOM is ready
    static PAGE: RefCell<Option<PreviewPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = run() {
        web_sys::console::error_1(&format!("Image previewer failed to start: {}", e).into());
    }
}

fn run() -> Result<()> {
    let window = BrowserWindow::current()?;
    let document = window.document()?;
    let config = load_config(&document);

    log::info!("Image previewer starting");
    let ready_document = document.clone();
    dom::on_dom_ready(&document, move || {
        if let Err(e) = initialize(&window, &ready_document, &config) {
            log::error!("Image preview setup failed: {}", e);
        }
    })
}

/// Read the page configuration and bring up logging at its level.
fn load_config(document: &Document) -> PreviewConfig {
    let parsed = dom::config_attribute(document)
        .as_deref()
        .map(PreviewConfig::from_json)
        .transpose();
    let (config, error) = match parsed {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (PreviewConfig::default(), Some(e)),
    };

    logging::init(config.log_level);
    if let Some(e) = error {
        log::warn!("Ignoring {}: {}", CONFIG_ATTRIBUTE, e);
    }
    config
}

fn initialize(window: &BrowserWindow, document: &Document, config: &PreviewConfig) -> Result<()> {
    let query = window.query()?;
    let page = PreviewPage::initialize(window, &query);
    let file_url = page.urls().file_url.clone();
    // Store first so returnToDataset works even if the image can't be bound
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));

    let image = dom::image_by_id(document, &config.image_element_id)?;
    image.set_src(&file_url);

    let wrapper = dom::wrap_inline_block(document, &image)?;
    dom::set_style(&image.style(), "display", "block")?;

    let zoom_source = config.zoom.url.as_deref().unwrap_or(&file_url);
    ZoomHandler::install(document, &wrapper, zoom_source, &config.zoom)?;

    log::info!("Previewing {}", file_url);
    Ok(())
}

/// Take the user back to the dataset page at `parent_url`.
///
/// Closes the opener and reopens the dataset from here when the opener still
/// shows it; otherwise navigates this window.
#[wasm_bindgen(js_name = returnToDataset)]
pub fn return_to_dataset(parent_url: &str) {
    match BrowserWindow::current() {
        Ok(window) => {
            let action = preview_core::return_to_dataset(&window, parent_url);
            log::debug!("Return to dataset: {:?}", action);
        }
        Err(e) => log::error!("Cannot return to dataset: {}", e),
    }
}

/// Address of the page that opened this preview, or an empty string.
#[wasm_bindgen(js_name = parentUrl)]
pub fn parent_url() -> String {
    with_page(|page| page.parent_url().to_string())
}

/// Download URL of the previewed file, or an empty string before the page is ready.
#[wasm_bindgen(js_name = fileUrl)]
pub fn file_url() -> String {
    with_page(|page| page.urls().file_url.clone())
}

/// Dataset version URL, or an empty string before the page is ready.
#[wasm_bindgen(js_name = versionUrl)]
pub fn version_url() -> String {
    with_page(|page| page.urls().version_url.clone())
}

fn with_page(f: impl FnOnce(&PreviewPage) -> String) -> String {
    PAGE.with(|slot| slot.borrow().as_ref().map(f).unwrap_or_default())
}
