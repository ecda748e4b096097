//! Dataverse image previewer
//!
//! A WebAssembly widget that shows a Dataverse data file as a zoomable image
//! and takes the user back to the dataset the preview was opened from.

pub mod logging;

pub use preview_core::*;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod zoom_handler;

// WASM entry point and JS exports
#[cfg(target_arch = "wasm32")]
mod wasm;
