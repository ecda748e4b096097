//! Platform-independent core of the Dataverse image previewer.
//!
//! Parses the preview page's query parameters, derives the Dataverse API
//! URLs, decides how to return to the dataset page, and computes zoom
//! geometry. Everything that touches the browser lives in the
//! `image_previewer` crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod opener;
pub mod page;
pub mod params;
pub mod urls;
pub mod zoom;

pub use config::{LogLevel, PreviewConfig};
pub use error::{PreviewError, Result};
pub use opener::{HostWindow, OpenerLocation, ReturnAction, capture_parent_url, return_to_dataset};
pub use page::PreviewPage;
pub use params::PreviewParams;
pub use urls::PreviewUrls;
pub use zoom::{PointerEvent, ZoomAction, ZoomGeometry, ZoomOptions, ZoomState, ZoomTrigger};
