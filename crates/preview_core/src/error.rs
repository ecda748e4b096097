//! Error types for the previewer.

use thiserror::Error;

/// Errors that can occur while setting up the preview or navigating back.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Reading another window's location was refused by the browser
    /// (cross-origin navigation or a security restriction).
    #[error("Access to the opener window was denied")]
    AccessDenied,

    /// This window has no opener
    #[error("Window has no opener")]
    NoOpener,

    /// No global `window` object exists
    #[error("No global window exists")]
    NoWindow,

    /// The window has no document
    #[error("No document in window")]
    NoDocument,

    /// An element expected by the page is missing
    #[error("Element not found: #{id}")]
    MissingElement {
        /// The id that was looked up
        id: String,
    },

    /// An element exists but is not of the expected type
    #[error("Element #{id} is not a {expected}")]
    UnexpectedElement {
        /// The id of the element
        id: String,
        /// Name of the expected element type
        expected: &'static str,
    },

    /// A DOM call was rejected
    #[error("DOM error: {message}")]
    Dom {
        /// Stringified JS error
        message: String,
    },

    /// Configuration JSON could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A page URL could not be parsed
    #[error("Invalid page URL: {0}")]
    InvalidPageUrl(#[from] url::ParseError),
}

impl PreviewError {
    /// Create a missing element error.
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Create an unexpected element error.
    pub fn unexpected_element(id: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedElement {
            id: id.into(),
            expected,
        }
    }

    /// Create a DOM error with a message.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the previewer.
pub type Result<T> = std::result::Result<T, PreviewError>;
