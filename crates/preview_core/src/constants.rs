//! Global constants for the previewer

/// Id of the image element the preview is bound to
pub const PREVIEW_IMAGE_ID: &str = "previewedImage";

/// Attribute on the document's root element that may carry a JSON [`crate::PreviewConfig`]
pub const CONFIG_ATTRIBUTE: &str = "data-preview-config";

/// Window target used when reopening the dataset after closing the opener
pub const PARENT_TARGET: &str = "_parent";

/// Text substituted for a query parameter that is absent
pub const MISSING_SEGMENT: &str = "null";

/// Query parameter names read from the preview page URL
pub mod params {
    pub const SITE_URL: &str = "siteUrl";
    pub const FILE_ID: &str = "fileid";
    pub const DATASET_ID: &str = "datasetid";
    pub const DATASET_VERSION: &str = "datasetversion";
    pub const API_KEY: &str = "key";
}
