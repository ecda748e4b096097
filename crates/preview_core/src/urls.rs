//! Dataverse API URLs derived from the preview parameters.

use crate::constants::MISSING_SEGMENT;
use crate::params::PreviewParams;

/// The two API URLs a preview page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewUrls {
    /// Download URL of the previewed file, used as the image source
    pub file_url: String,
    /// Metadata URL of the dataset version the file belongs to
    pub version_url: String,
}

impl PreviewUrls {
    /// Build both URLs.
    ///
    /// Absent parameters are rendered as `null`. The API key, when present,
    /// is appended as given.
    pub fn build(params: &PreviewParams) -> Self {
        let site_url = segment(&params.site_url);

        let mut file_url = format!(
            "{}/api/access/datafile/{}?gbrecs=false",
            site_url,
            segment(&params.file_id)
        );
        let mut version_url = format!(
            "{}/api/datasets/{}/versions/{}",
            site_url,
            segment(&params.dataset_id),
            segment(&params.dataset_version)
        );

        if let Some(key) = &params.api_key {
            file_url.push_str("&key=");
            file_url.push_str(key);
            version_url.push_str("?key=");
            version_url.push_str(key);
        }

        Self {
            file_url,
            version_url,
        }
    }
}

fn segment(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING_SEGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_params() -> PreviewParams {
        PreviewParams {
            site_url: Some("https://example.org".to_string()),
            file_id: Some("42".to_string()),
            dataset_id: Some("7".to_string()),
            dataset_version: Some("1.0".to_string()),
            api_key: None,
        }
    }

    #[test]
    fn test_urls_without_key() {
        let urls = PreviewUrls::build(&example_params());
        assert_eq!(
            urls.file_url,
            "https://example.org/api/access/datafile/42?gbrecs=false"
        );
        assert_eq!(
            urls.version_url,
            "https://example.org/api/datasets/7/versions/1.0"
        );
    }

    #[test]
    fn test_urls_with_key() {
        let params = PreviewParams {
            api_key: Some("abc123".to_string()),
            ..example_params()
        };
        let urls = PreviewUrls::build(&params);
        assert_eq!(
            urls.file_url,
            "https://example.org/api/access/datafile/42?gbrecs=false&key=abc123"
        );
        assert_eq!(
            urls.version_url,
            "https://example.org/api/datasets/7/versions/1.0?key=abc123"
        );
    }

    #[test]
    fn test_empty_key_is_still_appended() {
        let params = PreviewParams {
            api_key: Some(String::new()),
            ..example_params()
        };
        let urls = PreviewUrls::build(&params);
        assert!(urls.file_url.ends_with("?gbrecs=false&key="));
        assert!(urls.version_url.ends_with("/versions/1.0?key="));
    }

    #[test]
    fn test_missing_params_render_null() {
        let urls = PreviewUrls::build(&PreviewParams::default());
        assert_eq!(urls.file_url, "null/api/access/datafile/null?gbrecs=false");
        assert_eq!(urls.version_url, "null/api/datasets/null/versions/null");
    }

    #[test]
    fn test_from_parsed_query() {
        let params = PreviewParams::from_query(
            "siteUrl=https://example.org&fileid=42&datasetid=7&datasetversion=1.0&key=abc123",
        );
        let urls = PreviewUrls::build(&params);
        assert!(urls.file_url.ends_with("&key=abc123"));
        assert!(urls.version_url.ends_with("?key=abc123"));
    }
}
