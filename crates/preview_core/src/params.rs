//! Query parameters of the preview page.

use std::collections::HashMap;

use crate::constants::params;
use crate::error::Result;

/// Identifying parameters read from the preview page's query string.
///
/// Every field is optional: a missing parameter is carried as `None` and only
/// turns into the literal `null` when a URL is built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewParams {
    /// Base server URL (`siteUrl`)
    pub site_url: Option<String>,
    /// File identifier (`fileid`)
    pub file_id: Option<String>,
    /// Owning dataset identifier (`datasetid`)
    pub dataset_id: Option<String>,
    /// Dataset version identifier (`datasetversion`)
    pub dataset_version: Option<String>,
    /// Optional API credential (`key`)
    pub api_key: Option<String>,
}

impl PreviewParams {
    /// Parse a query string such as `siteUrl=...&fileid=42`.
    ///
    /// A leading `?` is ignored. Values are percent-decoded and when a key
    /// occurs more than once the last occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut pairs: HashMap<String, String> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            pairs.insert(key.into_owned(), value.into_owned());
        }

        Self {
            site_url: pairs.remove(params::SITE_URL),
            file_id: pairs.remove(params::FILE_ID),
            dataset_id: pairs.remove(params::DATASET_ID),
            dataset_version: pairs.remove(params::DATASET_VERSION),
            api_key: pairs.remove(params::API_KEY),
        }
    }

    /// Parse the query of a full page URL.
    ///
    /// Input without a scheme is either a relative page URL such as
    /// `ImageViewer.html?fileid=1` or a bare query string. Any `#fragment`
    /// is dropped.
    pub fn from_page_url(page_url: &str) -> Result<Self> {
        match url::Url::parse(page_url) {
            Ok(url) => Ok(Self::from_query(url.query().unwrap_or(""))),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(Self::from_query(relative_query(page_url)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Names of the required parameters that are absent.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            (params::SITE_URL, &self.site_url),
            (params::FILE_ID, &self.file_id),
            (params::DATASET_ID, &self.dataset_id),
            (params::DATASET_VERSION, &self.dataset_version),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Query part of a relative URL, or the input itself when it is already a query.
fn relative_query(input: &str) -> &str {
    let input = input.split_once('#').map_or(input, |(head, _)| head);
    match input.split_once('?') {
        // A path never contains '=', a query before an unencoded '?' does
        Some((path, query)) if !path.contains('=') => query,
        _ => input,
    }
}
