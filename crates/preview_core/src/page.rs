//! Page-lifetime state of a preview window.

use crate::opener::{self, HostWindow, ReturnAction};
use crate::params::PreviewParams;
use crate::urls::PreviewUrls;

/// State captured once when the preview page becomes ready.
///
/// `parent_url` is written here and read later when the user asks to return
/// to the dataset.
#[derive(Debug, Clone)]
pub struct PreviewPage {
    parent_url: String,
    params: PreviewParams,
    urls: PreviewUrls,
}

impl PreviewPage {
    /// Capture the opener address and derive the API URLs from `query`.
    pub fn initialize<W: HostWindow + ?Sized>(window: &W, query: &str) -> Self {
        let parent_url = opener::capture_parent_url(window);
        if parent_url.is_empty() {
            log::debug!("No readable opener, nothing to return to");
        } else {
            log::debug!("Opened from {}", parent_url);
        }

        let params = PreviewParams::from_query(query);
        for name in params.missing_required() {
            log::warn!("Missing query parameter '{}'", name);
        }

        let urls = PreviewUrls::build(&params);
        log::debug!("File URL: {}", urls.file_url);
        log::debug!("Version URL: {}", urls.version_url);

        Self {
            parent_url,
            params,
            urls,
        }
    }

    /// Address of the page that opened this one, or empty.
    pub fn parent_url(&self) -> &str {
        &self.parent_url
    }

    pub fn params(&self) -> &PreviewParams {
        &self.params
    }

    pub fn urls(&self) -> &PreviewUrls {
        &self.urls
    }

    /// Return to the page this preview was opened from.
    pub fn return_to_parent<W: HostWindow + ?Sized>(&self, window: &W) -> ReturnAction {
        opener::return_to_dataset(window, &self.parent_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PreviewError, Result};
    use std::cell::RefCell;

    const QUERY: &str = "?siteUrl=https://example.org&fileid=42&datasetid=7&datasetversion=1.0";

    struct FakeWindow {
        opener_href: Option<Result<String>>,
        assigned: RefCell<Vec<String>>,
    }

    impl FakeWindow {
        fn new(opener_href: Option<Result<String>>) -> Self {
            Self {
                opener_href,
                assigned: RefCell::new(Vec::new()),
            }
        }
    }

    impl HostWindow for FakeWindow {
        fn has_opener(&self) -> bool {
            self.opener_href.is_some()
        }

        fn opener_href(&self) -> Result<String> {
            match &self.opener_href {
                Some(Ok(href)) => Ok(href.clone()),
                _ => Err(PreviewError::AccessDenied),
            }
        }

        fn close_opener(&self) -> Result<()> {
            Ok(())
        }

        fn assign(&self, url: &str) -> Result<()> {
            self.assigned.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn open(&self, _url: &str, _target: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_initialize_without_opener() {
        let page = PreviewPage::initialize(&FakeWindow::new(None), QUERY);
        assert_eq!(page.parent_url(), "");
        assert_eq!(
            page.urls().file_url,
            "https://example.org/api/access/datafile/42?gbrecs=false"
        );
        assert_eq!(
            page.urls().version_url,
            "https://example.org/api/datasets/7/versions/1.0"
        );
        assert_eq!(page.params().file_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_initialize_captures_opener() {
        let window = FakeWindow::new(Some(Ok("https://example.org/dataset.xhtml?id=7".into())));
        let page = PreviewPage::initialize(&window, QUERY);
        assert_eq!(page.parent_url(), "https://example.org/dataset.xhtml?id=7");
    }

    #[test]
    fn test_initialize_with_cross_origin_opener() {
        let window = FakeWindow::new(Some(Err(PreviewError::AccessDenied)));
        let page = PreviewPage::initialize(&window, QUERY);
        assert_eq!(page.parent_url(), "");
    }

    #[test]
    fn test_return_to_parent_uses_captured_url() {
        let page = PreviewPage::initialize(
            &FakeWindow::new(Some(Ok("https://example.org/dataset.xhtml?id=7".into()))),
            QUERY,
        );
        // The opener has since been closed
        let later = FakeWindow::new(None);
        assert_eq!(page.return_to_parent(&later), ReturnAction::NavigateHere);
        assert_eq!(
            *later.assigned.borrow(),
            vec!["https://example.org/dataset.xhtml?id=7".to_string()]
        );
    }
}
