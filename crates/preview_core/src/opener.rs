//! Returning from the preview window to the dataset page.
//!
//! A preview is normally opened in a new window from a dataset page. When the
//! user asks to go back, we either close that opener and reopen the dataset
//! from here (so the dataset ends up in front), or, when the opener has moved
//! on or is unreachable, simply navigate this window.

use crate::constants::PARENT_TARGET;
use crate::error::Result;

/// The browser window operations the reconciler needs.
///
/// The wasm build implements this over `web_sys::Window`; tests use a recorder.
pub trait HostWindow {
    /// Whether this window was opened by another one that is still around.
    fn has_opener(&self) -> bool;

    /// Current href of the opener.
    ///
    /// Fails with [`crate::PreviewError::AccessDenied`] when the browser refuses the
    /// read, which is the only portable signal that the opener is cross-origin.
    fn opener_href(&self) -> Result<String>;

    /// Close the opener window.
    fn close_opener(&self) -> Result<()>;

    /// Navigate this window to `url`.
    fn assign(&self, url: &str) -> Result<()>;

    /// Open `url` in the browsing context named by `target`.
    fn open(&self, url: &str, target: &str) -> Result<()>;
}

/// Navigation chosen by [`return_to_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnAction {
    /// The current window was navigated; any opener was left alone.
    NavigateHere,
    /// The opener was closed and the dataset reopened in the parent context.
    ReopenInParent,
}

/// Capture the address of the page that opened this one.
///
/// Empty when there is no opener or its location cannot be read.
pub fn capture_parent_url<W: HostWindow + ?Sized>(window: &W) -> String {
    if !window.has_opener() {
        return String::new();
    }
    match window.opener_href() {
        Ok(href) => href,
        Err(e) => {
            log::debug!("Opener location unavailable: {}", e);
            String::new()
        }
    }
}

/// What could be learned about the opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenerLocation<'a> {
    /// No opener, or it has been closed
    Absent,
    /// An opener exists but its location cannot be read
    Unreadable,
    /// The opener currently shows this address
    At(&'a str),
}

/// Decide what to do given the opener's state.
pub fn decide(opener: OpenerLocation<'_>, parent_url: &str) -> ReturnAction {
    match opener {
        OpenerLocation::At(href) if href == parent_url => ReturnAction::ReopenInParent,
        _ => ReturnAction::NavigateHere,
    }
}

/// Return the user to `parent_url`, performing exactly one navigation.
///
/// Errors from the navigation calls themselves are logged, not returned.
pub fn return_to_dataset<W: HostWindow + ?Sized>(window: &W, parent_url: &str) -> ReturnAction {
    let href = window.has_opener().then(|| window.opener_href());
    let opener = match &href {
        None => OpenerLocation::Absent,
        Some(Ok(href)) => OpenerLocation::At(href),
        Some(Err(e)) => {
            log::debug!("Opener is not readable ({}), leaving it alone", e);
            OpenerLocation::Unreadable
        }
    };
    let action = decide(opener, parent_url);

    match action {
        ReturnAction::ReopenInParent => {
            log::info!("Opener still shows {}, reopening it here", parent_url);
            if let Err(e) = window.close_opener() {
                log::warn!("Failed to close opener: {}", e);
            }
            if let Err(e) = window.open(parent_url, PARENT_TARGET) {
                log::warn!("Failed to open {}: {}", parent_url, e);
            }
        }
        ReturnAction::NavigateHere => {
            log::info!("Navigating to {}", parent_url);
            if let Err(e) = window.assign(parent_url) {
                log::warn!("Failed to navigate to {}: {}", parent_url, e);
            }
        }
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreviewError;
    use std::cell::RefCell;

    const DATASET: &str = "https://demo.dataverse.org/dataset.xhtml?persistentId=doi:10.5072/FK2/ABC";

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        CloseOpener,
        Assign(String),
        Open(String, String),
    }

    enum OpenerState {
        Absent,
        At(String),
        CrossOrigin,
    }

    struct MockWindow {
        opener: OpenerState,
        calls: RefCell<Vec<Call>>,
    }

    impl MockWindow {
        fn new(opener: OpenerState) -> Self {
            Self {
                opener,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl HostWindow for MockWindow {
        fn has_opener(&self) -> bool {
            !matches!(self.opener, OpenerState::Absent)
        }

        fn opener_href(&self) -> Result<String> {
            match &self.opener {
                OpenerState::At(href) => Ok(href.clone()),
                OpenerState::CrossOrigin => Err(PreviewError::AccessDenied),
                OpenerState::Absent => panic!("opener_href called without an opener"),
            }
        }

        fn close_opener(&self) -> Result<()> {
            self.calls.borrow_mut().push(Call::CloseOpener);
            Ok(())
        }

        fn assign(&self, url: &str) -> Result<()> {
            self.calls.borrow_mut().push(Call::Assign(url.to_string()));
            Ok(())
        }

        fn open(&self, url: &str, target: &str) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::Open(url.to_string(), target.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_no_opener_navigates_here() {
        let w = MockWindow::new(OpenerState::Absent);
        assert_eq!(return_to_dataset(&w, DATASET), ReturnAction::NavigateHere);
        assert_eq!(w.calls(), vec![Call::Assign(DATASET.to_string())]);
    }

    #[test]
    fn test_opener_on_dataset_is_closed_and_reopened() {
        let w = MockWindow::new(OpenerState::At(DATASET.to_string()));
        assert_eq!(return_to_dataset(&w, DATASET), ReturnAction::ReopenInParent);
        assert_eq!(
            w.calls(),
            vec![
                Call::CloseOpener,
                Call::Open(DATASET.to_string(), "_parent".to_string())
            ]
        );
    }

    #[test]
    fn test_cross_origin_opener_left_alone() {
        let w = MockWindow::new(OpenerState::CrossOrigin);
        assert_eq!(return_to_dataset(&w, DATASET), ReturnAction::NavigateHere);
        assert_eq!(w.calls(), vec![Call::Assign(DATASET.to_string())]);
    }

    #[test]
    fn test_opener_elsewhere_left_alone() {
        let w = MockWindow::new(OpenerState::At("https://demo.dataverse.org/".to_string()));
        assert_eq!(return_to_dataset(&w, DATASET), ReturnAction::NavigateHere);
        assert_eq!(w.calls(), vec![Call::Assign(DATASET.to_string())]);
    }

    #[test]
    fn test_match_is_exact() {
        // Trailing characters make it a different page
        let w = MockWindow::new(OpenerState::At(format!("{}#files", DATASET)));
        assert_eq!(return_to_dataset(&w, DATASET), ReturnAction::NavigateHere);
    }

    #[test]
    fn test_empty_parent_url_with_no_opener() {
        let w = MockWindow::new(OpenerState::Absent);
        assert_eq!(return_to_dataset(&w, ""), ReturnAction::NavigateHere);
        assert_eq!(w.calls(), vec![Call::Assign(String::new())]);
    }

    #[test]
    fn test_capture_parent_url() {
        assert_eq!(capture_parent_url(&MockWindow::new(OpenerState::Absent)), "");
        assert_eq!(
            capture_parent_url(&MockWindow::new(OpenerState::CrossOrigin)),
            ""
        );
        assert_eq!(
            capture_parent_url(&MockWindow::new(OpenerState::At(DATASET.to_string()))),
            DATASET
        );
    }

    #[test]
    fn test_decide() {
        assert_eq!(
            decide(OpenerLocation::Absent, DATASET),
            ReturnAction::NavigateHere
        );
        assert_eq!(
            decide(OpenerLocation::At(DATASET), DATASET),
            ReturnAction::ReopenInParent
        );
        assert_eq!(
            decide(OpenerLocation::Unreadable, DATASET),
            ReturnAction::NavigateHere
        );
    }
}
