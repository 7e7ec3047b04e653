use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::config;

/// The two things a CTA button can do to the page it lives on.
pub trait Page {
    /// Smoothly scrolls the element with `anchor_id` into view.
    /// Returns `false` when no such element exists.
    fn smooth_scroll_to(&self, anchor_id: &str) -> bool;

    fn redirect(&self, url: &str);
}

pub struct BrowserPage {
    window: Window,
}

impl BrowserPage {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Page for BrowserPage {
    fn smooth_scroll_to(&self, anchor_id: &str) -> bool {
        let Some(element) = self
            .window
            .document()
            .and_then(|document| document.get_element_by_id(anchor_id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn redirect(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            warn!("Navigation to {} was refused: {:?}", url, err);
        }
    }
}

pub fn scroll_to_offer(page: &impl Page) {
    if !page.smooth_scroll_to(config::PRICING_ANCHOR_ID) {
        debug!("No #{} element on the page, nothing to scroll to", config::PRICING_ANCHOR_ID);
    }
}

pub fn handle_checkout(page: &impl Page) {
    debug!("Redirecting to checkout");
    page.redirect(config::CHECKOUT_URL);
}

/// Runs `action` against the live browser page, if there is one.
pub fn on_browser_page(action: fn(&BrowserPage)) {
    if let Some(page) = BrowserPage::current() {
        action(&page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPage {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
        redirects: RefCell<Vec<String>>,
    }

    impl Page for RecordingPage {
        fn smooth_scroll_to(&self, anchor_id: &str) -> bool {
            if !self.anchors.iter().any(|id| *id == anchor_id) {
                return false;
            }
            self.scrolled.borrow_mut().push(anchor_id.to_string());
            true
        }

        fn redirect(&self, url: &str) {
            self.redirects.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_scroll_to_offer() {
        let page = RecordingPage {
            anchors: vec!["hero", "pricing"],
            ..Default::default()
        };
        scroll_to_offer(&page);
        assert_eq!(*page.scrolled.borrow(), vec!["pricing".to_string()]);
        assert!(page.redirects.borrow().is_empty());
    }

    #[test]
    fn test_scroll_without_anchor_is_noop() {
        let page = RecordingPage::default();
        scroll_to_offer(&page);
        assert!(page.scrolled.borrow().is_empty());
        assert!(page.redirects.borrow().is_empty());
    }

    #[test]
    fn test_checkout_redirects_once() {
        let page = RecordingPage::default();
        handle_checkout(&page);
        assert_eq!(
            *page.redirects.borrow(),
            vec!["https://pay.celetus.com/4MKM9L02".to_string()]
        );
        assert!(page.scrolled.borrow().is_empty());
    }
}
