//! Navigation collaborators.
//!
//! Defines the two ways a card can leave the current view (opening an
//! external address, or moving to an internal route) and the concrete
//! implementations used by the terminal app.

use chrono::{DateTime, Utc};

/// Path of the internal search view.
pub const SEARCH_PATH: &str = "/search";

/// Opens addresses in a new, independent browsing context.
pub trait TabOpener {
    /// Fire-and-forget; failures are not reported to the caller.
    fn open_external(&mut self, address: &str);
}

/// Changes the current in-app view.
pub trait Router {
    fn navigate_to(&mut self, path: &str);
}

/// An outbound effect produced by a card gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `address` was handed to the tab opener
    OpenExternal(String),
    /// `path` was handed to the router
    Navigate(String),
}

impl Effect {
    /// Hand the effect to the matching collaborator.
    pub fn dispatch(&self, opener: &mut dyn TabOpener, router: &mut dyn Router) {
        match self {
            Effect::OpenExternal(address) => opener.open_external(address),
            Effect::Navigate(path) => router.navigate_to(path),
        }
    }

    /// Human-readable summary for the status bar.
    pub fn describe(&self) -> String {
        match self {
            Effect::OpenExternal(address) => format!("Opened {}", address),
            Effect::Navigate(path) => format!("Navigated to {}", path),
        }
    }
}

/// Characters left as-is besides ASCII alphanumerics and `-_.~`.
const URI_COMPONENT_EXTRA: &[char] = &['!', '\'', '(', ')', '*'];

/// Percent-encode a string for use as a URI component.
///
/// Keeps `A-Z a-z 0-9 - _ . ! ~ * ' ( )` and escapes every other UTF-8
/// byte as `%XX`.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    for ch in value.chars() {
        if URI_COMPONENT_EXTRA.contains(&ch) {
            encoded.push(ch);
        } else {
            encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }
    encoded
}

/// Build the internal search route for `query`.
pub fn search_path(query: &str) -> String {
    format!("{}?q={}", SEARCH_PATH, encode_uri_component(query))
}

/// Recover the search term from a path built by [`search_path`].
///
/// Returns `None` for anything that is not a search route or does not decode.
pub fn decode_search_path(path: &str) -> Option<String> {
    let encoded = path.strip_prefix(SEARCH_PATH)?.strip_prefix("?q=")?;
    urlencoding::decode(encoded).ok().map(|term| term.into_owned())
}

/// Tab opener backed by the desktop's URL handler.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    /// Application to open addresses with; `None` uses the system default
    browser: Option<String>,
}

impl SystemOpener {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }
}

impl TabOpener for SystemOpener {
    fn open_external(&mut self, address: &str) {
        let result = match self.browser.as_deref() {
            Some(app) => open::with_detached(address, app),
            None => open::that_detached(address),
        };

        match result {
            Ok(()) => tracing::info!(address, "opened external address"),
            Err(e) => tracing::warn!(address, error = %e, "failed to open external address"),
        }
    }
}

/// One entry in the router's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub path: String,
    pub at: DateTime<Utc>,
}

/// In-app router.
///
/// Keeps a stack of visited paths; the last one is the current view.
#[derive(Debug, Clone, Default)]
pub struct AppRouter {
    visits: Vec<Visit>,
}

impl AppRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current route, or `None` before the first navigation.
    pub fn current(&self) -> Option<&str> {
        self.visits.last().map(|v| v.path.as_str())
    }

    /// Search term of the current route, if it is a search route.
    pub fn current_search_term(&self) -> Option<String> {
        self.current().and_then(decode_search_path)
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Drop the current route and return to the previous one.
    ///
    /// Returns the route that is now current.
    pub fn back(&mut self) -> Option<&str> {
        self.visits.pop();
        self.current()
    }
}

impl Router for AppRouter {
    fn navigate_to(&mut self, path: &str) {
        tracing::debug!(path, depth = self.visits.len() + 1, "navigate");
        self.visits.push(Visit {
            path: path.to_string(),
            at: Utc::now(),
        });
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingOpener, RecordingRouter};
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("neural nets"), "neural%20nets");
        assert_eq!(encode_uri_component("c++ & rust"), "c%2B%2B%20%26%20rust");
        assert_eq!(encode_uri_component("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("it's (ok)!*~"), "it's%20(ok)!*~");
        assert_eq!(encode_uri_component("100%"), "100%25");
        assert_eq!(encode_uri_component(""), "");
    }

    #[test]
    fn test_search_path_round_trip() {
        let path = search_path("bar baz");
        assert_eq!(path, "/search?q=bar%20baz");
        assert_eq!(decode_search_path(&path).as_deref(), Some("bar baz"));
        assert_eq!(decode_search_path("/settings"), None);
        assert_eq!(decode_search_path("/searchx?q=a"), None);
    }

    #[test]
    fn test_effect_dispatch_reaches_one_collaborator() {
        let mut opener = RecordingOpener::default();
        let mut router = RecordingRouter::default();

        Effect::OpenExternal("https://example.com".to_string()).dispatch(&mut opener, &mut router);
        assert_eq!(opener.opened, vec!["https://example.com"]);
        assert!(router.paths.is_empty());

        Effect::Navigate("/search?q=x".to_string()).dispatch(&mut opener, &mut router);
        assert_eq!(opener.opened.len(), 1);
        assert_eq!(router.paths, vec!["/search?q=x"]);
    }

    #[test]
    fn test_app_router_history() {
        let mut router = AppRouter::new();
        assert_eq!(router.current(), None);

        router.navigate_to("/search?q=foo");
        router.navigate_to("/search?q=bar%20baz");
        assert_eq!(router.current(), Some("/search?q=bar%20baz"));
        assert_eq!(router.current_search_term().as_deref(), Some("bar baz"));
        assert_eq!(router.visits().len(), 2);

        assert_eq!(router.back(), Some("/search?q=foo"));
        assert_eq!(router.back(), None);
        assert_eq!(router.back(), None);
    }
}
