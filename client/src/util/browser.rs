//! Browser side effects: scrolling, history and the current URL.
//!
//! Each function touches `window` only in the `hydrate` build. During SSR
//! they no-op (or read the request context) to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Go back one entry in the session history.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                if let Err(e) = history.back() {
                    log::warn!("history.back failed: {e:?}");
                }
            }
        }
    }
}

/// Public origin of the site, provided as context by the server.
///
/// Server-rendered canonical URLs are built from this value, never from the
/// request `Host` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOrigin(String);

impl SiteOrigin {
    pub fn new(origin: &str) -> Self {
        Self(origin.trim().trim_end_matches('/').to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for a path on this origin.
    pub fn page_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.0)
        } else {
            format!("{}/{path}", self.0)
        }
    }
}

/// Absolute URL of the page being rendered, when it can be determined.
///
/// In the browser this is `location.href`. On the server it is the
/// `SiteOrigin` context joined with the request path; without that context
/// the result is `None` and callers fall back to their default.
pub fn current_page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let origin = leptos::prelude::use_context::<SiteOrigin>()?;
        let parts = leptos::prelude::use_context::<http::request::Parts>()?;
        Some(origin.page_url(parts.uri.path()))
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        None
    }
}
