//! Theme preference: cookie normalization, request resolution, browser apply.
//!
//! DESIGN
//! ======
//! The server resolves the preference once per request from the cookie the
//! browser sends and stamps it on `<html data-theme>`; the hydrated app
//! initializes its signal from that attribute, so first paint and hydration
//! can never disagree. Toggling updates the attribute in place and writes
//! the cookie back from the browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "ssr")]
use leptos::prelude::use_context;

/// Cookie that stores the persisted theme preference.
pub const THEME_COOKIE: &str = "studio_theme";

/// Lifetime of the preference cookie, in seconds (one year).
const THEME_COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Two-state display-mode preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light mode, selected for absent or unrecognized preferences.
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Normalize a raw cookie value. Exactly `"dark"` selects dark mode;
    /// any other value, including the empty string, stays light.
    #[must_use]
    pub fn from_cookie_value(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// Value rendered into `data-theme` and persisted in the cookie.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// `document.cookie` assignment string that persists `theme`.
///
/// Deliberately not `HttpOnly`: the browser owns the write path, the server
/// only reads the value during rendering.
#[must_use]
pub fn cookie_assignment(theme: Theme) -> String {
    format!(
        "{THEME_COOKIE}={}; path=/; max-age={THEME_COOKIE_MAX_AGE_SECS}; samesite=lax",
        theme.as_str()
    )
}

/// Resolve the request's theme during server rendering.
///
/// Reads the cookie jar from the request parts provided to the rendering
/// context. Absent parts (outside a request) and absent or unrecognized
/// cookies resolve to [`Theme::Light`].
#[cfg(feature = "ssr")]
#[must_use]
pub fn request_theme() -> Theme {
    use axum_extra::extract::cookie::{Cookie, CookieJar};

    let Some(parts) = use_context::<http::request::Parts>() else {
        return Theme::default();
    };
    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(THEME_COOKIE)
        .map(Cookie::value)
        .map(Theme::from_cookie_value)
        .unwrap_or_default()
}

/// Theme used for the first render on the current side.
///
/// Server renders resolve the request cookie; hydrated renders read the
/// `data-theme` attribute the server stamped on `<html>`.
#[must_use]
pub fn initial_theme() -> Theme {
    #[cfg(feature = "ssr")]
    {
        request_theme()
    }
    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    {
        document_theme()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        Theme::default()
    }
}

/// Read the theme currently applied to the document root.
#[must_use]
pub fn document_theme() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute("data-theme"))
            .map(|raw| Theme::from_cookie_value(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Write the preference cookie from the browser.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(html_doc) = doc.dyn_into::<web_sys::HtmlDocument>() {
            let _ = html_doc.set_cookie(&cookie_assignment(theme));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, update the document, and persist the cookie.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}
