//! Top navigation bar shared by all routes.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::site;

/// Brand, navigation, and the theme toggle.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href="/">
                {site::SITE_TITLE}
            </a>
            <span class="top-bar__spacer" aria-hidden="true"></span>
            <a class="top-bar__nav-link" href="/">
                "Library"
            </a>
            <ThemeToggle/>
        </header>
    }
}
