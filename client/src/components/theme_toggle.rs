//! Theme toggle button for the top bar.

use leptos::prelude::*;

use crate::theme::Theme;

/// Button that flips between light and dark mode and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class="btn top-bar__theme-toggle"
            on:click=move |_| {
                let next = crate::theme::toggle(theme.get());
                theme.set(next);
            }
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
