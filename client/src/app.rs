//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! `shell` renders the full HTML document on the server: the request's
//! theme lands on `<html data-theme>` and the startup-resolved site
//! metadata lands in `<head>`, so both are settled before any component
//! runs in the browser. `App` owns the shared state contexts; the theme
//! provider is installed before the toast provider so notification
//! surfaces can always resolve the active theme.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::components::top_bar::TopBar;
use crate::pages::{library::LibraryPage, studio::StudioPage};
use crate::site::{self, SiteMeta};
use crate::state::{editor::EditorState, library::LibraryState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let theme = crate::theme::initial_theme();
    let meta = use_context::<SiteMeta>().unwrap_or_default();
    let canonical = meta.canonical();
    let og_image = meta.og_image_url();

    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=theme.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="canonical" href=canonical.clone()/>
                <link rel="icon" href="/assets/favicon.svg" type="image/svg+xml"/>
                <Meta name="description" content=site::SITE_DESCRIPTION/>
                <Meta property="og:type" content="website"/>
                <Meta property="og:site_name" content=site::SITE_TITLE/>
                <Meta property="og:title" content=site::SITE_TITLE/>
                <Meta property="og:description" content=site::SITE_DESCRIPTION/>
                <Meta property="og:url" content=canonical/>
                <Meta property="og:image" content=og_image.clone()/>
                <Meta property="og:image:width" content=site::OG_IMAGE_WIDTH.to_string()/>
                <Meta property="og:image:height" content=site::OG_IMAGE_HEIGHT.to_string()/>
                <Meta name="twitter:card" content=site::TWITTER_CARD/>
                <Meta name="twitter:title" content=site::SITE_TITLE/>
                <Meta name="twitter:description" content=site::SITE_DESCRIPTION/>
                <Meta name="twitter:image" content=og_image/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. Theme
    // first, then toasts, then page state.
    let theme = RwSignal::new(crate::theme::initial_theme());
    let toasts = RwSignal::new(ToastState::default());
    let library = RwSignal::new(LibraryState::default());
    let editor = RwSignal::new(EditorState::default());

    provide_context(theme);
    provide_context(toasts);
    provide_context(library);
    provide_context(editor);

    view! {
        <Stylesheet id="leptos" href="/pkg/shaderstudio.css"/>
        <Title text=site::SITE_TITLE/>

        <Router>
            <TopBar/>
            <main class="studio-shell">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LibraryPage/>
                    <Route path=(StaticSegment("studio"), ParamSegment("id")) view=StudioPage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
