//! Studio page: single-shader editor with an explicit save action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route-scoped orchestration for `/studio/{id}`: reloads the document
//! whenever the route param changes and routes load/save outcomes through
//! the toast context. Source text stays opaque; nothing here compiles or
//! renders it.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::state::editor::EditorState;
use crate::state::toast::{self, ToastKind, ToastState};

/// Studio editor page for one shader document.
#[component]
pub fn StudioPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();

    let shader_id = move || params.read().get("id");

    // The editor signal outlives this page, so reload whenever the route
    // param stops matching the loaded document.
    let last_loaded_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        let next_id = shader_id();
        if last_loaded_id.get_untracked() == next_id {
            return;
        }
        last_loaded_id.set(next_id.clone());
        editor.update(|e| e.reset_for(next_id.clone()));
        let Some(id) = next_id else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_shader(&id).await {
                Some(doc) => editor.update(|e| e.load(doc)),
                None => editor.update(|e| e.fail("shader not found")),
            }
        });
    });

    let on_save = move |_| {
        let state = editor.get_untracked();
        let Some(id) = state.shader_id else {
            return;
        };
        if state.saving {
            return;
        }
        let name = state.name.trim().to_owned();
        if name.is_empty() {
            toast::push_toast(toasts, ToastKind::Error, "Shader name cannot be empty");
            return;
        }
        editor.update(|e| e.saving = true);
        let source = state.source;
        leptos::task::spawn_local(async move {
            match api::update_shader(&id, &name, &source).await {
                Ok(()) => {
                    editor.update(|e| e.saved());
                    toast::push_toast(toasts, ToastKind::Success, "Shader saved");
                }
                Err(error) => {
                    editor.update(|e| e.saving = false);
                    toast::push_toast(toasts, ToastKind::Error, error);
                }
            }
        });
    };

    let page_title = move || {
        let name = editor.get().name;
        if name.is_empty() {
            crate::site::SITE_TITLE.to_owned()
        } else {
            format!("{name} | {}", crate::site::SITE_TITLE)
        }
    };

    view! {
        <Title text=page_title/>
        <div class="studio-page">
            <Show
                when=move || !editor.get().loading
                fallback=move || view! { <p class="studio-page__loading">"Loading shader..."</p> }
            >
                <Show
                    when=move || editor.get().error.is_none()
                    fallback=move || {
                        view! {
                            <div class="studio-page__error">
                                <p>{move || editor.get().error.unwrap_or_default()}</p>
                                <a class="btn" href="/">
                                    "Back to library"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="studio-page__toolbar toolbar">
                        <input
                            class="studio-page__name"
                            type="text"
                            prop:value=move || editor.get().name
                            on:input=move |ev| {
                                editor.update(|e| e.edit_name(event_target_value(&ev)));
                            }
                            aria-label="Shader name"
                        />
                        <span class="toolbar__spacer"></span>
                        <Show when=move || editor.get().dirty>
                            <span class="studio-page__dirty">"Unsaved changes"</span>
                        </Show>
                        <button
                            class="btn btn--primary studio-page__save"
                            on:click=on_save
                            disabled=move || editor.get().saving
                        >
                            {move || if editor.get().saving { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                    <textarea
                        class="studio-page__source"
                        prop:value=move || editor.get().source
                        on:input=move |ev| {
                            editor.update(|e| e.edit_source(event_target_value(&ev)));
                        }
                        spellcheck="false"
                        aria-label="Shader source"
                    ></textarea>
                </Show>
            </Show>
        </div>
    }
}
