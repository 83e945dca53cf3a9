//! Library page listing shaders with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the shader inventory over REST
//! once per mount and coordinates the create->navigate flow through the
//! shared library state.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::shader_card::ShaderCard;
use crate::net::api;
use crate::state::library::LibraryState;
use crate::state::toast::{self, ToastKind, ToastState};

/// Landing page: the shader grid with create and delete dialogs.
#[component]
pub fn LibraryPage() -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let navigate = use_navigate();

    // Effects only run in the browser, so SSR output stays in the
    // loading state and hydration performs the first fetch.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() {
            return;
        }
        requested_list.set(true);
        library.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match api::list_shaders().await {
                Ok(items) => library.update(|s| s.loaded(items)),
                Err(error) => library.update(|s| s.failed(error)),
            }
        });
    });

    // Create-shader dialog state.
    let show_create = RwSignal::new(false);
    let new_shader_name = RwSignal::new(String::new());
    let delete_shader_id = RwSignal::new(None::<String>);

    let on_create = move |_| {
        show_create.set(true);
        new_shader_name.set(String::new());
    };

    let on_cancel = Callback::new(move |_| show_create.set(false));
    let on_delete_cancel = Callback::new(move |_| delete_shader_id.set(None));
    let on_shader_delete_request =
        Callback::new(move |id: String| delete_shader_id.set(Some(id)));

    Effect::new(move || {
        if let Some(shader_id) = library.get().created_id {
            library.update(|s| s.created_id = None);
            navigate(&format!("/studio/{shader_id}"), NavigateOptions::default());
        }
    });

    view! {
        <Title text=page_title()/>
        <div class="library-page">
            <header class="library-page__header toolbar">
                <span class="toolbar__page-name">"Library"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <button class="btn btn--primary toolbar__new-shader" on:click=on_create>
                    "+ New Shader"
                </button>
                <span class="toolbar__spacer"></span>
            </header>

            <div class="library-page__grid">
                <Show when=move || library.get().error.is_some()>
                    <p class="library-page__error">
                        {move || library.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !library.get().loading
                    fallback=move || view! { <p>"Loading shaders..."</p> }
                >
                    <Show
                        when=move || !library.get().items.is_empty()
                        fallback=move || {
                            view! {
                                <p class="library-page__empty">
                                    "No shaders yet. Create one to get started."
                                </p>
                            }
                        }
                    >
                        <div class="library-page__cards">
                            {move || {
                                library
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|shader| {
                                        view! {
                                            <ShaderCard
                                                id=shader.id
                                                name=shader.name
                                                on_delete=on_shader_delete_request
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
            <Show when=move || show_create.get()>
                <CreateShaderDialog name=new_shader_name on_cancel=on_cancel/>
            </Show>
            <Show when=move || delete_shader_id.get().is_some()>
                <DeleteShaderDialog shader_id=delete_shader_id on_cancel=on_delete_cancel/>
            </Show>
        </div>
    }
}

fn page_title() -> String {
    format!("Library | {}", crate::site::SITE_TITLE)
}

/// Modal dialog for naming a new shader.
#[component]
fn CreateShaderDialog(name: RwSignal<String>, on_cancel: Callback<()>) -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let submit = Callback::new(move |_| {
        let shader_name = name.get();
        if shader_name.trim().is_empty() {
            return;
        }
        let shader_name = shader_name.trim().to_owned();
        leptos::task::spawn_local(async move {
            match api::create_shader(&shader_name).await {
                Ok(doc) => {
                    toast::push_toast(toasts, ToastKind::Success, "Shader created");
                    library.update(|s| s.created_id = Some(doc.id));
                }
                Err(error) => toast::push_toast(toasts, ToastKind::Error, error),
            }
        });
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Shader"</h2>
                <label class="dialog__label">
                    "Shader Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog before deleting a shader.
#[component]
fn DeleteShaderDialog(
    shader_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let submit = Callback::new(move |_| {
        let Some(id) = shader_id.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_shader(&id).await {
                Ok(()) => {
                    library.update(|s| s.remove(&id));
                    toast::push_toast(toasts, ToastKind::Info, "Shader deleted");
                }
                Err(error) => toast::push_toast(toasts, ToastKind::Error, error),
            }
        });
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Shader"</h2>
                <p class="dialog__danger">
                    "This will permanently delete this shader and its source."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
