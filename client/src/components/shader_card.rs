//! Reusable card component for shader list items in the library grid.
//!
//! DESIGN
//! ======
//! Keeps shader list presentation consistent while centralizing the
//! navigation affordance; deletion stays a callback so the page owns the
//! API call and list update.

use leptos::prelude::*;

/// A clickable card representing a stored shader.
#[component]
pub fn ShaderCard(
    id: String,
    name: String,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let href = format!("/studio/{id}");
    let on_delete_click = Callback::new({
        let id = id.clone();
        move |()| {
            if let Some(on_delete) = on_delete.as_ref() {
                on_delete.run(id.clone());
            }
        }
    });

    view! {
        <a class="shader-card" href=href>
            <span class="shader-card__name">{name}</span>
            <span class="shader-card__id">{id}</span>
            <button
                class="shader-card__delete"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_delete_click.run(());
                }
                title="Delete shader"
                aria-label="Delete shader"
            >
                "✕"
            </button>
        </a>
    }
}
