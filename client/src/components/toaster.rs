//! Toast stack renderer with click-to-dismiss and timed expiry.
//!
//! DESIGN
//! ======
//! Rendering is pure signal projection; expiry timers only exist in the
//! browser. A high-water mark over the monotonic toast ids ensures each
//! toast gets exactly one timer even as the queue evicts and re-renders.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// How long a toast stays up before auto-dismissal, in milliseconds.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 4_000;

/// Renders the active toast queue in a fixed overlay stack.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        let scheduled = RwSignal::new(0_u64);
        Effect::new(move || {
            for toast in &toasts.get().toasts {
                if toast.id <= scheduled.get_untracked() {
                    continue;
                }
                scheduled.set(toast.id);
                let id = toast.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS))
                        .await;
                    toasts.update(|state| state.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = format!("toast {}", toast.kind.css_class());
                        let id = toast.id;
                        view! {
                            <div
                                class=class
                                role="status"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
