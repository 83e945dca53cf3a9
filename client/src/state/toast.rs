//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Pages push outcomes here and the `Toaster` component owns rendering and
//! expiry, keeping notification plumbing out of page state. Ids are
//! monotonic so expiry timers can target a toast without holding a
//! reference to it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Most toasts kept on screen; pushing beyond this evicts the oldest.
pub const MAX_TOASTS: usize = 4;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast card.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Session-unique id; later toasts always carry larger ids.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of active toasts plus the id counter.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    ///
    /// Ids start at 1 and never repeat within a session. The queue is
    /// capped at [`MAX_TOASTS`]; pushing past the cap evicts the oldest
    /// entry.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with `id`. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Push a toast onto the shared context signal.
pub fn push_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    toasts.update(|state| {
        state.push(kind, message);
    });
}
