//! Shared client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! The root `App` component owns one `RwSignal` per state struct and
//! provides them via context; pages and components read and update those
//! signals instead of threading props through the tree.

pub mod editor;
pub mod library;
pub mod toast;
