//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and notification surfaces while reading
//! shared state from Leptos context providers.

pub mod shader_card;
pub mod theme_toggle;
pub mod toaster;
pub mod top_bar;
