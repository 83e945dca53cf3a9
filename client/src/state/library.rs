//! Shader library list state.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use crate::net::types::ShaderSummary;

/// State for the library page list.
#[derive(Clone, Debug, Default)]
pub struct LibraryState {
    pub items: Vec<ShaderSummary>,
    pub loading: bool,
    /// True once a fetch has completed, successfully or not.
    pub fetched: bool,
    pub error: Option<String>,
    /// Id of a just-created shader; the page watches this and navigates.
    pub created_id: Option<String>,
}

impl LibraryState {
    /// Replace the list after a successful fetch.
    pub fn loaded(&mut self, items: Vec<ShaderSummary>) {
        self.items = items;
        self.loading = false;
        self.fetched = true;
        self.error = None;
    }

    /// Record a failed fetch, keeping any previously loaded items.
    pub fn failed(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.fetched = true;
        self.error = Some(error.into());
    }

    /// Drop a shader from the list by id.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|shader| shader.id != id);
    }
}
