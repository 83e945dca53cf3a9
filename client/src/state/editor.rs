//! Studio editor state for a single shader document.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::ShaderDoc;

/// State for the studio editor page.
///
/// `dirty` tracks unsaved edits so the save control can reflect pending
/// work without diffing the document text.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub shader_id: Option<String>,
    pub name: String,
    pub source: String,
    pub loading: bool,
    pub saving: bool,
    pub dirty: bool,
    pub error: Option<String>,
}

impl EditorState {
    /// Load a fetched document, clearing transient flags.
    pub fn load(&mut self, doc: ShaderDoc) {
        self.shader_id = Some(doc.id);
        self.name = doc.name;
        self.source = doc.source;
        self.loading = false;
        self.saving = false;
        self.dirty = false;
        self.error = None;
    }

    /// Record a load failure.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    /// Apply a name edit from the toolbar input.
    pub fn edit_name(&mut self, name: String) {
        self.name = name;
        self.dirty = true;
    }

    /// Apply a source edit from the editor textarea.
    pub fn edit_source(&mut self, source: String) {
        self.source = source;
        self.dirty = true;
    }

    /// Mark a completed save.
    pub fn saved(&mut self) {
        self.saving = false;
        self.dirty = false;
    }

    /// Reset to a loading state scoped to `id`, discarding any previous
    /// document.
    pub fn reset_for(&mut self, id: Option<String>) {
        *self = Self {
            shader_id: id,
            loading: true,
            ..Self::default()
        };
    }
}
