use super::*;

fn doc(id: &str, name: &str, source: &str) -> ShaderDoc {
    ShaderDoc {
        id: id.to_owned(),
        name: name.to_owned(),
        source: source.to_owned(),
    }
}

#[test]
fn load_clears_transient_flags() {
    let mut state = EditorState {
        loading: true,
        saving: true,
        dirty: true,
        error: Some("stale".to_owned()),
        ..EditorState::default()
    };
    state.load(doc("a", "Plasma", "// source"));
    assert_eq!(state.shader_id.as_deref(), Some("a"));
    assert_eq!(state.name, "Plasma");
    assert_eq!(state.source, "// source");
    assert!(!state.loading);
    assert!(!state.saving);
    assert!(!state.dirty);
    assert!(state.error.is_none());
}

#[test]
fn edits_mark_the_document_dirty() {
    let mut state = EditorState::default();
    state.load(doc("a", "Plasma", "// source"));

    state.edit_name("Plasma v2".to_owned());
    assert!(state.dirty);

    state.saved();
    assert!(!state.dirty);

    state.edit_source("// updated".to_owned());
    assert!(state.dirty);
    assert_eq!(state.source, "// updated");
}

#[test]
fn saved_clears_saving_and_dirty() {
    let mut state = EditorState {
        saving: true,
        dirty: true,
        ..EditorState::default()
    };
    state.saved();
    assert!(!state.saving);
    assert!(!state.dirty);
}

#[test]
fn fail_records_error_and_stops_loading() {
    let mut state = EditorState {
        loading: true,
        ..EditorState::default()
    };
    state.fail("shader not found");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("shader not found"));
}

#[test]
fn reset_for_scopes_to_new_id_and_discards_document() {
    let mut state = EditorState::default();
    state.load(doc("a", "Plasma", "// source"));
    state.edit_source("// edited".to_owned());

    state.reset_for(Some("b".to_owned()));
    assert_eq!(state.shader_id.as_deref(), Some("b"));
    assert!(state.loading);
    assert!(state.name.is_empty());
    assert!(state.source.is_empty());
    assert!(!state.dirty);
}

#[test]
fn reset_for_none_clears_the_id() {
    let mut state = EditorState::default();
    state.load(doc("a", "Plasma", "// source"));
    state.reset_for(None);
    assert!(state.shader_id.is_none());
}
