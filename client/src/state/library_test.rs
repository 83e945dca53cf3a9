use super::*;

fn summary(id: &str, name: &str) -> ShaderSummary {
    ShaderSummary {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

#[test]
fn default_state_is_empty_and_unfetched() {
    let state = LibraryState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.fetched);
    assert!(state.error.is_none());
    assert!(state.created_id.is_none());
}

#[test]
fn loaded_replaces_items_and_clears_error() {
    let mut state = LibraryState {
        loading: true,
        error: Some("earlier failure".to_owned()),
        ..LibraryState::default()
    };
    state.loaded(vec![summary("a", "Plasma"), summary("b", "Waves")]);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert!(state.fetched);
    assert!(state.error.is_none());
}

#[test]
fn failed_keeps_previously_loaded_items() {
    let mut state = LibraryState::default();
    state.loaded(vec![summary("a", "Plasma")]);
    state.failed("list shaders failed: 500");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("list shaders failed: 500"));
    assert!(state.fetched);
}

#[test]
fn remove_drops_only_matching_id() {
    let mut state = LibraryState::default();
    state.loaded(vec![summary("a", "Plasma"), summary("b", "Waves")]);
    state.remove("a");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "b");
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut state = LibraryState::default();
    state.loaded(vec![summary("a", "Plasma")]);
    state.remove("missing");
    assert_eq!(state.items.len(), 1);
}
