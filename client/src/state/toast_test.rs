use super::*;

// =============================================================================
// ID ASSIGNMENT
// =============================================================================

#[test]
fn push_assigns_sequential_ids_from_one() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "first");
    let second = state.push(ToastKind::Success, "second");
    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn ids_keep_growing_after_dismissal() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "first");
    state.dismiss(first);
    let second = state.push(ToastKind::Info, "second");
    assert_eq!(second, 2);
}

// =============================================================================
// QUEUE CAP
// =============================================================================

#[test]
fn push_caps_queue_and_evicts_oldest() {
    let mut state = ToastState::default();
    for n in 0..MAX_TOASTS + 2 {
        state.push(ToastKind::Info, format!("toast {n}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].id, 3);
    assert_eq!(state.toasts[MAX_TOASTS - 1].id, (MAX_TOASTS + 2) as u64);
}

#[test]
fn queue_within_cap_keeps_every_toast() {
    let mut state = ToastState::default();
    for n in 0..MAX_TOASTS {
        state.push(ToastKind::Error, format!("toast {n}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].id, 1);
}

// =============================================================================
// DISMISSAL
// =============================================================================

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "keep");
    let second = state.push(ToastKind::Error, "drop");
    state.dismiss(second);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, first);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "kept");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

// =============================================================================
// PRESENTATION
// =============================================================================

#[test]
fn kind_maps_to_css_modifier() {
    assert_eq!(ToastKind::Info.css_class(), "toast--info");
    assert_eq!(ToastKind::Success.css_class(), "toast--success");
    assert_eq!(ToastKind::Error.css_class(), "toast--error");
}

#[test]
fn push_preserves_message_and_kind() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "Shader saved");
    assert_eq!(state.toasts[0].message, "Shader saved");
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
}
