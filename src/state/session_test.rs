use super::*;

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_has_no_token() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_with_token_is_authenticated() {
    let state = SessionState {
        token: Some("t-1".to_owned()),
    };
    assert!(state.is_authenticated());
}

// Outside the browser there is no storage, so restoring yields an
// unauthenticated session.
#[test]
fn from_storage_without_browser_is_empty() {
    assert_eq!(SessionState::from_storage(), SessionState::default());
    assert!(read_token().is_none());
}
