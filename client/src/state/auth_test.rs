use super::*;
use crate::net::types::User;

fn session(id: &str) -> Session {
    Session {
        access_token: format!("at-{id}"),
        refresh_token: format!("rt-{id}"),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: User {
            id: id.to_owned(),
            email: Some(format!("{id}@example.com")),
            email_confirmed_at: None,
            identities: None,
        },
    }
}

fn assert_paired(state: &AuthState) {
    assert_eq!(state.user().is_some(), state.session().is_some());
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user().is_none());
    assert!(state.session().is_none());
    assert!(state.error.is_none());
}

#[test]
fn signed_in_constructor_exposes_session_user() {
    let state = AuthState::signed_in(session("u1"));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn resolve_with_session_sets_user() {
    let mut state = AuthState::default();
    state.resolve(Ok(Some(session("u1"))));
    assert!(!state.loading);
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
    assert!(state.error.is_none());
}

#[test]
fn resolve_without_session_is_signed_out() {
    let mut state = AuthState::default();
    state.resolve(Ok(None));
    assert_eq!(state, AuthState::signed_out());
}

#[test]
fn resolve_failure_sets_error_and_stays_signed_out() {
    let mut state = AuthState::default();
    state.resolve(Err(ProviderError::Network("offline".to_owned())));
    assert!(!state.loading);
    assert!(state.user().is_none());
    assert_eq!(state.error, Some(ProviderError::Network("offline".to_owned())));
}

// =============================================================
// Events
// =============================================================

#[test]
fn session_bearing_events_replace_session() {
    for event in [SessionEvent::SignedIn, SessionEvent::TokenRefreshed, SessionEvent::UserUpdated] {
        let mut state = AuthState::signed_in(session("old"));
        state.apply_event(event, Some(session("new")));
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("new"), "{event:?}");
    }
}

#[test]
fn sign_out_events_clear_session() {
    for event in [SessionEvent::SignedOut, SessionEvent::UserDeleted] {
        let mut state = AuthState::signed_in(session("u1"));
        state.apply_event(event, Some(session("ignored")));
        assert!(state.user().is_none(), "{event:?}");
        assert!(state.session().is_none(), "{event:?}");
    }
}

#[test]
fn events_do_not_touch_loading_or_error() {
    let mut state = AuthState::default();
    state.resolve(Err(ProviderError::Unavailable));
    state.apply_event(SessionEvent::SignedIn, Some(session("u1")));
    assert!(!state.loading);
    assert_eq!(state.error, Some(ProviderError::Unavailable));
    assert!(state.is_authenticated());
}

#[test]
fn user_and_session_stay_paired_across_any_event_sequence() {
    let events = [
        (SessionEvent::SignedIn, Some(session("a"))),
        (SessionEvent::TokenRefreshed, Some(session("a"))),
        (SessionEvent::SignedIn, None),
        (SessionEvent::UserUpdated, Some(session("b"))),
        (SessionEvent::UserDeleted, None),
        (SessionEvent::SignedOut, Some(session("c"))),
        (SessionEvent::SignedIn, Some(session("d"))),
    ];
    let mut state = AuthState::default();
    state.resolve(Ok(None));
    for (event, s) in events {
        state.apply_event(event, s);
        assert_paired(&state);
    }
}

#[test]
fn clear_keeps_loading_and_error() {
    let mut state = AuthState::signed_in(session("u1"));
    state.error = Some(ProviderError::Unavailable);
    state.clear();
    assert!(!state.is_authenticated());
    assert!(state.error.is_some());
}
