use super::*;
use crate::state::redirect::REDIRECT_AFTER_LOGIN_KEY;
use crate::testing::session;
use crate::util::storage::MemoryStore;

fn loading() -> AuthState {
    AuthState::default()
}

fn anonymous() -> AuthState {
    AuthState::signed_out()
}

fn signed_in() -> AuthState {
    AuthState::signed_in(session("u1"))
}

// =============================================================
// Protected
// =============================================================

#[test]
fn protected_waits_while_loading() {
    let store = MemoryStore::new();
    assert_eq!(
        protected_decision(&loading(), "/dashboard", DEFAULT_LOGIN_PATH, &store),
        GuardDecision::Wait
    );
    assert!(store.is_empty());
}

#[test]
fn protected_redirects_anonymous_and_records_path() {
    let store = MemoryStore::new();
    let decision = protected_decision(&anonymous(), "/view-roadmap", DEFAULT_LOGIN_PATH, &store);
    assert_eq!(decision, GuardDecision::Redirect("/login".to_owned()));
    assert_eq!(store.get(REDIRECT_AFTER_LOGIN_KEY).as_deref(), Some("/view-roadmap"));
}

#[test]
fn protected_renders_for_user_without_recording() {
    let store = MemoryStore::new();
    assert_eq!(
        protected_decision(&signed_in(), "/view-roadmap", DEFAULT_LOGIN_PATH, &store),
        GuardDecision::Render
    );
    assert!(store.is_empty());
}

#[test]
fn protected_honors_custom_login_path() {
    let store = MemoryStore::new();
    let decision = protected_decision(&anonymous(), "/profile", "/auth/sign-in", &store);
    assert_eq!(decision, GuardDecision::Redirect("/auth/sign-in".to_owned()));
}

#[test]
fn protected_keeps_query_in_recorded_path() {
    let store = MemoryStore::new();
    protected_decision(&anonymous(), "/profile?tab=goals", DEFAULT_LOGIN_PATH, &store);
    assert_eq!(store.get(REDIRECT_AFTER_LOGIN_KEY).as_deref(), Some("/profile?tab=goals"));
}

#[test]
fn protected_does_not_record_login_page() {
    let store = MemoryStore::new();
    protected_decision(&anonymous(), "/login?next=1", DEFAULT_LOGIN_PATH, &store);
    assert!(store.is_empty());
}

#[test]
fn protected_with_init_error_behaves_as_anonymous() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.resolve(Err(crate::net::provider::ProviderError::Unavailable));
    assert_eq!(
        protected_decision(&state, "/dashboard", DEFAULT_LOGIN_PATH, &store),
        GuardDecision::Redirect("/login".to_owned())
    );
}

// =============================================================
// Public
// =============================================================

#[test]
fn public_waits_while_loading() {
    let store = MemoryStore::new();
    store.set(REDIRECT_AFTER_LOGIN_KEY, "/view-roadmap");
    assert_eq!(
        public_decision(&loading(), DEFAULT_AUTHENTICATED_PATH, &store),
        GuardDecision::Wait
    );
    assert!(!store.is_empty());
}

#[test]
fn public_renders_for_anonymous() {
    let store = MemoryStore::new();
    store.set(REDIRECT_AFTER_LOGIN_KEY, "/view-roadmap");
    assert_eq!(
        public_decision(&anonymous(), DEFAULT_AUTHENTICATED_PATH, &store),
        GuardDecision::Render
    );
    assert_eq!(store.get(REDIRECT_AFTER_LOGIN_KEY).as_deref(), Some("/view-roadmap"));
}

#[test]
fn public_consumes_pending_redirect_once() {
    let store = MemoryStore::new();
    store.set(REDIRECT_AFTER_LOGIN_KEY, "/view-roadmap");

    assert_eq!(
        public_decision(&signed_in(), DEFAULT_AUTHENTICATED_PATH, &store),
        GuardDecision::Redirect("/view-roadmap".to_owned())
    );
    assert_eq!(store.get(REDIRECT_AFTER_LOGIN_KEY), None);
    assert_eq!(
        public_decision(&signed_in(), DEFAULT_AUTHENTICATED_PATH, &store),
        GuardDecision::Redirect("/dashboard".to_owned())
    );
}

#[test]
fn public_falls_back_to_custom_default() {
    let store = MemoryStore::new();
    assert_eq!(
        public_decision(&signed_in(), "/view-roadmap", &store),
        GuardDecision::Redirect("/view-roadmap".to_owned())
    );
}

#[test]
fn denied_then_authenticated_round_trip() {
    let store = MemoryStore::new();
    protected_decision(&anonymous(), "/view-roadmap", DEFAULT_LOGIN_PATH, &store);
    assert_eq!(
        public_decision(&signed_in(), DEFAULT_AUTHENTICATED_PATH, &store),
        GuardDecision::Redirect("/view-roadmap".to_owned())
    );
    assert!(store.is_empty());
}

#[test]
fn path_only_strips_query_and_fragment() {
    assert_eq!(path_only("/login?next=/x"), "/login");
    assert_eq!(path_only("/login#top"), "/login");
    assert_eq!(path_only("/login"), "/login");
}

#[test]
fn current_path_appends_query_once() {
    assert_eq!(current_path("/profile", ""), "/profile");
    assert_eq!(current_path("/profile", "tab=goals"), "/profile?tab=goals");
    assert_eq!(current_path("/profile", "?tab=goals"), "/profile?tab=goals");
    assert_eq!(current_path("/profile", "?"), "/profile");
}
