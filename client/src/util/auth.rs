//! Route-guard decisions shared by `ProtectedRoute` and `PublicRoute`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior. The decision
//! functions are plain Rust over `AuthState` and a `KeyValueStore`, so the
//! Leptos components only translate a `GuardDecision` into rendering and
//! navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;
use crate::state::redirect::PendingRedirect;
use crate::util::storage::KeyValueStore;

/// Where `ProtectedRoute` sends anonymous visitors by default.
pub const DEFAULT_LOGIN_PATH: &str = "/login";
/// Where `PublicRoute` sends signed-in users with no pending redirect.
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still resolving; show the waiting indicator.
    Wait,
    Render,
    Redirect(String),
}

/// Decide for a page that requires a signed-in user.
///
/// An anonymous visitor's `current_path` is stored as the pending redirect
/// (unless it is the login page itself) before redirecting to `login_path`.
pub fn protected_decision(
    state: &AuthState,
    current_path: &str,
    login_path: &str,
    store: &dyn KeyValueStore,
) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if state.user().is_some() {
        return GuardDecision::Render;
    }
    if path_only(current_path) != path_only(login_path) {
        PendingRedirect::new(store).record(current_path);
    }
    GuardDecision::Redirect(login_path.to_owned())
}

/// Decide for a page that signed-in users must not see (login, signup).
///
/// A signed-in user goes to the pending redirect, consuming it, or to
/// `default_path` when none is stored.
pub fn public_decision(state: &AuthState, default_path: &str, store: &dyn KeyValueStore) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if state.user().is_none() {
        return GuardDecision::Render;
    }
    let target = PendingRedirect::new(store)
        .take()
        .unwrap_or_else(|| default_path.to_owned());
    GuardDecision::Redirect(target)
}

fn path_only(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Rebuild the in-app path the router is showing, query string included.
pub fn current_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}
