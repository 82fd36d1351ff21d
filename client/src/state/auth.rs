//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. `SessionHook` is the only
//! writer; everything else reads snapshots through the `SessionContext`
//! signal.
//!
//! INVARIANTS
//! ==========
//! The user is read out of the session, so "user present" and "session
//! present" can never disagree. `loading` only goes from `true` to `false`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::provider::ProviderError;
use crate::net::types::{Session, SessionEvent, User};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    session: Option<Session>,
    /// `true` until the initial session lookup has resolved.
    pub loading: bool,
    /// Initial lookup failure, if any.
    pub error: Option<ProviderError>,
}

impl Default for AuthState {
    /// A fresh hook instance: resolving, nobody signed in.
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    /// Resolved state with nobody signed in.
    #[cfg(test)]
    pub fn signed_out() -> Self {
        Self {
            session: None,
            loading: false,
            error: None,
        }
    }

    /// Resolved state for an active session.
    #[cfg(test)]
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Apply the outcome of the initial session lookup.
    pub fn resolve(&mut self, result: Result<Option<Session>, ProviderError>) {
        match result {
            Ok(session) => self.session = session,
            Err(err) => {
                self.session = None;
                self.error = Some(err);
            }
        }
        self.loading = false;
    }

    /// Apply a provider-pushed lifecycle event.
    pub fn apply_event(&mut self, event: SessionEvent, session: Option<Session>) {
        if event.carries_session() {
            self.session = session;
        } else {
            self.session = None;
        }
    }

    /// Drop the cached session without touching `loading` or `error`.
    pub fn clear(&mut self) {
        self.session = None;
    }
}
