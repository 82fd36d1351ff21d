//! Read-once post-login redirect slot.
//!
//! The protected guard records the path an anonymous visitor was bounced
//! from; the public guard consumes it once the visitor has signed in.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::util::storage::KeyValueStore;

/// Storage key for the pending redirect (lives in `sessionStorage`).
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirectAfterLogin";

/// Single-slot pending redirect over a key-value store.
pub struct PendingRedirect<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> PendingRedirect<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Remember `path`, replacing any earlier entry. Returns `false` (and
    /// stores nothing) for anything that is not a same-site absolute path.
    pub fn record(&self, path: &str) -> bool {
        if !is_local_path(path) {
            return false;
        }
        self.store.set(REDIRECT_AFTER_LOGIN_KEY, path);
        true
    }

    /// Read and clear the entry.
    pub fn take(&self) -> Option<String> {
        self.store
            .take(REDIRECT_AFTER_LOGIN_KEY)
            .filter(|path| is_local_path(path))
    }
}

/// `/dashboard` yes; `//evil.example`, `https://...` and `dashboard` no.
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
