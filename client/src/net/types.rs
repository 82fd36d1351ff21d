//! Auth-provider wire types shared by the session hook, guards and signup flow.
//!
//! DESIGN
//! ======
//! These mirror the GoTrue REST payloads so a `Session` decoded from the
//! provider can be persisted to browser storage and read back unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity record owned by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user id (UUID string).
    pub id: String,
    /// Primary email, absent for phone-only accounts.
    #[serde(default)]
    pub email: Option<String>,
    /// Set once the confirmation link has been followed.
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    /// Linked identities. GoTrue answers a sign-up for an existing,
    /// confirmed email with an obfuscated user whose list is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identities: Option<Vec<UserIdentity>>,
}

impl User {
    /// Email address or an empty string.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// `true` when the provider signalled an already-registered email.
    pub fn is_obfuscated_duplicate(&self) -> bool {
        self.identities.as_ref().is_some_and(Vec::is_empty)
    }
}

/// One linked identity (email, oauth, ...) on a provider user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub provider: String,
}

/// Provider-issued session. Always carries the user it authenticates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds at issue time.
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry in seconds since the Unix epoch.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the provider omitted it.
    #[must_use]
    pub fn stamped(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() && self.expires_in > 0 {
            self.expires_at = Some(now_secs + self.expires_in);
        }
        self
    }

    /// Whether the access token is expired (or within `margin_secs` of it).
    pub fn is_expired(&self, now_secs: i64, margin_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at - margin_secs <= now_secs)
    }
}

/// Session lifecycle events pushed by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    UserDeleted,
}

impl SessionEvent {
    /// Parse a provider event name. Names outside the recognized set
    /// (`INITIAL_SESSION`, `PASSWORD_RECOVERY`, ...) yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "SIGNED_IN" => Some(Self::SignedIn),
            "SIGNED_OUT" => Some(Self::SignedOut),
            "TOKEN_REFRESHED" => Some(Self::TokenRefreshed),
            "USER_UPDATED" => Some(Self::UserUpdated),
            "USER_DELETED" => Some(Self::UserDeleted),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
            Self::UserUpdated => "USER_UPDATED",
            Self::UserDeleted => "USER_DELETED",
        }
    }

    /// Events after which the provider has a live session.
    pub fn carries_session(self) -> bool {
        matches!(self, Self::SignedIn | Self::TokenRefreshed | Self::UserUpdated)
    }
}

/// Options for account creation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpOptions {
    /// Where the confirmation email link should land.
    pub email_redirect_to: Option<String>,
}

/// Result of a successful account-creation call.
///
/// `session` is only present when the provider signs the user in immediately
/// (email confirmation disabled).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpResponse {
    pub user: Option<User>,
    pub session: Option<Session>,
}
