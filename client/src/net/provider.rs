//! Auth provider capability set and its error taxonomy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session hook and signup flow only talk to the remote identity service
//! through `AuthProvider`, so both run against `GoTrueClient` in the browser
//! and against an in-memory fake in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ProviderError>`. `ProviderError::kind`
//! folds provider codes and messages into the handful of conditions the UI
//! distinguishes; anything unrecognized stays `Other` and keeps its message.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use super::listeners::{SessionCallback, Subscription};
use super::types::{Session, SignUpOptions, SignUpResponse};

/// Remote identity service consumed by the client.
pub trait AuthProvider {
    /// One-shot lookup of the session the provider currently holds.
    async fn get_current_session(&self) -> Result<Option<Session>, ProviderError>;

    /// Create an account. The response carries the new user and, when the
    /// provider skips email confirmation, a live session.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: &SignUpOptions,
    ) -> Result<SignUpResponse, ProviderError>;

    /// Password sign-in. `Ok(None)` means the provider accepted the request
    /// but did not open a session.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Option<Session>, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Register for session lifecycle events. Dropping (or calling
    /// `unsubscribe` on) the returned handle releases the listener.
    fn on_session_change(&self, callback: SessionCallback) -> Subscription;
}

/// Failure reported by (or on the way to) the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with an error body.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response could not be decoded.
    #[error("unexpected provider response: {0}")]
    Decode(String),
    /// No provider in this environment (server-side rendering).
    #[error("auth provider not available")]
    Unavailable,
}

/// Conditions the UI maps to distinct messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderErrorKind {
    UserAlreadyExists,
    WeakPassword,
    InvalidEmail,
    InvalidEmailFormat,
    InvalidCredentials,
    EmailNotConfirmed,
    Network,
    Unknown,
    Other,
}

impl ProviderError {
    pub fn api(status: u16, code: Option<&str>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.map(str::to_owned),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::Api { code, message, .. } => classify(code.as_deref(), message),
            Self::Network(_) => ProviderErrorKind::Network,
            Self::Decode(_) | Self::Unavailable => ProviderErrorKind::Unknown,
        }
    }
}

fn classify(code: Option<&str>, message: &str) -> ProviderErrorKind {
    let by_code = match code {
        Some("user_already_exists" | "email_exists") => Some(ProviderErrorKind::UserAlreadyExists),
        Some("weak_password") => Some(ProviderErrorKind::WeakPassword),
        Some("email_address_invalid") => Some(ProviderErrorKind::InvalidEmail),
        Some("invalid_credentials") => Some(ProviderErrorKind::InvalidCredentials),
        Some("email_not_confirmed") => Some(ProviderErrorKind::EmailNotConfirmed),
        _ => None,
    };
    if let Some(kind) = by_code {
        return kind;
    }

    let lower = message.to_ascii_lowercase();
    if lower.contains("already registered") || lower.contains("already exists") {
        ProviderErrorKind::UserAlreadyExists
    } else if lower.contains("password") && (lower.contains("weak") || lower.contains("at least")) {
        ProviderErrorKind::WeakPassword
    } else if lower.contains("invalid format") || lower.contains("unable to validate email") {
        ProviderErrorKind::InvalidEmailFormat
    } else if lower.contains("email") && lower.contains("invalid") {
        ProviderErrorKind::InvalidEmail
    } else if lower.contains("invalid login credentials") {
        ProviderErrorKind::InvalidCredentials
    } else if lower.contains("email not confirmed") {
        ProviderErrorKind::EmailNotConfirmed
    } else if lower.contains("failed to fetch") || lower.contains("network") {
        ProviderErrorKind::Network
    } else {
        ProviderErrorKind::Other
    }
}
