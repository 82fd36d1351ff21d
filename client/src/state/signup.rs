//! Signup flow: form validation, account creation and auto sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::signup` owns the form signals and implements `SignupUi`; this
//! module owns the ordering of checks, provider calls and status changes so
//! the whole flow runs under test against `FakeProvider`.
//!
//! ERROR HANDLING
//! ==============
//! Every path ends in `SignupStatus::Error` or `SignupStatus::Success`.
//! Provider conditions the UI knows about get a fixed message; anything
//! else keeps the provider's own text.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::future::Future;
use std::time::Duration;

use crate::net::provider::{AuthProvider, ProviderError, ProviderErrorKind};
use crate::net::types::SignUpOptions;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Pause between the success message and the success callback.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Raw form input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated credentials with the email normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Run the form checks in order; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns the validation variant of `SignupError` for the first check
    /// that fails.
    pub fn validate(&self) -> Result<Credentials, SignupError> {
        let email = normalize_email(&self.email);
        if email.is_empty() {
            return Err(SignupError::EmailRequired);
        }
        if self.password.is_empty() {
            return Err(SignupError::PasswordRequired);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        Ok(Credentials {
            email,
            password: self.password.clone(),
        })
    }
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Follow-up the error message offers the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupAction {
    SwitchToLogin,
}

/// Why a signup attempt stopped. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Please enter your email address.")]
    EmailRequired,
    #[error("Please enter a password.")]
    PasswordRequired,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
    #[error("An account with this email already exists. Log in instead?")]
    AccountExists,
    #[error("That password is too weak. Use at least 6 characters and mix letters, numbers and symbols.")]
    WeakPassword,
    #[error("That email address was rejected. Check it for typos or use a different address.")]
    InvalidEmail,
    #[error("That email address is not formatted correctly. Use the form name@example.com.")]
    InvalidEmailFormat,
    #[error("We couldn't reach the server. Check your internet connection and try again.")]
    Network,
    #[error("{0}")]
    Provider(String),
    #[error("Something went wrong while creating your account. Please try again.")]
    Unknown,
}

impl SignupError {
    pub fn from_provider(err: &ProviderError) -> Self {
        match err.kind() {
            ProviderErrorKind::UserAlreadyExists => Self::AccountExists,
            ProviderErrorKind::WeakPassword => Self::WeakPassword,
            ProviderErrorKind::InvalidEmail => Self::InvalidEmail,
            ProviderErrorKind::InvalidEmailFormat => Self::InvalidEmailFormat,
            ProviderErrorKind::Network => Self::Network,
            ProviderErrorKind::Unknown => Self::Unknown,
            ProviderErrorKind::InvalidCredentials
            | ProviderErrorKind::EmailNotConfirmed
            | ProviderErrorKind::Other => Self::Provider(err.to_string()),
        }
    }

    pub fn action(&self) -> Option<SignupAction> {
        match self {
            Self::AccountExists => Some(SignupAction::SwitchToLogin),
            _ => None,
        }
    }
}

/// How a successful signup ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Signed in; the success callback follows after the delay.
    SignedIn,
    /// Account exists but auto sign-in failed; the user logs in by hand.
    ManualLogin,
}

impl SignupOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::SignedIn => "Account created! Taking you to your dashboard...",
            Self::ManualLogin => "Account created! Please log in with your new email and password.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Submitting,
    Error(SignupError),
    Success(SignupOutcome),
}

impl SignupStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Error(err) => Some(err.to_string()),
            Self::Success(outcome) => Some(outcome.message().to_owned()),
        }
    }

    pub fn action(&self) -> Option<SignupAction> {
        match self {
            Self::Error(err) => err.action(),
            _ => None,
        }
    }
}

/// Side effects the flow drives on its host view.
pub trait SignupUi {
    fn set_status(&self, status: SignupStatus);
    /// Wipe the email and password inputs.
    fn clear_credentials(&self);
    /// Called once, after `SUCCESS_REDIRECT_DELAY`, when the new user is
    /// signed in.
    fn on_success(&self);
}

fn finish(ui: &impl SignupUi, status: SignupStatus) -> SignupStatus {
    ui.set_status(status.clone());
    status
}

/// Run one signup attempt and return its terminal status.
///
/// `delay` provides the timer for the post-success pause so the browser can
/// use `gloo_timers` and tests can skip the wait.
pub async fn submit<P, D, F>(
    provider: &P,
    form: &SignupForm,
    options: &SignUpOptions,
    ui: &impl SignupUi,
    delay: D,
) -> SignupStatus
where
    P: AuthProvider,
    D: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(err) => return finish(ui, SignupStatus::Error(err)),
    };

    ui.set_status(SignupStatus::Submitting);

    let created = match provider
        .sign_up(&credentials.email, &credentials.password, options)
        .await
    {
        Ok(response) => response,
        Err(err) => {
            log::warn!("sign-up rejected: {err}");
            return finish(ui, SignupStatus::Error(SignupError::from_provider(&err)));
        }
    };

    match created.user {
        None => {
            log::warn!("sign-up returned no user");
            return finish(ui, SignupStatus::Error(SignupError::Unknown));
        }
        Some(user) if user.is_obfuscated_duplicate() => {
            return finish(ui, SignupStatus::Error(SignupError::AccountExists));
        }
        Some(user) => log::debug!("created account {}", user.id),
    }

    ui.clear_credentials();

    let signed_in = match provider
        .sign_in_with_password(&credentials.email, &credentials.password)
        .await
    {
        Ok(session) => session.is_some(),
        Err(err) => {
            log::warn!("auto sign-in after sign-up failed: {err}");
            false
        }
    };

    if !signed_in {
        return finish(ui, SignupStatus::Success(SignupOutcome::ManualLogin));
    }

    let status = finish(ui, SignupStatus::Success(SignupOutcome::SignedIn));
    delay(SUCCESS_REDIRECT_DELAY).await;
    ui.on_success();
    status
}
