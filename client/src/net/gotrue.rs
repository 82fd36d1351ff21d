//! `AuthProvider` over a GoTrue-compatible REST API (Supabase Auth).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every network call returns `ProviderError::Unavailable`,
//! since sessions only exist in the browser.
//!
//! SESSION STORAGE
//! ===============
//! The current session is kept as JSON in `localStorage` under
//! `SESSION_STORAGE_KEY`, so a reload restores it without a round trip.
//! Expired sessions are refreshed on `get_current_session`; a refresh the
//! provider rejects drops the stored session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod gotrue_test;

use std::rc::Rc;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use super::listeners::{SessionCallback, SessionListeners, Subscription};
use super::provider::{AuthProvider, ProviderError};
use super::types::{Session, SessionEvent, SignUpOptions, SignUpResponse};
use crate::config::AuthConfig;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const SESSION_STORAGE_KEY: &str = "futurepath.auth.session";

/// Refresh this many seconds before the access token actually expires.
const REFRESH_MARGIN_SECS: i64 = 30;

pub struct GoTrueClient {
    config: AuthConfig,
    storage: Rc<dyn KeyValueStore>,
    listeners: SessionListeners,
}

/// What `get_current_session` should do with the stored session.
#[derive(Debug, PartialEq, Eq)]
enum Restore {
    Empty,
    Valid(Session),
    Refresh(String),
}

fn restore_plan(stored: Option<Session>, now_secs: i64) -> Restore {
    match stored {
        None => Restore::Empty,
        Some(session) if !session.is_expired(now_secs, REFRESH_MARGIN_SECS) => Restore::Valid(session),
        Some(session) if !session.refresh_token.is_empty() => Restore::Refresh(session.refresh_token),
        Some(_) => Restore::Empty,
    }
}

impl GoTrueClient {
    pub fn new(config: AuthConfig, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            storage,
            listeners: SessionListeners::new(),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.provider_url)
    }

    fn stored_session(&self) -> Option<Session> {
        load_json(&*self.storage, SESSION_STORAGE_KEY)
    }

    fn persist(&self, session: &Session) {
        save_json(&*self.storage, SESSION_STORAGE_KEY, session);
    }

    fn forget(&self) {
        self.storage.remove(SESSION_STORAGE_KEY);
    }

    /// Store a freshly issued session and announce it.
    fn adopt(&self, session: &Session, event: SessionEvent) {
        self.persist(session);
        self.listeners.emit(event, Some(session));
    }

    #[cfg(feature = "hydrate")]
    async fn post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<String, ProviderError> {
        let mut builder = gloo_net::http::Request::post(&self.endpoint(path))
            .header("apikey", &self.config.anon_key)
            .query(query.iter().copied());
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let sent = match body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ProviderError::Decode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ProviderError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        if response.ok() {
            Ok(text)
        } else {
            Err(parse_error_body(status, &text))
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "refresh_token": refresh_token });
            let text = self
                .post("token", &[("grant_type", "refresh_token")], Some(&body), None)
                .await?;
            parse_session_body(&text, now_secs())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            Err(ProviderError::Unavailable)
        }
    }

    async fn revoke(&self, access_token: &str) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            self.post("logout", &[], None, Some(access_token)).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(ProviderError::Unavailable)
        }
    }
}

impl AuthProvider for GoTrueClient {
    async fn get_current_session(&self) -> Result<Option<Session>, ProviderError> {
        match restore_plan(self.stored_session(), now_secs()) {
            Restore::Empty => Ok(None),
            Restore::Valid(session) => Ok(Some(session)),
            Restore::Refresh(refresh_token) => match self.refresh(&refresh_token).await {
                Ok(session) => {
                    self.adopt(&session, SessionEvent::TokenRefreshed);
                    Ok(Some(session))
                }
                Err(err @ ProviderError::Api { .. }) => {
                    log::info!("stored session could not be refreshed: {err}");
                    self.forget();
                    Ok(None)
                }
                Err(err) => Err(err),
            },
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: &SignUpOptions,
    ) -> Result<SignUpResponse, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "password": password });
            let query: Vec<(&str, &str)> = options
                .email_redirect_to
                .as_deref()
                .map(|target| ("redirect_to", target))
                .into_iter()
                .collect();
            let text = self.post("signup", &query, Some(&body), None).await?;
            let response = parse_signup_body(&text, now_secs())?;
            if let Some(session) = &response.session {
                self.adopt(session, SessionEvent::SignedIn);
            }
            Ok(response)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, options);
            Err(ProviderError::Unavailable)
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Option<Session>, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "password": password });
            let text = self
                .post("token", &[("grant_type", "password")], Some(&body), None)
                .await?;
            let session = parse_session_body(&text, now_secs())?;
            self.adopt(&session, SessionEvent::SignedIn);
            Ok(Some(session))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ProviderError::Unavailable)
        }
    }

    /// Revoke the token at the provider, then drop the local session and
    /// announce `SIGNED_OUT` whatever the provider said.
    async fn sign_out(&self) -> Result<(), ProviderError> {
        let result = match self.stored_session() {
            Some(session) => self.revoke(&session.access_token).await,
            None => Ok(()),
        };
        self.forget();
        self.listeners.emit(SessionEvent::SignedOut, None);
        result
    }

    fn on_session_change(&self, callback: SessionCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }
}

/// GoTrue error payloads come in two shapes:
/// `{"code":422,"error_code":"...","msg":"..."}` and the OAuth-style
/// `{"error":"invalid_grant","error_description":"..."}`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_error_body(status: u16, body: &str) -> ProviderError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let code = parsed.error_code.or_else(|| parsed.error.clone());
    let message = parsed
        .msg
        .or(parsed.message)
        .or(parsed.error_description)
        .or(parsed.error)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_owned())
        })
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ProviderError::Api { status, code, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_session_body(body: &str, now_secs: i64) -> Result<Session, ProviderError> {
    serde_json::from_str::<Session>(body)
        .map(|session| session.stamped(now_secs))
        .map_err(|e| ProviderError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
/// `/signup` answers with a full session when email confirmation is off and
/// with a bare user object otherwise.
fn parse_signup_body(body: &str, now_secs: i64) -> Result<SignUpResponse, ProviderError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    if value.get("access_token").is_some() {
        let session = serde_json::from_value::<Session>(value)
            .map_err(|e| ProviderError::Decode(e.to_string()))?
            .stamped(now_secs);
        return Ok(SignUpResponse {
            user: Some(session.user.clone()),
            session: Some(session),
        });
    }
    let user = serde_json::from_value::<super::types::User>(value).map_err(|e| ProviderError::Decode(e.to_string()))?;
    Ok(SignUpResponse {
        user: Some(user),
        session: None,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64)
    }
}
