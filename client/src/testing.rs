//! In-memory `AuthProvider` for unit tests.

use std::cell::{Cell, RefCell};

use crate::net::listeners::{SessionCallback, SessionListeners, Subscription};
use crate::net::provider::{AuthProvider, ProviderError};
use crate::net::types::{Session, SessionEvent, SignUpOptions, SignUpResponse, User};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    GetSession,
    SignUp {
        email: String,
        password: String,
        redirect_to: Option<String>,
    },
    SignIn {
        email: String,
        password: String,
    },
    SignOut,
}

/// Scripted provider. Each result field is returned (cloned) on every call.
pub struct FakeProvider {
    pub listeners: SessionListeners,
    pub current: RefCell<Result<Option<Session>, ProviderError>>,
    /// Emitted from inside `get_current_session`, before it returns.
    pub event_during_fetch: RefCell<Option<(SessionEvent, Option<Session>)>>,
    pub sign_up_result: RefCell<Result<SignUpResponse, ProviderError>>,
    pub sign_in_result: RefCell<Result<Option<Session>, ProviderError>>,
    pub sign_out_result: RefCell<Result<(), ProviderError>>,
    pub calls: RefCell<Vec<Call>>,
    pub subscribe_count: Cell<usize>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            listeners: SessionListeners::new(),
            current: RefCell::new(Ok(None)),
            event_during_fetch: RefCell::new(None),
            sign_up_result: RefCell::new(Ok(SignUpResponse {
                user: Some(user("new")),
                session: None,
            })),
            sign_in_result: RefCell::new(Ok(Some(session("new")))),
            sign_out_result: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
            subscribe_count: Cell::new(0),
        }
    }
}

impl FakeProvider {
    pub fn emit(&self, event: SessionEvent, session: Option<&Session>) {
        self.listeners.emit(event, session);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl AuthProvider for FakeProvider {
    async fn get_current_session(&self) -> Result<Option<Session>, ProviderError> {
        self.calls.borrow_mut().push(Call::GetSession);
        let pending = self.event_during_fetch.borrow_mut().take();
        if let Some((event, session)) = pending {
            self.listeners.emit(event, session.as_ref());
        }
        self.current.borrow().clone()
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: &SignUpOptions,
    ) -> Result<SignUpResponse, ProviderError> {
        self.calls.borrow_mut().push(Call::SignUp {
            email: email.to_owned(),
            password: password.to_owned(),
            redirect_to: options.email_redirect_to.clone(),
        });
        self.sign_up_result.borrow().clone()
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Option<Session>, ProviderError> {
        self.calls.borrow_mut().push(Call::SignIn {
            email: email.to_owned(),
            password: password.to_owned(),
        });
        let result = self.sign_in_result.borrow().clone();
        if let Ok(Some(session)) = &result {
            self.listeners.emit(SessionEvent::SignedIn, Some(session));
        }
        result
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.calls.borrow_mut().push(Call::SignOut);
        let result = self.sign_out_result.borrow().clone();
        if result.is_ok() {
            self.listeners.emit(SessionEvent::SignedOut, None);
        }
        result
    }

    fn on_session_change(&self, callback: SessionCallback) -> Subscription {
        self.subscribe_count.set(self.subscribe_count.get() + 1);
        self.listeners.subscribe(callback)
    }
}

pub fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: Some(format!("{id}@example.com")),
        email_confirmed_at: None,
        identities: None,
    }
}

pub fn session(id: &str) -> Session {
    Session {
        access_token: format!("at-{id}"),
        refresh_token: format!("rt-{id}"),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: Some(4_000_000_000),
        user: user(id),
    }
}
