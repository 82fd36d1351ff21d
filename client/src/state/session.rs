//! Session hook: the single writer of `AuthState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One instance lives for the lifetime of the mounted app. It asks the
//! provider for the current session once, listens for pushed session
//! events until dropped, and mirrors every change to an observer (the
//! Leptos `RwSignal<AuthState>` in the browser).
//!
//! ORDERING
//! ========
//! Events that arrive before the initial lookup resolves are queued and
//! applied right after it, in arrival order. Past that point every update is
//! applied as it is processed, so the last processed write wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::listeners::Subscription;
use crate::net::provider::{AuthProvider, ProviderError};
use crate::net::types::{Session, SessionEvent};
use crate::state::auth::AuthState;
use crate::util::storage::KeyValueStore;

/// Where `sign_out` sends the user.
pub const HOME_PATH: &str = "/";

type Observer = Rc<dyn Fn(&AuthState)>;

struct Shared {
    state: AuthState,
    started: bool,
    queued: Vec<(SessionEvent, Option<Session>)>,
    observer: Observer,
}

impl Shared {
    fn snapshot(&self) -> (Observer, AuthState) {
        (Rc::clone(&self.observer), self.state.clone())
    }
}

fn notify((observer, state): (Observer, AuthState)) {
    observer(&state);
}

fn receive(shared: &RefCell<Shared>, event: SessionEvent, session: Option<Session>) {
    let pending = {
        let mut inner = shared.borrow_mut();
        if inner.state.loading {
            inner.queued.push((event, session));
            None
        } else {
            inner.state.apply_event(event, session);
            Some(inner.snapshot())
        }
    };
    if let Some(pending) = pending {
        notify(pending);
    }
}

fn resolve(shared: &RefCell<Shared>, result: Result<Option<Session>, ProviderError>) {
    let pending = {
        let mut inner = shared.borrow_mut();
        inner.state.resolve(result);
        for (event, session) in std::mem::take(&mut inner.queued) {
            inner.state.apply_event(event, session);
        }
        inner.snapshot()
    };
    notify(pending);
}

/// Store entries wiped on sign-out.
struct Artifacts {
    store: Rc<dyn KeyValueStore>,
    keys: &'static [&'static str],
}

/// Owner of the live auth state for one mounted application.
pub struct SessionHook<P: AuthProvider> {
    provider: Rc<P>,
    shared: Rc<RefCell<Shared>>,
    artifacts: Vec<Artifacts>,
    subscription: Option<Subscription>,
}

impl<P: AuthProvider> SessionHook<P> {
    /// Create the hook and subscribe to provider events immediately, so
    /// nothing pushed during the initial lookup is missed.
    pub fn new(provider: Rc<P>, observer: impl Fn(&AuthState) + 'static) -> Self {
        let shared = Rc::new(RefCell::new(Shared {
            state: AuthState::default(),
            started: false,
            queued: Vec::new(),
            observer: Rc::new(observer),
        }));

        let weak = Rc::downgrade(&shared);
        let subscription = provider.on_session_change(Box::new(move |event, session| {
            if let Some(shared) = weak.upgrade() {
                receive(&shared, event, session);
            }
        }));

        Self {
            provider,
            shared,
            artifacts: Vec::new(),
            subscription: Some(subscription),
        }
    }

    /// Also remove `keys` from `store` whenever the user signs out.
    #[must_use]
    pub fn clears(mut self, store: Rc<dyn KeyValueStore>, keys: &'static [&'static str]) -> Self {
        self.artifacts.push(Artifacts { store, keys });
        self
    }

    pub fn provider(&self) -> &Rc<P> {
        &self.provider
    }

    pub fn state(&self) -> AuthState {
        self.shared.borrow().state.clone()
    }

    #[cfg(test)]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Run the initial session lookup. Only the first call queries the
    /// provider; later calls return immediately.
    pub async fn start(&self) {
        {
            let mut inner = self.shared.borrow_mut();
            if inner.started {
                return;
            }
            inner.started = true;
        }

        let result = self.provider.get_current_session().await;
        match &result {
            Ok(Some(session)) => log::debug!("restored session for user {}", session.user.id),
            Ok(None) => log::debug!("no active session"),
            Err(err) => log::warn!("session lookup failed, continuing signed out: {err}"),
        }
        resolve(&self.shared, result);
    }

    /// Sign out at the provider, wipe local auth artifacts, clear the state
    /// and navigate home. Provider failures are logged and do not stop the
    /// local sign-out or the navigation.
    pub async fn sign_out(&self, navigate: impl FnOnce(&str)) {
        if let Err(err) = self.provider.sign_out().await {
            log::warn!("provider sign-out failed, clearing local session anyway: {err}");
        }
        for artifacts in &self.artifacts {
            for key in artifacts.keys {
                artifacts.store.remove(key);
            }
        }
        let pending = {
            let mut inner = self.shared.borrow_mut();
            inner.state.clear();
            inner.queued.clear();
            inner.snapshot()
        };
        notify(pending);
        navigate(HOME_PATH);
    }

    /// Release the provider subscription. Dropping the hook does the same.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
