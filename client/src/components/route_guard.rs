//! `ProtectedRoute` and `PublicRoute`: render children or redirect based on
//! the session state.
//!
//! Both re-evaluate whenever `SessionContext::auth` changes and show
//! `AuthPending` until the decision is `Render`. The decision logic lives in
//! `util::auth`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::SessionContext;
use crate::util::auth::{
    DEFAULT_AUTHENTICATED_PATH, DEFAULT_LOGIN_PATH, GuardDecision, current_path, protected_decision,
    public_decision,
};
use crate::util::storage::BrowserStorage;

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Page that requires a signed-in user. Anonymous visitors are sent to
/// `redirect_to` (default `/login`) and their path is kept for after login.
#[component]
pub fn ProtectedRoute(#[prop(optional, into)] redirect_to: Option<String>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let location = use_location();
    let login_path = redirect_to.unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned());
    let decision = RwSignal::new(GuardDecision::Wait);

    Effect::new(move || {
        let state = session.auth.get();
        let path = current_path(&location.pathname.get(), &location.search.get());
        let next = protected_decision(&state, &path, &login_path, &BrowserStorage::session());
        if let GuardDecision::Redirect(target) = &next {
            navigate(target, replace());
        }
        decision.set(next);
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| view! { <AuthPending/> }>
            {children()}
        </Show>
    }
}

/// Page that signed-in users must not see (login, signup). Signed-in users
/// go to the pending redirect or `redirect_to` (default `/dashboard`).
#[component]
pub fn PublicRoute(#[prop(optional, into)] redirect_to: Option<String>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let default_path = redirect_to.unwrap_or_else(|| DEFAULT_AUTHENTICATED_PATH.to_owned());
    let decision = RwSignal::new(GuardDecision::Wait);

    Effect::new(move || {
        let state = session.auth.get();
        let next = public_decision(&state, &default_path, &BrowserStorage::session());
        if let GuardDecision::Redirect(target) = &next {
            navigate(target, replace());
        }
        decision.set(next);
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| view! { <AuthPending/> }>
            {children()}
        </Show>
    }
}

/// Waiting indicator shown while the session resolves or a redirect runs.
#[component]
pub fn AuthPending() -> impl IntoView {
    view! {
        <div class="auth-pending" role="status" aria-live="polite">
            <span class="auth-pending__spinner"></span>
            <span>"Loading..."</span>
        </div>
    }
}
