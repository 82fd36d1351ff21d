//! Signup page: credential form driving `state::signup::submit`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the input signals and the status signal; the flow in
//! `state::signup` decides the order of checks, provider calls and status
//! changes.
//!
//! A successful auto sign-in emits `SIGNED_IN`, and the surrounding
//! `PublicRoute` redirects on that event, normally well before
//! `SUCCESS_REDIRECT_DELAY` ends. The page is then unmounted, so the success
//! message is rarely seen and the flow's own navigation is skipped. The
//! callback only navigates when the page is still mounted.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::state::signup::{SignupAction, SignupForm, SignupStatus};
#[cfg(feature = "hydrate")]
use crate::state::signup::SignupUi;

/// Signals the signup flow writes back into.
#[cfg(feature = "hydrate")]
struct SignupSignals<N> {
    status: RwSignal<SignupStatus>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm: RwSignal<String>,
    navigate: N,
}

#[cfg(feature = "hydrate")]
impl<N> SignupUi for SignupSignals<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn set_status(&self, status: SignupStatus) {
        let _ = self.status.try_set(status);
    }

    fn clear_credentials(&self) {
        let _ = self.email.try_set(String::new());
        let _ = self.password.try_set(String::new());
        let _ = self.confirm.try_set(String::new());
    }

    fn on_success(&self) {
        // Page already unmounted: the route guard has navigated.
        if self.status.try_get_untracked().is_none() {
            return;
        }
        (self.navigate)(crate::util::auth::DEFAULT_AUTHENTICATED_PATH, NavigateOptions::default());
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let status = RwSignal::new(SignupStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let form = SignupForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::SignUpOptions;

            let provider = session.provider();
            let options = SignUpOptions {
                email_redirect_to: provider.config().email_redirect_to(),
            };
            let ui = SignupSignals {
                status,
                email,
                password,
                confirm,
                navigate: navigate.clone(),
            };
            leptos::task::spawn_local(async move {
                crate::state::signup::submit(provider.as_ref(), &form, &options, &ui, gloo_timers::future::sleep)
                    .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, &navigate, form);
        }
    };

    let message = move || status.get().message().unwrap_or_default();
    let message_class = move || match status.get() {
        SignupStatus::Success(_) => "auth-message auth-message--success",
        _ => "auth-message auth-message--error",
    };
    let offers_login = move || status.get().action() == Some(SignupAction::SwitchToLogin);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || status.get().is_submitting()>
                        {move || if status.get().is_submitting() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class=message_class>{message}</p>
                </Show>
                <Show when=offers_login>
                    <a href="/login" class="btn auth-card__action">"Go to login"</a>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
