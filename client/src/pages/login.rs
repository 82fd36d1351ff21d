//! Login page: email + password sign-in against the auth provider.
//!
//! A successful sign-in surfaces as a `SIGNED_IN` session event; the
//! surrounding `PublicRoute` then redirects, so this page never navigates
//! on its own.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::state::signup::normalize_email;

/// Trim and normalize the inputs, requiring both.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email);
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email, password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &crate::net::provider::ProviderError) -> String {
    use crate::net::provider::ProviderErrorKind;

    match err.kind() {
        ProviderErrorKind::InvalidCredentials => "Incorrect email or password.".to_owned(),
        ProviderErrorKind::EmailNotConfirmed => {
            "Please confirm your email first. Check your inbox for the confirmation link.".to_owned()
        }
        ProviderErrorKind::Network => {
            "We couldn't reach the server. Check your internet connection and try again.".to_owned()
        }
        ProviderErrorKind::Unknown => "Something went wrong while logging in. Please try again.".to_owned(),
        _ => err.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Logging in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            use crate::net::provider::AuthProvider;

            let provider = session.provider();
            leptos::task::spawn_local(async move {
                match provider.sign_in_with_password(&email_value, &password_value).await {
                    Ok(Some(_)) => {
                        let _ = info.try_set(String::new());
                    }
                    Ok(None) => {
                        let _ = info.try_set("Sign-in did not start a session. Please try again.".to_owned());
                    }
                    Err(err) => {
                        log::warn!("sign-in failed: {err}");
                        let _ = info.try_set(login_error_message(&err));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
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
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "New to FuturePath? "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
