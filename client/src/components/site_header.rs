//! Top bar with the brand link, account links, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown on every page. Signed-in users get dashboard and sign-out controls;
//! everyone else gets login and signup links. Nothing account-specific is
//! shown while the session is still resolving.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;

/// Click handler for sign-out buttons. `navigate` is held in the arena so
/// the handler is `Copy` and can be reused inside nested `Show` children.
pub(crate) fn sign_out_handler<N>(session: SessionContext, navigate: N) -> impl Fn(MouseEvent) + Copy + 'static
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = StoredValue::new_local(navigate);
    move |_| session.sign_out(navigate.get_value())
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let signed_in = move || session.auth.get().is_authenticated();
    let resolved = move || !session.auth.get().loading;
    let email = move || {
        session
            .auth
            .get()
            .user()
            .map(|u| u.email_or_empty().to_owned())
            .unwrap_or_default()
    };

    let on_sign_out = sign_out_handler(session, use_navigate());

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"FuturePath"</a>
            <span class="site-header__spacer"></span>
            <Show when=resolved>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a href="/login" class="site-header__link">"Log in"</a>
                            <a href="/signup" class="btn btn--primary">"Get started"</a>
                        }
                    }
                >
                    <a href="/dashboard" class="site-header__link">"Dashboard"</a>
                    <span class="site-header__self">{email}</span>
                    <button class="btn site-header__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </Show>
            </Show>
        </header>
    }
}
