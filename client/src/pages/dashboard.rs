//! Dashboard page: the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside `ProtectedRoute`, so a user is always present here.
//! Links out to the roadmap and profile pages and offers sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::components::site_header::sign_out_handler;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let greeting = move || {
        session
            .auth
            .get()
            .user()
            .map_or_else(|| "Welcome!".to_owned(), |u| format!("Welcome, {}!", u.email_or_empty()))
    };

    let on_sign_out = sign_out_handler(session, use_navigate());

    view! {
        <main class="dashboard">
            <h1>{greeting}</h1>
            <div class="dashboard__cards">
                <a href="/view-roadmap" class="dashboard__card">
                    <h2>"Your roadmap"</h2>
                    <p>"See the steps toward the careers you saved."</p>
                </a>
                <a href="/profile" class="dashboard__card">
                    <h2>"Profile"</h2>
                    <p>"Check your account details."</p>
                </a>
            </div>
            <button class="btn dashboard__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </main>
    }
}
