//! Profile page showing the signed-in account's identity.

use leptos::prelude::*;

use crate::app::SessionContext;

const EMPTY: &str = "—";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let user_email = move || {
        session
            .auth
            .get()
            .user()
            .and_then(|u| u.email.clone())
            .unwrap_or_else(|| EMPTY.to_owned())
    };
    let user_id = move || {
        session
            .auth
            .get()
            .user()
            .map_or_else(|| EMPTY.to_owned(), |u| u.id.clone())
    };
    let confirmed = move || {
        session
            .auth
            .get()
            .user()
            .and_then(|u| u.email_confirmed_at.clone())
            .map_or_else(|| "Not yet".to_owned(), |_| "Yes".to_owned())
    };

    view! {
        <main class="profile">
            <h1>"Profile"</h1>
            <div class="profile__row">
                <span class="profile__label">"Email"</span>
                <span class="profile__value">{user_email}</span>
            </div>
            <div class="profile__row">
                <span class="profile__label">"Email confirmed"</span>
                <span class="profile__value">{confirmed}</span>
            </div>
            <div class="profile__row">
                <span class="profile__label">"User ID"</span>
                <span class="profile__value">{user_id}</span>
            </div>
        </main>
    }
}
