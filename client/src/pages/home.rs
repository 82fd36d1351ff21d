//! Public landing page.

use leptos::prelude::*;

use crate::app::SessionContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let signed_in = move || session.auth.get().is_authenticated();

    view! {
        <main class="home">
            <section class="home__hero">
                <h1>"Find the future that fits you."</h1>
                <p class="home__lead">
                    "FuturePath helps teens explore careers, build a roadmap, and take the next step."
                </p>
                <Show
                    when=signed_in
                    fallback=|| view! { <a href="/signup" class="btn btn--primary">"Start your path"</a> }
                >
                    <a href="/dashboard" class="btn btn--primary">"Go to your dashboard"</a>
                </Show>
            </section>
        </main>
    }
}
