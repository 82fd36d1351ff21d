//! Career roadmap page (protected).

use leptos::prelude::*;

#[component]
pub fn RoadmapPage() -> impl IntoView {
    view! {
        <main class="roadmap">
            <h1>"Your roadmap"</h1>
            <p class="roadmap__empty">
                "Take the career quiz to get a personalised roadmap. Your saved steps will appear here."
            </p>
            <a href="/dashboard" class="btn">"Back to dashboard"</a>
        </main>
    }
}
