//! Landing page linking to each section.

use leptos::prelude::*;

use crate::config::BRAND_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="page-title">{format!("Welcome to {BRAND_NAME}")}</h1>
            <p class="page-subtitle">"Chat with friends, hang out in voice rooms, and earn rewards."</p>
            <div class="home-page__links">
                <a class="card home-page__link" href="/chats">"Open your chats"</a>
                <a class="card home-page__link" href="/voice">"Join a voice room"</a>
                <a class="card home-page__link" href="/rewards">"Claim rewards"</a>
            </div>
        </div>
    }
}
