//! Card for one reward with badges, progress, expiry and a claim action.

use std::future::Future;

use leptos::prelude::*;

use crate::state::reward::{Reward, RewardCardState, claim_button, expiry_line};

#[cfg(all(test, feature = "ssr"))]
#[path = "reward_card_test.rs"]
mod reward_card_test;

/// Reward card. `on_claim` receives the reward id; its outcome only drives
/// the in-flight flag and the inline error. The caller updates the reward
/// itself, and the card re-renders from the `reward` signal in place.
#[component]
pub fn RewardCard<F, Fut>(#[prop(into)] reward: Signal<Reward>, on_claim: F) -> impl IntoView
where
    F: Fn(String) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let card = RwSignal::new(RewardCardState::default());

    let button = Memo::new(move |_| {
        let claiming = card.with(|c| c.claiming);
        reward.with(|r| claim_button(r, claiming))
    });

    let on_click = move |_: leptos::ev::MouseEvent| {
        let Some(id) = reward.with_untracked(|r| {
            card.try_update(|c| c.begin_claim(r)).unwrap_or(false).then(|| r.id.clone())
        }) else {
            return;
        };
        let on_claim = on_claim.clone();
        leptos::task::spawn_local(async move {
            let outcome = on_claim(id).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("failed to claim reward: {e}");
            }
            if card.try_update(|c| c.finish_claim(&outcome)).is_none() {
                leptos::logging::log!("reward card disposed before claim resolved");
            }
        });
    };

    let progress = move || {
        reward.with(|r| r.tracked_progress().cloned()).map(|p| {
            let percent = p.percent();
            view! {
                <div class="reward-card__progress">
                    <div class="reward-card__progress-meta">
                        <span class="reward-card__progress-label">{p.description}</span>
                        <span class="reward-card__progress-count">{format!("{}/{}", p.current, p.required)}</span>
                    </div>
                    <div class="progress" role="progressbar" aria-valuenow=percent.to_string()>
                        <div class="progress__fill" style:width=format!("{percent}%")></div>
                    </div>
                </div>
            }
        })
    };

    let expiry = move || {
        reward
            .with(Reward::visible_expiry)
            .map(|ts| view! { <div class="reward-card__expiry">{expiry_line(&ts)}</div> })
    };

    view! {
        <article class=move || reward.with(Reward::card_class)>
            <header class="reward-card__header">
                <div class="reward-card__badges">
                    <span class=move || reward.with(|r| format!("badge {}", r.category.color().class()))>
                        {move || reward.with(|r| r.category.label())}
                    </span>
                    <span class=move || reward.with(|r| format!("badge {}", r.rarity.color().class()))>
                        {move || reward.with(|r| r.rarity.label())}
                    </span>
                </div>
                <div class="reward-card__points">{move || reward.with(|r| format!("{} pts", r.points))}</div>
            </header>
            <h3 class="reward-card__title">{move || reward.with(|r| r.title.clone())}</h3>
            <p class="reward-card__description">{move || reward.with(|r| r.description.clone())}</p>
            <div class="reward-card__body">
                {progress}
                {expiry}
                {move || {
                    card.with(|c| c.error.clone())
                        .map(|err| view! { <div class="reward-card__error">{err}</div> })
                }}
                <button
                    class=move || format!("{} reward-card__action", button.with(|b| b.variant.class()))
                    disabled=move || !button.with(|b| b.enabled)
                    on:click=on_click
                >
                    {move || button.with(|b| b.label.clone())}
                </button>
            </div>
        </article>
    }
}
