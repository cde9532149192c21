//! Rewards grid backed by an in-memory reward list.

#[cfg(test)]
#[path = "rewards_test.rs"]
mod rewards_test;

use chrono::{TimeZone, Utc};
use leptos::prelude::*;

use crate::components::reward_card::RewardCard;
use crate::state::reward::{Progress, Rarity, Reward, RewardCategory, RewardStatus};

/// Mark reward `id` as claimed.
///
/// # Errors
///
/// Returns an error string when the reward is unknown or not available.
pub fn claim_in(rewards: &mut [Reward], id: &str) -> Result<(), String> {
    let reward = rewards
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| format!("unknown reward: {id}"))?;
    if reward.status != RewardStatus::Available {
        return Err(format!("reward {id} is not available"));
    }
    reward.status = RewardStatus::Claimed;
    Ok(())
}

/// Sum of points across claimed rewards.
pub fn claimed_points(rewards: &[Reward]) -> u32 {
    rewards
        .iter()
        .filter(|r| r.status == RewardStatus::Claimed)
        .map(|r| r.points)
        .sum()
}

/// Current record for `id`, if it is still listed.
pub fn find_reward(rewards: &[Reward], id: &str) -> Option<Reward> {
    rewards.iter().find(|r| r.id == id).cloned()
}

/// Demo reward catalogue.
pub fn seed_rewards() -> Vec<Reward> {
    vec![
        Reward {
            id: "daily-login".to_owned(),
            title: "Daily Check-in".to_owned(),
            description: "Open the app today.".to_owned(),
            points: 10,
            category: RewardCategory::Daily,
            status: RewardStatus::Available,
            progress: None,
            expires_at: Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 0).single(),
            rarity: Rarity::Common,
        },
        Reward {
            id: "weekly-voice".to_owned(),
            title: "Voice Regular".to_owned(),
            description: "Spend time in voice rooms this week.".to_owned(),
            points: 50,
            category: RewardCategory::Weekly,
            status: RewardStatus::Claimed,
            progress: None,
            expires_at: None,
            rarity: Rarity::Rare,
        },
        Reward {
            id: "social-butterfly".to_owned(),
            title: "Social Butterfly".to_owned(),
            description: "Add five new friends.".to_owned(),
            points: 250,
            category: RewardCategory::Achievement,
            status: RewardStatus::Available,
            progress: Some(Progress { current: 3, required: 5, description: "Friends added".to_owned() }),
            expires_at: None,
            rarity: Rarity::Epic,
        },
        Reward {
            id: "founders-badge".to_owned(),
            title: "Founder's Badge".to_owned(),
            description: "Reserved for early members.".to_owned(),
            points: 1000,
            category: RewardCategory::Special,
            status: RewardStatus::Locked,
            progress: None,
            expires_at: None,
            rarity: Rarity::Legendary,
        },
    ]
}

#[component]
pub fn RewardsPage() -> impl IntoView {
    let rewards = RwSignal::new(seed_rewards());

    let on_claim = move |id: String| async move {
        rewards
            .try_update(|list| claim_in(list, &id))
            .unwrap_or_else(|| Err("rewards page closed".to_owned()))
    };

    view! {
        <div class="rewards-page">
            <header class="rewards-page__header">
                <h1 class="page-title">"Rewards"</h1>
                <span class="rewards-page__total">
                    {move || format!("{} pts earned", rewards.with(|list| claimed_points(list)))}
                </span>
            </header>
            <div class="rewards-page__grid">
                <For
                    each=move || rewards.get()
                    key=|r| r.id.clone()
                    children=move |initial| {
                        let id = initial.id.clone();
                        let reward = Memo::new(move |_| {
                            rewards.with(|list| find_reward(list, &id)).unwrap_or_else(|| initial.clone())
                        });
                        view! { <RewardCard reward=reward on_claim=on_claim/> }
                    }
                />
            </div>
        </div>
    }
}
