use leptos::prelude::*;

use super::*;
use crate::state::reward::{Progress, Rarity, RewardCategory, RewardStatus};

fn reward(status: RewardStatus, progress: Option<(u32, u32)>) -> Reward {
    Reward {
        id: "r1".to_owned(),
        title: "Social Butterfly".to_owned(),
        description: "Add five new friends.".to_owned(),
        points: 250,
        category: RewardCategory::Achievement,
        status,
        progress: progress.map(|(current, required)| Progress {
            current,
            required,
            description: "Friends added".to_owned(),
        }),
        expires_at: None,
        rarity: Rarity::Epic,
    }
}

fn render(reward: Reward) -> String {
    Owner::new().with(|| {
        let reward = RwSignal::new(reward);
        view! { <RewardCard reward=reward on_claim=|_id: String| async { Ok::<(), String>(()) }/> }.to_html()
    })
}

// =============================================================
// Render
// =============================================================

#[test]
fn renders_metadata_and_badges() {
    let html = render(reward(RewardStatus::Available, None));
    assert!(html.contains("Social Butterfly"));
    assert!(html.contains("Add five new friends."));
    assert!(html.contains("250 pts"));
    assert!(html.contains("Achievement"));
    assert!(html.contains("Epic"));
    assert!(html.contains("Claim Reward"));
}

#[test]
fn renders_progress_and_needed_label() {
    let html = render(reward(RewardStatus::Available, Some((3, 5))));
    assert!(html.contains("3/5"));
    assert!(html.contains("2 more needed"));
}

#[test]
fn renders_claimed_styling() {
    let html = render(reward(RewardStatus::Claimed, None));
    assert!(html.contains("reward-card--claimed"));
    assert!(html.contains("Claimed"));
}
