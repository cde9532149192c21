#[cfg(test)]
#[path = "reward_test.rs"]
mod reward_test;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// A reward as owned by the rewards backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub category: RewardCategory,
    pub status: RewardStatus,
    #[serde(default)]
    pub progress: Option<Progress>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub rarity: Rarity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Daily,
    Weekly,
    Achievement,
    Special,
}

/// Reward lifecycle. `Available` may become `Claimed`; both others are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardStatus {
    Available,
    Claimed,
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Progress toward unlocking a reward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: u32,
    pub required: u32,
    #[serde(default)]
    pub description: String,
}

/// Badge palette shared by the category and rarity badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeColor {
    Neutral,
    Green,
    Blue,
    Purple,
    Orange,
    Gold,
}

impl BadgeColor {
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "badge--neutral",
            Self::Green => "badge--green",
            Self::Blue => "badge--blue",
            Self::Purple => "badge--purple",
            Self::Orange => "badge--orange",
            Self::Gold => "badge--gold",
        }
    }
}

impl RewardCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Achievement => "Achievement",
            Self::Special => "Special",
        }
    }

    pub fn color(self) -> BadgeColor {
        match self {
            Self::Daily => BadgeColor::Green,
            Self::Weekly => BadgeColor::Blue,
            Self::Achievement => BadgeColor::Purple,
            Self::Special => BadgeColor::Orange,
        }
    }
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }

    pub fn color(self) -> BadgeColor {
        match self {
            Self::Common => BadgeColor::Neutral,
            Self::Rare => BadgeColor::Blue,
            Self::Epic => BadgeColor::Purple,
            Self::Legendary => BadgeColor::Gold,
        }
    }
}

impl Progress {
    /// Completion percentage. Not clamped; an over-complete pair exceeds 100.
    pub fn percent(&self) -> f64 {
        f64::from(self.current) / f64::from(self.required) * 100.0
    }

    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.required
    }
}

impl Reward {
    /// Progress pair worth drawing. A zero `required` is treated as no progress.
    pub fn tracked_progress(&self) -> Option<&Progress> {
        self.progress.as_ref().filter(|p| p.required > 0)
    }

    /// Expiry is only relevant while the reward can still be claimed.
    pub fn visible_expiry(&self) -> Option<DateTime<Utc>> {
        match self.status {
            RewardStatus::Available => self.expires_at,
            RewardStatus::Claimed | RewardStatus::Locked => None,
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self.status {
            RewardStatus::Available => "reward-card",
            RewardStatus::Claimed => "reward-card reward-card--claimed",
            RewardStatus::Locked => "reward-card reward-card--locked",
        }
    }
}

/// Visual weight of the claim button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn--primary",
            Self::Secondary => "btn btn--secondary",
            Self::Outline => "btn btn--outline",
        }
    }
}

/// Label and enabled state of the claim button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimButton {
    pub label: String,
    pub enabled: bool,
    pub variant: ButtonVariant,
}

/// Claim bookkeeping local to one card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardCardState {
    pub claiming: bool,
    pub error: Option<String>,
}

impl RewardCardState {
    /// Start a claim. Returns `false` when the reward cannot be claimed now.
    pub fn begin_claim(&mut self, reward: &Reward) -> bool {
        if !claim_button(reward, self.claiming).enabled {
            return false;
        }
        self.claiming = true;
        self.error = None;
        true
    }

    /// Settle a claim. Rejection shows the fixed inline message.
    pub fn finish_claim(&mut self, outcome: &Result<(), String>) {
        self.claiming = false;
        if outcome.is_err() {
            self.error = Some(UiError::ClaimFailed.message());
        }
    }
}

/// Claim button decision table.
pub fn claim_button(reward: &Reward, claiming: bool) -> ClaimButton {
    let variant = match reward.status {
        RewardStatus::Available => ButtonVariant::Primary,
        RewardStatus::Claimed => ButtonVariant::Secondary,
        RewardStatus::Locked => ButtonVariant::Outline,
    };
    let (label, enabled) = match reward.status {
        RewardStatus::Claimed => ("Claimed".to_owned(), false),
        RewardStatus::Locked => ("Locked".to_owned(), false),
        RewardStatus::Available if claiming => ("Claiming...".to_owned(), false),
        RewardStatus::Available => match reward.tracked_progress() {
            Some(p) if !p.is_complete() => (format!("{} more needed", p.remaining()), false),
            _ => ("Claim Reward".to_owned(), true),
        },
    };
    ClaimButton { label, enabled, variant }
}

/// Expiry line in the viewer's local time zone.
pub fn expiry_line(expires_at: &DateTime<Utc>) -> String {
    format_expiry(&expires_at.with_timezone(&Local))
}

/// "Expires: 3/14/2026 at 09:05" in the instant's own offset.
pub fn format_expiry<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("Expires: {} at {}", ts.format("%-m/%-d/%Y"), ts.format("%H:%M"))
}
