//! Compile-time UI configuration.
//!
//! These values are fixed by the product rather than read at runtime; the
//! server side reads its own settings from the environment.

use std::time::Duration;

/// Brand label shown at the start of the navigation bar.
pub const BRAND_NAME: &str = "FriendConnect";

/// Hard cap on composer draft length, in UTF-16 code units (as `maxlength` counts).
pub const MAX_DRAFT_CHARS: usize = 500;

/// The remaining-characters counter appears at or below this many characters left.
pub const COUNTER_THRESHOLD: usize = 50;

/// Default composer placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "Type a message...";

/// Stand-in delay for voice session negotiation.
pub const CONNECT_DELAY: Duration = Duration::from_millis(2000);

/// Roster identifier of the local viewer.
pub const LOCAL_PARTICIPANT_ID: &str = "you";

/// Roster display name of the local viewer.
pub const LOCAL_PARTICIPANT_NAME: &str = "You";

/// Settings for the voice connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoiceConfig {
    pub connect_delay: Duration,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self { connect_delay: CONNECT_DELAY }
    }
}
