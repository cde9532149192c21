//! User-facing failure kinds for the presentation layer.
//!
//! ERROR HANDLING
//! ==============
//! Components never inspect why a collaborator failed. Every failure is
//! flattened into one of these variants, and the `Display` text is exactly
//! what the user sees (or what gets logged for failures with no inline view).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure kinds surfaced by the components.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// The external send callback rejected a chat message.
    #[error("Failed to send message.")]
    SendFailed,

    /// The external claim callback rejected a reward claim.
    #[error("Failed to claim reward. Please try again.")]
    ClaimFailed,

    /// The platform refused microphone access.
    #[error("Microphone access denied. Please enable microphone access to join voice chat.")]
    MicrophoneDenied,

    /// The voice session could not be established.
    #[error("Failed to join voice chat. Please check your connection and try again.")]
    ConnectFailed,

    /// A browser API the component needs is missing (SSR, old browser).
    #[error("platform API unavailable: {0}")]
    PlatformUnavailable(String),
}

impl UiError {
    /// Display string for inline rendering.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
