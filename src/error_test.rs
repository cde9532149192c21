use super::*;

// =============================================================
// Display strings
// =============================================================

#[test]
fn claim_failed_message_is_fixed() {
    assert_eq!(UiError::ClaimFailed.message(), "Failed to claim reward. Please try again.");
}

#[test]
fn microphone_denied_message_mentions_enabling_access() {
    let msg = UiError::MicrophoneDenied.message();
    assert!(msg.starts_with("Microphone access denied."));
    assert!(msg.contains("enable microphone access"));
}

#[test]
fn connect_failed_message_is_non_empty() {
    assert!(!UiError::ConnectFailed.message().is_empty());
}

#[test]
fn platform_unavailable_includes_api_name() {
    let err = UiError::PlatformUnavailable("navigator.permissions".to_owned());
    assert_eq!(err.message(), "platform API unavailable: navigator.permissions");
}
