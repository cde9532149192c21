#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn watch_permission_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(watch_permission(|_| {}));
    assert!(matches!(result, Err(UiError::PlatformUnavailable(api)) if api == "navigator.permissions"));
}

#[test]
fn request_access_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(request_microphone_access());
    assert_eq!(result, Err(UiError::PlatformUnavailable("navigator.mediaDevices".to_owned())));
}

#[test]
fn dropping_subscription_is_noop_outside_browser() {
    drop(PermissionSubscription {});
}
