//! Microphone permission and media-access helpers.
//!
//! The permission query hands back a `PermissionSubscription`; the change
//! handler stays attached until the subscription is dropped. The media stream
//! requested to trigger the browser prompt is stopped before returning, so no
//! capture is ever held.

#[cfg(test)]
#[path = "microphone_test.rs"]
mod microphone_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;

use crate::error::UiError;
use crate::state::voice::PermissionState;

/// Live permission-change handler. Dropping it detaches the handler.
pub struct PermissionSubscription {
    #[cfg(feature = "hydrate")]
    status: web_sys::PermissionStatus,
    #[cfg(feature = "hydrate")]
    _on_change: Closure<dyn FnMut()>,
}

impl Drop for PermissionSubscription {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        self.status.set_onchange(None);
    }
}

fn unavailable(api: &str) -> UiError {
    UiError::PlatformUnavailable(api.to_owned())
}

#[cfg(feature = "hydrate")]
fn from_platform(state: web_sys::PermissionState) -> PermissionState {
    match state {
        web_sys::PermissionState::Granted => PermissionState::Granted,
        web_sys::PermissionState::Denied => PermissionState::Denied,
        _ => PermissionState::Prompt,
    }
}

/// Query the microphone permission and subscribe to later changes.
///
/// # Errors
///
/// Returns `UiError::PlatformUnavailable` when the Permissions API is missing
/// or rejects the `microphone` descriptor.
pub async fn watch_permission<F>(on_change: F) -> Result<(PermissionState, PermissionSubscription), UiError>
where
    F: Fn(PermissionState) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let permissions = window
            .navigator()
            .permissions()
            .map_err(|_| unavailable("navigator.permissions"))?;

        let descriptor = js_sys::Object::new();
        js_sys::Reflect::set(&descriptor, &JsValue::from_str("name"), &JsValue::from_str("microphone"))
            .map_err(|_| unavailable("permissions.query"))?;
        let promise = permissions
            .query(&descriptor)
            .map_err(|_| unavailable("permissions.query"))?;
        let status: web_sys::PermissionStatus = JsFuture::from(promise)
            .await
            .map_err(|_| unavailable("permissions.query"))?
            .dyn_into()
            .map_err(|_| unavailable("PermissionStatus"))?;

        let watched = status.clone();
        let handler = Closure::<dyn FnMut()>::new(move || on_change(from_platform(watched.state())));
        status.set_onchange(Some(handler.as_ref().unchecked_ref()));

        let current = from_platform(status.state());
        Ok((current, PermissionSubscription { status, _on_change: handler }))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
        Err(unavailable("navigator.permissions"))
    }
}

/// Ask for microphone access, then release the stream immediately.
///
/// # Errors
///
/// Returns `UiError::MicrophoneDenied` when the user or browser refuses, and
/// `UiError::PlatformUnavailable` when media devices are missing.
pub async fn request_microphone_access() -> Result<(), UiError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| unavailable("navigator.mediaDevices"))?;

        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|_| UiError::MicrophoneDenied)?;
        let stream: web_sys::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|_| UiError::MicrophoneDenied)?
            .dyn_into()
            .map_err(|_| UiError::MicrophoneDenied)?;

        release_stream(&stream);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable("navigator.mediaDevices"))
    }
}

#[cfg(feature = "hydrate")]
fn release_stream(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}
