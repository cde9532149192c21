//! Voice room page.

use leptos::prelude::*;

use crate::components::voice_panel::VoicePanel;
use crate::net::voice::MockVoiceConnector;

/// Room every visitor lands in until rooms are listed from a backend.
pub const DEFAULT_ROOM: &str = "General Lounge";

#[component]
pub fn VoicePage() -> impl IntoView {
    view! {
        <div class="voice-page">
            <h1 class="page-title">"Voice Chat"</h1>
            <VoicePanel room_name=DEFAULT_ROOM connector=MockVoiceConnector::default()/>
        </div>
    }
}
