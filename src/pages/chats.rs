//! Chat page wiring the transcript and composer to an in-memory thread.

#[cfg(test)]
#[path = "chats_test.rs"]
mod chats_test;

use chrono::{DateTime, TimeZone, Utc};
use leptos::prelude::*;

use crate::components::message_composer::MessageComposer;
use crate::components::message_list::MessageList;
use crate::config::LOCAL_PARTICIPANT_NAME;
use crate::state::chat::Message;

/// Build the viewer's own message for `text`.
pub fn own_message(text: String, at: DateTime<Utc>) -> Message {
    Message {
        id: uuid::Uuid::new_v4().to_string(),
        text,
        sender: LOCAL_PARTICIPANT_NAME.to_owned(),
        timestamp: at,
        is_own: true,
    }
}

/// Opening messages of the demo thread.
pub fn seed_messages() -> Vec<Message> {
    let at = |minute| Utc.with_ymd_and_hms(2026, 1, 10, 18, minute, 0).single().unwrap_or_default();
    vec![
        Message {
            id: "seed-1".to_owned(),
            text: "Anyone up for a game tonight?".to_owned(),
            sender: "Alex Johnson".to_owned(),
            timestamp: at(2),
            is_own: false,
        },
        Message {
            id: "seed-2".to_owned(),
            text: "I'm in! Voice room at 8?".to_owned(),
            sender: "Sarah Chen".to_owned(),
            timestamp: at(5),
            is_own: false,
        },
        Message {
            id: "seed-3".to_owned(),
            text: "Sounds good, see you there.".to_owned(),
            sender: LOCAL_PARTICIPANT_NAME.to_owned(),
            timestamp: at(7),
            is_own: true,
        },
    ]
}

#[component]
pub fn ChatsPage() -> impl IntoView {
    let messages = RwSignal::new(seed_messages());

    let on_send = move |text: String| async move {
        messages
            .try_update(|list| list.push(own_message(text, Utc::now())))
            .ok_or_else(|| "chat thread closed".to_owned())
    };

    view! {
        <div class="chats-page">
            <h1 class="page-title">"Chats"</h1>
            <div class="chat-window">
                <MessageList messages=messages/>
                <MessageComposer on_send=on_send/>
            </div>
        </div>
    }
}
