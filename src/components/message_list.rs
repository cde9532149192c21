//! Chat transcript with auto-scroll, loading and error states.

use leptos::prelude::*;

use crate::state::chat::{ListContent, Message, list_content};

/// Message bubbles in supplied order, scrolled to the newest entry whenever
/// the sequence changes.
#[component]
pub fn MessageList(
    #[prop(into)] messages: Signal<Vec<Message>>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let end_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = messages.with(Vec::len);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = end_ref.get() {
                crate::util::dom::scroll_into_view_smooth(&el);
            }
        }
    });

    let content = Memo::new(move |_| {
        let count = messages.with(Vec::len);
        list_content(count, loading.get().unwrap_or(false), error.get().as_deref())
    });

    view! {
        <div class="message-list">
            {move || match content.get() {
                ListContent::Error(err) => view! {
                    <div class="message-list__status message-list__status--error">
                        <div class="message-list__error-title">"Failed to load messages"</div>
                        <div class="message-list__error-detail">{err}</div>
                    </div>
                }
                    .into_any(),
                ListContent::Loading => view! {
                    <div class="message-list__status">"Loading messages..."</div>
                }
                    .into_any(),
                ListContent::Messages => view! {
                    <For
                        each=move || messages.get()
                        key=|msg| msg.id.clone()
                        children=|msg| view! { <MessageBubble message=msg/> }
                    />
                    <div class="message-list__end" node_ref=end_ref></div>
                }
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let side = message.side();
    let sender = message.sender_label().map(str::to_owned);
    let time = message.local_time();
    let text = message.text;

    view! {
        <div class=side.row_class()>
            <div class=side.bubble_class()>
                {sender.map(|name| view! { <div class="message-list__sender">{name}</div> })}
                <div class="message-list__text">{text}</div>
                <div class="message-list__time">{time}</div>
            </div>
        </div>
    }
}
