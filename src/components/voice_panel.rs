//! Voice room panel: permission gate, join/leave/mute controls, roster.
//!
//! The panel owns one `VoiceSession` record. The permission watcher and the
//! join flow write back through `try_update`, so a result that lands after
//! the panel is gone is dropped instead of touching a disposed signal.

use leptos::prelude::*;

use crate::net::voice::{JoinOutcome, VoiceConnector, join};
use crate::state::voice::{PanelView, Participant, VoiceSession};
use crate::util::dom::reload_page;
use crate::util::microphone::request_microphone_access;

/// Voice panel for `room_name`, connecting through `connector`.
#[component]
pub fn VoicePanel<C>(#[prop(into)] room_name: String, connector: C) -> impl IntoView
where
    C: VoiceConnector + Send + Sync,
{
    let session = RwSignal::new(VoiceSession::default());

    // Permission query + change subscription, released on cleanup.
    #[cfg(feature = "hydrate")]
    {
        let (stop_tx, stop_rx) = futures::channel::oneshot::channel::<()>();
        leptos::task::spawn_local(async move {
            let watched = crate::util::microphone::watch_permission(move |permission| {
                session.try_update(|s| s.permission_changed(permission));
            })
            .await;
            match watched {
                Ok((permission, subscription)) => {
                    session.try_update(|s| s.permission_changed(permission));
                    let _ = stop_rx.await;
                    drop(subscription);
                }
                Err(e) => leptos::logging::warn!("microphone permission query failed: {e}"),
            }
        });
        on_cleanup(move || {
            let _ = stop_tx.send(());
        });
    }

    let panel_view = Memo::new(move |_| session.with(VoiceSession::view));
    let connected = Memo::new(move |_| session.with(VoiceSession::is_connected));

    move || match panel_view.get() {
        PanelView::Remediation => view! { <RemediationCard/> }.into_any(),
        PanelView::Session => view! {
            <div class="voice-panel">
                <SessionHeader room_name=room_name.clone() session=session connected=connected/>
                {move || {
                    session
                        .with(|s| s.error.clone())
                        .map(|err| view! { <section class="card card--error voice-panel__error">{err}</section> })
                }}
                <Show when=move || connected.get()>
                    <ParticipantsCard session=session/>
                </Show>
                <SessionControls session=session connected=connected connector=connector.clone()/>
                <Show when=move || !connected.get()>
                    <HelpCard/>
                </Show>
            </div>
        }
            .into_any(),
    }
}

#[component]
fn SessionHeader(room_name: String, session: RwSignal<VoiceSession>, connected: Memo<bool>) -> impl IntoView {
    view! {
        <section class="card voice-panel__header">
            <div>
                <h2 class="card__title">{room_name}</h2>
                <p class="card__description">{move || session.with(VoiceSession::status_line)}</p>
            </div>
            <div class="voice-panel__status">
                <span class="voice-panel__dot" class:voice-panel__dot--connected=move || connected.get()></span>
                <span class="voice-panel__status-label">
                    {move || if connected.get() { "Connected" } else { "Disconnected" }}
                </span>
            </div>
        </section>
    }
}

#[component]
fn ParticipantsCard(session: RwSignal<VoiceSession>) -> impl IntoView {
    view! {
        <section class="card voice-panel__participants">
            <h3 class="card__title">"Participants"</h3>
            <div class="voice-panel__grid">
                <For
                    each=move || session.with(|s| s.participants.clone())
                    key=|p| (p.id.clone(), p.muted, p.speaking)
                    children=|p| view! { <ParticipantTile participant=p/> }
                />
            </div>
        </section>
    }
}

/// Join button while disconnected, Mute/Leave while connected.
#[component]
fn SessionControls<C>(session: RwSignal<VoiceSession>, connected: Memo<bool>, connector: C) -> impl IntoView
where
    C: VoiceConnector + Send + Sync,
{
    let on_join = move |_: leptos::ev::MouseEvent| {
        let connector = connector.clone();
        leptos::task::spawn_local(async move {
            let outcome = join(&session, &connector, request_microphone_access).await;
            if outcome == JoinOutcome::Disposed {
                leptos::logging::log!("voice panel disposed before join resolved");
            }
        });
    };

    view! {
        <section class="card voice-panel__controls">
            {move || {
                if connected.get() {
                    view! {
                        <button
                            class=move || {
                                if session.with(|s| s.muted) { "btn btn--destructive" } else { "btn btn--secondary" }
                            }
                            on:click=move |_| session.update(VoiceSession::toggle_mute)
                        >
                            {move || session.with(VoiceSession::mute_label)}
                        </button>
                        <button class="btn btn--outline" on:click=move |_| session.update(VoiceSession::leave)>
                            "Leave Chat"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            class="btn btn--primary btn--lg"
                            disabled=move || session.with(VoiceSession::is_connecting)
                            on:click=on_join.clone()
                        >
                            {move || session.with(VoiceSession::join_label)}
                        </button>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn HelpCard() -> impl IntoView {
    view! {
        <section class="card voice-panel__help">
            <h3 class="card__title">"How to Use Voice Chat"</h3>
            <ul class="voice-panel__help-list">
                <li>"Click \"Join Voice Chat\" to connect to the room"</li>
                <li>"Allow microphone access when prompted"</li>
                <li>"Use the \"Mute\" button to control your microphone"</li>
                <li>"Click \"Leave Chat\" when you're done"</li>
            </ul>
        </section>
    }
}

/// Shown whenever the microphone permission is denied.
#[component]
fn RemediationCard() -> impl IntoView {
    let on_reload = move |_| {
        if !reload_page() {
            leptos::logging::warn!("page reload unavailable");
        }
    };

    view! {
        <section class="card voice-panel__remediation">
            <h2 class="card__title">"Microphone Access Required"</h2>
            <p class="card__description">"Voice chat requires microphone access to function properly."</p>
            <p class="voice-panel__hint">
                "Please enable microphone access in your browser settings and refresh the page."
            </p>
            <button class="btn btn--primary" on:click=on_reload>
                "Refresh Page"
            </button>
        </section>
    }
}

#[component]
fn ParticipantTile(participant: Participant) -> impl IntoView {
    let Participant { name, muted, speaking, .. } = participant;

    view! {
        <div class="voice-panel__participant" class:voice-panel__participant--speaking=speaking>
            <span class="voice-panel__name">{name}</span>
            <span class="voice-panel__badges">
                {muted.then(|| view! { <span class="badge badge--neutral">"Muted"</span> })}
                {speaking.then(|| view! { <span class="badge badge--green">"Speaking"</span> })}
            </span>
        </div>
    }
}
