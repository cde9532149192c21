//! Free-text composer with length cap and in-flight guard.

use std::future::Future;

use leptos::prelude::*;

use crate::config::{DEFAULT_PLACEHOLDER, MAX_DRAFT_CHARS};
use crate::error::UiError;
use crate::state::composer::{ComposerState, is_submit_gesture};

/// Composer that hands the trimmed draft to `on_send`.
///
/// The draft is cleared only when `on_send` resolves `Ok`. A rejection is
/// logged and the typed text stays in place.
#[component]
pub fn MessageComposer<F, Fut>(
    on_send: F,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView
where
    F: Fn(String) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let state = RwSignal::new(ComposerState::default());
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned());
    let is_disabled = move || disabled.get().unwrap_or(false);

    let submit = move || {
        let blocked = disabled.get_untracked().unwrap_or(false);
        let Some(text) = state.try_update(|s| s.begin_submit(blocked)).flatten() else {
            return;
        };
        let on_send = on_send.clone();
        leptos::task::spawn_local(async move {
            let outcome = on_send(text).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("{} {e}", UiError::SendFailed);
            }
            if state.try_update(|s| s.finish_submit(&outcome)).is_none() {
                leptos::logging::log!("composer disposed before send resolved");
            }
        });
    };

    let on_submit = {
        let submit = submit.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            submit();
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_gesture(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="composer">
            <form class="composer__form" on:submit=on_submit>
                <textarea
                    class="composer__input"
                    rows="1"
                    placeholder=placeholder
                    maxlength=MAX_DRAFT_CHARS.to_string()
                    prop:value=move || state.with(|s| s.draft().to_owned())
                    on:input=move |ev| state.update(|s| s.set_draft(&event_target_value(&ev)))
                    on:keydown=on_keydown
                    disabled=move || is_disabled() || state.with(ComposerState::submitting)
                ></textarea>
                <button
                    class="btn btn--primary composer__send"
                    type="submit"
                    disabled=move || !state.with(|s| s.can_submit(is_disabled()))
                >
                    {move || state.with(ComposerState::button_label)}
                </button>
            </form>
            {move || {
                state
                    .with(ComposerState::counter)
                    .map(|remaining| {
                        view! { <div class="composer__counter">{format!("{remaining} characters remaining")}</div> }
                    })
            }}
        </div>
    }
}
