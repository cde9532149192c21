//! Voice session connector.
//!
//! `MockVoiceConnector` waits a fixed delay and returns a static roster. A
//! real implementation replaces it with signaling and media negotiation; the
//! panel's state machine only sees `attempt_connect`.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::{RwSignal, Update};

use crate::config::VoiceConfig;
use crate::error::UiError;
use crate::state::voice::{JoinStep, Participant, VoiceSession};

/// Establishes a voice session and reports the remote roster.
pub trait VoiceConnector: Clone + 'static {
    /// Remote participants on success. The local viewer is added by the caller.
    fn attempt_connect(&self) -> impl Future<Output = Result<Vec<Participant>, UiError>>;
}

/// Simulated connector: fixed delay, fixed roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MockVoiceConnector {
    config: VoiceConfig,
}

impl MockVoiceConnector {
    pub fn new(config: VoiceConfig) -> Self {
        Self { config }
    }

    pub fn delay(&self) -> Duration {
        self.config.connect_delay
    }
}

impl VoiceConnector for MockVoiceConnector {
    async fn attempt_connect(&self) -> Result<Vec<Participant>, UiError> {
        crate::util::timer::sleep(self.delay()).await;
        Ok(mock_roster())
    }
}

/// The roster every simulated room reports.
pub fn mock_roster() -> Vec<Participant> {
    vec![
        Participant::new("1", "Alex Johnson", false, true),
        Participant::new("2", "Sarah Chen", true, false),
        Participant::new("3", "Mike Rodriguez", false, false),
    ]
}

/// Where the join flow reads and writes the session. `None` from
/// `try_apply` means the owner is gone and the flow must stop.
pub trait SessionStore {
    fn try_apply<R>(&self, f: impl FnOnce(&mut VoiceSession) -> R) -> Option<R>;
}

impl SessionStore for RwSignal<VoiceSession> {
    fn try_apply<R>(&self, f: impl FnOnce(&mut VoiceSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// How a join attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Join was not valid from the current phase, or the session moved on.
    Ignored,
    AccessDenied,
    ConnectFailed,
    Connected,
    /// The store went away mid-flight; nothing was written after that.
    Disposed,
}

/// Run one join attempt: begin, request access unless already granted,
/// connect, and write each result back to `store`.
///
/// `request_access` is only called on the `RequestAccess` step, and the
/// connector is never reached after a refusal.
pub async fn join<S, C, A, AFut>(store: &S, connector: &C, request_access: A) -> JoinOutcome
where
    S: SessionStore,
    C: VoiceConnector,
    A: FnOnce() -> AFut,
    AFut: Future<Output = Result<(), UiError>>,
{
    let Some(step) = store.try_apply(VoiceSession::begin_join) else {
        return JoinOutcome::Disposed;
    };
    match step {
        JoinStep::Ignore => return JoinOutcome::Ignored,
        JoinStep::Connect => {}
        JoinStep::RequestAccess => {
            let access = request_access().await;
            let refused = access.is_err();
            if let Err(e) = &access {
                leptos::logging::warn!("microphone access refused: {e}");
            }
            match store.try_apply(|s| s.access_resolved(access)) {
                Some(true) => {}
                Some(false) if refused => return JoinOutcome::AccessDenied,
                Some(false) => return JoinOutcome::Ignored,
                None => return JoinOutcome::Disposed,
            }
        }
    }

    let outcome = connector.attempt_connect().await;
    let failed = outcome.is_err();
    if let Err(e) = &outcome {
        leptos::logging::warn!("voice connect failed: {e}");
    }
    match store.try_apply(|s| {
        s.connect_resolved(outcome);
        s.is_connected()
    }) {
        None => JoinOutcome::Disposed,
        Some(true) => JoinOutcome::Connected,
        Some(false) if failed => JoinOutcome::ConnectFailed,
        Some(false) => JoinOutcome::Ignored,
    }
}
