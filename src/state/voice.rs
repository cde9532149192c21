//! Voice session lifecycle.
//!
//! STATE MACHINE
//! =============
//! `Disconnected --join--> Connecting --ok--> Connected --leave--> Disconnected`,
//! with `Connecting --err--> Disconnected` on any failure. The permission
//! tri-state is tracked separately and may change at any moment; a `Denied`
//! permission replaces the whole panel with the remediation view regardless
//! of the connection phase.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

use serde::{Deserialize, Serialize};

use crate::config::{LOCAL_PARTICIPANT_ID, LOCAL_PARTICIPANT_NAME};
use crate::error::UiError;

/// Microphone permission as reported by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    #[default]
    Prompt,
}

/// Connection phase of the local session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionPhase {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// One roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub muted: bool,
    pub speaking: bool,
}

impl Participant {
    pub fn new(id: &str, name: &str, muted: bool, speaking: bool) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), muted, speaking }
    }

    /// The viewer's own entry as added on join.
    pub fn local() -> Self {
        Self::new(LOCAL_PARTICIPANT_ID, LOCAL_PARTICIPANT_NAME, false, false)
    }

    pub fn is_local(&self) -> bool {
        self.id == LOCAL_PARTICIPANT_ID
    }
}

/// What a join request should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinStep {
    /// Not allowed from the current phase.
    Ignore,
    /// Ask the platform for microphone access before connecting.
    RequestAccess,
    /// Permission is already granted; connect straight away.
    Connect,
}

/// Which top-level view the panel renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// Permission denied: only the remediation card.
    Remediation,
    /// The normal session panel.
    Session,
}

/// Session record for one voice panel instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoiceSession {
    pub permission: PermissionState,
    pub phase: ConnectionPhase,
    pub muted: bool,
    pub error: Option<String>,
    pub participants: Vec<Participant>,
}

impl VoiceSession {
    /// Record a permission report from the platform.
    pub fn permission_changed(&mut self, permission: PermissionState) {
        self.permission = permission;
    }

    pub fn begin_join(&mut self) -> JoinStep {
        if self.phase != ConnectionPhase::Disconnected {
            return JoinStep::Ignore;
        }
        self.phase = ConnectionPhase::Connecting;
        self.error = None;
        if self.permission == PermissionState::Granted {
            JoinStep::Connect
        } else {
            JoinStep::RequestAccess
        }
    }

    /// Apply the media-access outcome. Returns `true` when the join should
    /// proceed to connecting.
    pub fn access_resolved(&mut self, outcome: Result<(), UiError>) -> bool {
        if self.phase != ConnectionPhase::Connecting {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.permission = PermissionState::Granted;
                true
            }
            Err(_) => {
                self.permission = PermissionState::Denied;
                self.error = Some(UiError::MicrophoneDenied.message());
                self.phase = ConnectionPhase::Disconnected;
                false
            }
        }
    }

    /// Apply the connector outcome. The local participant is appended to
    /// the remote roster on success.
    pub fn connect_resolved(&mut self, outcome: Result<Vec<Participant>, UiError>) {
        if self.phase != ConnectionPhase::Connecting {
            return;
        }
        match outcome {
            Ok(mut remote) => {
                remote.retain(|p| !p.is_local());
                remote.push(Participant::local());
                self.participants = remote;
                self.muted = false;
                self.phase = ConnectionPhase::Connected;
            }
            Err(_) => {
                self.error = Some(UiError::ConnectFailed.message());
                self.phase = ConnectionPhase::Disconnected;
            }
        }
    }

    /// Flip the local mute flag. Other participants are untouched.
    pub fn toggle_mute(&mut self) {
        if self.phase != ConnectionPhase::Connected {
            return;
        }
        self.muted = !self.muted;
        let muted = self.muted;
        for p in self.participants.iter_mut().filter(|p| p.is_local()) {
            p.muted = muted;
        }
    }

    pub fn leave(&mut self) {
        self.phase = ConnectionPhase::Disconnected;
        self.participants.clear();
        self.muted = false;
        self.error = None;
    }

    pub fn view(&self) -> PanelView {
        if self.permission == PermissionState::Denied {
            PanelView::Remediation
        } else {
            PanelView::Session
        }
    }

    pub fn is_connected(&self) -> bool {
        self.phase == ConnectionPhase::Connected
    }

    pub fn is_connecting(&self) -> bool {
        self.phase == ConnectionPhase::Connecting
    }

    pub fn local_participant(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_local())
    }

    /// Header subtitle, e.g. "Connected • 4 participants".
    pub fn status_line(&self) -> String {
        if !self.is_connected() {
            return "Not connected".to_owned();
        }
        let count = self.participants.len();
        let noun = if count == 1 { "participant" } else { "participants" };
        format!("Connected • {count} {noun}")
    }

    pub fn join_label(&self) -> &'static str {
        if self.is_connecting() { "Connecting..." } else { "Join Voice Chat" }
    }

    pub fn mute_label(&self) -> &'static str {
        if self.muted { "Unmute" } else { "Mute" }
    }
}
