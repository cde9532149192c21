use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::state::voice::{ConnectionPhase, PermissionState};

/// Session store backed by a `RefCell`; reports disposal once `budget`
/// writes have been used up.
struct TestStore {
    session: RefCell<VoiceSession>,
    budget: Cell<usize>,
}

impl TestStore {
    fn with_permission(permission: PermissionState) -> Self {
        Self {
            session: RefCell::new(VoiceSession { permission, ..VoiceSession::default() }),
            budget: Cell::new(usize::MAX),
        }
    }

    fn disposed_after(self, writes: usize) -> Self {
        self.budget.set(writes);
        self
    }

    fn snapshot(&self) -> VoiceSession {
        self.session.borrow().clone()
    }
}

impl SessionStore for TestStore {
    fn try_apply<R>(&self, f: impl FnOnce(&mut VoiceSession) -> R) -> Option<R> {
        let left = self.budget.get();
        if left == 0 {
            return None;
        }
        self.budget.set(left - 1);
        Some(f(&mut *self.session.borrow_mut()))
    }
}

#[derive(Clone)]
struct CountingConnector {
    calls: Rc<Cell<usize>>,
    fail: bool,
}

impl CountingConnector {
    fn new(fail: bool) -> Self {
        Self { calls: Rc::new(Cell::new(0)), fail }
    }
}

impl VoiceConnector for CountingConnector {
    async fn attempt_connect(&self) -> Result<Vec<Participant>, UiError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail { Err(UiError::ConnectFailed) } else { Ok(mock_roster()) }
    }
}

// =============================================================
// Mock roster
// =============================================================

#[test]
fn mock_roster_has_three_remote_participants() {
    let roster = mock_roster();
    assert_eq!(roster.len(), 3);
    assert!(roster.iter().all(|p| !p.is_local()));
}

#[test]
fn mock_roster_ids_are_unique() {
    let roster = mock_roster();
    let mut ids: Vec<&str> = roster.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), roster.len());
}

// =============================================================
// MockVoiceConnector
// =============================================================

#[test]
fn default_connector_uses_two_second_delay() {
    assert_eq!(MockVoiceConnector::default().delay(), Duration::from_millis(2000));
}

#[test]
fn connector_honours_configured_delay() {
    let connector = MockVoiceConnector::new(VoiceConfig { connect_delay: Duration::from_millis(5) });
    assert_eq!(connector.delay(), Duration::from_millis(5));
}

#[test]
fn attempt_connect_returns_mock_roster() {
    let connector = MockVoiceConnector::new(VoiceConfig { connect_delay: Duration::ZERO });
    let roster = futures::executor::block_on(connector.attempt_connect()).unwrap();
    assert_eq!(roster, mock_roster());
}

// =============================================================
// Join flow
// =============================================================

#[test]
fn join_with_prompt_requests_access_then_connects() {
    let store = TestStore::with_permission(PermissionState::Prompt);
    let connector = CountingConnector::new(false);
    let asked = Cell::new(0);

    let outcome = block_on(join(&store, &connector, || {
        asked.set(asked.get() + 1);
        async { Ok(()) }
    }));

    assert_eq!(outcome, JoinOutcome::Connected);
    assert_eq!(asked.get(), 1);
    assert_eq!(connector.calls.get(), 1);
    let session = store.snapshot();
    assert_eq!(session.permission, PermissionState::Granted);
    assert_eq!(session.phase, ConnectionPhase::Connected);
    assert_eq!(session.participants.len(), 4);
}

#[test]
fn join_with_granted_permission_skips_access_request() {
    let store = TestStore::with_permission(PermissionState::Granted);
    let connector = CountingConnector::new(false);
    let asked = Cell::new(0);

    let outcome = block_on(join(&store, &connector, || {
        asked.set(asked.get() + 1);
        async { Ok(()) }
    }));

    assert_eq!(outcome, JoinOutcome::Connected);
    assert_eq!(asked.get(), 0);
    assert_eq!(connector.calls.get(), 1);
}

#[test]
fn denied_access_never_reaches_connector() {
    let store = TestStore::with_permission(PermissionState::Prompt);
    let connector = CountingConnector::new(false);

    let outcome = block_on(join(&store, &connector, || async { Err(UiError::MicrophoneDenied) }));

    assert_eq!(outcome, JoinOutcome::AccessDenied);
    assert_eq!(connector.calls.get(), 0);
    let session = store.snapshot();
    assert_eq!(session.permission, PermissionState::Denied);
    assert_eq!(session.phase, ConnectionPhase::Disconnected);
    assert_eq!(session.error, Some(UiError::MicrophoneDenied.message()));
}

#[test]
fn connect_failure_returns_to_disconnected_with_error() {
    let store = TestStore::with_permission(PermissionState::Granted);
    let connector = CountingConnector::new(true);

    let outcome = block_on(join(&store, &connector, || async { Ok(()) }));

    assert_eq!(outcome, JoinOutcome::ConnectFailed);
    let session = store.snapshot();
    assert_eq!(session.phase, ConnectionPhase::Disconnected);
    assert_eq!(session.error, Some(UiError::ConnectFailed.message()));
    assert!(session.participants.is_empty());
}

#[test]
fn join_while_connecting_is_ignored() {
    let store = TestStore::with_permission(PermissionState::Granted);
    store.session.borrow_mut().phase = ConnectionPhase::Connecting;
    let connector = CountingConnector::new(false);

    let outcome = block_on(join(&store, &connector, || async { Ok(()) }));

    assert_eq!(outcome, JoinOutcome::Ignored);
    assert_eq!(connector.calls.get(), 0);
}

#[test]
fn disposal_after_access_stops_before_connect() {
    let store = TestStore::with_permission(PermissionState::Prompt).disposed_after(1);
    let connector = CountingConnector::new(false);

    let outcome = block_on(join(&store, &connector, || async { Ok(()) }));

    assert_eq!(outcome, JoinOutcome::Disposed);
    assert_eq!(connector.calls.get(), 0);
    assert_eq!(store.snapshot().phase, ConnectionPhase::Connecting);
}

#[test]
fn disposal_during_connect_drops_result() {
    let store = TestStore::with_permission(PermissionState::Granted).disposed_after(1);
    let connector = CountingConnector::new(false);

    let outcome = block_on(join(&store, &connector, || async { Ok(()) }));

    assert_eq!(outcome, JoinOutcome::Disposed);
    assert_eq!(connector.calls.get(), 1);
    assert!(store.snapshot().participants.is_empty());
}
