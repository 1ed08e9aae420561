//! Authoritative in-memory session state.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

/// An authenticated owner session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub access_token: String,
}

/// The single process-wide session value, with a change feed.
///
/// Controllers receive the session as an explicit argument on every
/// call; this type only answers "what is the session right now" and
/// notifies observers when it changes. Subscribe before restoring a
/// saved session so no transition is missed.
#[derive(Clone)]
pub struct SessionState {
    tx: watch::Sender<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replaces the current session and notifies subscribers.
    pub fn set(&self, session: Option<Session>) {
        self.tx.send_replace(session);
    }

    /// Drops the current session (sign-out).
    pub fn clear(&self) {
        self.set(None);
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// The session change feed.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
