//! In-process change-notification hub.
//!
//! Repositories publish here after every successful local mutation and
//! the live sync controller subscribes. A deployment bridges the same
//! hub to the platform's realtime channel so remote writes surface the
//! same way; reconnection and backoff stay with that channel, not with
//! this core.

use folio_types::ChangeEvent;
use tokio::sync::broadcast;
use tracing::trace;

/// Source of change events a consumer can subscribe to.
pub trait ChangeFeed {
    /// Hands out a receiver; dropping it ends the subscription.
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}

/// Broadcast-backed hub fanning change events out to any number of
/// observers.
#[derive(Clone)]
pub struct ChangeHub {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event. Dropped silently when nobody is subscribed.
    pub fn publish(&self, event: ChangeEvent) {
        trace!(table = %event.table, op = ?event.op, "change event");
        let _ = self.tx.send(event);
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new(64)
    }
}

impl ChangeFeed for ChangeHub {
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }
}
