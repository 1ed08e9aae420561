//! Live sync controller.
//!
//! A single consumer task drains change events from the notification
//! channel, coalesces bursts into one re-aggregation per debounce
//! window, and publishes whole snapshots through a watch channel.
//! Rebuilds run serially inside the task, so the snapshot applied is
//! always the most recently completed one and consumers never observe
//! a half-updated view. The task stops when told to, or as soon as
//! nobody is observing the view.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use folio_store::ChangeFeed;
use folio_types::ChangeEvent;

use crate::view::{PortfolioView, ViewBuilder, WATCHED_TABLES};

/// Live sync configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// How long to wait after a change event before rebuilding, so a
    /// burst of events triggers a single refetch.
    pub debounce: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(250),
        }
    }
}

/// What view consumers currently see.
#[derive(Debug, Clone)]
pub enum Snapshot {
    /// The initial aggregation has not completed yet.
    Loading,
    /// A complete, consistent view.
    Ready(Arc<PortfolioView>),
    /// The initial aggregation failed; retry via
    /// [`SyncHandle::refresh`].
    Failed(String),
}

impl Snapshot {
    pub fn ready(&self) -> Option<&PortfolioView> {
        match self {
            Snapshot::Ready(view) => Some(view),
            _ => None,
        }
    }
}

enum Command {
    Refresh,
    Stop,
}

/// Handle for driving the controller task.
#[derive(Clone)]
pub struct SyncHandle {
    command_tx: mpsc::Sender<Command>,
}

impl SyncHandle {
    /// Requests an immediate rebuild (the manual retry affordance).
    /// Returns false when the controller has already stopped.
    pub async fn refresh(&self) -> bool {
        self.command_tx.send(Command::Refresh).await.is_ok()
    }

    /// Stops the controller, dropping its channel subscription.
    pub async fn stop(&self) -> bool {
        self.command_tx.send(Command::Stop).await.is_ok()
    }
}

/// The controller task state.
pub struct SyncController {
    builder: ViewBuilder,
    events: broadcast::Receiver<ChangeEvent>,
    command_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<Snapshot>,
    debounce: Duration,
}

impl SyncController {
    /// Spawns the controller task. The returned receiver observes
    /// snapshots; the handle drives refresh and teardown.
    pub fn spawn(
        builder: ViewBuilder,
        feed: &dyn ChangeFeed,
        config: SyncConfig,
    ) -> (SyncHandle, watch::Receiver<Snapshot>) {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::Loading);

        let controller = Self {
            builder,
            events: feed.subscribe(),
            command_rx,
            snapshot_tx,
            debounce: config.debounce,
        };
        tokio::spawn(controller.run());

        (SyncHandle { command_tx }, snapshot_rx)
    }

    async fn run(mut self) {
        info!("live sync controller started");
        self.rebuild(true).await;

        // Armed while at least one change event awaits its rebuild.
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    match event {
                        Ok(event) if WATCHED_TABLES.contains(&event.table.as_str()) => {
                            debug!(table = %event.table, "change event, debouncing");
                            deadline.get_or_insert_with(|| Instant::now() + self.debounce);
                        }
                        Ok(_) => {} // unwatched table
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            // Missed events still mean "something changed".
                            warn!("change feed lagged by {skipped} events");
                            deadline.get_or_insert_with(|| Instant::now() + self.debounce);
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            info!("change feed closed, stopping live sync");
                            break;
                        }
                    }
                }
                () = wait_until(deadline), if deadline.is_some() => {
                    deadline = None;
                    self.rebuild(false).await;
                }
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(Command::Refresh) => {
                            deadline = None;
                            self.rebuild(true).await;
                        }
                        Some(Command::Stop) | None => break,
                    }
                }
                () = self.snapshot_tx.closed() => {
                    info!("view no longer observed, stopping live sync");
                    break;
                }
            }
        }

        info!("live sync controller stopped");
    }

    /// Rebuilds the snapshot. `surface_failure` controls whether an
    /// error may replace what consumers see (initial build, manual
    /// retry) or only logs: a failed background refresh leaves the
    /// last-known-good snapshot displayed.
    async fn rebuild(&mut self, surface_failure: bool) {
        match self.builder.build().await {
            Ok(view) => {
                self.snapshot_tx.send_replace(Snapshot::Ready(Arc::new(view)));
            }
            Err(e) => {
                let has_good = matches!(&*self.snapshot_tx.borrow(), Snapshot::Ready(_));
                if surface_failure && !has_good {
                    self.snapshot_tx.send_replace(Snapshot::Failed(e.to_string()));
                } else {
                    warn!("refresh failed, keeping last snapshot: {e}");
                }
            }
        }
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
