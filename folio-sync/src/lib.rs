//! Aggregated view and live sync for the folio content core.
//!
//! [`ViewBuilder`] fetches every public collection concurrently and
//! merges them into one consistent snapshot with derived statistics;
//! [`SyncController`] keeps that snapshot live by re-aggregating on
//! change events, coalescing bursts into a single refetch.

pub mod controller;
pub mod error;
pub mod stats;
pub mod view;

pub use controller::{Snapshot, SyncConfig, SyncController, SyncHandle};
pub use error::AggregationError;
pub use stats::{PortfolioStats, StatFallbacks, compute_stats};
pub use view::{PortfolioView, ViewBuilder, WATCHED_TABLES};
