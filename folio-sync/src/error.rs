//! Aggregation error type.

use folio_store::StoreError;
use thiserror::Error;

/// A collection fetch failed during aggregation.
///
/// Wraps the first failing fetch; the whole build fails and no partial
/// snapshot is produced. Surfaced as a full-page error state with a
/// manual retry, never a partial render.
#[derive(Debug, Error)]
#[error("aggregation failed: {0}")]
pub struct AggregationError(#[from] pub StoreError);
