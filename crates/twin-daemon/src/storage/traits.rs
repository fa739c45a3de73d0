//! Storage trait for telemetry history

use crate::error::StorageError;
use async_trait::async_trait;
use twin_types::Reading;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// History buffer behind the API handlers
///
/// The in-memory backend is infallible; the `Result` surface exists so a
/// persistent backend (file- or database-backed history) can report failures
/// through the API's 500 envelope without touching the handlers.
#[async_trait]
pub trait TelemetryStorage: Send + Sync {
    /// Add a reading to the end of history, evicting the oldest entry
    /// when capacity is exceeded
    async fn append(&self, reading: Reading) -> StorageResult<()>;

    /// Current history, oldest-first
    ///
    /// An empty buffer is seeded with exactly one sampled reading before
    /// returning, so callers never observe empty history.
    async fn history(&self) -> StorageResult<Vec<Reading>>;

    /// Sample a new reading, append it, and return it
    ///
    /// Every call is a write: history grows (subject to eviction) on each
    /// request for the latest reading.
    async fn record_latest(&self) -> StorageResult<Reading>;
}
