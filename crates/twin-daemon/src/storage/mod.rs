//! Storage backends for telemetry history

mod memory;
mod traits;

pub use memory::{InMemoryTelemetry, MAX_HISTORY_SIZE};
pub use traits::{StorageResult, TelemetryStorage};
