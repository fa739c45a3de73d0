//! Twin Daemon library
//!
//! This module provides the core components for the telemetry daemon:
//! - Telemetry sampling and anomaly detection
//! - Storage backends (bounded in-memory history)
//! - REST API handlers
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod telemetry;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError, StorageError};
pub use server::Server;
pub use storage::{InMemoryTelemetry, TelemetryStorage, MAX_HISTORY_SIZE};
