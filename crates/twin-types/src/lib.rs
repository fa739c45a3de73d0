//! Twin Types - Core types for the digital-twin telemetry backend
//!
//! A virtual animal "digital twin" is observed through timestamped biometric
//! readings (body temperature, heart rate). This crate owns the value objects
//! shared between the daemon and its consumers:
//!
//! - **Reading**: one timestamped temperature/heart-rate sample
//! - **Anomaly**: a reading dimension found outside its normal band
//! - **DeviceStatus**: the simulated collar device payload
//!
//! Field names on the wire are the contract of the original backend and its
//! existing dashboard consumers (Spanish keys such as `temperatura_celsius`);
//! Rust-side identifiers stay English. Renames live here and nowhere else.

#![deny(unsafe_code)]

pub mod anomaly;
pub mod device;
pub mod reading;

// Re-export main types
pub use anomaly::{Anomaly, AnomalyKind, AnomalySubtype, AnomalyValue, NormalRange};
pub use anomaly::{HEART_RATE_NORMAL_RANGE, TEMPERATURE_NORMAL_RANGE};
pub use device::DeviceStatus;
pub use reading::Reading;
