//! Telemetry readings
//!
//! A `Reading` is one sample of the animal's vitals, immutable once created.

use serde::{Deserialize, Serialize};

/// One timestamped biometric sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Generation time, ISO-8601 with second precision
    pub timestamp: String,

    /// Body temperature in °C, one fractional digit
    #[serde(rename = "temperatura_celsius")]
    pub temperature_celsius: f64,

    /// Heart rate in beats per minute
    #[serde(rename = "frecuencia_cardiaca_lpm")]
    pub heart_rate_bpm: u32,
}

impl Reading {
    pub fn new(timestamp: impl Into<String>, temperature_celsius: f64, heart_rate_bpm: u32) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature_celsius,
            heart_rate_bpm,
        }
    }
}
