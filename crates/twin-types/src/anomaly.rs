//! Anomaly types and the fixed normal bands
//!
//! Anomalies are derived on demand from readings and never stored. The wire
//! labels (`Temperatura`, `Hipotermia`, ...) are what the original dashboard
//! consumes; Rust variant names stay English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive numeric band considered healthy for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
    /// Unit suffix used when rendering the band ("°C", " lpm")
    pub unit: &'static str,
}

impl NormalRange {
    pub const fn new(min: f64, max: f64, unit: &'static str) -> Self {
        Self { min, max, unit }
    }

    /// Whether a value sits inside the band (bounds inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for NormalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}{}", self.min, self.max, self.unit)
    }
}

/// Healthy body temperature band, °C
pub const TEMPERATURE_NORMAL_RANGE: NormalRange = NormalRange::new(37.5, 39.2, "°C");

/// Healthy heart-rate band, beats per minute
pub const HEART_RATE_NORMAL_RANGE: NormalRange = NormalRange::new(70.0, 120.0, " lpm");

/// Which metric violated its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyKind {
    #[serde(rename = "Temperatura")]
    Temperature,
    #[serde(rename = "Frecuencia Cardíaca")]
    HeartRate,
}

/// Clinical classification of the violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalySubtype {
    #[serde(rename = "Hipotermia")]
    Hypothermia,
    #[serde(rename = "Fiebre")]
    Fever,
    #[serde(rename = "Bradicardia")]
    Bradycardia,
    #[serde(rename = "Taquicardia")]
    Tachycardia,
}

/// Out-of-band value, typed per metric so heart rates stay integers on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnomalyValue {
    HeartRate(u32),
    Temperature(f64),
}

/// One detected violation of a normal band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Timestamp of the source reading
    pub timestamp: String,

    /// Violated metric
    #[serde(rename = "type")]
    pub kind: AnomalyKind,

    /// Clinical sub-classification
    pub subtype: AnomalySubtype,

    /// The offending value
    pub value: AnomalyValue,

    /// Human-readable rendering of the violated band
    pub normal_range: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(TEMPERATURE_NORMAL_RANGE.contains(37.5));
        assert!(TEMPERATURE_NORMAL_RANGE.contains(39.2));
        assert!(!TEMPERATURE_NORMAL_RANGE.contains(39.3));
        assert!(!TEMPERATURE_NORMAL_RANGE.contains(37.4));

        assert!(HEART_RATE_NORMAL_RANGE.contains(70.0));
        assert!(HEART_RATE_NORMAL_RANGE.contains(120.0));
        assert!(!HEART_RATE_NORMAL_RANGE.contains(121.0));
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(TEMPERATURE_NORMAL_RANGE.to_string(), "37.5-39.2°C");
        assert_eq!(HEART_RATE_NORMAL_RANGE.to_string(), "70-120 lpm");
    }

    #[test]
    fn test_anomaly_wire_shape() {
        let anomaly = Anomaly {
            timestamp: "2025-08-30T12:00:00".to_string(),
            kind: AnomalyKind::Temperature,
            subtype: AnomalySubtype::Fever,
            value: AnomalyValue::Temperature(40.1),
            normal_range: TEMPERATURE_NORMAL_RANGE.to_string(),
        };

        let json = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(json["type"], "Temperatura");
        assert_eq!(json["subtype"], "Fiebre");
        assert_eq!(json["value"], 40.1);
        assert_eq!(json["normal_range"], "37.5-39.2°C");
    }

    #[test]
    fn test_heart_rate_value_serializes_as_integer() {
        let anomaly = Anomaly {
            timestamp: "2025-08-30T12:00:00".to_string(),
            kind: AnomalyKind::HeartRate,
            subtype: AnomalySubtype::Tachycardia,
            value: AnomalyValue::HeartRate(150),
            normal_range: HEART_RATE_NORMAL_RANGE.to_string(),
        };

        let json = serde_json::to_string(&anomaly).unwrap();
        assert!(json.contains("\"value\":150"));
        assert!(json.contains("Taquicardia"));
        assert!(json.contains("Frecuencia Cardíaca"));
    }
}
