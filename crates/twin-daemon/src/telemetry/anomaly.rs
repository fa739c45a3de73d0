//! Anomaly detection over telemetry history
//!
//! Pure scan: no state, no side effects. Each reading is tested independently
//! against the fixed normal bands and can yield zero, one, or two anomalies.

use twin_types::{
    Anomaly, AnomalyKind, AnomalySubtype, AnomalyValue, Reading, HEART_RATE_NORMAL_RANGE,
    TEMPERATURE_NORMAL_RANGE,
};

/// Scan readings in order and emit every band violation
///
/// Per reading the temperature anomaly (if any) is emitted before the
/// heart-rate anomaly; across readings input order is preserved.
pub fn detect(readings: &[Reading]) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    for reading in readings {
        if !TEMPERATURE_NORMAL_RANGE.contains(reading.temperature_celsius) {
            let subtype = if reading.temperature_celsius < TEMPERATURE_NORMAL_RANGE.min {
                AnomalySubtype::Hypothermia
            } else {
                AnomalySubtype::Fever
            };

            anomalies.push(Anomaly {
                timestamp: reading.timestamp.clone(),
                kind: AnomalyKind::Temperature,
                subtype,
                value: AnomalyValue::Temperature(reading.temperature_celsius),
                normal_range: TEMPERATURE_NORMAL_RANGE.to_string(),
            });
        }

        if !HEART_RATE_NORMAL_RANGE.contains(reading.heart_rate_bpm as f64) {
            let subtype = if (reading.heart_rate_bpm as f64) < HEART_RATE_NORMAL_RANGE.min {
                AnomalySubtype::Bradycardia
            } else {
                AnomalySubtype::Tachycardia
            };

            anomalies.push(Anomaly {
                timestamp: reading.timestamp.clone(),
                kind: AnomalyKind::HeartRate,
                subtype,
                value: AnomalyValue::HeartRate(reading.heart_rate_bpm),
                normal_range: HEART_RATE_NORMAL_RANGE.to_string(),
            });
        }
    }

    anomalies
}
