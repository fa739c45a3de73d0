//! Simulated collar device status

use serde::{Deserialize, Serialize};

/// Status payload for the simulated IoT collar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Whether the device is reachable
    pub online: bool,

    /// Remaining battery, percent
    pub battery_level: u8,

    /// Qualitative signal strength
    pub signal_strength: String,

    /// Time the status was produced, ISO-8601 UTC with second precision
    pub last_update: String,

    /// Stable device identifier
    pub device_id: String,
}
