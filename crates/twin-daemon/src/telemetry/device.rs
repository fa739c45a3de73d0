//! Simulated device status provider

use twin_types::DeviceStatus;

/// Stable identifier of the simulated collar
pub const DEVICE_ID: &str = "IOT_ANIMAL_001";

/// Reported battery level, percent
pub const BATTERY_LEVEL: u8 = 85;

/// Current status of the simulated device
///
/// Everything is fixed except `last_update`, which is stamped at call time.
pub fn device_status() -> DeviceStatus {
    DeviceStatus {
        online: true,
        battery_level: BATTERY_LEVEL,
        signal_strength: "Strong".to_string(),
        last_update: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        device_id: DEVICE_ID.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_stable_across_calls() {
        for _ in 0..3 {
            let status = device_status();
            assert!(status.online);
            assert_eq!(status.battery_level, 85);
            assert_eq!(status.signal_strength, "Strong");
            assert_eq!(status.device_id, "IOT_ANIMAL_001");
        }
    }

    #[test]
    fn test_last_update_is_freshly_stamped_utc() {
        let status = device_status();
        assert!(status.last_update.ends_with('Z'));
        assert!(chrono::NaiveDateTime::parse_from_str(
            &status.last_update,
            "%Y-%m-%dT%H:%M:%SZ"
        )
        .is_ok());
    }
}
