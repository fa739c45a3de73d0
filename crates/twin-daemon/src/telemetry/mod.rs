//! Telemetry core: sampling, anomaly detection, device status

pub mod anomaly;
pub mod device;
pub mod sampler;

pub use anomaly::detect;
pub use device::device_status;
pub use sampler::{Sampler, TwoBandSampler};
