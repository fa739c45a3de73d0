//! Synthetic vitals sampling
//!
//! Each sample draws temperature and heart rate from a two-band distribution:
//! a normal band most of the time, an out-of-range band with a small fixed
//! probability. The out-of-band draws keep the anomaly detector exercised on
//! real boundary data without a separate injection harness, while staying
//! rare enough not to dominate a 50-reading history window.

use rand::{rngs::StdRng, Rng, SeedableRng};
use twin_types::Reading;

/// Probability that a single metric draw lands in its anomalous band
pub const OUT_OF_BAND_PROBABILITY: f64 = 0.10;

/// Normal body temperature band, °C
pub const TEMPERATURE_NORMAL_BAND: (f64, f64) = (37.5, 39.2);

/// Anomalous-high temperature band, °C
pub const TEMPERATURE_ANOMALOUS_BAND: (f64, f64) = (39.5, 41.0);

/// Normal heart-rate band, bpm
pub const HEART_RATE_NORMAL_BAND: (u32, u32) = (70, 120);

/// Anomalous-high heart-rate band, bpm
pub const HEART_RATE_ANOMALOUS_BAND: (u32, u32) = (130, 180);

/// Source of synthetic readings
///
/// A trait seam so the storage layer can run against a deterministic sampler
/// in tests while production uses entropy-seeded randomness.
pub trait Sampler: Send {
    /// Produce one reading stamped with the current local time
    fn sample(&mut self) -> Reading;
}

/// Two-band sampler: normal values with occasional out-of-range injections
pub struct TwoBandSampler<R: Rng> {
    rng: R,
}

impl TwoBandSampler<StdRng> {
    /// Create a sampler seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> TwoBandSampler<R> {
    /// Create a sampler over a caller-provided rng (seeded in tests)
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn sample_temperature(&mut self) -> f64 {
        let (min, max) = if self.rng.gen_bool(OUT_OF_BAND_PROBABILITY) {
            TEMPERATURE_ANOMALOUS_BAND
        } else {
            TEMPERATURE_NORMAL_BAND
        };
        let raw = self.rng.gen_range(min..=max);
        (raw * 10.0).round() / 10.0
    }

    fn sample_heart_rate(&mut self) -> u32 {
        let (min, max) = if self.rng.gen_bool(OUT_OF_BAND_PROBABILITY) {
            HEART_RATE_ANOMALOUS_BAND
        } else {
            HEART_RATE_NORMAL_BAND
        };
        self.rng.gen_range(min..=max)
    }
}

impl<R: Rng + Send> Sampler for TwoBandSampler<R> {
    fn sample(&mut self) -> Reading {
        // Independent draws: a reading can be anomalous in zero, one,
        // or both dimensions.
        let temperature = self.sample_temperature();
        let heart_rate = self.sample_heart_rate();

        Reading::new(current_timestamp(), temperature, heart_rate)
    }
}

/// Local time, ISO-8601, second precision
fn current_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
