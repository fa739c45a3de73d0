//! In-memory telemetry history

use super::traits::{StorageResult, TelemetryStorage};
use crate::telemetry::{Sampler, TwoBandSampler};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use twin_types::Reading;

/// Maximum number of readings kept in history
pub const MAX_HISTORY_SIZE: usize = 50;

/// Buffer contents and the sampler that feeds them, guarded together
/// so seeding and eviction cannot race under concurrent requests.
struct Inner {
    readings: VecDeque<Reading>,
    sampler: Box<dyn Sampler>,
}

/// Bounded FIFO history held in process memory
///
/// Created empty at startup, never persisted. Every operation can mutate
/// (even `history` seeds an empty buffer), so all of them run under one
/// mutex; concurrent `record_latest` calls would otherwise lose evictions.
pub struct InMemoryTelemetry {
    inner: Mutex<Inner>,
}

impl Default for InMemoryTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTelemetry {
    /// Create an empty history fed by the entropy-seeded two-band sampler
    pub fn new() -> Self {
        Self::with_sampler(TwoBandSampler::from_entropy())
    }

    /// Create an empty history over a caller-provided sampler
    pub fn with_sampler(sampler: impl Sampler + 'static) -> Self {
        Self {
            inner: Mutex::new(Inner {
                readings: VecDeque::with_capacity(MAX_HISTORY_SIZE + 1),
                sampler: Box::new(sampler),
            }),
        }
    }

    fn push_bounded(readings: &mut VecDeque<Reading>, reading: Reading) {
        readings.push_back(reading);
        if readings.len() > MAX_HISTORY_SIZE {
            readings.pop_front();
        }
    }
}

#[async_trait]
impl TelemetryStorage for InMemoryTelemetry {
    async fn append(&self, reading: Reading) -> StorageResult<()> {
        let mut inner = self.inner.lock().await;
        Self::push_bounded(&mut inner.readings, reading);
        Ok(())
    }

    async fn history(&self) -> StorageResult<Vec<Reading>> {
        let mut inner = self.inner.lock().await;

        // Lazy seed: history is never observed empty
        if inner.readings.is_empty() {
            let seeded = inner.sampler.sample();
            Self::push_bounded(&mut inner.readings, seeded);
        }

        Ok(inner.readings.iter().cloned().collect())
    }

    async fn record_latest(&self) -> StorageResult<Reading> {
        let mut inner = self.inner.lock().await;
        let reading = inner.sampler.sample();
        Self::push_bounded(&mut inner.readings, reading.clone());
        Ok(reading)
    }
}
