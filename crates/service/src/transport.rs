//! Simulated network boundary: artificial latency plus injected failures.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use salesdesk_core::{StoreError, StoreResult};

/// Tuning knobs for the simulated transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    /// Lower bound of the per-call latency (inclusive).
    pub latency_min: Duration,
    /// Upper bound of the per-call latency (inclusive).
    pub latency_max: Duration,
    /// Probability in `0.0..=1.0` that a call fails with `Transient`.
    pub failure_rate: f64,
    /// Fixed PRNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            latency_min: Duration::from_millis(100),
            latency_max: Duration::from_millis(400),
            failure_rate: 0.05,
            seed: None,
        }
    }
}

impl TransportConfig {
    /// Zero latency and no failures, with a fixed seed. For tests that only
    /// care about store semantics.
    pub fn reliable() -> Self {
        Self {
            latency_min: Duration::ZERO,
            latency_max: Duration::ZERO,
            failure_rate: 0.0,
            seed: Some(0),
        }
    }

    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_latency(mut self, min: Duration, max: Duration) -> Self {
        self.latency_min = min;
        self.latency_max = max;
        self
    }
}

/// Stand-in for a real network boundary.
///
/// Every call sleeps a sampled latency, then either fails with
/// [`StoreError::Transient`] or runs the wrapped operation. The delay always
/// elapses before the outcome is decided, and on an injected failure the
/// operation never runs, so a `Transient` error can never leave partial
/// mutations behind.
#[derive(Debug)]
pub struct SimulatedTransport {
    latency_min: Duration,
    latency_max: Duration,
    failure_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedTransport {
    pub fn new(config: TransportConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let latency_max = config.latency_max.max(config.latency_min);
        Self {
            latency_min: config.latency_min,
            latency_max,
            failure_rate: config.failure_rate.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        }
    }

    /// Run `op` behind the simulated boundary.
    pub async fn invoke<T>(&self, op: impl FnOnce() -> StoreResult<T>) -> StoreResult<T> {
        let (delay, fail) = self.sample();
        tokio::time::sleep(delay).await;
        if fail {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "injected transient failure");
            return Err(StoreError::Transient);
        }
        op()
    }

    fn sample(&self) -> (Duration, bool) {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let delay = if self.latency_max.is_zero() {
            Duration::ZERO
        } else {
            rng.gen_range(self.latency_min..=self.latency_max)
        };
        let fail = self.failure_rate > 0.0 && rng.gen_bool(self.failure_rate);
        (delay, fail)
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap()
    }

    #[test]
    fn failing_call_never_runs_the_operation() {
        let transport = SimulatedTransport::new(TransportConfig::reliable().with_failure_rate(1.0));
        let ran = AtomicUsize::new(0);

        let result = runtime().block_on(transport.invoke(|| {
            ran.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));

        assert_eq!(result, Err(StoreError::Transient));
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn reliable_transport_always_runs_the_operation() {
        let transport = SimulatedTransport::new(TransportConfig::reliable());
        let ran = AtomicUsize::new(0);

        let rt = runtime();
        for _ in 0..100 {
            let result = rt.block_on(transport.invoke(|| {
                ran.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            }));
            assert_eq!(result, Ok(7));
        }
        assert_eq!(ran.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn same_seed_injects_the_same_failure_pattern() {
        let rt = runtime();
        let pattern = |seed: u64| -> Vec<bool> {
            let transport =
                SimulatedTransport::new(TransportConfig::reliable().with_failure_rate(0.5).with_seed(seed));
            (0..64)
                .map(|_| rt.block_on(transport.invoke(|| Ok(()))).is_err())
                .collect()
        };

        assert_eq!(pattern(11), pattern(11));
        assert_ne!(pattern(11), pattern(12));
    }

    #[test]
    fn sampled_latency_stays_within_bounds() {
        let config = TransportConfig::reliable().with_latency(
            Duration::from_millis(5),
            Duration::from_millis(20),
        );
        let transport = SimulatedTransport::new(config);

        for _ in 0..200 {
            let (delay, _) = transport.sample();
            assert!(delay >= Duration::from_millis(5));
            assert!(delay <= Duration::from_millis(20));
        }
    }
}
