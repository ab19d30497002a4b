use crate::sdk::Sdk;
use crate::session::Session;
use std::time::{Duration, Instant};

/// Timing for base station discovery.
///
/// The SDK finds hardware asynchronously after `init` and exposes no
/// readiness signal, so discovery waits `settle` and then re-checks with
/// exponential backoff until a base shows up or `timeout` runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub settle: Duration,
    pub poll_interval: Duration,
    pub max_poll_interval: Duration,
    /// Measured from the end of `settle`.
    pub timeout: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            settle: Duration::from_secs(1),
            poll_interval: Duration::from_millis(100),
            max_poll_interval: Duration::from_millis(800),
            timeout: Duration::from_secs(3),
        }
    }
}

/// Wait until at least one base station is connected.
///
/// Returns the connected base indices; empty if none appeared in time.
pub fn await_bases<S: Sdk>(session: &Session<S>, config: &DiscoveryConfig) -> Vec<usize> {
    if !config.settle.is_zero() {
        std::thread::sleep(config.settle);
    }

    let start = Instant::now();
    let mut interval = config.poll_interval;
    let mut attempt = 1u32;

    loop {
        let bases = session.connected_bases();
        if !bases.is_empty() {
            log::debug!("Found {} base(s) on poll {}", bases.len(), attempt);
            return bases;
        }

        let elapsed = start.elapsed();
        if elapsed >= config.timeout {
            log::warn!(
                "No base station connected after {} poll(s) ({:?})",
                attempt,
                config.settle + elapsed
            );
            return bases;
        }

        log::debug!("No base yet (poll {}), retrying in {:?}", attempt, interval);
        std::thread::sleep(interval.min(config.timeout - elapsed));
        interval = (interval * 2).min(config.max_poll_interval);
        attempt += 1;
    }
}
