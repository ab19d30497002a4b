use crate::discovery::DiscoveryConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Which base station the driver activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseSelection {
    /// Lowest connected index.
    #[default]
    FirstConnected,
    /// A specific base; falls back to the first connected one if it is absent.
    Index(usize),
}

impl BaseSelection {
    /// Pick a base from the ascending list of connected indices.
    pub fn choose(self, connected: &[usize]) -> Option<usize> {
        let first = connected.first().copied();
        match self {
            BaseSelection::FirstConnected => first,
            BaseSelection::Index(want) if connected.contains(&want) => Some(want),
            BaseSelection::Index(want) => {
                if let Some(base) = first {
                    log::warn!(
                        "Requested base {} is not connected, using base {}",
                        want,
                        base
                    );
                }
                first
            }
        }
    }
}

/// Runtime settings read from `SIXENSE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// `SIXENSE_LIBRARY`; `None` searches the platform default names.
    pub library: Option<PathBuf>,
    pub discovery: DiscoveryConfig,
    /// `SIXENSE_BASE`.
    pub base: BaseSelection,
    /// `SIXENSE_FILTER`; `None` leaves the SDK's filter setting untouched.
    pub filter: Option<bool>,
}

impl Config {
    pub fn from_env() -> Config {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DiscoveryConfig::default();
        let millis = |name: &str, default: Duration| {
            lookup(name)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        let poll_interval = millis("SIXENSE_POLL_MS", defaults.poll_interval);
        let discovery = DiscoveryConfig {
            settle: millis("SIXENSE_SETTLE_MS", defaults.settle),
            poll_interval,
            max_poll_interval: defaults.max_poll_interval.max(poll_interval),
            timeout: millis("SIXENSE_DISCOVERY_TIMEOUT_MS", defaults.timeout),
        };

        let library = lookup("SIXENSE_LIBRARY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let base = lookup("SIXENSE_BASE")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(BaseSelection::Index)
            .unwrap_or_default();

        let filter = lookup("SIXENSE_FILTER").and_then(|v| parse_bool(&v));

        Config {
            library,
            discovery,
            base,
            filter,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
