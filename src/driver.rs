//! One-shot dump of every enabled controller on the first connected base.
//!
//! Sequence: init, wait for discovery, pick a base, list enabled
//! controllers, print the newest sample of each, shut down. A failed base
//! activation is logged and a failed sample is reported and skipped; only init
//! and shutdown failures abort the run.

use crate::config::BaseSelection;
use crate::discovery::{self, DiscoveryConfig};
use crate::report;
use crate::sdk::Sdk;
use crate::session::Session;
use crate::Result;
use std::io::Write;

/// Settings for a single dump run.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    pub discovery: DiscoveryConfig,
    pub base: BaseSelection,
}

impl From<&crate::config::Config> for DriverConfig {
    fn from(config: &crate::config::Config) -> Self {
        DriverConfig {
            discovery: config.discovery.clone(),
            base: config.base,
        }
    }
}

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Discovery found no base station; the SDK was shut down cleanly.
    NoBases,
    Completed {
        base: usize,
        /// Enabled controllers on `base`, in query order.
        controllers: Vec<usize>,
        /// Controllers whose sample could not be fetched.
        failed: Vec<usize>,
    },
}

/// Run the dump against `sdk`, writing the report to `out`.
///
/// The SDK is shut down exactly once on every path that got past `init`.
pub fn run<S: Sdk, W: Write>(sdk: S, config: &DriverConfig, out: &mut W) -> Result<Outcome> {
    let session = Session::open(sdk)?;

    writeln!(out, "Waiting for base stations...")?;
    let bases = discovery::await_bases(&session, &config.discovery);
    for base in &bases {
        writeln!(out, "Base {} is connected!", base)?;
    }

    let Some(base) = config.base.choose(&bases) else {
        writeln!(out, "No connected bases found!")?;
        session.close()?;
        return Ok(Outcome::NoBases);
    };
    if let Err(e) = session.activate_base(base) {
        log::warn!("Activating base {} failed: {}", base, e);
    }

    let controllers = session.enabled_controllers();
    for controller in &controllers {
        writeln!(out, "Controller {} is enabled!", controller)?;
    }

    let mut failed = Vec::new();
    for &controller in &controllers {
        match session.newest_sample(controller) {
            Ok(sample) => {
                write!(out, "{}", report::format_sample(controller, &sample))?;
            }
            Err(e) => {
                log::warn!("Newest data for controller {} failed: {}", controller, e);
                writeln!(out, "Could not get data of controller {}!", controller)?;
                failed.push(controller);
            }
        }
    }

    writeln!(out, "We're done here. Bye bye!")?;
    session.close()?;

    Ok(Outcome::Completed {
        base,
        controllers,
        failed,
    })
}
