//! Fact probes.
//!
//! A probe is a function of [`ProbeContext`] returning a display-ready string
//! or exactly [`UNKNOWN`]. Strategies inside a probe return [`Result`] and are
//! chained cheapest-first; the final value always passes through [`settle`],
//! so no error ever leaves a probe.

pub mod battery;
pub mod cpu;
pub mod device;
pub mod display;
pub mod gpu;
pub mod identity;
pub mod kernel;
pub mod memory;
pub mod network;
pub mod os;
pub mod packages;
pub mod shell;
pub mod uptime;

use crate::core::host::HostSource;
use crate::core::interfaces::NetworkSource;
use crate::error::{FetchError, Result};
use crate::platform::{CommandRunner, Environment, FileReader, Platform};
use log::debug;

/// Sentinel for data that could not be gathered
pub const UNKNOWN: &str = "Unknown";

/// Everything a probe is allowed to look at.
#[derive(Clone, Copy)]
pub struct ProbeContext<'a> {
    pub platform: Platform,
    pub commands: &'a dyn CommandRunner,
    pub files: &'a dyn FileReader,
    pub env: &'a dyn Environment,
    pub host: &'a dyn HostSource,
    pub network: &'a dyn NetworkSource,
}

/// Collapse a probe outcome into its display value.
///
/// Output is trimmed; errors and blank output become [`UNKNOWN`].
pub fn settle(probe: &str, result: Result<String>) -> String {
    match result {
        Ok(value) => {
            let value = value.trim();
            if value.is_empty() {
                debug!("{} probe produced empty output", probe);
                UNKNOWN.to_string()
            } else {
                value.to_string()
            }
        }
        Err(e) => {
            debug!("{} probe unavailable: {}", probe, e);
            UNKNOWN.to_string()
        }
    }
}

/// Fail with `Unsupported` unless `applies` holds
pub(crate) fn require(applies: bool, what: &str) -> Result<()> {
    if applies {
        Ok(())
    } else {
        Err(FetchError::unsupported(what))
    }
}

/// Read an Android system property, failing on empty values
pub(crate) fn getprop(ctx: &ProbeContext, key: &str) -> Result<String> {
    require(ctx.platform == Platform::Android, "getprop is Android only")?;

    let value = ctx.commands.run("getprop", &[key])?;
    if value.is_empty() {
        return Err(FetchError::unavailable(format!("property {} is empty", key)));
    }
    Ok(value)
}

/// Value after the first `:` of the first line (trimmed) starting with `prefix`
pub(crate) fn labeled_field(output: &str, prefix: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(prefix))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
}
