use super::{labeled_field, settle, ProbeContext};
use crate::error::{FetchError, Result};
use crate::platform::Platform;

/// Resolution of the active display
pub fn probe(ctx: &ProbeContext) -> String {
    settle("resolution", resolution(ctx))
}

fn resolution(ctx: &ProbeContext) -> Result<String> {
    match ctx.platform {
        Platform::Android => {
            let output = ctx.commands.run("wm", &["size"])?;
            labeled_field(&output, "Physical size:")
                .ok_or_else(|| FetchError::parse("no Physical size in wm output"))
        }
        Platform::Linux => {
            let output = ctx.commands.run("xrandr", &[])?;
            parse_xrandr(&output).ok_or_else(|| FetchError::parse("no active mode in xrandr output"))
        }
        Platform::MacOs => {
            let output = ctx.commands.run("system_profiler", &["SPDisplaysDataType"])?;
            labeled_field(&output, "Resolution:")
                .map(|res| res.replacen(" x ", "x", 1))
                .ok_or_else(|| FetchError::parse("no Resolution in system_profiler"))
        }
        Platform::Windows | Platform::Other => {
            Err(FetchError::unsupported("no resolution query for this platform"))
        }
    }
}

/// First field of the first mode line marked active with `*`
pub fn parse_xrandr(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains('*'))
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
}
