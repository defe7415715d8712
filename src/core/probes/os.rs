use super::{getprop, require, settle, ProbeContext};
use crate::error::{FetchError, Result};
use crate::platform::Platform;
use std::path::Path;

pub const OS_RELEASE: &str = "/etc/os-release";

pub fn probe(ctx: &ProbeContext) -> String {
    if ctx.platform == Platform::Android {
        // Android is always named, even without a version
        return match getprop(ctx, "ro.build.version.release") {
            Ok(version) => format!("Android {}", version),
            Err(_) => "Android".to_string(),
        };
    }

    settle("os", from_os_release(ctx).or_else(|_| ctx.host.os_description()))
}

fn from_os_release(ctx: &ProbeContext) -> Result<String> {
    require(ctx.platform.is_linux_family(), "os-release is Linux only")?;

    let contents = ctx.files.read_to_string(Path::new(OS_RELEASE))?;
    pretty_name(&contents).ok_or_else(|| FetchError::parse("no PRETTY_NAME in os-release"))
}

/// Value of `PRETTY_NAME=` with surrounding quotes removed
pub fn pretty_name(os_release: &str) -> Option<String> {
    os_release
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|value| !value.is_empty())
}
