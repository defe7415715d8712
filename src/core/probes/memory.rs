use super::{settle, ProbeContext};
use crate::core::host::Usage;
use crate::platform::Platform;
use std::path::Path;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// RAM usage
pub fn probe_memory(ctx: &ProbeContext) -> String {
    settle("memory", ctx.host.memory().map(format_usage))
}

/// Usage of the main data filesystem
pub fn probe_disk(ctx: &ProbeContext) -> String {
    let mount_point = disk_mount_point(ctx.platform);
    settle("disk", ctx.host.disk_usage(Path::new(mount_point)).map(format_usage))
}

pub fn disk_mount_point(platform: Platform) -> &'static str {
    match platform {
        Platform::Android => "/data",
        Platform::Windows => "C:\\",
        _ => "/",
    }
}

/// `"X.XX GiB / Y.YY GiB"`
pub fn format_usage(usage: Usage) -> String {
    format!(
        "{:.2} GiB / {:.2} GiB",
        usage.used_bytes as f64 / GIB,
        usage.total_bytes as f64 / GIB
    )
}
