use super::{settle, ProbeContext};

pub fn probe(ctx: &ProbeContext) -> String {
    settle("uptime", ctx.host.uptime_secs().map(format_uptime))
}

/// `"D days, H hours, M mins"`; leftover seconds are dropped
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let mins = (secs % 3_600) / 60;
    format!("{} days, {} hours, {} mins", days, hours, mins)
}
