use super::{require, settle, ProbeContext};
use crate::error::{FetchError, Result};
use crate::platform::Platform;
use serde::Deserialize;
use std::path::Path;

pub const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

const TERMUX_BATTERY: &str = "termux-battery-status";

/// The fields of `termux-battery-status` output we show.
#[derive(Debug, Deserialize)]
pub struct TermuxBattery {
    pub percentage: f64,
    pub status: String,
    pub health: String,
}

pub fn probe(ctx: &ProbeContext) -> String {
    settle("battery", from_termux(ctx).or_else(|_| from_power_supply(ctx)))
}

fn from_termux(ctx: &ProbeContext) -> Result<String> {
    require(ctx.platform == Platform::Android, "termux is Android only")?;
    if !ctx.commands.exists(TERMUX_BATTERY) {
        return Err(FetchError::command_not_found(TERMUX_BATTERY));
    }

    let output = ctx.commands.run(TERMUX_BATTERY, &[])?;
    parse_termux(&output)
}

/// `"N% [status, health]"`; malformed or partial JSON is an error
pub fn parse_termux(json: &str) -> Result<String> {
    let battery: TermuxBattery = serde_json::from_str(json)?;
    Ok(format!(
        "{:.0}% [{}, {}]",
        battery.percentage, battery.status, battery.health
    ))
}

/// `"N% [status]"` from the first `BAT*` supply with both files readable
fn from_power_supply(ctx: &ProbeContext) -> Result<String> {
    require(ctx.platform.is_linux_family(), "power supply tree is Linux only")?;

    let root = Path::new(POWER_SUPPLY_DIR);
    ctx.files
        .list_dir(root)?
        .iter()
        .filter(|name| name.starts_with("BAT"))
        .find_map(|name| {
            let dir = root.join(name);
            let capacity = ctx
                .files
                .read_trimmed(&dir.join("capacity"))
                .ok()
                .filter(|capacity| !capacity.is_empty())?;
            let status = ctx
                .files
                .read_trimmed(&dir.join("status"))
                .ok()
                .filter(|status| !status.is_empty())?;
            Some(format!("{}% [{}]", capacity, status))
        })
        .ok_or_else(|| FetchError::unavailable("no readable battery"))
}
