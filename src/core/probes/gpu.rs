use super::{getprop, labeled_field, settle, ProbeContext};
use crate::error::{FetchError, Result};
use crate::platform::Platform;

/// lspci device classes that describe a graphics adapter
const DISPLAY_CLASSES: [&str; 3] = [
    "VGA compatible controller",
    "3D controller",
    "Display controller",
];

pub fn probe(ctx: &ProbeContext) -> String {
    settle(
        "gpu",
        getprop(ctx, "ro.board.platform").or_else(|_| from_platform_tool(ctx)),
    )
}

fn from_platform_tool(ctx: &ProbeContext) -> Result<String> {
    match ctx.platform {
        Platform::Android | Platform::Linux => {
            let output = ctx.commands.run("lspci", &[])?;
            parse_lspci(&output).ok_or_else(|| FetchError::parse("no display controller in lspci"))
        }
        Platform::MacOs => {
            let output = ctx.commands.run("system_profiler", &["SPDisplaysDataType"])?;
            labeled_field(&output, "Chipset Model:")
                .ok_or_else(|| FetchError::parse("no Chipset Model in system_profiler"))
        }
        Platform::Windows => {
            let output = ctx
                .commands
                .run("wmic", &["path", "win32_VideoController", "get", "name"])?;
            parse_wmic_name(&output).ok_or_else(|| FetchError::parse("no adapter in wmic output"))
        }
        Platform::Other => Err(FetchError::unsupported("no GPU query for this platform")),
    }
}

/// Device name of the first display-class line, i.e. the text after the last `": "`
pub fn parse_lspci(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| DISPLAY_CLASSES.iter().any(|class| line.contains(class)))
        .and_then(|line| line.rsplit_once(": "))
        .map(|(_, device)| device.trim().to_string())
}

/// wmic prints a `Name` header; the first adapter is on the second line
pub fn parse_wmic_name(output: &str) -> Option<String> {
    output
        .lines()
        .nth(1)
        .map(|line| line.trim().to_string())
        .filter(|name| !name.is_empty())
}
