use super::{settle, ProbeContext, UNKNOWN};
use crate::platform::Platform;
use std::path::Path;

pub fn probe(ctx: &ProbeContext) -> String {
    match ctx.env.var("SHELL") {
        Some(path) => {
            let name = Path::new(path.trim())
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            settle("shell", Ok(name))
        }
        None if ctx.platform == Platform::Windows => "PowerShell/CMD".to_string(),
        None => UNKNOWN.to_string(),
    }
}
