use super::ProbeContext;

/// Shown when the home directory cannot be resolved
pub const DEFAULT_USER: &str = "aperfetch";
pub const DEFAULT_HOST: &str = "localhost";

/// `user@host`. Never the sentinel.
pub fn probe(ctx: &ProbeContext) -> String {
    format!("{}@{}", user_name(ctx), host_name(ctx))
}

/// Last component of the home directory path
pub fn user_name(ctx: &ProbeContext) -> String {
    ctx.env
        .home_dir()
        .as_deref()
        .and_then(|home| home.file_name())
        .map(|name| name.to_string_lossy().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string())
}

pub fn host_name(ctx: &ProbeContext) -> String {
    ctx.env
        .hostname()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}
