use super::{settle, ProbeContext};
use crate::platform::Platform;

pub fn probe(ctx: &ProbeContext) -> String {
    if ctx.platform == Platform::Windows {
        return "NT".to_string();
    }
    settle("kernel", ctx.host.kernel_version())
}
