use super::{getprop, settle, ProbeContext};

/// CPU model name
pub fn probe(ctx: &ProbeContext) -> String {
    settle(
        "cpu",
        getprop(ctx, "ro.board.platform").or_else(|_| ctx.host.cpu_brand()),
    )
}
