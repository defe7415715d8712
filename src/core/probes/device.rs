use super::{getprop, require, settle, ProbeContext};
use crate::error::Result;
use std::path::Path;

pub const DMI_SYS_VENDOR: &str = "/sys/class/dmi/id/sys_vendor";
pub const DMI_PRODUCT_NAME: &str = "/sys/class/dmi/id/product_name";
pub const DMI_PRODUCT_VERSION: &str = "/sys/class/dmi/id/product_version";

pub fn probe_manufacturer(ctx: &ProbeContext) -> String {
    settle(
        "manufacturer",
        getprop(ctx, "ro.product.manufacturer").or_else(|_| read_dmi(ctx, DMI_SYS_VENDOR)),
    )
}

pub fn probe_model(ctx: &ProbeContext) -> String {
    settle(
        "model",
        getprop(ctx, "ro.product.model")
            .or_else(|_| read_dmi(ctx, DMI_PRODUCT_NAME))
            .or_else(|_| read_dmi(ctx, DMI_PRODUCT_VERSION)),
    )
}

fn read_dmi(ctx: &ProbeContext, path: &str) -> Result<String> {
    require(ctx.platform.is_linux_family(), "DMI is Linux only")?;
    ctx.files.read_trimmed(Path::new(path))
}
