// Network interface enumeration

use crate::error::{FetchError, Result};
use crate::platform::fs::{FileReader, SystemFileReader};
use log::debug;
use std::path::Path;
use sysinfo::Networks;

const IFF_UP: u32 = 0x1;
const IFF_LOOPBACK: u32 = 0x8;

/// One network interface and its addresses.
///
/// Addresses are strings as the platform reports them: either bare
/// (`10.0.0.2`) or CIDR-suffixed (`10.0.0.2/24`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub is_up: bool,
    pub is_loopback: bool,
    pub addrs: Vec<String>,
}

pub trait NetworkSource {
    /// All interfaces, sorted by name
    fn interfaces(&self) -> Result<Vec<Interface>>;
}

/// Interfaces from sysinfo, with flags from sysfs on Linux.
#[derive(Debug, Default)]
pub struct SysinfoNetwork {
    files: SystemFileReader,
}

impl SysinfoNetwork {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NetworkSource for SysinfoNetwork {
    fn interfaces(&self) -> Result<Vec<Interface>> {
        let networks = Networks::new_with_refreshed_list();

        let mut interfaces: Vec<Interface> = networks
            .list()
            .iter()
            .map(|(name, data)| {
                let ips = data.ip_networks();
                let addrs = ips
                    .iter()
                    .map(|net| format!("{}/{}", net.addr, net.prefix))
                    .collect();

                let (is_up, is_loopback) = read_sysfs_flags(&self.files, name).unwrap_or_else(|e| {
                    debug!("No sysfs flags for {}: {}", name, e);
                    (
                        !ips.is_empty(),
                        !ips.is_empty() && ips.iter().all(|net| net.addr.is_loopback()),
                    )
                });

                Interface {
                    name: name.to_string(),
                    is_up,
                    is_loopback,
                    addrs,
                }
            })
            .collect();

        if interfaces.is_empty() {
            return Err(FetchError::unavailable("no network interfaces reported"));
        }

        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interfaces)
    }
}

/// Read `(is_up, is_loopback)` from `/sys/class/net/<name>/flags`
pub fn read_sysfs_flags(files: &dyn FileReader, name: &str) -> Result<(bool, bool)> {
    let path = Path::new("/sys/class/net").join(name).join("flags");
    parse_interface_flags(&files.read_trimmed(&path)?)
}

/// Parse the hex flag word the kernel writes, e.g. `0x1003`
pub fn parse_interface_flags(text: &str) -> Result<(bool, bool)> {
    let digits = text.trim().trim_start_matches("0x");
    let flags = u32::from_str_radix(digits, 16)
        .map_err(|e| FetchError::parse(format!("interface flags {:?}: {}", text, e)))?;

    Ok((flags & IFF_UP != 0, flags & IFF_LOOPBACK != 0))
}
