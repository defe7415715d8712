use super::{settle, ProbeContext};
use crate::core::interfaces::Interface;
use crate::error::{FetchError, Result};
use std::net::{IpAddr, Ipv4Addr};

/// `"Local IP (<interface>): <address>"` for the first usable interface
pub fn probe(ctx: &ProbeContext) -> String {
    settle("local ip", ctx.network.interfaces().and_then(|ifaces| local_ip(&ifaces)))
}

pub fn local_ip(interfaces: &[Interface]) -> Result<String> {
    interfaces
        .iter()
        .filter(|iface| iface.is_up && !iface.is_loopback)
        .find_map(|iface| {
            iface
                .addrs
                .iter()
                .find_map(|addr| parse_ipv4(addr))
                .map(|ip| format!("Local IP ({}): {}", iface.name, ip))
        })
        .ok_or_else(|| FetchError::unavailable("no up, non-loopback interface with an IPv4 address"))
}

/// Parse a bare or CIDR-suffixed address, keeping it only if it is IPv4
pub fn parse_ipv4(addr: &str) -> Option<Ipv4Addr> {
    let host = match addr.split_once('/') {
        Some((host, prefix)) => {
            prefix.parse::<u8>().ok()?;
            host
        }
        None => addr,
    };

    match host.trim().parse::<IpAddr>().ok()? {
        IpAddr::V4(ip) => Some(ip),
        IpAddr::V6(ip) => ip.to_ipv4_mapped(),
    }
}
