//! Network address helpers and the ping probe.

use std::net::{IpAddr, ToSocketAddrs};
use std::process::Command;

use log::debug;

use crate::error::{NdmError, Result};

/// Check whether a string parses as an IPv4 or IPv6 address.
pub fn is_valid_ip(addr: &str) -> bool {
    addr.parse::<IpAddr>().is_ok()
}

/// Resolve a hostname to its first IP address.
pub fn resolve_hostname(hostname: &str) -> Result<IpAddr> {
    let mut addrs = (hostname, 0u16).to_socket_addrs().map_err(|e| {
        NdmError::invalid_address(format!("could not resolve hostname {}: {}", hostname, e))
    })?;

    addrs
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| NdmError::invalid_address(format!("no IPs found for hostname {}", hostname)))
}

/// Parse CIDR notation into an address and prefix length.
pub fn parse_cidr(cidr: &str) -> Result<(IpAddr, u8)> {
    let (addr_part, prefix_part) = cidr
        .split_once('/')
        .ok_or_else(|| NdmError::invalid_address(format!("invalid CIDR: {}", cidr)))?;

    let addr: IpAddr = addr_part
        .parse()
        .map_err(|_| NdmError::invalid_address(format!("invalid CIDR address: {}", cidr)))?;

    let prefix: u8 = prefix_part
        .parse()
        .map_err(|_| NdmError::invalid_address(format!("invalid CIDR prefix: {}", cidr)))?;

    let max_prefix: u8 = if addr.is_ipv4() { 32 } else { 128 };
    if prefix > max_prefix {
        return Err(NdmError::invalid_address(format!(
            "CIDR prefix /{} out of range for {}",
            prefix, addr_part
        )));
    }

    Ok((addr, prefix))
}

/// Ping an address with a single probe. Exit code zero means reachable.
pub fn ping_host(addr: &str) -> bool {
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };

    // output() captures the probe's stdout so it does not interleave with
    // our own console output.
    match Command::new("ping").args([count_flag, "1", addr]).output() {
        Ok(output) => output.status.success(),
        Err(e) => {
            debug!("ping invocation failed: {}", e);
            false
        }
    }
}

/// Check that the system ping executable is available.
pub fn ping_available() -> bool {
    which::which("ping").is_ok()
}
