use std::fmt;
use std::time::Duration;

use log::info;

use crate::utils::net;

/// Reachability of a device as seen from this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Online,
    Unreachable,
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reachability::Online => write!(f, "Online"),
            Reachability::Unreachable => write!(f, "Unreachable"),
        }
    }
}

// Placeholder uptime; a real deployment would read this via SNMP or SSH.
const PLACEHOLDER_UPTIME: Duration = Duration::from_secs(72 * 60 * 60);

/// Ping a device and report whether it is reachable.
pub fn check_device_health(ip: &str) -> bool {
    info!("Checking health of device at IP: {}", ip);
    net::ping_host(ip)
}

/// Classify a device as online or unreachable.
pub fn device_status(ip: &str) -> Reachability {
    if net::ping_host(ip) {
        info!("Device at IP {} is online", ip);
        Reachability::Online
    } else {
        info!("Device at IP {} is unreachable", ip);
        Reachability::Unreachable
    }
}

/// Report how long a device has been up.
pub fn device_uptime(ip: &str) -> Duration {
    info!("Checking uptime for device at IP: {}", ip);
    PLACEHOLDER_UPTIME
}

/// Report whether a device rebooted recently.
pub fn has_rebooted_recently(ip: &str) -> bool {
    info!("Checking if device at IP {} has rebooted recently", ip);
    false
}
