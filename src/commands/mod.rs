// Command handlers module

pub mod completions;
pub mod config;
pub mod health;
pub mod metrics;
pub mod provision;
pub mod version;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::device::{Device, DeviceStatus, OsType, Role};
use crate::utils::net;

/// Build a device record from the shared device flags.
///
/// The IP address is not rejected when malformed (only warned about), so a
/// record can be drafted before the device is addressable.
pub(crate) fn device_from_matches(matches: &ArgMatches) -> Result<Device> {
    let id = matches.get_one::<String>("id").context("id is required")?;
    let ip = matches.get_one::<String>("ip").context("ip is required")?;
    let status: DeviceStatus = matches
        .get_one::<String>("status")
        .context("status is required")?
        .parse()?;
    let role = Role::from(
        matches
            .get_one::<String>("role")
            .context("role is required")?
            .as_str(),
    );
    let os_type = OsType::from(
        matches
            .get_one::<String>("os")
            .context("os is required")?
            .as_str(),
    );
    let location = matches
        .get_one::<String>("location")
        .context("location is required")?;
    let tag = matches.get_one::<String>("tag").context("tag is required")?;

    if !net::is_valid_ip(ip) {
        println!(
            "{}",
            format!("⚠️  Warning: '{}' is not a valid IP address", ip).yellow()
        );
    }

    Ok(Device::new(id, ip, status, role, location, tag, os_type))
}
