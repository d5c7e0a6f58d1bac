//! Reachability commands: ping, status, uptime.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::monitor::{self, Reachability};
use crate::ui;
use crate::utils::{net, retry};

const RETRY_DELAY: Duration = Duration::from_secs(2);

pub fn ping(matches: &ArgMatches) -> Result<()> {
    let host = matches.get_one::<String>("host").context("host is required")?;
    let retries = matches.get_one::<u32>("retries").copied().unwrap_or(1);

    if !net::ping_available() {
        bail!("ping executable not found in PATH");
    }

    let addr = resolve_target(host)?;
    let ip = addr.to_string();

    println!(
        "{} {}",
        "Checking health of device at".white(),
        ip.cyan().bold()
    );

    let healthy = if retries > 1 {
        retry::retry(
            || {
                if monitor::check_device_health(&ip) {
                    Ok(())
                } else {
                    Err(anyhow!("no reply from {}", ip))
                }
            },
            retries,
            RETRY_DELAY,
        )
        .is_ok()
    } else {
        monitor::check_device_health(&ip)
    };

    if healthy {
        println!("{}", "Device is healthy!".green().bold());
        Ok(())
    } else {
        println!("{}", "Device is unreachable!".red().bold());
        std::process::exit(1);
    }
}

pub fn status(matches: &ArgMatches) -> Result<()> {
    let host = matches.get_one::<String>("host").context("host is required")?;

    let addr = resolve_target(host)?;
    let ip = addr.to_string();

    match monitor::device_status(&ip) {
        Reachability::Online => {
            println!("{} {}", ip.cyan().bold(), "Online".green().bold());
            Ok(())
        }
        Reachability::Unreachable => {
            println!("{} {}", ip.cyan().bold(), "Unreachable".red().bold());
            std::process::exit(1);
        }
    }
}

pub fn uptime(matches: &ArgMatches) -> Result<()> {
    let host = matches.get_one::<String>("host").context("host is required")?;

    let addr = resolve_target(host)?;
    let ip = addr.to_string();

    let uptime = monitor::device_uptime(&ip);
    println!(
        "{} {}",
        "Device uptime:".white(),
        ui::format_uptime(uptime).cyan().bold()
    );

    if monitor::has_rebooted_recently(&ip) {
        println!("{}", "Device has rebooted recently.".yellow());
    } else {
        println!("Device has not rebooted.");
    }

    Ok(())
}

/// Accept an IP literal as-is; resolve anything else as a hostname.
pub(crate) fn resolve_target(host: &str) -> Result<IpAddr> {
    match host.parse::<IpAddr>() {
        Ok(ip) => Ok(ip),
        Err(_) => Ok(net::resolve_hostname(host)?),
    }
}
