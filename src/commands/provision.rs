//! End-to-end provisioning walkthrough.
//!
//! Builds a device record, derives and persists its configuration, verifies
//! the saved file, and runs a first round of health, metric, and threshold
//! checks before clearing the configuration again.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::feature_set;
use crate::core::monitor::{self, AlertThresholds};
use crate::ui;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let username = matches
        .get_one::<String>("username")
        .context("username is required")?;
    let password = matches
        .get_one::<String>("password")
        .context("password is required")?;
    let output = matches
        .get_one::<String>("output")
        .context("output is required")?;

    let mut device = super::device_from_matches(matches)?;
    device.set_credentials(username, password);

    // Derive and persist the configuration, then read it back to verify
    // the file round-trips.
    let config = feature_set::generate(&device);
    feature_set::save(output, &config)
        .with_context(|| format!("failed to save configuration to {}", output))?;
    println!(
        "{} {}",
        "Configuration saved to".white(),
        output.cyan().bold()
    );

    let loaded = feature_set::load(output)
        .with_context(|| format!("failed to load configuration from {}", output))?;
    if feature_set::validate(&loaded) {
        println!("{}", "Loaded configuration is valid.".green());
    } else {
        println!("{}", "Loaded configuration is missing required keys.".red());
    }

    println!();
    ui::print_device_details(&device);
    println!();

    if monitor::check_device_health(&device.ip_addr) {
        println!("{}", "Device is healthy!".green().bold());
    } else {
        println!("{}", "Device is unreachable!".red().bold());
    }

    monitor::set_thresholds(&device.ip_addr, AlertThresholds::default());

    let metrics = monitor::sample(&device.ip_addr);
    monitor::log_device_metrics(&device.ip_addr, &metrics);
    ui::print_metrics(&device.ip_addr, &metrics);

    if let Some(alerts) = monitor::evaluate(&device.ip_addr, &metrics) {
        ui::print_alerts(&alerts);
    }

    let uptime = monitor::device_uptime(&device.ip_addr);
    println!(
        "{} {}",
        "Device uptime:".white(),
        ui::format_uptime(uptime).cyan().bold()
    );

    if monitor::has_rebooted_recently(&device.ip_addr) {
        println!("{}", "Device has rebooted recently.".yellow());
    } else {
        println!("Device has not rebooted.");
    }

    let cleared = feature_set::clear(&device);
    println!(
        "{} {}",
        "Cleared configuration:".white(),
        format!("{} entries", cleared.len()).dimmed()
    );

    Ok(())
}
