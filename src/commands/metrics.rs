//! Metrics command: sample a device, log the readings, and evaluate alert
//! thresholds when limits are supplied.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::monitor::{self, AlertThresholds};
use crate::ui;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let host = matches.get_one::<String>("host").context("host is required")?;

    let addr = super::health::resolve_target(host)?;
    let ip = addr.to_string();

    let device_id = matches
        .get_one::<String>("device-id")
        .cloned()
        .unwrap_or_else(|| ip.clone());

    let cpu_limit = matches.get_one::<f64>("cpu-limit").copied();
    let memory_limit = matches.get_one::<f64>("memory-limit").copied();
    let bandwidth_limit = matches.get_one::<f64>("bandwidth-limit").copied();

    if cpu_limit.is_some() || memory_limit.is_some() || bandwidth_limit.is_some() {
        let defaults = AlertThresholds::default();
        monitor::set_thresholds(
            &device_id,
            AlertThresholds {
                cpu_percent: cpu_limit.unwrap_or(defaults.cpu_percent),
                memory_percent: memory_limit.unwrap_or(defaults.memory_percent),
                bandwidth_mbps: bandwidth_limit.unwrap_or(defaults.bandwidth_mbps),
            },
        );
    }

    let metrics = monitor::sample(&ip);

    // JSON output mode (for scripting)
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    monitor::log_device_metrics(&device_id, &metrics);
    ui::print_metrics(&device_id, &metrics);

    match monitor::evaluate(&device_id, &metrics) {
        Some(alerts) => ui::print_alerts(&alerts),
        None => println!(
            "{}",
            format!("No thresholds set for device {}", device_id).dimmed()
        ),
    }

    Ok(())
}
