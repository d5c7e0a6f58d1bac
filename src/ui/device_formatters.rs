//! Console rendering for devices, metrics, and alerts.

use colored::Colorize;

use crate::core::device::Device;
use crate::core::monitor::{Alert, DeviceMetrics};

use super::formatters::{format_mbps, format_percent};

/// Print all details of a network device.
pub fn print_device_details(device: &Device) {
    println!("{}", "Device Details".white().bold());
    println!("{}", "─".repeat(40));

    print_field("Device ID", &device.id);
    print_field("IP Address", &device.ip_addr);
    print_field("Status", &device.status.to_string());
    print_field("Role", &device.role.to_string());
    print_field("Location", &device.location);
    print_field("Device Tag", &device.tag);
    print_field("OS Type", &device.os_type.to_string());

    match &device.credentials {
        // Username only; the password stays off the console.
        Some(creds) => print_field("Credentials", &format!("{}/{}", creds.username, "********")),
        None => print_field("Credentials", "-"),
    }
}

fn print_field(label: &str, value: &str) {
    // Pad before coloring so ANSI escapes don't skew the column width.
    let label = format!("{:<13}", format!("{}:", label));
    println!("{} {}", label.white(), value.cyan());
}

/// Print a metrics snapshot for a device.
pub fn print_metrics(device_id: &str, metrics: &DeviceMetrics) {
    println!(
        "{} {}",
        "Metrics for device".white(),
        device_id.cyan().bold()
    );
    print_metric_row("CPU", &format_percent(metrics.cpu_percent));
    print_metric_row("Memory", &format_percent(metrics.memory_percent));
    print_metric_row("Inbound", &format_mbps(metrics.traffic.inbound_mbps));
    print_metric_row("Outbound", &format_mbps(metrics.traffic.outbound_mbps));
}

fn print_metric_row(label: &str, value: &str) {
    let label = format!("{:<10}", format!("{}:", label));
    println!("  {} {}", label.white(), value.yellow());
}

/// Print threshold alerts, or a quiet confirmation when there are none.
pub fn print_alerts(alerts: &[Alert]) {
    if alerts.is_empty() {
        println!("{}", "All metrics within thresholds.".green());
        return;
    }

    for alert in alerts {
        println!("{} {}", "ALERT:".red().bold(), alert.message);
    }
}
