use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

/// Point-in-time metrics snapshot for a single device
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceMetrics {
    pub timestamp: i64, // Unix timestamp
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub traffic: TrafficMetrics,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TrafficMetrics {
    pub inbound_mbps: f64,
    pub outbound_mbps: f64,
}

impl TrafficMetrics {
    /// Combined inbound and outbound bandwidth
    pub fn total_mbps(&self) -> f64 {
        self.inbound_mbps + self.outbound_mbps
    }
}

// Placeholder readings; a real deployment would gather these via SNMP, SSH
// or the device API.
const PLACEHOLDER_CPU_PERCENT: f64 = 45.7;
const PLACEHOLDER_MEMORY_PERCENT: f64 = 65.3;
const PLACEHOLDER_INBOUND_MBPS: f64 = 500.2;
const PLACEHOLDER_OUTBOUND_MBPS: f64 = 250.7;

/// Read the current CPU usage of a device.
pub fn cpu_usage(ip: &str) -> f64 {
    info!("Monitoring CPU usage for device at IP: {}", ip);
    PLACEHOLDER_CPU_PERCENT
}

/// Read the current memory usage of a device.
pub fn memory_usage(ip: &str) -> f64 {
    info!("Monitoring memory usage for device at IP: {}", ip);
    PLACEHOLDER_MEMORY_PERCENT
}

/// Read the current inbound and outbound bandwidth of a device.
pub fn network_traffic(ip: &str) -> TrafficMetrics {
    info!("Monitoring network traffic for device at IP: {}", ip);
    TrafficMetrics {
        inbound_mbps: PLACEHOLDER_INBOUND_MBPS,
        outbound_mbps: PLACEHOLDER_OUTBOUND_MBPS,
    }
}

/// Collect a full timestamped metrics snapshot for a device.
pub fn sample(ip: &str) -> DeviceMetrics {
    DeviceMetrics {
        timestamp: Utc::now().timestamp(),
        cpu_percent: cpu_usage(ip),
        memory_percent: memory_usage(ip),
        traffic: network_traffic(ip),
    }
}

/// Log a device's performance metrics for historical analysis.
pub fn log_device_metrics(device_id: &str, metrics: &DeviceMetrics) {
    info!(
        "Device {} - CPU: {:.2}%, Memory: {:.2}%, Inbound: {:.2} Mbps, Outbound: {:.2} Mbps",
        device_id,
        metrics.cpu_percent,
        metrics.memory_percent,
        metrics.traffic.inbound_mbps,
        metrics.traffic.outbound_mbps
    );
}
