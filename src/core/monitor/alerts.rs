//! Threshold-based alerting for device metrics.
//!
//! Compares sampled metrics against per-device limits and generates an
//! alert per exceeded limit. Limits are held in a process-wide registry
//! keyed by device identifier.

use std::collections::HashMap;

use log::{info, warn};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::metrics::DeviceMetrics;

/// Alert limits for a single device
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlertThresholds {
    pub cpu_percent: f64,    // Limit (%)
    pub memory_percent: f64, // Limit (%)
    pub bandwidth_mbps: f64, // Limit on inbound + outbound (Mbps)
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            cpu_percent: 80.0,
            memory_percent: 75.0,
            bandwidth_mbps: 800.0,
        }
    }
}

/// An individual threshold violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub category: AlertCategory,
    pub message: String,
    pub value: f64,
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    Cpu,
    Memory,
    Bandwidth,
}

// Thresholds per device identifier. Written and read from a single
// execution path; the lock exists to satisfy static-state rules.
static THRESHOLDS: Lazy<Mutex<HashMap<String, AlertThresholds>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Register alert thresholds for a device.
pub fn set_thresholds(device_id: &str, thresholds: AlertThresholds) {
    THRESHOLDS.lock().insert(device_id.to_string(), thresholds);
    info!("Set alert thresholds for device {}", device_id);
}

/// Look up the registered thresholds for a device.
pub fn thresholds_for(device_id: &str) -> Option<AlertThresholds> {
    THRESHOLDS.lock().get(device_id).copied()
}

/// Evaluate a metrics snapshot against the registered thresholds.
///
/// Returns `None` when no thresholds have been registered for the device;
/// otherwise one [`Alert`] per exceeded limit. Bandwidth compares the sum
/// of inbound and outbound traffic.
pub fn evaluate(device_id: &str, metrics: &DeviceMetrics) -> Option<Vec<Alert>> {
    let thresholds = match thresholds_for(device_id) {
        Some(thresholds) => thresholds,
        None => {
            info!("No thresholds set for device {}", device_id);
            return None;
        }
    };

    let mut alerts = Vec::new();

    if metrics.cpu_percent > thresholds.cpu_percent {
        alerts.push(Alert {
            category: AlertCategory::Cpu,
            message: format!(
                "CPU usage for device {} exceeded: {:.2}%",
                device_id, metrics.cpu_percent
            ),
            value: metrics.cpu_percent,
            threshold: thresholds.cpu_percent,
        });
    }

    if metrics.memory_percent > thresholds.memory_percent {
        alerts.push(Alert {
            category: AlertCategory::Memory,
            message: format!(
                "Memory usage for device {} exceeded: {:.2}%",
                device_id, metrics.memory_percent
            ),
            value: metrics.memory_percent,
            threshold: thresholds.memory_percent,
        });
    }

    let total_traffic = metrics.traffic.total_mbps();
    if total_traffic > thresholds.bandwidth_mbps {
        alerts.push(Alert {
            category: AlertCategory::Bandwidth,
            message: format!(
                "Network bandwidth for device {} exceeded: {:.2} Mbps",
                device_id, total_traffic
            ),
            value: total_traffic,
            threshold: thresholds.bandwidth_mbps,
        });
    }

    for alert in &alerts {
        warn!("ALERT: {}", alert.message);
    }

    Some(alerts)
}
