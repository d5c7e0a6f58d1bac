//! Device health and metrics monitoring.
//!
//! Reachability checks shell out to the system ping utility; resource
//! metrics are placeholder readings standing in for SNMP/SSH telemetry.

pub mod alerts;
mod health;
mod metrics;

pub use alerts::{
    evaluate, set_thresholds, thresholds_for, Alert, AlertCategory, AlertThresholds,
};
pub use health::{
    check_device_health, device_status, device_uptime, has_rebooted_recently, Reachability,
};
pub use metrics::{
    cpu_usage, log_device_metrics, memory_usage, network_traffic, sample, DeviceMetrics,
    TrafficMetrics,
};
