use std::time::Duration;

use ndm::core::monitor::{self, AlertCategory, AlertThresholds};

#[test]
fn test_placeholder_metric_values() {
    assert_eq!(monitor::cpu_usage("192.0.2.1"), 45.7);
    assert_eq!(monitor::memory_usage("192.0.2.1"), 65.3);

    let traffic = monitor::network_traffic("192.0.2.1");
    assert_eq!(traffic.inbound_mbps, 500.2);
    assert_eq!(traffic.outbound_mbps, 250.7);
}

#[test]
fn test_uptime_and_reboot_placeholders() {
    assert_eq!(
        monitor::device_uptime("192.0.2.1"),
        Duration::from_secs(72 * 3600)
    );
    assert!(!monitor::has_rebooted_recently("192.0.2.1"));
}

#[test]
fn test_thresholds_roundtrip_through_registry() {
    let thresholds = AlertThresholds {
        cpu_percent: 80.0,
        memory_percent: 75.0,
        bandwidth_mbps: 800.0,
    };

    monitor::set_thresholds("integration-roundtrip", thresholds);

    let stored = monitor::thresholds_for("integration-roundtrip").unwrap();
    assert_eq!(stored.cpu_percent, 80.0);
    assert_eq!(stored.memory_percent, 75.0);
    assert_eq!(stored.bandwidth_mbps, 800.0);
}

#[test]
fn test_unregistered_device_has_no_thresholds() {
    assert!(monitor::thresholds_for("integration-unknown").is_none());
}

#[test]
fn test_evaluate_without_thresholds_returns_none() {
    let metrics = monitor::sample("192.0.2.1");
    assert!(monitor::evaluate("integration-no-thresholds", &metrics).is_none());
}

#[test]
fn test_walkthrough_defaults_raise_no_alerts() {
    // The default limits sit above the placeholder readings, so the
    // provisioning walkthrough stays quiet.
    monitor::set_thresholds("integration-defaults", AlertThresholds::default());

    let metrics = monitor::sample("192.0.2.1");
    let alerts = monitor::evaluate("integration-defaults", &metrics).unwrap();
    assert!(alerts.is_empty());
}

#[test]
fn test_tight_limits_raise_alerts_per_category() {
    monitor::set_thresholds(
        "integration-tight",
        AlertThresholds {
            cpu_percent: 40.0,
            memory_percent: 60.0,
            bandwidth_mbps: 700.0,
        },
    );

    let metrics = monitor::sample("192.0.2.1");
    let alerts = monitor::evaluate("integration-tight", &metrics).unwrap();

    assert_eq!(alerts.len(), 3);
    assert!(alerts.iter().any(|a| a.category == AlertCategory::Cpu));
    assert!(alerts.iter().any(|a| a.category == AlertCategory::Memory));
    assert!(alerts
        .iter()
        .any(|a| a.category == AlertCategory::Bandwidth));
}

#[test]
fn test_alert_carries_value_and_threshold() {
    monitor::set_thresholds(
        "integration-alert-fields",
        AlertThresholds {
            cpu_percent: 40.0,
            memory_percent: 100.0,
            bandwidth_mbps: 10_000.0,
        },
    );

    let metrics = monitor::sample("192.0.2.1");
    let alerts = monitor::evaluate("integration-alert-fields", &metrics).unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].value, 45.7);
    assert_eq!(alerts[0].threshold, 40.0);
    assert!(alerts[0].message.contains("integration-alert-fields"));
}

#[test]
fn test_reregistering_overwrites_thresholds() {
    monitor::set_thresholds("integration-overwrite", AlertThresholds::default());
    monitor::set_thresholds(
        "integration-overwrite",
        AlertThresholds {
            cpu_percent: 10.0,
            memory_percent: 10.0,
            bandwidth_mbps: 10.0,
        },
    );

    let stored = monitor::thresholds_for("integration-overwrite").unwrap();
    assert_eq!(stored.cpu_percent, 10.0);
}
