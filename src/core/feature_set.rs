//! Feature-set generation and JSON persistence.
//!
//! A feature set is the flat string-to-string settings bundle derived from a
//! device snapshot. The `config_file` entry is selected from the device's
//! role and OS family; the resulting map round-trips through a JSON file
//! with two-space indentation and sorted keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use super::device::{Device, OsType, Role};

/// Flat configuration bundle for a single device.
pub type FeatureSet = BTreeMap<String, String>;

/// Keys every feature set must carry to be usable downstream.
pub const REQUIRED_KEYS: [&str; 3] = ["device_id", "ip_address", "os_type"];

/// Derive the feature set for a device from its role and OS family.
pub fn generate(device: &Device) -> FeatureSet {
    let mut feature_set = FeatureSet::new();

    feature_set.insert("device_id".to_string(), device.id.clone());
    feature_set.insert("ip_address".to_string(), device.ip_addr.clone());
    feature_set.insert("location".to_string(), device.location.clone());
    feature_set.insert("os_type".to_string(), device.os_type.to_string());
    feature_set.insert(
        "config_file".to_string(),
        config_file_for(&device.role, &device.os_type).to_string(),
    );

    info!(
        "Config file set for device {} (Role: {}, OS: {})",
        device.id, device.role, device.os_type
    );

    feature_set
}

/// Role- and OS-specific configuration template.
fn config_file_for(role: &Role, os_type: &OsType) -> &'static str {
    match role {
        Role::Router => match os_type {
            OsType::IosXe => "rtr_config_ios-xe.yaml",
            OsType::IosXr => "rtr_config_ios-xr.yaml",
            _ => "rtr_config.yaml",
        },
        Role::Switch => match os_type {
            OsType::IosXe => "sw_config_ios-xe.yaml",
            OsType::NxOs => "sw_config_nx-os.yaml",
            _ => "sw_config.yaml",
        },
        Role::Other(_) => "linux_config.yaml",
    }
}

/// Check that the essential entries are present.
///
/// Returns false on the first missing required key.
pub fn validate(feature_set: &FeatureSet) -> bool {
    for key in REQUIRED_KEYS {
        if !feature_set.contains_key(key) {
            warn!("Missing required configuration key: {}", key);
            return false;
        }
    }
    true
}

/// Reset all configuration for a device (decommissioning).
pub fn clear(device: &Device) -> FeatureSet {
    info!("Clearing configuration for device {}", device.id);
    FeatureSet::new()
}

/// Save a feature set to a JSON file with two-space indentation.
pub fn save(path: impl AsRef<Path>, feature_set: &FeatureSet) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
    }

    let data = serde_json::to_string_pretty(feature_set)
        .with_context(|| "Failed to serialize configuration")?;

    fs::write(path, data)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    info!("Configuration saved to file: {}", path.display());
    Ok(())
}

/// Load a feature set back from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<FeatureSet> {
    let path = path.as_ref();

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let feature_set: FeatureSet = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    info!("Configuration loaded from file: {}", path.display());
    Ok(feature_set)
}
