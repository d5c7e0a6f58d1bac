use ndm::core::device::{Device, DeviceStatus, OsType, Role};
use ndm::core::feature_set::{self, FeatureSet};
use tempfile::TempDir;

fn device(role: Role, os_type: OsType) -> Device {
    Device::new(
        "1",
        "192.168.1.10",
        DeviceStatus::Inactive,
        role,
        "Data Center A",
        "Core-Router",
        os_type,
    )
}

#[test]
fn test_router_ios_xe_config_file() {
    let config = feature_set::generate(&device(Role::Router, OsType::IosXe));
    assert_eq!(
        config.get("config_file"),
        Some(&"rtr_config_ios-xe.yaml".to_string())
    );
}

#[test]
fn test_switch_nx_os_config_file() {
    let config = feature_set::generate(&device(Role::Switch, OsType::NxOs));
    assert_eq!(
        config.get("config_file"),
        Some(&"sw_config_nx-os.yaml".to_string())
    );
}

#[test]
fn test_unknown_role_falls_back_to_linux_config() {
    let config = feature_set::generate(&device(
        Role::Other("Server".to_string()),
        OsType::Other("Linux".to_string()),
    ));
    assert_eq!(
        config.get("config_file"),
        Some(&"linux_config.yaml".to_string())
    );
}

#[test]
fn test_generated_config_is_valid() {
    let config = feature_set::generate(&device(Role::Router, OsType::IosXe));
    assert!(feature_set::validate(&config));
}

#[test]
fn test_validate_fails_without_device_id() {
    let mut config = feature_set::generate(&device(Role::Router, OsType::IosXe));
    config.remove("device_id");
    assert!(!feature_set::validate(&config));
}

#[test]
fn test_validate_fails_on_empty_map() {
    assert!(!feature_set::validate(&FeatureSet::new()));
}

#[test]
fn test_save_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("device-config.json");

    let config = feature_set::generate(&device(Role::Router, OsType::IosXe));
    feature_set::save(&path, &config).unwrap();

    let loaded = feature_set::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_is_indented_json_with_sorted_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("device-config.json");

    let config = feature_set::generate(&device(Role::Router, OsType::IosXe));
    feature_set::save(&path, &config).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    assert!(data.starts_with("{\n"));
    assert!(data.contains("  \"config_file\""));

    // BTreeMap serialization keeps keys in sorted order.
    let config_file_pos = data.find("config_file").unwrap();
    let device_id_pos = data.find("device_id").unwrap();
    let os_type_pos = data.find("os_type").unwrap();
    assert!(config_file_pos < device_id_pos);
    assert!(device_id_pos < os_type_pos);
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.json");

    assert!(feature_set::load(&path).is_err());
}

#[test]
fn test_load_malformed_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(feature_set::load(&path).is_err());
}

#[test]
fn test_clear_produces_empty_set() {
    let cleared = feature_set::clear(&device(Role::Router, OsType::IosXe));
    assert!(cleared.is_empty());
}

#[test]
fn test_cleared_set_roundtrips_as_empty_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cleared.json");

    feature_set::save(&path, &FeatureSet::new()).unwrap();
    let loaded = feature_set::load(&path).unwrap();
    assert!(loaded.is_empty());
}
