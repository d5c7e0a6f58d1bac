use ndm::core::device::{Device, DeviceStatus, OsType, Role};

fn sample_device() -> Device {
    Device::new(
        "1",
        "192.168.1.10",
        DeviceStatus::Inactive,
        Role::Router,
        "Data Center A",
        "Core-Router",
        OsType::IosXe,
    )
}

#[test]
fn test_new_device_has_no_credentials() {
    let device = sample_device();
    assert!(device.credentials.is_none());
}

#[test]
fn test_new_device_keeps_identity_fields() {
    let device = sample_device();

    assert_eq!(device.id, "1");
    assert_eq!(device.ip_addr, "192.168.1.10");
    assert_eq!(device.status, DeviceStatus::Inactive);
    assert_eq!(device.role, Role::Router);
    assert_eq!(device.location, "Data Center A");
    assert_eq!(device.tag, "Core-Router");
    assert_eq!(device.os_type, OsType::IosXe);
}

#[test]
fn test_set_credentials() {
    let mut device = sample_device();
    device.set_credentials("admin", "password123");

    let creds = device.credentials.expect("credentials were set");
    assert_eq!(creds.username, "admin");
    assert_eq!(creds.password, "password123");
}

#[test]
fn test_update_status_and_role() {
    let mut device = sample_device();

    device.update_status(DeviceStatus::Active);
    device.set_role(Role::Switch);
    device.set_os_type(OsType::NxOs);

    assert_eq!(device.status, DeviceStatus::Active);
    assert_eq!(device.role, Role::Switch);
    assert_eq!(device.os_type(), &OsType::NxOs);
}

#[test]
fn test_ip_is_not_validated_at_construction() {
    // Construction accepts any string; validation is a CLI concern.
    let device = Device::new(
        "2",
        "not-an-ip",
        DeviceStatus::Inactive,
        Role::Switch,
        "Lab",
        "Bench",
        OsType::NxOs,
    );
    assert_eq!(device.ip_addr, "not-an-ip");
}

#[test]
fn test_status_roundtrip_through_display() {
    let status: DeviceStatus = "active".parse().unwrap();
    assert_eq!(status.to_string(), "active");

    let status: DeviceStatus = "INACTIVE".parse().unwrap();
    assert_eq!(status.to_string(), "inactive");
}
