//! Network device records.
//!
//! A [`Device`] describes one network device's identity and credentials.
//! Construction performs no validation of the IP address; input checking
//! belongs to the CLI layer (see `utils::net`).

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::error::NdmError;

/// Login credentials for a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Operational status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Active,
    Inactive,
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Active => write!(f, "active"),
            DeviceStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for DeviceStatus {
    type Err = NdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(DeviceStatus::Active),
            "inactive" => Ok(DeviceStatus::Inactive),
            other => Err(NdmError::other(format!(
                "unknown device status '{}' (expected 'active' or 'inactive')",
                other
            ))),
        }
    }
}

/// The role of a device in the network.
///
/// Unknown roles are preserved verbatim so they fall through the default
/// branch of the feature-set dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Router,
    Switch,
    Other(String),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Router => write!(f, "Router"),
            Role::Switch => write!(f, "Switch"),
            Role::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "router" => Role::Router,
            "switch" => Role::Switch,
            _ => Role::Other(s.to_string()),
        }
    }
}

/// Operating system family running on a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsType {
    IosXe,
    IosXr,
    NxOs,
    Other(String),
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsType::IosXe => write!(f, "IOS-XE"),
            OsType::IosXr => write!(f, "IOS-XR"),
            OsType::NxOs => write!(f, "NX-OS"),
            OsType::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for OsType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ios-xe" => OsType::IosXe,
            "ios-xr" => OsType::IosXr,
            "nx-os" => OsType::NxOs,
            _ => OsType::Other(s.to_string()),
        }
    }
}

/// A single network device.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Unique identifier (serial number or inventory ID)
    pub id: String,
    /// IP address of the device
    pub ip_addr: String,
    /// Operational status
    pub status: DeviceStatus,
    /// Role in the network
    pub role: Role,
    /// Physical or logical location
    pub location: String,
    /// Categorization tag (e.g. "Core-Router")
    pub tag: String,
    /// Operating system family
    pub os_type: OsType,
    /// Login credentials, once set
    pub credentials: Option<Credentials>,
}

impl Device {
    pub fn new(
        id: impl Into<String>,
        ip_addr: impl Into<String>,
        status: DeviceStatus,
        role: Role,
        location: impl Into<String>,
        tag: impl Into<String>,
        os_type: OsType,
    ) -> Self {
        Self {
            id: id.into(),
            ip_addr: ip_addr.into(),
            status,
            role,
            location: location.into(),
            tag: tag.into(),
            os_type,
            credentials: None,
        }
    }

    /// Update the operational status of the device.
    pub fn update_status(&mut self, status: DeviceStatus) {
        self.status = status;
        info!("Device {} status updated to {}", self.id, status);
    }

    /// Change the role of the device.
    pub fn set_role(&mut self, role: Role) {
        info!("Device {} role updated to {}", self.id, role);
        self.role = role;
    }

    /// Set the login credentials for the device.
    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        let username = username.into();
        info!("Credentials set for device {} (Username: {})", self.id, username);
        self.credentials = Some(Credentials {
            username,
            password: password.into(),
        });
    }

    /// Change the operating system family of the device.
    pub fn set_os_type(&mut self, os_type: OsType) {
        info!("OS type for device {} updated to {}", self.id, os_type);
        self.os_type = os_type;
    }

    pub fn os_type(&self) -> &OsType {
        &self.os_type
    }
}
