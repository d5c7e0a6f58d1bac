// Utility helpers shared across commands

pub mod net;
pub mod retry;

pub use net::{is_valid_ip, parse_cidr, ping_host, resolve_hostname};
pub use retry::retry;
