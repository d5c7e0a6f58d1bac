// UI and formatting module

pub mod device_formatters;
pub mod formatters;

// Re-export commonly used items for cleaner imports
pub use device_formatters::{print_alerts, print_device_details, print_metrics};
pub use formatters::{format_mbps, format_percent, format_uptime};
