use std::time::Duration;

/// Format a percentage with one decimal place
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a bandwidth figure in Mbps
pub fn format_mbps(value: f64) -> String {
    format!("{:.2} Mbps", value)
}

/// Format an uptime duration at hour granularity (minutes below one hour)
pub fn format_uptime(uptime: Duration) -> String {
    let hours = uptime.as_secs() / 3600;
    match hours {
        0 => {
            let minutes = uptime.as_secs() / 60;
            format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
        }
        1 => "1 hour".to_string(),
        _ => format!("{} hours", hours),
    }
}
