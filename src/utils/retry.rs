use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::warn;

/// Retry a fallible operation with a fixed delay between attempts.
///
/// Runs `operation` up to `attempts` times (at least once), sleeping
/// `delay` between attempts. Returns the first success, or the last error
/// once attempts are exhausted.
pub fn retry<T, F>(mut operation: F, attempts: u32, delay: Duration) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let attempts = attempts.max(1);

    for attempt in 1..=attempts {
        match operation() {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                warn!("Attempt {}/{} failed: {}", attempt, attempts, e);
                thread::sleep(delay);
            }
            Err(e) => return Err(e),
        }
    }

    unreachable!("loop always returns on the last attempt")
}
