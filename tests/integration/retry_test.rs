use std::time::Duration;

use anyhow::anyhow;
use ndm::utils::retry::retry;

#[test]
fn test_success_on_first_attempt_runs_once() {
    let mut calls = 0;
    let result = retry(
        || {
            calls += 1;
            Ok::<_, anyhow::Error>("ok")
        },
        3,
        Duration::ZERO,
    );

    assert_eq!(result.unwrap(), "ok");
    assert_eq!(calls, 1);
}

#[test]
fn test_recovers_after_transient_failures() {
    let mut calls = 0;
    let result = retry(
        || {
            calls += 1;
            if calls < 3 {
                Err(anyhow!("device unreachable"))
            } else {
                Ok(calls)
            }
        },
        3,
        Duration::ZERO,
    );

    assert_eq!(result.unwrap(), 3);
}

#[test]
fn test_exhaustion_surfaces_last_error() {
    let result: anyhow::Result<()> = retry(|| Err(anyhow!("still down")), 2, Duration::ZERO);
    assert_eq!(result.unwrap_err().to_string(), "still down");
}
