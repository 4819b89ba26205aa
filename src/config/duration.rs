use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

use crate::config::ConfigError;

lazy_static! {
    static ref DURATION_FORMAT: Regex =
        Regex::new(r"^(?:(?:\d+(?:\.\d*)?|\.\d+)(?:ns|us|µs|μs|ms|s|m|h))+$").unwrap();
    static ref DURATION_PART: Regex =
        Regex::new(r"(\d+(?:\.\d*)?|\.\d+)(ns|us|µs|μs|ms|s|m|h)").unwrap();
}

fn unit_nanos(unit: &str) -> f64 {
    match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        _ => 3600e9,
    }
}

/// Parse a duration string such as `"1s"`, `"5m"`, `"1.5h"` or `"1h30m"`.
///
/// Zero is rejected: a polling interval has to make progress.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    let input = input.trim();
    if !DURATION_FORMAT.is_match(input) {
        return Err(ConfigError::InvalidDuration(input.to_string()));
    }

    let mut nanos = 0.0_f64;
    for part in DURATION_PART.captures_iter(input) {
        let value: f64 = part[1]
            .parse()
            .map_err(|_| ConfigError::InvalidDuration(input.to_string()))?;
        nanos += value * unit_nanos(&part[2]);
    }

    if nanos > u64::MAX as f64 {
        return Err(ConfigError::InvalidDuration(input.to_string()));
    }

    let duration = Duration::from_nanos(nanos.round() as u64);
    if duration.is_zero() {
        return Err(ConfigError::NonPositiveDuration(input.to_string()));
    }

    Ok(duration)
}
