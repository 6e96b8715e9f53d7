//! Configuration loading from leaderboard.toml.
//!
//! The core pipeline never reads configuration itself - it consumes a
//! [`LeaderboardConfig`] the caller already resolved. This module is the
//! resolving collaborator: it reads `leaderboard.toml` from a directory and
//! falls back to the documented defaults for anything missing or malformed.
//! A broken config file degrades the leaderboard to default behavior, it
//! never fails it.
//!
//! ## Example
//!
//! ```toml
//! # leaderboard.toml
//! number_of_days_to_count = 30
//! min_number_of_events = 15
//! ```

use std::path::Path;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::types::{LeaderboardConfig, DEFAULT_MIN_EVENTS, DEFAULT_WINDOW_DAYS};

/// File name looked up inside the directory passed to [`load`].
pub const CONFIG_FILE: &str = "leaderboard.toml";

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    number_of_days_to_count: Option<i64>,
    min_number_of_events: Option<i64>,
}

/// Load configuration from `leaderboard.toml` in the given directory.
///
/// Any failure along the way - missing file, unreadable file, invalid TOML,
/// missing keys, non-positive values - resolves to the fallback defaults
/// (30 days, 15 events) for the affected keys.
pub fn load(directory: &Path) -> LeaderboardConfig {
    let raw = std::fs::read_to_string(directory.join(CONFIG_FILE))
        .ok()
        .and_then(|content| parse(&content))
        .unwrap_or_default();
    from_raw(raw)
}

/// Process-wide configuration, read once, lazily.
///
/// First call loads `leaderboard.toml` from the current directory and caches
/// the result for the lifetime of the process; the guarded init makes
/// concurrent first use safe. Callers that want injected values should skip
/// this and construct a [`LeaderboardConfig`] directly.
pub fn cached() -> LeaderboardConfig {
    static PROCESS_CONFIG: OnceCell<LeaderboardConfig> = OnceCell::new();
    *PROCESS_CONFIG.get_or_init(|| load(Path::new(".")))
}

fn parse(content: &str) -> Option<RawConfig> {
    toml::from_str(content).ok()
}

fn from_raw(raw: RawConfig) -> LeaderboardConfig {
    LeaderboardConfig {
        window_days: positive_or(
            raw.number_of_days_to_count,
            "number_of_days_to_count",
            DEFAULT_WINDOW_DAYS,
        ),
        min_events: positive_or(
            raw.min_number_of_events,
            "min_number_of_events",
            DEFAULT_MIN_EVENTS,
        ),
    }
}

/// Accept a configured value only if it is a positive integer that fits the
/// knob, otherwise fall back.
fn positive_or(value: Option<i64>, key: &str, fallback: u32) -> u32 {
    match value {
        None => fallback,
        Some(v) if v > 0 && v <= i64::from(u32::MAX) => v as u32,
        Some(v) => {
            tracing::warn!(key, value = v, fallback, "ignoring out-of-range config value");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let raw = parse("number_of_days_to_count = 7\nmin_number_of_events = 3\n").unwrap();
        let config = from_raw(raw);
        assert_eq!(config.window_days, 7);
        assert_eq!(config.min_events, 3);
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let raw = parse("number_of_days_to_count = 7\n").unwrap();
        let config = from_raw(raw);
        assert_eq!(config.window_days, 7);
        assert_eq!(config.min_events, DEFAULT_MIN_EVENTS);

        let config = from_raw(parse("").unwrap());
        assert_eq!(config, LeaderboardConfig::default());
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        assert!(parse("number_of_days_to_count = = 7").is_none());
        assert!(parse("number_of_days_to_count = \"thirty\"").is_none());
    }

    #[test]
    fn test_non_positive_values_fall_back() {
        let raw = parse("number_of_days_to_count = 0\nmin_number_of_events = -4\n").unwrap();
        let config = from_raw(raw);
        assert_eq!(config.window_days, DEFAULT_WINDOW_DAYS);
        assert_eq!(config.min_events, DEFAULT_MIN_EVENTS);
    }

    #[test]
    fn test_oversized_value_falls_back() {
        let raw = parse("number_of_days_to_count = 99999999999\n").unwrap();
        let config = from_raw(raw);
        assert_eq!(config.window_days, DEFAULT_WINDOW_DAYS);
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let config = load(Path::new("/nonexistent/learnboard-test"));
        assert_eq!(config, LeaderboardConfig::default());
    }
}
