//! Runtime configuration from environment variables
//!
//! Reads:
//!   SPENDSENSE_DATA_DIR, SPENDSENSE_MONTHS_BACK, SPENDSENSE_HORIZON_YEARS
//! Command-line flags override these values.

use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::projection::DEFAULT_HORIZON_YEARS;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_MONTHS_BACK: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the JSON files
    pub data_dir: PathBuf,

    /// Months shown by the spending tracker
    pub months_back: u32,

    /// Default horizon for savings projections
    pub horizon_years: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            months_back: DEFAULT_MONTHS_BACK,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Self::default();

        Self {
            data_dir: lookup("SPENDSENSE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            months_back: parse_or(&lookup, "SPENDSENSE_MONTHS_BACK", defaults.months_back),
            horizon_years: parse_or(&lookup, "SPENDSENSE_HORIZON_YEARS", defaults.horizon_years),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}", key, raw);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_values_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            ("SPENDSENSE_DATA_DIR", "/tmp/spendsense"),
            ("SPENDSENSE_MONTHS_BACK", "12"),
            ("SPENDSENSE_HORIZON_YEARS", " 10.5 "),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/spendsense"));
        assert_eq!(config.months_back, 12);
        assert_eq!(config.horizon_years, 10.5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("SPENDSENSE_MONTHS_BACK", "six")]));
        assert_eq!(config.months_back, DEFAULT_MONTHS_BACK);
    }
}
