use std::{net::SocketAddr, time::Duration};

use hungarian_holidays_core::constants::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_SOURCE_TIMEOUT_MS,
};
use hungarian_holidays_core::{HolidayServiceConfig, SourceRegistryOptions};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 60_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_max_entries: u64,
    pub source_timeout: Duration,
    pub include_publicholidays_for_workdays: bool,
    pub include_unnepnapok: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from a variable lookup; missing or unparsable
    /// values fall back to their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr: SocketAddr = var("HH_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .expect("Invalid HH_LISTEN_ADDR");
        let cors_allow = var("HH_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let number = |key: &str, default: u64| -> u64 {
            var(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(number(
                "HH_REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            )),
            cache_ttl: Duration::from_secs(number("HH_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)),
            cache_max_entries: number("HH_CACHE_MAX_ENTRIES", DEFAULT_CACHE_MAX_ENTRIES),
            source_timeout: Duration::from_millis(number(
                "HH_SOURCE_TIMEOUT_MS",
                DEFAULT_SOURCE_TIMEOUT_MS,
            )),
            include_publicholidays_for_workdays: var("INCLUDE_PUBLICHOLIDAYS_FOR_WORKDAYS")
                .is_some_and(|v| is_truthy(&v)),
            include_unnepnapok: var("HH_INCLUDE_UNNEPNAPOK").is_some_and(|v| is_truthy(&v)),
        }
    }

    pub fn service_config(&self) -> HolidayServiceConfig {
        HolidayServiceConfig {
            cache_ttl: self.cache_ttl,
            cache_max_entries: self.cache_max_entries,
            source_timeout: self.source_timeout,
        }
    }

    pub fn registry_options(&self) -> SourceRegistryOptions {
        SourceRegistryOptions {
            include_publicholidays_for_workdays: self.include_publicholidays_for_workdays,
            include_unnepnapok: self.include_unnepnapok,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

/// `1`, `true` or `yes`, case-insensitive, surrounding whitespace ignored.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8000");
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.cache_max_entries, 100);
        assert_eq!(config.source_timeout, Duration::from_secs(30));
        assert!(!config.include_publicholidays_for_workdays);
        assert!(!config.include_unnepnapok);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HH_LISTEN_ADDR", "127.0.0.1:9000"),
            ("HH_CORS_ALLOW_ORIGINS", "https://a.example, https://b.example,"),
            ("HH_CACHE_TTL_SECS", "60"),
            ("HH_SOURCE_TIMEOUT_MS", "not-a-number"),
        ]);
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(
            config.cors_allow,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.source_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_inclusion_flags() {
        for value in ["1", "true", " YES ", "True"] {
            let config = config(&[
                ("INCLUDE_PUBLICHOLIDAYS_FOR_WORKDAYS", value),
                ("HH_INCLUDE_UNNEPNAPOK", value),
            ]);
            assert!(config.include_publicholidays_for_workdays, "{:?}", value);
            assert!(config.include_unnepnapok, "{:?}", value);
        }
        for value in ["0", "false", "no", ""] {
            let config = config(&[("INCLUDE_PUBLICHOLIDAYS_FOR_WORKDAYS", value)]);
            assert!(!config.include_publicholidays_for_workdays, "{:?}", value);
        }
    }
}
