//! Runtime configuration from environment variables
//!
//! Unset or unparsable variables fall back to their defaults.

use std::time::Duration;

use crate::sync::RetryPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub chart_timeout: Duration,
    pub sync_max_retries: u32,
    pub sync_retry_delay: Duration,
    pub report_cache_ttl: Duration,
    pub report_cache_capacity: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            chart_timeout: Duration::from_millis(5000),
            sync_max_retries: 3,
            sync_retry_delay: Duration::from_millis(2000),
            report_cache_ttl: Duration::from_secs(3600),
            report_cache_capacity: 10_000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            chart_timeout: parse("CHART_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.chart_timeout),
            sync_max_retries: lookup("SYNC_MAX_RETRIES")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.sync_max_retries),
            sync_retry_delay: parse("SYNC_RETRY_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.sync_retry_delay),
            report_cache_ttl: parse("REPORT_CACHE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.report_cache_ttl),
            report_cache_capacity: parse("REPORT_CACHE_CAPACITY")
                .unwrap_or(defaults.report_cache_capacity),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.sync_max_retries,
            base_delay: self.sync_retry_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CHART_TIMEOUT_MS", "250"),
            ("SYNC_MAX_RETRIES", "5"),
            ("REPORT_CACHE_CAPACITY", "12"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.chart_timeout, Duration::from_millis(250));
        assert_eq!(config.retry_policy().max_attempts, 5);
        assert_eq!(config.report_cache_capacity, 12);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("SYNC_MAX_RETRIES", "0"),
            ("SYNC_RETRY_DELAY_MS", "-4"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.sync_max_retries, 3);
        assert_eq!(config.sync_retry_delay, Duration::from_millis(2000));
    }
}
