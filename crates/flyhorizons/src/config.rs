//! Environment-driven configuration.
//!
//! Cache key formats and TTLs are deliberately not configurable: they are
//! part of the observable contract and live as constants in
//! `flyhorizons_core::cache`.

const DEFAULT_SQLITE_PATH: &str = "flyhorizons.db";
const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the sqlite database file (sqlite backend only).
    pub sqlite_path: String,
    /// Redis connection URL (redis backend only).
    pub redis_url: String,
    /// Capacity of the in-process cache (memory backend only).
    pub cache_max_entries: usize,
    /// IPs allowed to create flights. Empty means nobody may create.
    pub whitelisted_ips: Vec<String>,
}

impl Config {
    /// Builds the configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let sqlite_path =
            std::env::var("SQLITE_PATH").unwrap_or_else(|_| DEFAULT_SQLITE_PATH.to_string());
        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        let cache_max_entries = std::env::var("CACHE_MAX_ENTRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES);
        let whitelisted_ips = std::env::var("WHITELISTED_IPS")
            .map(|v| parse_ip_list(&v))
            .unwrap_or_default();

        Self {
            sqlite_path,
            redis_url,
            cache_max_entries,
            whitelisted_ips,
        }
    }
}

fn parse_ip_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
