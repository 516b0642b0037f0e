use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the persisted store record.
    pub storage_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Delay before the export document opens the print dialog.
    pub print_settle_ms: u64,
    /// Delay before the export document closes itself after printing.
    pub print_close_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let defaults = Config::default();

        Ok(Config {
            storage_path: std::env::var("STORAGE_PATH").unwrap_or(defaults.storage_path),
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            print_settle_ms: env_or("PRINT_SETTLE_MS", defaults.print_settle_ms)?,
            print_close_ms: env_or("PRINT_CLOSE_MS", defaults.print_close_ms)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: "resume-maker-storage.json".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            print_settle_ms: 500,
            print_close_ms: 100,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
