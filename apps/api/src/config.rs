use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a present but unparseable value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a request body, in bytes.
    pub max_body_bytes: usize,
    /// Run the four section parsers on the blocking pool instead of inline.
    pub parallel_sections: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            parallel_sections: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)?,
            parallel_sections: parse_env("PARALLEL_SECTIONS", defaults.parallel_sections)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
