use std::env;
use std::str::FromStr;

use anyhow::{Context, bail};
use dotenvy::dotenv;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    /// Start with the demo records instead of an empty store
    pub seed_demo_data: bool,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let log_level = var("LOG_LEVEL", "debug");

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            api_prefix: var("API_PREFIX", "/api"),
            seed_demo_data: parse_flag("SEED_DEMO_DATA", &var("SEED_DEMO_DATA", "true"))?,
            log_dir: var("LOG_DIR", "logs"),
            log_level: Level::from_str(&log_level)
                .with_context(|| format!("LOG_LEVEL must be a tracing level, got '{log_level}'"))?,
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be true or false, got '{other}'"),
    }
}
