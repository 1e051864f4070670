use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub verification: VerificationSettings,
}

/// Tuning for the verification layer. Tests build zero-delay / zero-TTL
/// variants directly instead of going through the environment.
#[derive(Debug, Clone)]
pub struct VerificationSettings {
    pub cache_ttl: Duration,
    /// Upper bound on cached URLs.
    pub cache_max_entries: usize,
    pub batch_width: usize,
    pub batch_delay: Duration,
    pub probe_timeout: Duration,
    /// Always probe, even for registered platforms.
    pub strict: bool,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(24 * 60 * 60),
            cache_max_entries: 10_000,
            batch_width: 5,
            batch_delay: Duration::from_millis(100),
            probe_timeout: Duration::from_secs(5),
            strict: false,
        }
    }
}

impl VerificationSettings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            cache_ttl: Duration::from_secs(optional_env(
                "VERIFICATION_CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )?),
            cache_max_entries: optional_env::<usize>(
                "VERIFICATION_CACHE_MAX_ENTRIES",
                defaults.cache_max_entries,
            )?
            .max(1),
            batch_width: optional_env::<usize>("VERIFICATION_BATCH_WIDTH", defaults.batch_width)?
                .max(1),
            batch_delay: Duration::from_millis(optional_env(
                "VERIFICATION_BATCH_DELAY_MS",
                defaults.batch_delay.as_millis() as u64,
            )?),
            probe_timeout: Duration::from_millis(optional_env(
                "VERIFICATION_PROBE_TIMEOUT_MS",
                defaults.probe_timeout.as_millis() as u64,
            )?),
            strict: optional_env("VERIFICATION_STRICT", defaults.strict)?,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: optional_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            verification: VerificationSettings::from_env()?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
