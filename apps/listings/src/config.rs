use std::path::PathBuf;

use anyhow::{bail, Result};

/// Application configuration loaded from environment variables.
/// Both record paths are optional; the built-in sample data is used when unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub jobs_path: Option<PathBuf>,
    pub recruiters_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_path: optional_path("LISTINGS_JOBS_PATH")?,
            recruiters_path: optional_path("LISTINGS_RECRUITERS_PATH")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_path(key: &str) -> Result<Option<PathBuf>> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => {
            bail!("Environment variable '{key}' is set but empty")
        }
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => bail!("Environment variable '{key}' is not valid unicode: {e}"),
    }
}
