//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export PROGRAMS_FILE="./programs.json"
//! export HISTORY_CAPACITY="1000"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PROGRAMS_FILE` - JSON file with affiliate programs to seed at startup
//!   (default: none, the service starts with no programs)
//! - `HISTORY_CAPACITY` - Resolutions kept in memory (default: 1000, min: 10)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub programs_file: Option<PathBuf>,
    pub history_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let programs_file = env::var("PROGRAMS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let history_capacity = env::var("HISTORY_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1_000);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            programs_file,
            history_capacity,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `history_capacity` is outside `10..=1_000_000`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity < 10 {
            anyhow::bail!(
                "HISTORY_CAPACITY must be at least 10, got {}",
                self.history_capacity
            );
        }

        if self.history_capacity > 1_000_000 {
            anyhow::bail!(
                "HISTORY_CAPACITY is too large (max: 1000000), got {}",
                self.history_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.programs_file {
            Some(path) => tracing::info!("  Programs file: {}", path.display()),
            None => tracing::info!("  Programs file: none (starting empty)"),
        }

        tracing::info!("  History capacity: {}", self.history_capacity);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
