//! Application configuration from command-line flags and environment variables.
//!
//! Configuration is loaded once at startup, validated, and handed to
//! [`crate::server::run`].
//!
//! ## Precedence
//!
//! 1. Environment variable, when set to a non-empty value
//! 2. Command-line flag
//! 3. Built-in default
//!
//! `.env` files are picked up through `dotenvy` before flags are parsed
//! (see `main.rs`).
//!
//! ## Settings
//!
//! | Setting | Flag | Environment | Default |
//! |---|---|---|---|
//! | Listen address | `-a` | `SERVER_ADDRESS` | `localhost:8080` |
//! | Short link base URL | `-b` | `BASE_URL` | `http://localhost:8080` |
//! | Log filter | `--log-level` | `RUST_LOG` | `info` |
//! | Log format (`text` / `json`) | `--log-format` | `LOG_FORMAT` | `text` |
//!
//! A listen address with no host, such as `:8080`, binds to `0.0.0.0`.
//!
//! ```bash
//! url-shortener -a 0.0.0.0:8080 -b https://sho.rt
//! SERVER_ADDRESS=127.0.0.1:9000 BASE_URL=http://127.0.0.1:9000 url-shortener
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use tracing_subscriber::EnvFilter;
use url::Url;

pub const DEFAULT_RUN_ADDR: &str = "localhost:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Host used when the listen address has only a port, e.g. `:8080`.
const ALL_INTERFACES: &str = "0.0.0.0";

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address and port to run the server on
    #[arg(short = 'a', long = "run-addr", default_value = DEFAULT_RUN_ADDR)]
    pub run_addr: String,

    /// Base address of the resulting short URLs
    #[arg(short = 'b', long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter directive, e.g. `info` or `url_shortener=debug`
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log output format: `text` or `json`
    #[arg(long, default_value = "text")]
    pub log_format: String,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to, `host:port`.
    pub run_addr: String,
    /// Public prefix for short links, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Builds configuration from parsed flags and the process environment.
    pub fn from_cli(cli: Cli) -> Self {
        Self::resolve(cli, |key| env::var(key).ok())
    }

    /// Builds configuration from parsed flags and an environment lookup.
    ///
    /// Empty environment values are treated as unset.
    pub fn resolve(cli: Cli, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_or = |key: &str, fallback: String| {
            lookup(key).filter(|v| !v.is_empty()).unwrap_or(fallback)
        };

        Self {
            run_addr: with_default_host(env_or("SERVER_ADDRESS", cli.run_addr)),
            base_url: env_or("BASE_URL", cli.base_url),
            log_level: env_or("RUST_LOG", cli.log_level),
            log_format: env_or("LOG_FORMAT", cli.log_format),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `run_addr` is not `host:port` (or `:port`) with a numeric port
    /// - `base_url` is not an absolute `http`/`https` URL
    /// - `log_level` is not a valid filter directive
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let (_, port) = self.run_addr.rsplit_once(':').with_context(|| {
            format!(
                "SERVER_ADDRESS must be in format 'host:port', got '{}'",
                self.run_addr
            )
        })?;

        port.parse::<u16>().with_context(|| {
            format!(
                "SERVER_ADDRESS port must be a number between 0 and 65535, got '{}'",
                port
            )
        })?;

        let base_url = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL must be an absolute URL, got '{}'", self.base_url))?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("RUST_LOG is not a valid filter: '{}'", self.log_level))?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.run_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Expands a port-only address such as `:8080` to listen on all interfaces.
fn with_default_host(addr: String) -> String {
    if addr.starts_with(':') {
        format!("{ALL_INTERFACES}{addr}")
    } else {
        addr
    }
}

/// Parses flags, applies environment overrides and validates the result.
///
/// # Errors
///
/// Returns an error if validation fails. Invalid flags make clap print usage
/// and exit.
///
/// # Note
///
/// This function expects `.env` to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load() -> Result<Config> {
    let config = Config::from_cli(Cli::parse());
    config.validate()?;
    Ok(config)
}
