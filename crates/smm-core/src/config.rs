//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

use crate::error::AppError;
use crate::AppResult;

/// Durations (in days) offered by the storefront selector
pub const DEFAULT_OFFERED_DURATIONS: [u32; 3] = [1, 7, 30];

/// Coupon discount cap applied when a coupon carries no `maxDiscount`
pub const DEFAULT_MAX_DISCOUNT: i64 = 10_000;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub pricing: PricingConfig,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Comma separated list of allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9010
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Pricing policy configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Cap on coupon discounts that do not declare their own `maxDiscount`
    #[serde(default = "default_max_discount")]
    pub default_max_discount: Decimal,

    /// Durations quoted by the options endpoint when the caller gives none
    #[serde(default = "default_offered_durations")]
    pub offered_durations: Vec<u32>,
}

fn default_max_discount() -> Decimal {
    Decimal::from(DEFAULT_MAX_DISCOUNT)
}

fn default_offered_durations() -> Vec<u32> {
    DEFAULT_OFFERED_DURATIONS.to_vec()
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9010)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("pricing.default_max_discount", DEFAULT_MAX_DISCOUNT)?
            .set_default("log_level", "info")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with SMM_ prefix
            .add_source(
                Environment::with_prefix("SMM")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("pricing.offered_durations")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Reject settings the pricing engine cannot work with
    pub fn validate(&self) -> AppResult<()> {
        if self.pricing.default_max_discount < Decimal::ZERO {
            return Err(AppError::Config(
                "pricing.default_max_discount cannot be negative".to_string(),
            ));
        }

        if self.pricing.offered_durations.is_empty() {
            return Err(AppError::Config(
                "pricing.offered_durations must list at least one duration".to_string(),
            ));
        }

        if self.pricing.offered_durations.contains(&0) {
            return Err(AppError::Config(
                "pricing.offered_durations must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl ServerConfig {
    /// Allowed CORS origins, trimmed, empty entries dropped
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_max_discount: default_max_discount(),
            offered_durations: default_offered_durations(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            pricing: PricingConfig::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_pricing_config() {
        let config = PricingConfig::default();
        assert_eq!(config.default_max_discount, dec!(10000));
        assert_eq!(config.offered_durations, vec![1, 7, 30]);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "0.0.0.0:9010");
    }

    #[test]
    fn test_validate_rejects_bad_pricing() {
        let mut config = AppConfig::default();
        config.pricing.default_max_discount = dec!(-1);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.pricing.offered_durations = vec![];
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.pricing.offered_durations = vec![0, 7];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.pricing.offered_durations, vec![1, 7, 30]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_allowed_origins() {
        let server = ServerConfig {
            cors_origins: " http://a.test , ,http://b.test".to_string(),
            ..Default::default()
        };
        assert_eq!(server.allowed_origins(), vec!["http://a.test", "http://b.test"]);
    }
}
