//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `BHAVAN` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use bhavan_booking::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod error;
mod payment;
mod storage;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Bhavan Booking client.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration (base URL, request timeout)
    pub api: ApiConfig,

    /// Payment configuration (Razorpay)
    pub payment: PaymentConfig,

    /// Local session store configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `BHAVAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BHAVAN__API__BASE_URL=https://...` -> `api.base_url = https://...`
    /// - `BHAVAN__PAYMENT__RAZORPAY_KEY_ID=rzp_test_x` -> `payment.razorpay_key_id = rzp_test_x`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BHAVAN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.payment.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if the payment gateway is configured for test mode
    pub fn is_test_mode(&self) -> bool {
        self.payment.is_test_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_minimal_env() {
        env::set_var("BHAVAN__API__BASE_URL", "https://api.bhavan.test");
        env::set_var("BHAVAN__PAYMENT__RAZORPAY_KEY_ID", "rzp_test_abc123");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("BHAVAN__API__BASE_URL");
        env::remove_var("BHAVAN__API__TIMEOUT_SECS");
        env::remove_var("BHAVAN__PAYMENT__RAZORPAY_KEY_ID");
        env::remove_var("BHAVAN__PAYMENT__RAZORPAY_KEY_SECRET");
        env::remove_var("BHAVAN__STORAGE__DATA_DIR");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://api.bhavan.test");
        assert_eq!(config.payment.razorpay_key_id, "rzp_test_abc123");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_defaults_to_ten_seconds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_custom_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BHAVAN__API__TIMEOUT_SECS", "30");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_is_test_mode() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_test_mode());
    }
}
