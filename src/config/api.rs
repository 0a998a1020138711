//! Backend API configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_timeout_secs() -> u64 {
    10
}

/// Booking backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the booking backend (e.g. `https://api.bhavanbooking.in`)
    pub base_url: String,

    /// Request timeout in seconds. Applies to every call, 10 by default.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash, ready for path joining.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("API_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ApiConfig {
        ApiConfig {
            base_url: "https://api.example.com".to_string(),
            timeout_secs: 10,
        }
    }

    #[test]
    fn test_default_timeout_is_ten_seconds() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_trimmed_base_url_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            ..valid_config()
        };
        assert_eq!(config.trimmed_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_validation_missing_base_url() {
        let config = ApiConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = ApiConfig {
            base_url: "ftp://api.example.com".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }
}
