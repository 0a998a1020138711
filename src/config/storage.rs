//! Local storage configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;

fn default_data_dir() -> PathBuf {
    PathBuf::from(".bhavan")
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the on-device session document.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidDataDir);
        }
        Ok(())
    }
}
