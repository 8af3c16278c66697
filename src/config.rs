//! Application configuration.
//!
//! Settings are layered: serde defaults, then an optional `contact-book`
//! config file (in `config/` or the working directory), then environment
//! variables prefixed with `CONTACT_BOOK__`.

use crate::error::{ContactBookError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Default path of the primary store file.
pub const DEFAULT_DATA_FILE: &str = "contacts_data.json";
/// Default path of the backup file.
pub const DEFAULT_BACKUP_FILE: &str = "contacts_backup.json";
/// Default path of the CSV export file.
pub const DEFAULT_EXPORT_FILE: &str = "contacts_export.csv";

/// Application configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store and backup file locations
    pub storage: StorageConfig,
    /// Export destination
    pub export: ExportConfig,
    /// Logging behavior
    pub logging: LoggingConfig,
}

/// File locations for the primary store and the backup slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Primary store file
    pub data_file: String,
    /// Backup file, overwritten on every backup
    pub backup_file: String,
}

/// CSV export destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Export file, overwritten on every export
    pub csv_file: String,
}

/// Log level, format and optional log file directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error
    pub level: String,
    /// Directory for a rolling JSON log file; console-only when unset
    pub file_path: Option<String>,
    /// Console format: "text" or "json"
    pub format: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            backup_file: DEFAULT_BACKUP_FILE.to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("config/contact-book").required(false))
            .add_source(File::with_name("contact-book").required(false))
            .add_source(Environment::with_prefix("CONTACT_BOOK").separator("__"))
            .build()
            .map_err(|e| ContactBookError::InvalidConfig(e.to_string()))?;

        let app_config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| ContactBookError::InvalidConfig(e.to_string()))?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ContactBookError::InvalidConfig(format!(
                "invalid log level: {}. Must be one of: {valid_levels:?}",
                self.logging.level
            )));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(ContactBookError::InvalidConfig(format!(
                "invalid log format: {}. Must be one of: {valid_formats:?}",
                self.logging.format
            )));
        }

        if self.storage.data_file.trim().is_empty() {
            return Err(ContactBookError::InvalidConfig(
                "storage.data_file must not be empty".to_string(),
            ));
        }
        if self.storage.backup_file.trim().is_empty() {
            return Err(ContactBookError::InvalidConfig(
                "storage.backup_file must not be empty".to_string(),
            ));
        }
        if self.export.csv_file.trim().is_empty() {
            return Err(ContactBookError::InvalidConfig(
                "export.csv_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.data_file, "contacts_data.json");
        assert_eq!(config.storage.backup_file, "contacts_backup.json");
        assert_eq!(config.export.csv_file, "contacts_export.csv");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.logging.file_path, None);
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_data_file_rejected() {
        let mut config = AppConfig::default();
        config.storage.data_file = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
