mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LingogiError;
use crate::locale::LocaleCode;
use defaults::*;

/// Top-level Lingogi configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lingogi: LingogiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LingogiConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Also write logs to this file. Unset = stderr only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Default for LingogiConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// Which durable storage backend holds preferences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file on disk (default).
    #[default]
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

/// Durable storage config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

/// Locale catalog config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Bundle whose keys are authoritative.
    #[serde(default = "default_base_language")]
    pub base_language: LocaleCode,
    /// Directory of `<code>.json` bundles that override the embedded ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            base_language: default_base_language(),
            locales_dir: None,
        }
    }
}

/// Translation completeness diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Run the completeness checker. Defaults to on in debug builds only.
    #[serde(default = "default_check_translations")]
    pub check_translations: bool,
    /// Delay before the once-per-session startup check.
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            check_translations: default_check_translations(),
            startup_delay_ms: default_startup_delay_ms(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, LingogiError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LingogiError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| LingogiError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
