//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument or environment variable (parsed by the binary)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MEDIA_DIR: &str = "static/media";
pub const DEFAULT_SESSION_TTL_MINUTES: u64 = 24 * 60;

/// Fully resolved service settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory holding the audio/video files named in the catalog
    pub media_dir: PathBuf,
    /// Idle time after which a session expires
    pub session_ttl_minutes: u64,
    /// Optional data file replacing the built-in data set
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            media_dir: PathBuf::from(DEFAULT_MEDIA_DIR),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            data_file: None,
        }
    }
}

impl Settings {
    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Optional values from the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub media_dir: Option<PathBuf>,
    pub session_ttl_minutes: Option<u64>,
    pub data_file: Option<PathBuf>,
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub media_dir: Option<PathBuf>,
    pub session_ttl_minutes: Option<u64>,
    pub data_file: Option<PathBuf>,
}

/// Platform default config file location (`<config_dir>/songbook/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("songbook").join("config.toml"))
}

/// Load the TOML layer
///
/// An explicitly named file must exist and parse. The platform default file is
/// optional: when absent, an empty layer is returned.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        return TomlConfig::from_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => TomlConfig::from_file(&path),
        Some(path) => {
            debug!("No config file at {}, using defaults", path.display());
            Ok(TomlConfig::default())
        }
        None => {
            debug!("Could not determine config directory, using defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Merge overrides, file values, and defaults into final settings
pub fn resolve_settings(overrides: SettingsOverrides, file: TomlConfig) -> Result<Settings> {
    let defaults = Settings::default();

    let settings = Settings {
        host: overrides.host.or(file.host).unwrap_or(defaults.host),
        port: overrides.port.or(file.port).unwrap_or(defaults.port),
        media_dir: overrides
            .media_dir
            .or(file.media_dir)
            .unwrap_or(defaults.media_dir),
        session_ttl_minutes: overrides
            .session_ttl_minutes
            .or(file.session_ttl_minutes)
            .unwrap_or(defaults.session_ttl_minutes),
        data_file: overrides.data_file.or(file.data_file),
    };

    if settings.session_ttl_minutes == 0 {
        return Err(Error::InvalidInput(
            "session_ttl_minutes must be greater than zero".to_string(),
        ));
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = resolve_settings(SettingsOverrides::default(), TomlConfig::default()).unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.bind_addr(), "0.0.0.0:5000");
        assert_eq!(settings.media_dir, PathBuf::from("static/media"));
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_override_beats_file_beats_default() {
        let file = TomlConfig {
            port: Some(8080),
            host: Some("127.0.0.1".to_string()),
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            port: Some(9000),
            ..Default::default()
        };

        let settings = resolve_settings(overrides, file).unwrap();
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.session_ttl_minutes, DEFAULT_SESSION_TTL_MINUTES);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let overrides = SettingsOverrides {
            session_ttl_minutes: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            resolve_settings(overrides, TomlConfig::default()),
            Err(Error::InvalidInput(_))
        ));
    }
}
