//! Session settings.
//!
//! Settings live in `settings.toml` under the platform config directory:
//! - macOS: ~/Library/Application Support/com.Stockroom.Stockroom/
//! - Windows: %APPDATA%/Stockroom/Stockroom/config/
//! - Linux: ~/.config/stockroom/
//!
//! The API base URL can be overridden with `STOCKROOM_API_URL`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding [`SessionSettings::api_url`].
pub const API_URL_ENV: &str = "STOCKROOM_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const CONFIG_FILENAME: &str = "settings.toml";

/// Connection settings for the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Base URL the `/auth/*` paths are appended to.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Cookie header sent with every request, standing in for browser
    /// credentials.
    pub cookie: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cookie: None,
        }
    }
}

impl SessionSettings {
    /// Settings from the default config file plus the environment.
    ///
    /// A missing or unreadable file falls back to defaults.
    pub fn load() -> Self {
        let mut settings = match Self::config_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "using default session settings");
                Self::default()
            }),
            None => {
                warn!("could not determine config directory, using defaults");
                Self::default()
            }
        };
        settings.apply_env();
        settings
    }

    /// Read settings from a TOML file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings = toml::from_str(&content)?;
                info!(path = %path.display(), "loaded session settings");
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Default config file path, if the platform has a config directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Stockroom", "Stockroom")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Apply `STOCKROOM_API_URL` if set and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            self.override_api_url(&url);
        }
    }

    /// Replace the base URL unless `url` is blank.
    pub fn override_api_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.api_url = url.to_string();
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of an endpoint below the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("stockroom-session-{}-{name}", std::process::id()))
            .join(CONFIG_FILENAME)
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let mut settings = SessionSettings::default();
        assert_eq!(settings.endpoint("/auth/me"), "http://localhost:5000/api/auth/me");
        settings.api_url = "https://example.com/api/".to_string();
        assert_eq!(settings.endpoint("auth/logout"), "https://example.com/api/auth/logout");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut settings = SessionSettings::default();
        settings.override_api_url("   ");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        settings.override_api_url(" http://10.0.0.2/api ");
        assert_eq!(settings.api_url, "http://10.0.0.2/api");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = temp_settings_path("missing");
        assert_eq!(SessionSettings::load_from(&path).unwrap(), SessionSettings::default());
    }

    #[test]
    fn test_settings_file_is_read() {
        let path = temp_settings_path("read");
        let settings = SessionSettings {
            api_url: "https://inventory.example/api".to_string(),
            timeout_secs: 3,
            cookie: Some("sid=abc".to_string()),
        };
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "api_url = \"https://inventory.example/api\"\ntimeout_secs = 3\ncookie = \"sid=abc\"\n",
        )
        .unwrap();
        assert_eq!(SessionSettings::load_from(&path).unwrap(), settings);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: SessionSettings = toml::from_str("timeout_secs = 2").unwrap();
        assert_eq!(parsed.api_url, DEFAULT_API_URL);
        assert_eq!(parsed.timeout(), Duration::from_secs(2));
        assert!(parsed.cookie.is_none());
    }
}
