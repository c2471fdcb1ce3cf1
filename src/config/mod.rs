use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::*;
use crate::ui::Tab;

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/traffic-advisor/config.toml
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay before a bot reply shows up, in milliseconds
    pub reply_delay_ms: u64,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// Tab shown at startup
    pub start_tab: Tab,
    /// Open the floating chat widget at startup
    pub floating_open: bool,
    /// Floating chat widget geometry
    pub floating: FloatingConfig,
}

/// Size of the floating chat popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FLOATING_WIDTH,
            height: DEFAULT_FLOATING_HEIGHT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            theme: "default".to_string(),
            start_tab: Tab::Environment,
            floating_open: false,
            floating: FloatingConfig::default(),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields keep their defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    reply_delay_ms: Option<u64>,
    theme: Option<String>,
    start_tab: Option<String>,
    floating_open: Option<bool>,
    floating: Option<FileFloatingConfig>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileFloatingConfig {
    width: Option<u16>,
    height: Option<u16>,
}

impl Config {
    /// Load config from ~/.config/traffic-advisor/config.toml, falling back
    /// to defaults for any missing fields. A missing file is not an error.
    pub fn load() -> Self {
        let path = config_file_path();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Config::default()
            }
        }
    }

    /// Read and merge a specific config file over the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_config: FileConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::default().merge(file_config))
    }

    /// Merge file values over `self`, clamping anything out of range.
    fn merge(mut self, file_config: FileConfig) -> Self {
        if let Some(v) = file_config.reply_delay_ms {
            self.reply_delay_ms = v.min(MAX_REPLY_DELAY_MS);
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                self.theme = v;
            }
        }
        if let Some(v) = file_config.start_tab {
            match Tab::from_tag(&v) {
                Some(tab) => self.start_tab = tab,
                None => warn!(tab = %v, "unknown start_tab in config, ignoring"),
            }
        }
        if let Some(v) = file_config.floating_open {
            self.floating_open = v;
        }
        if let Some(f) = file_config.floating {
            if let Some(v) = f.width {
                self.floating.width = v.max(MIN_FLOATING_WIDTH);
            }
            if let Some(v) = f.height {
                self.floating.height = v.max(MIN_FLOATING_HEIGHT);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.reply_delay_ms, 600);
        assert_eq!(c.theme, "default");
        assert_eq!(c.start_tab, Tab::Environment);
        assert!(!c.floating_open);
        assert_eq!(c.floating, FloatingConfig::default());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let f = write_config("");
        let c = Config::load_from(f.path()).unwrap();
        assert_eq!(c.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
        assert_eq!(c.start_tab, Tab::Environment);
    }

    #[test]
    fn full_file_overrides() {
        let f = write_config(
            r#"
reply_delay_ms = 250
theme = "nord"
start_tab = "laws"
floating_open = true

[floating]
width = 50
height = 22
"#,
        );
        let c = Config::load_from(f.path()).unwrap();
        assert_eq!(c.reply_delay_ms, 250);
        assert_eq!(c.theme, "nord");
        assert_eq!(c.start_tab, Tab::Laws);
        assert!(c.floating_open);
        assert_eq!(c.floating, FloatingConfig { width: 50, height: 22 });
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let f = write_config(
            r#"
reply_delay_ms = 999999
[floating]
width = 3
height = 1
"#,
        );
        let c = Config::load_from(f.path()).unwrap();
        assert_eq!(c.reply_delay_ms, MAX_REPLY_DELAY_MS);
        assert_eq!(c.floating.width, MIN_FLOATING_WIDTH);
        assert_eq!(c.floating.height, MIN_FLOATING_HEIGHT);
    }

    #[test]
    fn unknown_tab_and_empty_theme_ignored() {
        let f = write_config("start_tab = \"radio\"\ntheme = \"\"\n");
        let c = Config::load_from(f.path()).unwrap();
        assert_eq!(c.start_tab, Tab::Environment);
        assert_eq!(c.theme, "default");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let f = write_config("reply_delay_ms = \"soon\"");
        let err = Config::load_from(f.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("could not parse"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
