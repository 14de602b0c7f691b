//! TUI configuration.
//!
//! Read from `config.toml` in the Freetier home directory. Every key is
//! optional; a missing file means defaults.
//!
//! ```toml
//! [background]
//! enabled = true
//! fps = 30
//! highlight_chance = 0.05
//! reset_chance = 0.02
//! fade = 0.95
//!
//! [ui]
//! ascii_borders = false
//! two_columns_min_width = 100
//! ```

use std::path::{Path, PathBuf};

use freetier_core::RainConfig;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the home directory.
pub const FREETIER_HOME_ENV: &str = "FREETIER_HOME";

/// Config file name inside the home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Highest accepted background frame rate.
pub const MAX_FPS: u32 = 120;

/// Errors from loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not determine home directory; set {FREETIER_HOME_ENV}")]
    NoHome,
}

/// Background renderer settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    pub enabled: bool,
    pub fps: u32,
    pub highlight_chance: f64,
    pub reset_chance: f64,
    pub fade: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let rain = RainConfig::default();
        Self {
            enabled: true,
            fps: freetier_core::DEFAULT_FPS,
            highlight_chance: rain.highlight_chance,
            reset_chance: rain.reset_chance,
            fade: rain.fade,
        }
    }
}

impl BackgroundConfig {
    /// Frame rate clamped to 1..=[`MAX_FPS`].
    pub fn fps(&self) -> u32 {
        self.fps.clamp(1, MAX_FPS)
    }

    /// The rain tunables, sanitized.
    pub fn rain(&self) -> RainConfig {
        RainConfig {
            highlight_chance: self.highlight_chance,
            reset_chance: self.reset_chance,
            fade: self.fade,
        }
        .sanitized()
    }
}

/// Layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub ascii_borders: bool,
    /// Terminal width from which cards lay out in two columns
    pub two_columns_min_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            ascii_borders: false,
            two_columns_min_width: 100,
        }
    }
}

/// Complete TUI configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    pub background: BackgroundConfig,
    pub ui: UiConfig,
}

impl TuiConfig {
    /// Parse from TOML text. `path` is only used in the error.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_toml(&text, path)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load `config.toml` from the Freetier home directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&default_config_path()?)
    }
}

/// The Freetier home directory.
///
/// `FREETIER_HOME` if set and non-empty, else `~/.freetier` on Unix and
/// `%APPDATA%\freetier` on Windows.
pub fn freetier_home() -> Result<PathBuf, ConfigError> {
    if let Ok(home) = std::env::var(FREETIER_HOME_ENV)
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }

    #[cfg(windows)]
    let home = dirs::config_dir().map(|d| d.join("freetier"));
    #[cfg(not(windows))]
    let home = dirs::home_dir().map(|d| d.join(".freetier"));

    home.ok_or(ConfigError::NoHome)
}

/// Path of the default config file.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(freetier_home()?.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert!(config.background.enabled);
        assert_eq!(config.background.fps(), 30);
        assert_eq!(config.background.rain(), RainConfig::default());
        assert_eq!(config.ui.two_columns_min_width, 100);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = TuiConfig::from_toml(
            "[background]\nfps = 60\n\n[ui]\nascii_borders = true\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(config.background.fps(), 60);
        assert!(config.background.enabled);
        assert!(config.ui.ascii_borders);
        assert_eq!(config.ui.two_columns_min_width, 100);
    }

    #[test]
    fn test_fps_clamped() {
        let config = TuiConfig::from_toml("[background]\nfps = 0\n", Path::new("c")).unwrap();
        assert_eq!(config.background.fps(), 1);
        let config = TuiConfig::from_toml("[background]\nfps = 500\n", Path::new("c")).unwrap();
        assert_eq!(config.background.fps(), MAX_FPS);
    }

    #[test]
    fn test_out_of_range_chances_sanitized() {
        let config = TuiConfig::from_toml(
            "[background]\nhighlight_chance = 3.0\nreset_chance = -1.0\n",
            Path::new("c"),
        )
        .unwrap();
        let rain = config.background.rain();
        assert_eq!(rain.highlight_chance, 1.0);
        assert_eq!(rain.reset_chance, 0.0);
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = TuiConfig::from_toml("[background\n", Path::new("/tmp/bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("/tmp/bad.toml"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TuiConfig::from_toml("[ui]\ntheme = \"dark\"\n", Path::new("c")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[background]\nenabled = false\n").unwrap();
        let config = TuiConfig::load(&path).unwrap();
        assert!(!config.background.enabled);
    }

    #[test]
    #[serial]
    fn test_home_from_env() {
        let dir = tempfile::tempdir().unwrap();
        // SAFETY: serialized with the other env-touching tests
        unsafe { std::env::set_var(FREETIER_HOME_ENV, dir.path()) };
        let home = freetier_home().unwrap();
        let path = default_config_path().unwrap();
        unsafe { std::env::remove_var(FREETIER_HOME_ENV) };

        assert_eq!(home, dir.path());
        assert_eq!(path, dir.path().join(CONFIG_FILE));
    }

    #[test]
    #[serial]
    fn test_load_default_reads_home() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[ui]\ntwo_columns_min_width = 80\n").unwrap();
        unsafe { std::env::set_var(FREETIER_HOME_ENV, dir.path()) };
        let config = TuiConfig::load_default();
        unsafe { std::env::remove_var(FREETIER_HOME_ENV) };

        assert_eq!(config.unwrap().ui.two_columns_min_width, 80);
    }
}
