//! # Chrome Configuration
//!
//! Host-level switches for the chrome theming stack, loadable from TOML
//! files and environment variables.
//!
//! ## Environment Variables
//!
//! - `GLAZE_NO_BACKDROP`: disable window backdrops for the process
//! - `GLAZE_FORCE_LIGHT`: force light (`1`) or dark (`0`) chrome,
//!   overriding the OS preference
//!
//! ## Configuration File Format
//!
//! ```toml
//! [chrome]
//! disable_window_backdrop = true
//! force_light_mode = false
//! ```
//!
//! Multiple sources merge in precedence order, later sources overriding
//! earlier ones; the backdrop opt-out is sticky once any source sets it.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ChromeError, ChromeResult};

/// Host-level chrome switches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChromeConfig {
    /// Opt out of window backdrops for the whole process.
    ///
    /// Consulted once when the backdrop manager is constructed.
    #[serde(default)]
    pub disable_window_backdrop: bool,
    /// Force the chrome into light (`true`) or dark (`false`) mode,
    /// overriding the OS personalization preference. `None` follows the OS.
    #[serde(default)]
    pub force_light_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    chrome: ChromeConfig,
}

impl ChromeConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables or use defaults.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();
        if let Ok(value) = env::var("GLAZE_NO_BACKDROP") {
            config.disable_window_backdrop = parse_flag(&value);
        }
        if let Ok(value) = env::var("GLAZE_FORCE_LIGHT") {
            config.force_light_mode = Some(parse_flag(&value));
        }
        config
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ChromeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ChromeError::file_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|err| ChromeError::parse_error(path, err.to_string()))
    }

    /// Load configuration from TOML content.
    pub fn from_toml(content: &str) -> ChromeResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|err| ChromeError::parse(err.to_string()))?;
        Ok(file.chrome)
    }

    /// Merge a later-loaded config into this one.
    fn merge(&mut self, other: ChromeConfig) {
        if other.disable_window_backdrop {
            self.disable_window_backdrop = true;
        }
        if other.force_light_mode.is_some() {
            self.force_light_mode = other.force_light_mode;
        }
    }

    /// Load configuration from multiple paths in precedence order.
    ///
    /// Unreadable or unparsable files are skipped with a warning so one
    /// broken layer cannot take chrome configuration down with it.
    pub fn load_layered<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut config = Self::new();
        for path in paths {
            match Self::from_file(path) {
                Ok(layer) => config.merge(layer),
                Err(ChromeError::ConfigFileNotFound { .. }) => {}
                Err(err) => {
                    log::warn!("skipping chrome config {:?}: {}", path.as_ref(), err);
                }
            }
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
