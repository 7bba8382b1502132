use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{ReaderError, Result};

/// File name looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "rss-reader.toml";

/// Reader settings injected into the views that need them.
///
/// Unset options are `false`, so links open in the same tab and images stay
/// hidden until the user opts in. Both the snake_case keys and the camelCase
/// keys written by the browser front-end are accepted.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    #[serde(default, alias = "openNewTab")]
    pub open_new_tab: bool,

    #[serde(default, alias = "showImages")]
    pub show_images: bool,
}

/// Where an article link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Blank,
    SameTab,
}

impl LinkTarget {
    /// The HTML `target` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
            LinkTarget::SameTab => "_self",
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Settings {
    pub fn link_target(&self) -> LinkTarget {
        if self.open_new_tab {
            LinkTarget::Blank
        } else {
            LinkTarget::SameTab
        }
    }

    /// Parse the JSON blob the browser front-end kept in local storage.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `rss-reader.toml` in current directory
/// 3. `rss-reader/settings.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings> {
    let settings_str = if let Some(path) = settings_path {
        if !Path::new(path).exists() {
            return Err(ReaderError::config(format!(
                "settings file '{}' does not exist",
                path
            )));
        }
        debug!("Reading settings from {}", path);
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_SETTINGS_FILE).exists() {
        debug!("Reading settings from ./{}", LOCAL_SETTINGS_FILE);
        fs::read_to_string(LOCAL_SETTINGS_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join("rss-reader").join("settings.toml");
        if user_path.exists() {
            debug!("Reading settings from {}", user_path.display());
            fs::read_to_string(user_path)?
        } else {
            debug!("No settings file found, using defaults");
            return Ok(Settings::default());
        }
    } else {
        return Ok(Settings::default());
    };

    Settings::from_toml(&settings_str)
}
