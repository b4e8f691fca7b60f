use crate::{
    error::{Error, Result},
    impl_case_insensitive_deserialize,
    label::LabelOptions,
    shortener::ShortenConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::validation::{ConfigValidator, MainConfigValidator};

pub const CONFIG_FILE_NAMES: [&str; 2] = [".shortpath.json", "shortpath.json"];
pub const DEFAULT_ELLIPSIS: &str = "\u{2026}";

/// Path conventions of a target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Posix,
    Windows,
}

impl_case_insensitive_deserialize!(
    Platform,
    Posix => "posix",
    Windows => "windows"
);

impl Platform {
    /// The platform this binary was compiled for
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn separator(self) -> char {
        match self {
            Platform::Posix => '/',
            Platform::Windows => '\\',
        }
    }

    pub fn drive_letters(self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::host()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub platform: Platform,

    // Explicit overrides of the platform conventions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_letters: Option<bool>,

    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
    #[serde(default = "default_bare_leaf")]
    pub bare_leaf: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_home: Option<String>,
}

fn default_ellipsis() -> String {
    DEFAULT_ELLIPSIS.to_string()
}

fn default_bare_leaf() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::for_platform(Platform::host())
    }
}

impl Config {
    pub fn for_host() -> Self {
        Self::default()
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            separator: None,
            drive_letters: None,
            ellipsis: default_ellipsis(),
            bare_leaf: default_bare_leaf(),
            user_home: None,
        }
    }

    pub fn separator(&self) -> char {
        self.separator.unwrap_or_else(|| self.platform.separator())
    }

    pub fn drive_letters(&self) -> bool {
        self.drive_letters
            .unwrap_or_else(|| self.platform.drive_letters())
    }

    pub fn shorten_config(&self) -> ShortenConfig {
        ShortenConfig {
            separator: self.separator(),
            ellipsis: self.ellipsis.clone(),
            bare_leaf: self.bare_leaf,
        }
    }

    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            separator: self.separator(),
            drive_letters: self.drive_letters(),
            user_home: self.user_home.clone(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        MainConfigValidator::new().validate(&config)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        MainConfigValidator::new().validate(self)?;
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a shortpath config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }
}
