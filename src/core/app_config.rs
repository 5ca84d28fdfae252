// Application Configuration
// Loaded from config.yaml; every field has a built-in default

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tui_components::{ComponentError, TabBarConfigYaml};

use super::tab_item::UnknownTab;

/// Config file looked up when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "config.yaml";

/// Application-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window title and startup behaviour
    pub application: ApplicationConfig,

    /// Tab bar geometry, colors and animation
    pub tab_bar: TabBarConfigYaml,

    /// Log output
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Title shown above the content area
    pub title: String,

    /// Raw name of the tab selected at startup
    pub initial_tab: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            title: "Interactive Tab Bar".to_string(),
            initial_tab: "home".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; logging is disabled when unset (the terminal belongs to the UI)
    pub file: Option<PathBuf>,

    /// Filter directives, overridden by RUST_LOG
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from("interactive-tab-bar.log")),
            filter: "info".to_string(),
        }
    }
}

/// Errors raised while loading or validating configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid tab_bar configuration")]
    TabBar(#[from] ComponentError),

    #[error("invalid application.initial_tab")]
    InitialTab(#[from] UnknownTab),
}

impl AppConfig {
    /// Default config path: src/config.yaml next to the manifest
    pub fn default_path() -> PathBuf {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push(DEFAULT_CONFIG_NAME);
        default_path
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
