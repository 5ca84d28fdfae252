// Configuration validation module

use std::path::PathBuf;

use tui_components::{convert_tab_bar_config, TabBarAppearance};

use crate::core::{AppConfig, ConfigError, TabItem};

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// The file did not exist; built-in defaults were used
    Defaults(PathBuf),
}

/// Configuration that passed validation, with its derived values
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: AppConfig,
    pub appearance: TabBarAppearance,
    pub initial_tab: TabItem,
    pub source: ConfigSource,
}

/// Load and validate configuration
/// An explicit path must exist; without one the bundled file is used, falling back to
/// built-in defaults when it is missing
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<ValidatedConfig, ConfigError> {
    match config_path {
        Some(path) => {
            let config = AppConfig::load(&path)?;
            validate_config(config, ConfigSource::File(path))
        }
        None => load_or_default(AppConfig::default_path()),
    }
}

/// Load `path` if it exists, otherwise use defaults
fn load_or_default(path: PathBuf) -> Result<ValidatedConfig, ConfigError> {
    let (config, source) = if path.exists() {
        (AppConfig::load(&path)?, ConfigSource::File(path))
    } else {
        (AppConfig::default(), ConfigSource::Defaults(path))
    };

    validate_config(config, source)
}

/// Validate an already parsed configuration
pub fn validate_config(config: AppConfig, source: ConfigSource) -> Result<ValidatedConfig, ConfigError> {
    let appearance = convert_tab_bar_config(&config.tab_bar)?;
    let initial_tab: TabItem = config.application.initial_tab.parse()?;
    Ok(ValidatedConfig {
        config,
        appearance,
        initial_tab,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_components::ComponentError;

    fn parse(yaml: &str) -> AppConfig {
        serde_yaml::from_str(yaml).expect("valid yaml")
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let path = std::env::temp_dir().join("interactive-tab-bar-no-such-config.yaml");
        let validated = load_or_default(path.clone()).expect("defaults are valid");
        assert_eq!(validated.source, ConfigSource::Defaults(path));
        assert_eq!(validated.initial_tab, TabItem::Home);
        assert_eq!(validated.appearance, TabBarAppearance::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("interactive-tab-bar-no-such-config.yaml");
        let result = load_and_validate_config(Some(path));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_no_path_loads_bundled_config() {
        let validated = load_and_validate_config(None).expect("bundled config is valid");
        assert_eq!(validated.source, ConfigSource::File(AppConfig::default_path()));
        assert_eq!(validated.appearance, TabBarAppearance::default());
    }

    #[test]
    fn test_initial_tab_is_parsed() {
        let config = parse("application:\n  initial_tab: notification\n");
        let validated = validate_config(config, ConfigSource::Defaults(PathBuf::new())).expect("valid");
        assert_eq!(validated.initial_tab, TabItem::Notification);
    }

    #[test]
    fn test_unknown_initial_tab_is_rejected() {
        let config = parse("application:\n  initial_tab: profile\n");
        let result = validate_config(config, ConfigSource::Defaults(PathBuf::new()));
        assert!(matches!(result, Err(ConfigError::InitialTab(_))));
    }

    #[test]
    fn test_invalid_tab_bar_is_rejected() {
        let config = parse("tab_bar:\n  active_icon: { width: 1, height: 1 }\n");
        let result = validate_config(config, ConfigSource::Defaults(PathBuf::new()));
        assert!(matches!(
            result,
            Err(ConfigError::TabBar(ComponentError::ActiveIconSmaller))
        ));
    }
}
