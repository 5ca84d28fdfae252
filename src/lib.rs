// Interactive Tab Bar Library
// A terminal tab bar that switches tabs by tapping or dragging across buttons

// Core infrastructure - app state, events, configuration
pub mod core;

// Configuration loading and validation
pub mod config_validation;

// UI - views and the event loop
pub mod ui;

// Utilities - logging setup
pub mod utilities;

// Re-export commonly used items for convenience
pub use self::core::{App, AppConfig, AppEvent, TabItem};
pub use config_validation::{load_and_validate_config, ConfigSource, ValidatedConfig};
