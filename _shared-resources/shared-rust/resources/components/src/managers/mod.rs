// Managers module
// Provides OOP-style manager wrappers for TUI components

pub mod tab_bar;

pub use tab_bar::TabBarManager;

// Re-export YAML configuration types from tab_bar module
pub use tab_bar::{
    AnimationConfigYaml,
    IconSizeYaml,
    TabBarColorsYaml,
    TabBarConfigYaml,
    convert_tab_bar_config,
};
