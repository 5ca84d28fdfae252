// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod events;
pub mod tab_item;

pub use app::{App, ANIMATION_FRAME, IDLE_POLL};
pub use app_config::{AppConfig, ApplicationConfig, ConfigError, LoggingConfig};
pub use events::{AppEvent, EventHandler};
pub use tab_item::{TabItem, UnknownTab};
