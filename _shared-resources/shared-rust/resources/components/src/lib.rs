// Shared TUI components library
// Interactive tab bar widget and supporting types for ratatui applications

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// `tab_bar` names a module in both elements and managers
#[allow(ambiguous_glob_reexports)]
pub use self::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
