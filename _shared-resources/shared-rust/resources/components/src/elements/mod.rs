// GUI Elements module
// Visual components that render UI elements

pub mod tab_bar;
pub mod tab_bar_view;

pub use tab_bar::*;
pub use tab_bar_view::*;
