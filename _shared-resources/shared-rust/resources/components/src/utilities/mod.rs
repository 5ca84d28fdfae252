// Utilities module
// Helper functions and animation support

pub mod helpers;
pub mod tween;

pub use helpers::*;
pub use tween::*;
