// Utilities module
// Helper functions and tools

pub mod logging;

pub use logging::{build_filter, init_logging};
