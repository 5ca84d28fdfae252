// Component errors
// Raised when converting configuration into tab bar appearance

/// Error type for tab bar configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// Button row cannot fit an icon and a label
    #[error("tab bar height must be at least 2 rows, got {0}")]
    BarTooShort(u16),
    /// An icon frame has a zero dimension
    #[error("{0} must have a non-zero width and height")]
    EmptyIcon(&'static str),
    /// The active highlight would not cover the inactive icon frame
    #[error("active_icon must be at least as large as inactive_icon")]
    ActiveIconSmaller,
    /// An animation duration that has to be positive is zero
    #[error("animation {0} must be greater than zero")]
    ZeroDuration(&'static str),
}
