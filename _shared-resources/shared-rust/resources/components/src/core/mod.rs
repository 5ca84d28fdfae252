// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod binding;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod layout_registry;

pub use binding::{ActiveTab, ChangeSource, TabChange};
pub use catalog::TabCatalog;
pub use error::ComponentError;
pub use geometry::{CoordinateSpace, LocalPoint, TabBounds};
pub use layout_registry::TabButtonLayout;
