//! MDL Tabs
//!
//! Switches between a fixed set of tab/panel pairs. Each tab links to its
//! panel through the fragment of its `href`.

mod error;
mod tabs;

pub use error::TabsError;
pub use tabs::TabGroup;

pub type Result<T> = std::result::Result<T, TabsError>;
