//! MDL Toggle Components
//!
//! Checkbox, icon toggle and radio. Each binds one input and its container
//! and mirrors the input's `checked`/`disabled` flags and focus onto
//! container classes. Radios sharing a name coordinate through an explicit
//! [`RadioGroups`] registry.

mod checkbox;
mod control;
mod error;
mod icon_toggle;
mod kind;
mod radio;

pub use checkbox::Checkbox;
pub use control::{Toggle, ToggleControl};
pub use error::ToggleError;
pub use icon_toggle::IconToggle;
pub use kind::ToggleKind;
pub use radio::{Radio, RadioGroups};

pub type Result<T> = std::result::Result<T, ToggleError>;
