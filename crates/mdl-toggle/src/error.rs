//! Toggle error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("Surface error: {0}")]
    Surface(#[from] mdl_surface::SurfaceError),

    #[error("Radio input has no group name")]
    MissingGroupName,
}
