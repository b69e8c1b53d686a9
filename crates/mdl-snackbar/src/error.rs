//! Snackbar error types

use thiserror::Error;

/// A notification request that can never be displayed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing message")]
    MissingMessage,

    #[error("Missing action text")]
    MissingActionText,
}

#[derive(Error, Debug)]
pub enum SnackbarError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Surface error: {0}")]
    Surface(#[from] mdl_surface::SurfaceError),

    #[error("Invalid notification JSON: {0}")]
    Json(#[from] serde_json::Error),
}
