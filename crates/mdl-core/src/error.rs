//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Surface error: {0}")]
    Surface(#[from] mdl_surface::SurfaceError),

    #[error("Toggle error: {0}")]
    Toggle(#[from] mdl_toggle::ToggleError),

    #[error("Snackbar error: {0}")]
    Snackbar(#[from] mdl_snackbar::SnackbarError),

    #[error("Tabs error: {0}")]
    Tabs(#[from] mdl_tabs::TabsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No snackbar on the page")]
    NoSnackbar,
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
