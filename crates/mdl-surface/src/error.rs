//! Surface error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Missing element: {selector}")]
    MissingElement { selector: String },
}

impl SurfaceError {
    pub fn missing(selector: impl Into<String>) -> Self {
        SurfaceError::MissingElement {
            selector: selector.into(),
        }
    }
}
