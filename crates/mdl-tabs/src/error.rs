//! Tab group error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabsError {
    #[error("Surface error: {0}")]
    Surface(#[from] mdl_surface::SurfaceError),

    #[error("Tab has no href fragment: {0}")]
    MissingHref(usize),

    #[error("Tab not found: {0}")]
    NotFound(String),
}
