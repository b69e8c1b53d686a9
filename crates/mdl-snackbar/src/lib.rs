//! MDL Snackbar
//!
//! Transient notifications with an optional action:
//! - at most one notification on screen at a time
//! - later requests wait in a FIFO queue
//! - each displayed notification is dismissed by its own timer
//! - a dismissal promotes the head of the queue with no gap

mod error;
mod notification;
mod snackbar;
mod state;

pub use error::{SnackbarError, ValidationError};
pub use notification::{ActionHandler, Notification};
pub use snackbar::{Snackbar, DEFAULT_TIMEOUT};
pub use state::SnackbarPhase;

pub type Result<T> = std::result::Result<T, SnackbarError>;
