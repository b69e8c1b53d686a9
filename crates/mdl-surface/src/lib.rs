//! MDL Surface
//!
//! The narrow capability every component is written against:
//! - a displayable surface (class list, attributes, text, input flags)
//! - child lookup by class name or id
//! - event listeners
//! - one-shot deferred callbacks through a [`Scheduler`]
//!
//! [`Element`] is the in-memory implementation used by headless hosts and tests.

mod element;
mod error;
mod scheduler;
mod surface;

pub use element::Element;
pub use error::SurfaceError;
pub use scheduler::{ManualScheduler, Scheduler, SchedulerRef, Task, TimerId, TokioScheduler};
pub use surface::{require_class, EventKind, Listener, Surface, SurfaceRef};

pub type Result<T> = std::result::Result<T, SurfaceError>;
