//! MDL Components
//!
//! Page-level entry point for the component set: configuration, logging
//! and the component handler that upgrades marked-up elements.

mod config;
mod error;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use page::{ComponentKind, Page, UpgradeSummary};

// Re-export the components
pub use mdl_snackbar::{
    ActionHandler, Notification, Snackbar, SnackbarError, SnackbarPhase, ValidationError,
    DEFAULT_TIMEOUT,
};
pub use mdl_surface::{
    Element, EventKind, ManualScheduler, Scheduler, SchedulerRef, Surface, SurfaceError,
    SurfaceRef, TokioScheduler,
};
pub use mdl_tabs::{TabGroup, TabsError};
pub use mdl_toggle::{
    Checkbox, IconToggle, Radio, RadioGroups, Toggle, ToggleControl, ToggleError, ToggleKind,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging.
///
/// `RUST_LOG` wins over `default_filter`. Later calls are no-ops.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
