//! Component handler
//!
//! Scans a markup tree for `mdl-js-*` markers and upgrades each marked
//! element into its component. The page owns the strong component handles;
//! listeners and timers only hold weak references back into them.

use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use mdl_snackbar::{Notification, Snackbar};
use mdl_surface::{SchedulerRef, Surface, SurfaceRef};
use mdl_tabs::TabGroup;
use mdl_toggle::{Checkbox, IconToggle, Radio, RadioGroups};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

const UPGRADED_ATTR: &str = "data-upgraded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Checkbox,
    IconToggle,
    Radio,
    Snackbar,
    Tabs,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Checkbox,
        ComponentKind::IconToggle,
        ComponentKind::Radio,
        ComponentKind::Snackbar,
        ComponentKind::Tabs,
    ];

    /// Marker class requesting the upgrade
    pub fn js_class(&self) -> &'static str {
        match self {
            ComponentKind::Checkbox => "mdl-js-checkbox",
            ComponentKind::IconToggle => "mdl-js-icon-toggle",
            ComponentKind::Radio => "mdl-js-radio",
            ComponentKind::Snackbar => "mdl-js-snackbar",
            ComponentKind::Tabs => "mdl-js-tabs",
        }
    }

    /// Name recorded in `data-upgraded`
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Checkbox => "MaterialCheckbox",
            ComponentKind::IconToggle => "MaterialIconToggle",
            ComponentKind::Radio => "MaterialRadio",
            ComponentKind::Snackbar => "MaterialSnackbar",
            ComponentKind::Tabs => "MaterialTabs",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Components upgraded by one pass
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeSummary {
    pub checkboxes: usize,
    pub icon_toggles: usize,
    pub radios: usize,
    pub snackbars: usize,
    pub tab_groups: usize,
}

impl UpgradeSummary {
    pub fn total(&self) -> usize {
        self.checkboxes + self.icon_toggles + self.radios + self.snackbars + self.tab_groups
    }

    fn record(&mut self, kind: ComponentKind) {
        match kind {
            ComponentKind::Checkbox => self.checkboxes += 1,
            ComponentKind::IconToggle => self.icon_toggles += 1,
            ComponentKind::Radio => self.radios += 1,
            ComponentKind::Snackbar => self.snackbars += 1,
            ComponentKind::Tabs => self.tab_groups += 1,
        }
    }
}

#[derive(Default)]
struct Components {
    checkboxes: Vec<Checkbox>,
    icon_toggles: Vec<IconToggle>,
    radios: Vec<Radio>,
    snackbars: Vec<Snackbar>,
    tab_groups: Vec<TabGroup>,
}

/// Owner of every component upgraded on a page
pub struct Page {
    config: Config,
    scheduler: SchedulerRef,
    /// Shared by every radio on the page
    radio_groups: RadioGroups,
    components: Arc<RwLock<Components>>,
}

fn upgraded_names(element: &dyn Surface) -> Vec<String> {
    element
        .attribute(UPGRADED_ATTR)
        .map(|value| {
            value
                .split(',')
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn is_upgraded(element: &dyn Surface, kind: ComponentKind) -> bool {
    upgraded_names(element).iter().any(|name| name == kind.name())
}

fn mark_upgraded(element: &dyn Surface, kind: ComponentKind) {
    let mut names = upgraded_names(element);
    names.push(kind.name().to_string());
    element.set_attribute(UPGRADED_ATTR, &names.join(","));
}

impl Page {
    pub fn new(config: Config, scheduler: SchedulerRef) -> Self {
        Self {
            config,
            scheduler,
            radio_groups: RadioGroups::new(),
            components: Arc::new(RwLock::new(Components::default())),
        }
    }

    /// Upgrade `root` and every marked descendant not upgraded yet.
    ///
    /// Stops at the first failing element; components upgraded before it
    /// are kept.
    pub fn upgrade(&self, root: &SurfaceRef) -> Result<UpgradeSummary> {
        let mut summary = UpgradeSummary::default();

        for kind in ComponentKind::ALL {
            let mut candidates = Vec::new();
            if root.has_class(kind.js_class()) {
                candidates.push(Arc::clone(root));
            }
            candidates.extend(root.query_class_all(kind.js_class()));

            for element in candidates {
                if is_upgraded(&*element, kind) {
                    continue;
                }
                self.upgrade_element(kind, Arc::clone(&element))?;
                mark_upgraded(&*element, kind);
                summary.record(kind);
            }
        }

        tracing::info!(
            checkboxes = summary.checkboxes,
            icon_toggles = summary.icon_toggles,
            radios = summary.radios,
            snackbars = summary.snackbars,
            tab_groups = summary.tab_groups,
            "Upgraded page"
        );

        Ok(summary)
    }

    /// Upgrade a single element as `kind`, regardless of its marker class
    pub fn upgrade_element(&self, kind: ComponentKind, element: SurfaceRef) -> Result<()> {
        let mut components = self.components.write();

        match kind {
            ComponentKind::Checkbox => components.checkboxes.push(Checkbox::new(element)?),
            ComponentKind::IconToggle => components.icon_toggles.push(IconToggle::new(element)?),
            ComponentKind::Radio => components
                .radios
                .push(Radio::new(element, &self.radio_groups)?),
            ComponentKind::Snackbar => components.snackbars.push(Snackbar::with_default_timeout(
                element,
                Arc::clone(&self.scheduler),
                self.config.snackbar_timeout(),
            )?),
            ComponentKind::Tabs => components.tab_groups.push(TabGroup::new(element)?),
        }

        tracing::debug!(component = %kind, "Upgraded element");

        Ok(())
    }

    /// Show `notification` on the first snackbar of the page
    pub fn notify(&self, notification: Notification) -> Result<()> {
        let snackbar = self.snackbar().ok_or(CoreError::NoSnackbar)?;
        snackbar.show(notification)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scheduler(&self) -> &SchedulerRef {
        &self.scheduler
    }

    pub fn radio_groups(&self) -> &RadioGroups {
        &self.radio_groups
    }

    pub fn snackbar(&self) -> Option<Snackbar> {
        self.components.read().snackbars.first().cloned()
    }

    pub fn checkboxes(&self) -> Vec<Checkbox> {
        self.components.read().checkboxes.clone()
    }

    pub fn icon_toggles(&self) -> Vec<IconToggle> {
        self.components.read().icon_toggles.clone()
    }

    pub fn radios(&self) -> Vec<Radio> {
        self.components.read().radios.clone()
    }

    pub fn snackbars(&self) -> Vec<Snackbar> {
        self.components.read().snackbars.clone()
    }

    pub fn tab_groups(&self) -> Vec<TabGroup> {
        self.components.read().tab_groups.clone()
    }
}

impl Clone for Page {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            scheduler: Arc::clone(&self.scheduler),
            radio_groups: self.radio_groups.clone(),
            components: Arc::clone(&self.components),
        }
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.components.read();
        f.debug_struct("Page")
            .field("config", &self.config)
            .field("checkboxes", &components.checkboxes.len())
            .field("icon_toggles", &components.icon_toggles.len())
            .field("radios", &components.radios.len())
            .field("snackbars", &components.snackbars.len())
            .field("tab_groups", &components.tab_groups.len())
            .finish()
    }
}
