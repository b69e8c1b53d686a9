//! Tab group component
//!
//! Expected markup:
//! ```text
//! .mdl-tabs
//!   a.mdl-tabs__tab[href="#first"]
//!   a.mdl-tabs__tab[href="#second"]
//!   #first.mdl-tabs__panel
//!   #second.mdl-tabs__panel
//! ```

use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use mdl_surface::{EventKind, SurfaceError, SurfaceRef};

use crate::error::TabsError;
use crate::Result;

const TAB_CLASS: &str = "mdl-tabs__tab";
const PANEL_CLASS: &str = "mdl-tabs__panel";
const ACTIVE_CLASS: &str = "mdl-tabs--active";
const UPGRADED_CLASS: &str = "mdl-tabs--upgraded";

struct TabPair {
    tab: SurfaceRef,
    panel: SurfaceRef,
    /// Fragment naming the panel
    panel_id: String,
}

struct TabGroupInner {
    element: SurfaceRef,
    pairs: Vec<TabPair>,
    /// Every panel under the group, linked or not
    panels: Vec<SurfaceRef>,
    active: RwLock<Option<usize>>,
}

pub struct TabGroup {
    inner: Arc<TabGroupInner>,
}

/// Fragment of an href: `page.html#panel` and `#panel` both give `panel`
fn fragment(href: &str) -> Option<&str> {
    href.split('#').nth(1).filter(|f| !f.is_empty())
}

impl TabGroup {
    /// Upgrade a `.mdl-tabs` container.
    ///
    /// Every tab must resolve to a panel before any listener is attached.
    pub fn new(element: SurfaceRef) -> Result<Self> {
        let tabs = element.query_class_all(TAB_CLASS);
        let panels = element.query_class_all(PANEL_CLASS);

        let mut pairs = Vec::with_capacity(tabs.len());
        for (index, tab) in tabs.into_iter().enumerate() {
            let href = tab.attribute("href").unwrap_or_default();
            let panel_id = fragment(&href)
                .ok_or(TabsError::MissingHref(index))?
                .to_string();
            let panel = element
                .query_id(&panel_id)
                .ok_or_else(|| SurfaceError::missing(format!("#{}", panel_id)))?;

            pairs.push(TabPair {
                tab,
                panel,
                panel_id,
            });
        }

        let active = pairs.iter().position(|pair| pair.tab.has_class(ACTIVE_CLASS));

        let group = Self {
            inner: Arc::new(TabGroupInner {
                element,
                pairs,
                panels,
                active: RwLock::new(active),
            }),
        };

        for (index, pair) in group.inner.pairs.iter().enumerate() {
            let weak = Arc::downgrade(&group.inner);
            pair.tab.listen(
                EventKind::Click,
                Arc::new(move |_: EventKind| {
                    if let Some(group) = Self::from_weak(&weak) {
                        group.select(index);
                    }
                }),
            );
        }

        group.inner.element.add_class(UPGRADED_CLASS);

        tracing::info!(tabs = group.inner.pairs.len(), "Upgraded tab group");

        Ok(group)
    }

    /// Activate the tab at `index` and its panel
    pub fn activate(&self, index: usize) -> Result<()> {
        if index >= self.inner.pairs.len() {
            return Err(TabsError::NotFound(index.to_string()));
        }
        self.select(index);
        Ok(())
    }

    /// Activate the tab linking to `panel_id`
    pub fn activate_panel(&self, panel_id: &str) -> Result<()> {
        let index = self
            .inner
            .pairs
            .iter()
            .position(|pair| pair.panel_id == panel_id)
            .ok_or_else(|| TabsError::NotFound(panel_id.to_string()))?;
        self.select(index);
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        *self.inner.active.read()
    }

    pub fn active_panel_id(&self) -> Option<String> {
        self.active_index()
            .map(|index| self.inner.pairs[index].panel_id.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.pairs.is_empty()
    }

    pub fn panel_ids(&self) -> Vec<String> {
        self.inner
            .pairs
            .iter()
            .map(|pair| pair.panel_id.clone())
            .collect()
    }

    fn from_weak(weak: &Weak<TabGroupInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn reset_tab_state(&self) {
        for pair in &self.inner.pairs {
            pair.tab.remove_class(ACTIVE_CLASS);
        }
    }

    fn reset_panel_state(&self) {
        for panel in &self.inner.panels {
            panel.remove_class(ACTIVE_CLASS);
        }
    }

    fn select(&self, index: usize) {
        let pair = &self.inner.pairs[index];

        self.reset_tab_state();
        self.reset_panel_state();
        pair.tab.add_class(ACTIVE_CLASS);
        pair.panel.add_class(ACTIVE_CLASS);
        *self.inner.active.write() = Some(index);

        tracing::debug!(index, panel = %pair.panel_id, "Activated tab");
    }
}

impl Clone for TabGroup {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for TabGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabGroup")
            .field("panels", &self.panel_ids())
            .field("active", &self.active_index())
            .finish()
    }
}
