//! Radio component and group registry
//!
//! Radios sharing a `name` form a group. The registry is owned by whoever
//! builds the page and handed to each radio, instead of being discovered
//! through a document-wide query. When any member changes, the others are
//! unchecked and the whole group resyncs, so at most one member shows the
//! checked class.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

use mdl_surface::{EventKind, SurfaceRef};

use crate::control::{Toggle, ToggleControl, ToggleInner};
use crate::kind::ToggleKind;
use crate::Result;

/// Group name -> member radios
pub struct RadioGroups {
    groups: Arc<RwLock<HashMap<String, Vec<Weak<ToggleInner>>>>>,
}

impl RadioGroups {
    pub fn new() -> Self {
        Self {
            groups: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub(crate) fn register(&self, name: &str, control: &ToggleControl) {
        self.groups
            .write()
            .entry(name.to_string())
            .or_default()
            .push(control.downgrade());
    }

    /// Live members of a group in registration order
    pub fn members(&self, name: &str) -> Vec<ToggleControl> {
        let mut groups = self.groups.write();
        let Some(members) = groups.get_mut(name) else {
            return Vec::new();
        };

        members.retain(|weak| weak.strong_count() > 0);
        members
            .iter()
            .filter_map(ToggleControl::upgrade_weak)
            .collect()
    }

    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Resync every member of `name` after `changed` moved.
    ///
    /// A checked `changed` unchecks every other member first.
    pub fn sync(&self, name: &str, changed: &ToggleControl) {
        let members = self.members(name);

        if changed.is_checked() {
            for member in members.iter().filter(|m| !m.same_as(changed)) {
                member.input().set_checked(false);
            }
        }

        for member in &members {
            member.update_classes();
        }

        tracing::debug!(group = %name, members = members.len(), "Synced radio group");
    }
}

impl Default for RadioGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RadioGroups {
    fn clone(&self) -> Self {
        Self {
            groups: Arc::clone(&self.groups),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Radio {
    control: ToggleControl,
}

impl Radio {
    /// Upgrade a `.mdl-radio` container and join the group named by its button
    pub fn new(element: SurfaceRef, groups: &RadioGroups) -> Result<Self> {
        let control = ToggleControl::joined(ToggleKind::Radio, element, groups)?;

        control
            .input()
            .listen(EventKind::Change, control.listener(ToggleControl::on_change));
        control.wire_focus();
        control.mark_upgraded();

        Ok(Self { control })
    }

    pub fn name(&self) -> &str {
        self.control.group_name().unwrap_or_default()
    }
}

impl Toggle for Radio {
    fn control(&self) -> &ToggleControl {
        &self.control
    }
}
