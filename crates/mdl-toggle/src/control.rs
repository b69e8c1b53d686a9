//! Shared toggle core
//!
//! Display classes are always recomputed from the input's current flags,
//! never tracked separately, so every operation is idempotent.

use std::sync::{Arc, Weak};

use mdl_surface::{require_class, EventKind, Listener, SurfaceRef};

use crate::error::ToggleError;
use crate::kind::ToggleKind;
use crate::radio::RadioGroups;
use crate::Result;

/// Radio group a control belongs to
struct GroupLink {
    name: String,
    groups: RadioGroups,
}

pub(crate) struct ToggleInner {
    kind: ToggleKind,
    /// Container that carries the display classes
    element: SurfaceRef,
    /// Underlying input whose flags are mirrored
    input: SurfaceRef,
    group: Option<GroupLink>,
}

pub struct ToggleControl {
    inner: Arc<ToggleInner>,
}

impl ToggleControl {
    /// Bind to `element`, locating its input child. No listeners are attached yet.
    pub fn new(kind: ToggleKind, element: SurfaceRef) -> Result<Self> {
        let input = require_class(&*element, kind.input_class())?;

        Ok(Self {
            inner: Arc::new(ToggleInner {
                kind,
                element,
                input,
                group: None,
            }),
        })
    }

    /// Bind to `element` and join the group named by the input's `name`.
    ///
    /// Every later check or change of this control resyncs the whole group.
    pub(crate) fn joined(
        kind: ToggleKind,
        element: SurfaceRef,
        groups: &RadioGroups,
    ) -> Result<Self> {
        let input = require_class(&*element, kind.input_class())?;
        let name = input
            .attribute("name")
            .filter(|name| !name.is_empty())
            .ok_or(ToggleError::MissingGroupName)?;

        let control = Self {
            inner: Arc::new(ToggleInner {
                kind,
                element,
                input,
                group: Some(GroupLink {
                    name: name.clone(),
                    groups: groups.clone(),
                }),
            }),
        };
        groups.register(&name, &control);

        Ok(control)
    }

    pub fn group_name(&self) -> Option<&str> {
        self.inner.group.as_ref().map(|link| link.name.as_str())
    }

    pub fn kind(&self) -> ToggleKind {
        self.inner.kind
    }

    pub fn element(&self) -> &SurfaceRef {
        &self.inner.element
    }

    pub fn input(&self) -> &SurfaceRef {
        &self.inner.input
    }

    pub fn is_checked(&self) -> bool {
        self.inner.input.is_checked()
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.input.is_disabled()
    }

    pub fn is_focused(&self) -> bool {
        self.inner.element.has_class(self.inner.kind.focused_class())
    }

    /// Mirror the input's disabled flag
    pub fn check_disabled(&self) {
        let inner = &self.inner;
        inner
            .element
            .toggle_class(inner.kind.disabled_class(), inner.input.is_disabled());
    }

    /// Mirror the input's checked flag
    pub fn check_toggle_state(&self) {
        let inner = &self.inner;
        inner
            .element
            .toggle_class(inner.kind.checked_class(), inner.input.is_checked());
    }

    pub fn update_classes(&self) {
        self.check_disabled();
        self.check_toggle_state();
    }

    pub fn enable(&self) {
        self.inner.input.set_disabled(false);
        self.update_classes();
    }

    pub fn disable(&self) {
        self.inner.input.set_disabled(true);
        self.update_classes();
    }

    pub fn check(&self) {
        self.inner.input.set_checked(true);
        self.resync();
    }

    pub fn uncheck(&self) {
        self.inner.input.set_checked(false);
        self.resync();
    }

    /// Resync this control, or its whole group when it has one
    fn resync(&self) {
        match &self.inner.group {
            Some(link) => link.groups.sync(&link.name, self),
            None => self.update_classes(),
        }
    }

    pub fn same_as(&self, other: &ToggleControl) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn downgrade(&self) -> Weak<ToggleInner> {
        Arc::downgrade(&self.inner)
    }

    pub(crate) fn upgrade_weak(weak: &Weak<ToggleInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// Listener that forwards to `handler` while the control is alive
    pub(crate) fn listener(&self, handler: fn(&ToggleControl)) -> Listener {
        let weak = self.downgrade();
        Arc::new(move |_: EventKind| {
            if let Some(control) = Self::upgrade_weak(&weak) {
                handler(&control);
            }
        })
    }

    /// Attach focus, blur and pointer-release listeners
    pub(crate) fn wire_focus(&self) {
        let input = &self.inner.input;
        input.listen(EventKind::Focus, self.listener(Self::on_focus));
        input.listen(EventKind::Blur, self.listener(Self::on_blur));
        self.inner
            .element
            .listen(EventKind::MouseUp, self.listener(Self::on_mouse_up));
    }

    /// Initial sync plus the upgrade marker
    pub(crate) fn mark_upgraded(&self) {
        self.update_classes();
        self.inner.element.add_class(self.inner.kind.upgraded_class());

        tracing::debug!(kind = %self.inner.kind, "Upgraded toggle");
    }

    pub(crate) fn on_change(&self) {
        self.resync();
    }

    fn on_focus(&self) {
        self.inner.element.add_class(self.inner.kind.focused_class());
        self.update_classes();
    }

    fn on_blur(&self) {
        self.inner
            .element
            .remove_class(self.inner.kind.focused_class());
        self.update_classes();
    }

    /// Pointer release drops focus so the focus ring only follows the keyboard
    fn on_mouse_up(&self) {
        self.inner
            .element
            .remove_class(self.inner.kind.focused_class());
        self.inner.input.blur();
        self.update_classes();
    }
}

impl Clone for ToggleControl {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for ToggleControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleControl")
            .field("kind", &self.inner.kind)
            .field("group", &self.group_name())
            .field("checked", &self.is_checked())
            .field("disabled", &self.is_disabled())
            .finish()
    }
}

/// Public operations shared by every toggle component
pub trait Toggle {
    fn control(&self) -> &ToggleControl;

    fn enable(&self) {
        self.control().enable();
    }

    fn disable(&self) {
        self.control().disable();
    }

    fn check(&self) {
        self.control().check();
    }

    fn uncheck(&self) {
        self.control().uncheck();
    }

    fn check_disabled(&self) {
        self.control().check_disabled();
    }

    fn check_toggle_state(&self) {
        self.control().check_toggle_state();
    }

    fn is_checked(&self) -> bool {
        self.control().is_checked()
    }

    fn is_disabled(&self) -> bool {
        self.control().is_disabled()
    }

    fn is_focused(&self) -> bool {
        self.control().is_focused()
    }
}
