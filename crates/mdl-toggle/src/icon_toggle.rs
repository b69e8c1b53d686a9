//! Icon toggle component

use mdl_surface::{EventKind, SurfaceRef};

use crate::control::{Toggle, ToggleControl};
use crate::kind::ToggleKind;
use crate::Result;

#[derive(Debug, Clone)]
pub struct IconToggle {
    control: ToggleControl,
}

impl IconToggle {
    pub fn new(element: SurfaceRef) -> Result<Self> {
        let control = ToggleControl::new(ToggleKind::IconToggle, element)?;

        control
            .input()
            .listen(EventKind::Change, control.listener(ToggleControl::on_change));
        control.wire_focus();
        control.mark_upgraded();

        Ok(Self { control })
    }
}

impl Toggle for IconToggle {
    fn control(&self) -> &ToggleControl {
        &self.control
    }
}
