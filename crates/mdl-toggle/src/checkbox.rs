//! Checkbox component

use mdl_surface::{EventKind, SurfaceRef};

use crate::control::{Toggle, ToggleControl};
use crate::kind::ToggleKind;
use crate::Result;

#[derive(Debug, Clone)]
pub struct Checkbox {
    control: ToggleControl,
}

impl Checkbox {
    /// Upgrade a `.mdl-checkbox` container holding a `.mdl-checkbox__input`
    pub fn new(element: SurfaceRef) -> Result<Self> {
        let control = ToggleControl::new(ToggleKind::Checkbox, element)?;

        control
            .input()
            .listen(EventKind::Change, control.listener(ToggleControl::on_change));
        control.wire_focus();
        control.mark_upgraded();

        Ok(Self { control })
    }
}

impl Toggle for Checkbox {
    fn control(&self) -> &ToggleControl {
        &self.control
    }
}
