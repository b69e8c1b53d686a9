//! Class tables for the toggle variants
//!
//! | Kind        | Input                    | State classes                  |
//! |-------------|--------------------------|--------------------------------|
//! | Checkbox    | `mdl-checkbox__input`    | `mdl-checkbox--{state}`        |
//! | IconToggle  | `mdl-icon-toggle__input` | `mdl-icon-toggle--{state}`     |
//! | Radio       | `mdl-radio__button`      | `mdl-radio--{state}`           |

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    Checkbox,
    IconToggle,
    Radio,
}

impl ToggleKind {
    /// Marker class that requests an upgrade for this kind
    pub fn js_class(&self) -> &'static str {
        match self {
            ToggleKind::Checkbox => "mdl-js-checkbox",
            ToggleKind::IconToggle => "mdl-js-icon-toggle",
            ToggleKind::Radio => "mdl-js-radio",
        }
    }

    pub fn input_class(&self) -> &'static str {
        match self {
            ToggleKind::Checkbox => "mdl-checkbox__input",
            ToggleKind::IconToggle => "mdl-icon-toggle__input",
            ToggleKind::Radio => "mdl-radio__button",
        }
    }

    pub fn focused_class(&self) -> &'static str {
        match self {
            ToggleKind::Checkbox => "mdl-checkbox--focused",
            ToggleKind::IconToggle => "mdl-icon-toggle--focused",
            ToggleKind::Radio => "mdl-radio--focused",
        }
    }

    pub fn disabled_class(&self) -> &'static str {
        match self {
            ToggleKind::Checkbox => "mdl-checkbox--disabled",
            ToggleKind::IconToggle => "mdl-icon-toggle--disabled",
            ToggleKind::Radio => "mdl-radio--disabled",
        }
    }

    pub fn checked_class(&self) -> &'static str {
        match self {
            ToggleKind::Checkbox => "mdl-checkbox--checked",
            ToggleKind::IconToggle => "mdl-icon-toggle--checked",
            ToggleKind::Radio => "mdl-radio--checked",
        }
    }

    /// Added once the component is wired; icon toggles mark themselves active
    pub fn upgraded_class(&self) -> &'static str {
        match self {
            ToggleKind::Checkbox => "mdl-checkbox--upgraded",
            ToggleKind::IconToggle => "mdl-icon-toggle--active",
            ToggleKind::Radio => "mdl-radio--upgraded",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleKind::Checkbox => "checkbox",
            ToggleKind::IconToggle => "icon-toggle",
            ToggleKind::Radio => "radio",
        }
    }
}

impl fmt::Display for ToggleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
