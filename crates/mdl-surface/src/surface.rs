//! Displayable surface capability

use std::fmt;
use std::sync::Arc;

use crate::error::SurfaceError;
use crate::Result;

/// Events a component can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Focus,
    Blur,
    /// Pointer release over the element
    MouseUp,
    Click,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
            EventKind::MouseUp => "mouseup",
            EventKind::Click => "click",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "change" => Ok(EventKind::Change),
            "focus" => Ok(EventKind::Focus),
            "blur" => Ok(EventKind::Blur),
            "mouseup" => Ok(EventKind::MouseUp),
            "click" => Ok(EventKind::Click),
            _ => Err(format!("Unknown event kind: {}", s)),
        }
    }
}

pub type Listener = Arc<dyn Fn(EventKind) + Send + Sync>;

pub type SurfaceRef = Arc<dyn Surface>;

/// An element a component can read and decorate.
///
/// Implementations must not hold internal locks while invoking listeners,
/// since listeners call straight back into the surface.
pub trait Surface: Send + Sync + fmt::Debug {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);

    /// Drop input focus, firing `blur` if the element had it
    fn blur(&self);

    /// First descendant carrying `class`, in document order
    fn query_class(&self, class: &str) -> Option<SurfaceRef>;
    /// Every descendant carrying `class`, in document order
    fn query_class_all(&self, class: &str) -> Vec<SurfaceRef>;
    /// Descendant whose `id` attribute equals `id`
    fn query_id(&self, id: &str) -> Option<SurfaceRef>;

    fn listen(&self, event: EventKind, listener: Listener);

    fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Locate a required child by class name
pub fn require_class(surface: &dyn Surface, class: &str) -> Result<SurfaceRef> {
    surface
        .query_class(class)
        .ok_or_else(|| SurfaceError::missing(format!(".{}", class)))
}
