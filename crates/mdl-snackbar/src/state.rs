//! Snackbar State Machine
//!
//! ```text
//! Idle ──show──▶ Showing ──timer, queue empty──▶ Idle
//!                  │  ▲
//!                  └──┘ timer, queue non-empty (head promoted)
//! ```
//!
//! `show` while Showing only appends to the queue.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackbarPhase {
    /// Nothing on screen
    Idle,
    /// One notification on screen with its dismissal timer running
    Showing,
}

impl SnackbarPhase {
    pub fn can_transition_to(&self, target: SnackbarPhase) -> bool {
        match (self, target) {
            (SnackbarPhase::Idle, SnackbarPhase::Showing) => true,
            (SnackbarPhase::Showing, SnackbarPhase::Idle) => true,
            // Promotion of the next queued notification
            (SnackbarPhase::Showing, SnackbarPhase::Showing) => true,
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SnackbarPhase::Showing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SnackbarPhase::Idle => "idle",
            SnackbarPhase::Showing => "showing",
        }
    }
}

impl std::fmt::Display for SnackbarPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SnackbarPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(SnackbarPhase::Idle),
            "showing" => Ok(SnackbarPhase::Showing),
            _ => Err(format!("Unknown snackbar phase: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(SnackbarPhase::Idle.can_transition_to(SnackbarPhase::Showing));
        assert!(SnackbarPhase::Showing.can_transition_to(SnackbarPhase::Idle));
        assert!(SnackbarPhase::Showing.can_transition_to(SnackbarPhase::Showing));
        // Dismissal never fires while idle
        assert!(!SnackbarPhase::Idle.can_transition_to(SnackbarPhase::Idle));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("Showing".parse::<SnackbarPhase>().unwrap(), SnackbarPhase::Showing);
        assert!("hidden".parse::<SnackbarPhase>().is_err());
    }
}
