//! Notification request

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::error::ValidationError;

pub type ActionHandler = Arc<dyn Fn() + Send + Sync>;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier, used in logs
    #[serde(default = "new_id")]
    pub id: String,
    /// Text to display; empty counts as missing
    #[serde(default)]
    pub message: String,
    /// Label of the action affordance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
    /// Invoked when the action affordance is activated
    #[serde(skip)]
    pub action_handler: Option<ActionHandler>,
    /// Display duration; `None` or zero means the snackbar default
    #[serde(default, rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            message: message.into(),
            action_text: None,
            action_handler: None,
            timeout_ms: None,
        }
    }

    /// Attach an action label and its handler
    pub fn with_action<F>(mut self, text: impl Into<String>, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action_text = Some(text.into());
        self.action_handler = Some(Arc::new(handler));
        self
    }

    pub fn with_action_text(mut self, text: impl Into<String>) -> Self {
        self.action_text = Some(text.into());
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action_handler = Some(Arc::new(handler));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Parse a request such as `{"message": "Saved", "timeout": 2000}`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        let has_text = self.action_text.as_deref().is_some_and(|t| !t.is_empty());
        if self.action_handler.is_some() && !has_text {
            return Err(ValidationError::MissingActionText);
        }

        Ok(())
    }

    pub fn has_action(&self) -> bool {
        self.action_handler.is_some()
    }

    pub fn effective_timeout(&self, default: Duration) -> Duration {
        match self.timeout_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => default,
        }
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("action_text", &self.action_text)
            .field("has_handler", &self.action_handler.is_some())
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
