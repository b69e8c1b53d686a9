//! Snackbar component
//!
//! Expected markup:
//! ```text
//! .mdl-snackbar
//!   .mdl-snackbar__text
//!   .mdl-snackbar__action
//! ```

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::time::Duration;

use mdl_surface::{require_class, EventKind, SchedulerRef, SurfaceRef};

use crate::notification::Notification;
use crate::state::SnackbarPhase;
use crate::Result;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

const MESSAGE_CLASS: &str = "mdl-snackbar__text";
const ACTION_CLASS: &str = "mdl-snackbar__action";
const ACTIVE_CLASS: &str = "mdl-snackbar--active";

#[derive(Default)]
struct SnackbarState {
    /// Notification on screen
    current: Option<Notification>,
    /// Backlog, oldest first
    pending: VecDeque<Notification>,
    /// Bumped on every display; a timer only dismisses its own generation
    generation: u64,
    shown_at: Option<DateTime<Utc>>,
}

impl SnackbarState {
    fn phase(&self) -> SnackbarPhase {
        if self.current.is_some() {
            SnackbarPhase::Showing
        } else {
            SnackbarPhase::Idle
        }
    }
}

struct SnackbarInner {
    element: SurfaceRef,
    text: SurfaceRef,
    action: SurfaceRef,
    scheduler: SchedulerRef,
    default_timeout: Duration,
    state: Mutex<SnackbarState>,
}

pub struct Snackbar {
    inner: Arc<SnackbarInner>,
}

impl Snackbar {
    pub fn new(element: SurfaceRef, scheduler: SchedulerRef) -> Result<Self> {
        Self::with_default_timeout(element, scheduler, DEFAULT_TIMEOUT)
    }

    /// Upgrade `element`, dismissing notifications without their own
    /// timeout after `default_timeout`
    pub fn with_default_timeout(
        element: SurfaceRef,
        scheduler: SchedulerRef,
        default_timeout: Duration,
    ) -> Result<Self> {
        let text = require_class(&*element, MESSAGE_CLASS)?;
        let action = require_class(&*element, ACTION_CLASS)?;

        element.set_attribute("aria-hidden", "true");
        action.set_attribute("hidden", "");

        let snackbar = Self {
            inner: Arc::new(SnackbarInner {
                element,
                text,
                action,
                scheduler,
                default_timeout,
                state: Mutex::new(SnackbarState::default()),
            }),
        };

        let weak = Arc::downgrade(&snackbar.inner);
        snackbar.inner.action.listen(
            EventKind::Click,
            Arc::new(move |_: EventKind| {
                if let Some(snackbar) = Self::from_weak(&weak) {
                    snackbar.trigger_action();
                }
            }),
        );

        Ok(snackbar)
    }

    /// Display `notification`, or queue it behind the one on screen.
    ///
    /// Malformed requests are rejected before touching any state.
    pub fn show(&self, notification: Notification) -> Result<()> {
        notification.validate()?;

        let mut state = self.inner.state.lock();
        if state.current.is_some() {
            state.pending.push_back(notification);
            tracing::debug!(pending = state.pending.len(), "Queued notification");
            return Ok(());
        }

        self.display(&mut state, notification);
        Ok(())
    }

    /// Parse a JSON request and show it
    pub fn show_json(&self, json: &str) -> Result<()> {
        self.show(Notification::from_json(json)?)
    }

    /// Run the action handler of the notification on screen.
    ///
    /// The handler runs with the notification still current and no lock
    /// held, so a `show` from inside it is queued behind the current one.
    pub fn trigger_action(&self) -> bool {
        let handler = self
            .inner
            .state
            .lock()
            .current
            .as_ref()
            .and_then(|n| n.action_handler.clone());

        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn phase(&self) -> SnackbarPhase {
        self.inner.state.lock().phase()
    }

    pub fn is_active(&self) -> bool {
        self.phase().is_active()
    }

    pub fn current_message(&self) -> Option<String> {
        self.inner
            .state
            .lock()
            .current
            .as_ref()
            .map(|n| n.message.clone())
    }

    pub fn pending_len(&self) -> usize {
        self.inner.state.lock().pending.len()
    }

    pub fn pending_messages(&self) -> Vec<String> {
        self.inner
            .state
            .lock()
            .pending
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    /// When the current notification went on screen
    pub fn shown_at(&self) -> Option<DateTime<Utc>> {
        self.inner.state.lock().shown_at
    }

    pub fn default_timeout(&self) -> Duration {
        self.inner.default_timeout
    }

    pub fn element(&self) -> &SurfaceRef {
        &self.inner.element
    }

    fn from_weak(weak: &Weak<SnackbarInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn transition(&self, state: &SnackbarState, to: SnackbarPhase) {
        let from = state.phase();
        debug_assert!(from.can_transition_to(to));
        tracing::debug!(from = %from, to = %to, "Snackbar state transition");
    }

    fn display(&self, state: &mut SnackbarState, notification: Notification) {
        self.transition(state, SnackbarPhase::Showing);

        let inner = &self.inner;
        if notification.has_action() {
            let label = notification.action_text.as_deref().unwrap_or_default();
            inner.action.set_text(label);
            inner.action.remove_attribute("hidden");
        }
        inner.text.set_text(&notification.message);
        inner.element.set_attribute("aria-hidden", "false");
        inner.element.add_class(ACTIVE_CLASS);

        let timeout = notification.effective_timeout(inner.default_timeout);
        state.generation += 1;
        let generation = state.generation;

        let weak = Arc::downgrade(&self.inner);
        let timer = inner.scheduler.schedule_once(
            timeout,
            Box::new(move || {
                if let Some(snackbar) = Self::from_weak(&weak) {
                    snackbar.dismiss_current(generation);
                }
            }),
        );

        tracing::info!(
            notification_id = %notification.id,
            timer = %timer,
            timeout_ms = timeout.as_millis() as u64,
            "Showing notification"
        );

        state.shown_at = Some(Utc::now());
        state.current = Some(notification);
    }

    fn hide(&self, state: &mut SnackbarState) {
        self.transition(state, SnackbarPhase::Idle);

        let inner = &self.inner;
        inner.element.remove_class(ACTIVE_CLASS);
        inner.element.set_attribute("aria-hidden", "true");
        inner.text.set_text("");
        inner.action.set_text("");
        inner.action.set_attribute("hidden", "");

        if let Some(dismissed) = state.current.take() {
            tracing::debug!(notification_id = %dismissed.id, "Dismissed notification");
        }
        state.shown_at = None;
    }

    /// Timer expiry: hide the current notification and promote the next one
    /// inside the same critical section.
    fn dismiss_current(&self, generation: u64) {
        let mut state = self.inner.state.lock();
        if state.generation != generation || state.current.is_none() {
            tracing::warn!(generation, "Ignoring stale dismissal timer");
            return;
        }

        self.hide(&mut state);

        if let Some(next) = state.pending.pop_front() {
            self.display(&mut state, next);
        }
    }
}

impl Clone for Snackbar {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for Snackbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Snackbar")
            .field("phase", &state.phase())
            .field("current", &state.current)
            .field("pending", &state.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdl_surface::{Element, ManualScheduler, Surface, SurfaceError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::{SnackbarError, ValidationError};

    struct Fixture {
        container: Element,
        text: Element,
        action: Element,
        scheduler: ManualScheduler,
        snackbar: Snackbar,
    }

    fn fixture() -> Fixture {
        let text = Element::new("div").with_class("mdl-snackbar__text");
        let action = Element::new("button").with_class("mdl-snackbar__action");
        let container = Element::new("div")
            .with_class("mdl-snackbar")
            .with_class("mdl-js-snackbar")
            .with_child(text.clone())
            .with_child(action.clone());
        let scheduler = ManualScheduler::new();
        let snackbar =
            Snackbar::new(container.clone().into_ref(), Arc::new(scheduler.clone())).unwrap();

        Fixture {
            container,
            text,
            action,
            scheduler,
            snackbar,
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_construction_hides_container() {
        let f = fixture();
        assert_eq!(f.container.attribute("aria-hidden").as_deref(), Some("true"));
        assert!(f.action.attribute("hidden").is_some());
        assert_eq!(f.snackbar.phase(), SnackbarPhase::Idle);
    }

    #[test]
    fn test_missing_children_rejected() {
        let container = Element::new("div")
            .with_class("mdl-snackbar")
            .with_child(Element::new("div").with_class("mdl-snackbar__text"));
        let result = Snackbar::new(container.clone().into_ref(), Arc::new(ManualScheduler::new()));

        match result {
            Err(SnackbarError::Surface(SurfaceError::MissingElement { selector })) => {
                assert_eq!(selector, ".mdl-snackbar__action");
            }
            other => panic!("expected missing element, got {:?}", other),
        }
        assert!(container.attribute("aria-hidden").is_none());
    }

    #[test]
    fn test_saved_scenario() {
        let f = fixture();

        f.snackbar.show(Notification::new("Saved")).unwrap();
        assert!(f.snackbar.is_active());
        assert!(f.container.has_class("mdl-snackbar--active"));
        assert_eq!(f.container.attribute("aria-hidden").as_deref(), Some("false"));
        assert_eq!(f.text.text(), "Saved");
        assert!(f.snackbar.shown_at().is_some());

        f.scheduler.advance(ms(7999));
        assert!(f.snackbar.is_active());

        f.scheduler.advance(ms(1));
        assert!(!f.snackbar.is_active());
        assert!(!f.container.has_class("mdl-snackbar--active"));
        assert_eq!(f.container.attribute("aria-hidden").as_deref(), Some("true"));
        assert_eq!(f.text.text(), "");
        assert!(f.snackbar.current_message().is_none());
    }

    #[test]
    fn test_second_show_waits_for_first_timer() {
        let f = fixture();

        f.snackbar.show(Notification::new("A")).unwrap();
        f.snackbar.show(Notification::new("B")).unwrap();
        assert_eq!(f.text.text(), "A");
        assert_eq!(f.snackbar.pending_len(), 1);
        assert_eq!(f.scheduler.pending_timers(), 1);

        f.scheduler.advance(ms(8000));
        assert_eq!(f.text.text(), "B");
        assert_eq!(f.snackbar.current_message().as_deref(), Some("B"));
        assert_eq!(f.snackbar.pending_len(), 0);
        assert!(f.container.has_class("mdl-snackbar--active"));

        // B starts its own full timer at promotion
        f.scheduler.advance(ms(7999));
        assert_eq!(f.text.text(), "B");
        f.scheduler.advance(ms(1));
        assert!(!f.snackbar.is_active());
    }

    #[test]
    fn test_earlier_generation_does_not_dismiss() {
        let f = fixture();

        f.snackbar.show(Notification::new("A")).unwrap();
        f.snackbar.show(Notification::new("B")).unwrap();
        f.scheduler.advance(ms(8000));
        assert_eq!(f.text.text(), "B");

        // A's generation is over; only B's own timer may hide B
        f.snackbar.dismiss_current(1);
        assert_eq!(f.snackbar.current_message().as_deref(), Some("B"));
        assert!(f.container.has_class("mdl-snackbar--active"));

        f.snackbar.dismiss_current(2);
        assert!(!f.snackbar.is_active());
        assert_eq!(f.scheduler.pending_timers(), 1);
        f.scheduler.advance(ms(8000));
        assert!(!f.snackbar.is_active());
    }

    #[test]
    fn test_fifo_order() {
        let f = fixture();
        f.snackbar.show(Notification::new("X")).unwrap();
        for message in ["A", "B", "C"] {
            f.snackbar.show(Notification::new(message)).unwrap();
        }
        assert_eq!(f.snackbar.pending_messages(), vec!["A", "B", "C"]);

        let mut seen = Vec::new();
        while f.scheduler.advance_to_next() {
            if let Some(message) = f.snackbar.current_message() {
                assert!(f.container.has_class("mdl-snackbar--active"));
                seen.push(message);
            }
        }

        assert_eq!(seen, vec!["A", "B", "C"]);
        assert!(!f.snackbar.is_active());
        assert!(!f.container.has_class("mdl-snackbar--active"));
    }

    #[test]
    fn test_per_notification_timeout() {
        let f = fixture();
        f.snackbar
            .show(Notification::new("quick").with_timeout(ms(500)))
            .unwrap();
        f.snackbar
            .show(Notification::new("default").with_timeout(Duration::ZERO))
            .unwrap();

        f.scheduler.advance(ms(500));
        assert_eq!(f.snackbar.current_message().as_deref(), Some("default"));

        f.scheduler.advance(ms(7999));
        assert!(f.snackbar.is_active());
        f.scheduler.advance(ms(1));
        assert!(!f.snackbar.is_active());
    }

    #[test]
    fn test_missing_message_never_mutates_state() {
        let f = fixture();

        let err = f.snackbar.show(Notification::new("")).unwrap_err();
        assert!(matches!(
            err,
            SnackbarError::Validation(ValidationError::MissingMessage)
        ));
        assert!(!f.snackbar.is_active());
        assert_eq!(f.scheduler.pending_timers(), 0);

        f.snackbar.show(Notification::new("A")).unwrap();
        let err = f.snackbar.show(Notification::new("")).unwrap_err();
        assert!(matches!(
            err,
            SnackbarError::Validation(ValidationError::MissingMessage)
        ));
        assert_eq!(f.snackbar.current_message().as_deref(), Some("A"));
        assert_eq!(f.snackbar.pending_len(), 0);
    }

    #[test]
    fn test_handler_without_text_never_mutates_state() {
        let f = fixture();
        f.snackbar.show(Notification::new("A")).unwrap();

        let err = f
            .snackbar
            .show(Notification::new("B").with_handler(|| {}))
            .unwrap_err();
        assert!(matches!(
            err,
            SnackbarError::Validation(ValidationError::MissingActionText)
        ));
        assert_eq!(f.snackbar.current_message().as_deref(), Some("A"));
        assert_eq!(f.snackbar.pending_len(), 0);
        assert_eq!(f.scheduler.pending_timers(), 1);
    }

    #[test]
    fn test_action_wiring() {
        let f = fixture();
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);

        f.snackbar
            .show(Notification::new("Deleted").with_action("Undo", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        assert_eq!(f.action.text(), "Undo");
        assert!(f.action.attribute("hidden").is_none());

        f.action.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        f.scheduler.advance(ms(8000));
        assert_eq!(f.action.text(), "");
        assert!(f.action.attribute("hidden").is_some());

        // Handler detached with the notification
        f.action.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert!(!f.snackbar.trigger_action());
    }

    #[test]
    fn test_action_text_alone_stays_hidden() {
        let f = fixture();
        f.snackbar
            .show(Notification::new("Synced").with_action_text("Details"))
            .unwrap();

        assert!(f.action.attribute("hidden").is_some());
        assert_eq!(f.action.text(), "");
    }

    #[test]
    fn test_show_from_action_handler_is_queued() {
        let f = fixture();
        let snackbar = f.snackbar.clone();

        f.snackbar
            .show(Notification::new("Deleted").with_action("Undo", move || {
                snackbar.show(Notification::new("Restored")).unwrap();
            }))
            .unwrap();

        assert!(f.snackbar.trigger_action());
        assert_eq!(f.snackbar.current_message().as_deref(), Some("Deleted"));
        assert_eq!(f.snackbar.pending_messages(), vec!["Restored"]);

        f.scheduler.advance(ms(8000));
        assert_eq!(f.text.text(), "Restored");
    }

    #[test]
    fn test_show_json() {
        let f = fixture();
        f.snackbar
            .show_json(r#"{"message": "Uploaded", "timeout": 1000}"#)
            .unwrap();
        assert_eq!(f.text.text(), "Uploaded");

        assert!(matches!(
            f.snackbar.show_json("not json"),
            Err(SnackbarError::Json(_))
        ));

        f.scheduler.advance(ms(1000));
        assert!(!f.snackbar.is_active());
    }

    #[test]
    fn test_custom_default_timeout() {
        let container = Element::new("div")
            .with_child(Element::new("div").with_class("mdl-snackbar__text"))
            .with_child(Element::new("button").with_class("mdl-snackbar__action"));
        let scheduler = ManualScheduler::new();
        let snackbar = Snackbar::with_default_timeout(
            container.into_ref(),
            Arc::new(scheduler.clone()),
            ms(3000),
        )
        .unwrap();

        snackbar.show(Notification::new("short")).unwrap();
        scheduler.advance(ms(3000));
        assert!(!snackbar.is_active());
    }

    #[test]
    fn test_dropped_snackbar_timer_is_harmless() {
        let f = fixture();
        f.snackbar.show(Notification::new("A")).unwrap();
        let Fixture {
            container,
            scheduler,
            snackbar,
            ..
        } = f;
        drop(snackbar);

        assert_eq!(scheduler.advance(ms(8000)), 1);
        // Nothing left to hide it
        assert!(container.has_class("mdl-snackbar--active"));
    }
}
