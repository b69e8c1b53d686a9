//! One-shot deferred callbacks
//!
//! The snackbar's dismissal timer is the only asynchronous element in the
//! component set. It is expressed against [`Scheduler`] so hosts pick the
//! clock: a virtual one for headless pages and tests, or tokio's.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Runs a task once after a delay.
///
/// A task must never run before `schedule_once` has returned: callers
/// schedule while holding their own state locks.
pub trait Scheduler: Send + Sync {
    fn schedule_once(&self, delay: Duration, task: Task) -> TimerId;
}

pub type SchedulerRef = Arc<dyn Scheduler>;

struct ManualClock {
    now: Duration,
    next_id: u64,
    /// Keyed by (due time, id) so equal deadlines fire in scheduling order
    queue: BTreeMap<(Duration, u64), Task>,
}

/// Scheduler driven by an explicit virtual clock
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(Mutex::new(ManualClock {
                now: Duration::ZERO,
                next_id: 0,
                queue: BTreeMap::new(),
            })),
        }
    }

    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    pub fn pending_timers(&self) -> usize {
        self.clock.lock().queue.len()
    }

    /// Move the clock forward by `by`, firing every task that falls due.
    ///
    /// Tasks scheduled by a firing task are honoured within the same
    /// window. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;

        loop {
            let task = {
                let mut clock = self.clock.lock();
                let due = match clock.queue.keys().next() {
                    Some(&key) if key.0 <= target => key,
                    _ => break,
                };
                clock.now = due.0;
                clock.queue.remove(&due)
            };

            if let Some(task) = task {
                task();
                fired += 1;
            }
        }

        self.clock.lock().now = target;
        fired
    }

    /// Fire only the earliest pending task, jumping the clock to its deadline
    pub fn advance_to_next(&self) -> bool {
        let next = {
            let mut clock = self.clock.lock();
            let Some(&key) = clock.queue.keys().next() else {
                return false;
            };
            clock.now = key.0;
            clock.queue.remove(&key)
        };

        match next {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Task) -> TimerId {
        let mut clock = self.clock.lock();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.queue.insert((due, id), task);

        tracing::trace!(timer = id, due_ms = due.as_millis() as u64, "Scheduled task");

        TimerId(id)
    }
}

impl Clone for ManualScheduler {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
        }
    }
}

/// Scheduler backed by `tokio::time::sleep` on a runtime handle
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
    next_id: Arc<AtomicU64>,
}

impl TokioScheduler {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Bind to the runtime of the calling task, if any
    pub fn try_current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, task: Task) -> TimerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        TimerId(id)
    }
}

impl Clone for TokioScheduler {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let make = move |name: &'static str| -> Task {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().push(name))
        };
        (log, make)
    }

    #[test]
    fn test_manual_fires_in_due_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule_once(Duration::from_millis(300), task("late"));
        scheduler.schedule_once(Duration::from_millis(100), task("early"));
        scheduler.schedule_once(Duration::from_millis(100), task("early-second"));

        assert_eq!(scheduler.advance(Duration::from_millis(99)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 2);
        assert_eq!(*log.lock(), vec!["early", "early-second"]);

        assert_eq!(scheduler.advance(Duration::from_millis(200)), 1);
        assert_eq!(*log.lock(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(300));
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_manual_chained_tasks_within_window() {
        let scheduler = ManualScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_log = Arc::clone(&log);
        scheduler.schedule_once(
            Duration::from_millis(10),
            Box::new(move || {
                inner_log.lock().push(10);
                let chained_log = Arc::clone(&inner_log);
                inner_scheduler.schedule_once(
                    Duration::from_millis(10),
                    Box::new(move || chained_log.lock().push(20)),
                );
            }),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(25)), 2);
        assert_eq!(*log.lock(), vec![10, 20]);
    }

    #[test]
    fn test_advance_to_next() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        assert!(!scheduler.advance_to_next());

        scheduler.schedule_once(Duration::from_secs(8), task("dismiss"));
        assert!(scheduler.advance_to_next());
        assert_eq!(scheduler.now(), Duration::from_secs(8));
        assert_eq!(*log.lock(), vec!["dismiss"]);
    }

    #[tokio::test]
    async fn test_tokio_scheduler_fires_after_delay() {
        let scheduler = TokioScheduler::try_current().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel();

        scheduler.schedule_once(
            Duration::from_millis(50),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );

        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .unwrap()
            .unwrap();
    }
}
