//! Deferred task scheduler for the shell.
//!
//! A virtual clock advanced by the event loop. Every scheduled task hands
//! back a [`TaskGuard`]; dropping the guard cancels the task, so an owner that
//! is torn down before its timer expires never receives the callback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::trace;

struct Entry<E> {
    due: Duration,
    seq: u64,
    event: E,
    cancelled: Arc<AtomicBool>,
}

struct SchedulerInner<E> {
    now: Duration,
    next_seq: u64,
    queue: Vec<Entry<E>>,
}

/// Cancellation handle for a scheduled task.
#[must_use = "dropping a TaskGuard cancels the task"]
#[derive(Debug)]
pub struct TaskGuard {
    cancelled: Arc<AtomicBool>,
}

impl TaskGuard {
    /// Cancels the task explicitly.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One-shot timer queue shared between the app and its containers.
///
/// Cloning yields another handle to the same queue.
pub struct Scheduler<E> {
    inner: Arc<Mutex<SchedulerInner<E>>>,
}

impl<E> Clone for Scheduler<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                now: Duration::ZERO,
                next_seq: 0,
                queue: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SchedulerInner<E>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Schedules `event` to fire `delay` after the current clock.
    pub fn schedule(&self, delay: Duration, event: E) -> TaskGuard {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut inner = self.lock();
        let due = inner.now + delay;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.queue.push(Entry {
            due,
            seq,
            event,
            cancelled: Arc::clone(&cancelled),
        });
        trace!(?due, seq, "task scheduled");
        TaskGuard { cancelled }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Moves the clock forward by `elapsed` and returns the events now due.
    pub fn advance(&self, elapsed: Duration) -> Vec<E> {
        let now = self.now() + elapsed;
        self.advance_to(now)
    }

    /// Moves the clock to `now` and returns the due, uncancelled events in
    /// deadline order. Events sharing a deadline keep their scheduling order.
    /// The clock never moves backwards.
    pub fn advance_to(&self, now: Duration) -> Vec<E> {
        let mut inner = self.lock();
        if now > inner.now {
            inner.now = now;
        }
        let now = inner.now;

        inner.queue.retain(|e| !e.cancelled.load(Ordering::SeqCst));

        let (mut due, pending): (Vec<_>, Vec<_>) =
            inner.queue.drain(..).partition(|e| e.due <= now);
        inner.queue = pending;

        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter()
            .map(|e| {
                // A fired task counts as spent for its guard.
                e.cancelled.store(true, Ordering::SeqCst);
                e.event
            })
            .collect()
    }

    /// Deadline of the earliest live task, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.lock()
            .queue
            .iter()
            .filter(|e| !e.cancelled.load(Ordering::SeqCst))
            .map(|e| e.due)
            .min()
    }

    /// Number of live (not cancelled, not fired) tasks.
    pub fn pending(&self) -> usize {
        self.lock()
            .queue
            .iter()
            .filter(|e| !e.cancelled.load(Ordering::SeqCst))
            .count()
    }
}
