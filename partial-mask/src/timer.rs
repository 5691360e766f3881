//! Single-shot timers for the reveal window.
//!
//! The engine never runs callbacks of its own. A [`TimerService`] hands out a
//! [`TimerHandle`] per scheduled expiry; when the deadline passes, the host
//! passes that handle back to
//! [`MaskingEngine::on_reveal_expired`](crate::MaskingEngine::on_reveal_expired).
//! This keeps every state transition on the host's single event loop.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
    time::Duration,
};

/// Identifies one scheduled expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wraps an id issued by a host-provided timer service.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// Schedules and cancels single-shot expiries.
pub trait TimerService {
    /// Schedules an expiry `delay` from now and returns its handle.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Cancels a scheduled expiry.
    ///
    /// Canceling a handle that already fired or was already canceled is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Shares one timer service between several engines on the same thread.
///
/// # Panics
///
/// Every call borrows the cell mutably. Do not hold a borrow of the shared
/// queue across engine calls or engine drops: collect expired handles first,
/// release the borrow, then deliver them.
impl<T: TimerService + ?Sized> TimerService for Rc<RefCell<T>> {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.borrow_mut().schedule_once(delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.borrow_mut().cancel(handle);
    }
}

impl<T: TimerService + ?Sized> TimerService for &mut T {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        (**self).schedule_once(delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}

impl<T: TimerService + ?Sized> TimerService for Box<T> {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        (**self).schedule_once(delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}

/// Deadline queue driven by an explicit clock.
///
/// Time only moves when the owner calls [`ManualTimers::advance`] or
/// [`ManualTimers::advance_to`], which makes the queue deterministic in tests
/// and easy to drive from an event loop that tracks elapsed time itself.
#[derive(Debug, Default)]
pub struct ManualTimers {
    now: Duration,
    next_id: u64,
    // Ordered by (deadline, handle) so iteration order is firing order.
    queue: BTreeSet<(Duration, TimerHandle)>,
    deadlines: BTreeMap<TimerHandle, Duration>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the queue's clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of scheduled expiries.
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Time left until the earliest scheduled expiry, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .first()
            .map(|(deadline, _)| deadline.saturating_sub(self.now))
    }

    /// Moves the clock forward by `by` and returns the handles that came due.
    #[must_use = "expired handles must be delivered to their engines"]
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        self.advance_to(self.now.saturating_add(by))
    }

    /// Moves the clock to `at` and returns the handles that came due, earliest
    /// deadline first; equal deadlines fire in scheduling order.
    ///
    /// The clock never moves backwards.
    #[must_use = "expired handles must be delivered to their engines"]
    pub fn advance_to(&mut self, at: Duration) -> Vec<TimerHandle> {
        self.now = self.now.max(at);
        let mut expired = Vec::new();
        loop {
            let Some(&(deadline, handle)) = self.queue.first() else {
                break;
            };
            if deadline > self.now {
                break;
            }
            self.queue.remove(&(deadline, handle));
            self.deadlines.remove(&handle);
            expired.push(handle);
        }
        expired
    }
}

impl TimerService for ManualTimers {
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, handle));
        self.deadlines.insert(handle, deadline);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(deadline) = self.deadlines.remove(&handle) {
            self.queue.remove(&(deadline, handle));
        }
    }
}
