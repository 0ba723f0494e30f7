//! Timer abstraction for the auto-advance interval.
//!
//! The controller only ever holds one [`TimerHandle`]; backends hand out
//! fresh handles on every `start_interval` so a superseded interval can be
//! told apart from the current one.

use serde::{Deserialize, Serialize};

/// Opaque id of a repeating interval. Never reused by a backend.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Host scheduling primitive for repeating callbacks.
///
/// Backends deliver ticks by calling [`Slider::on_timer`](crate::Slider::on_timer)
/// with the handle returned here.
pub trait TimerBackend {
    fn start_interval(&mut self, interval_ms: u64) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct Interval {
    handle: TimerHandle,
    every_ms: u64,
    next_due_ms: u64,
}

/// Simulated clock with repeating intervals, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now_ms: u64,
    next_handle: u64,
    intervals: Vec<Interval>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of intervals that have not been cancelled.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.intervals.len()
    }

    /// Pop the earliest tick due at or before `until_ms`.
    ///
    /// Advances the clock to the tick time and reschedules the interval.
    /// Ties fire in creation order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerHandle> {
        let slot = self
            .intervals
            .iter_mut()
            .filter(|i| i.next_due_ms <= until_ms)
            .min_by_key(|i| (i.next_due_ms, i.handle))?;
        let handle = slot.handle;
        self.now_ms = self.now_ms.max(slot.next_due_ms);
        slot.next_due_ms = slot.next_due_ms.saturating_add(slot.every_ms);
        Some(handle)
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl TimerBackend for VirtualTimers {
    fn start_interval(&mut self, interval_ms: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        let every_ms = interval_ms.max(1);
        self.intervals.push(Interval {
            handle,
            every_ms,
            next_due_ms: self.now_ms.saturating_add(every_ms),
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }
}
