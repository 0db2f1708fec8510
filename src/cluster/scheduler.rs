//! Debounced recompute scheduling
//!
//! Nothing here reads a clock: callers pass `now` in, and later call
//! [`RecomputeScheduler::poll`] to find out whether the delay has run out.
//! This works the same from an event loop tick or a timer thread.

use std::time::{Duration, Instant};

use tracing::trace;

use super::point::LatLng;

/// Pending one-shot timers keyed by a token
///
/// Scheduling a token that is already pending replaces its deadline, so
/// repeated calls within the delay keep pushing the deadline back.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    pending: Vec<(K, Instant)>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq> TimerQueue<K> {
    /// Schedules `token` to fire `delay` after `now`
    ///
    /// Returns true if an earlier pending deadline for the token was cancelled.
    pub fn schedule(&mut self, token: K, delay: Duration, now: Instant) -> bool {
        let deadline = now + delay;
        match self.pending.iter_mut().find(|(k, _)| *k == token) {
            Some(entry) => {
                entry.1 = deadline;
                true
            }
            None => {
                self.pending.push((token, deadline));
                false
            }
        }
    }

    /// Cancels a pending token, returns whether it was pending
    pub fn cancel(&mut self, token: &K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(k, _)| k != token);
        self.pending.len() != before
    }

    pub fn is_pending(&self, token: &K) -> bool {
        self.pending.iter().any(|(k, _)| k == token)
    }

    pub fn deadline(&self, token: &K) -> Option<Instant> {
        self.pending
            .iter()
            .find(|(k, _)| k == token)
            .map(|&(_, deadline)| deadline)
    }

    /// Earliest pending deadline, useful to size an event-loop wait
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }

    /// Removes and returns the tokens whose deadline is at or before `now`,
    /// earliest first
    pub fn poll(&mut self, now: Instant) -> Vec<K> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].1 <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|&(_, deadline)| deadline);
        due.into_iter().map(|(k, _)| k).collect()
    }
}

/// Checks whether a list change can be ignored for clustering purposes
///
/// The change is a no-op when the length is unchanged and, position by
/// position, the new item either has no coordinate or sits at the same
/// place as the old item did.
pub fn same_geometry<T, F>(old: &[T], new: &[T], extractor: F) -> bool
where
    F: Fn(&T) -> Option<LatLng>,
{
    if old.len() != new.len() {
        return false;
    }

    old.iter().zip(new).all(|(o, n)| match extractor(n) {
        None => true,
        Some(ll) => extractor(o).is_some_and(|prev| prev.same_place(&ll)),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Recompute;

/// Coalesces list and viewport changes into a single delayed recompute
#[derive(Debug, Clone)]
pub struct RecomputeScheduler {
    delay: Duration,
    timers: TimerQueue<Recompute>,
}

impl RecomputeScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timers: TimerQueue::default(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handles a list change
    ///
    /// # Returns
    ///
    /// `true` if the change was accepted and a recompute scheduled, `false`
    /// if it was geometrically a no-op and nothing was scheduled
    pub fn list_changed<T, F>(&mut self, old: &[T], new: &[T], extractor: F, now: Instant) -> bool
    where
        F: Fn(&T) -> Option<LatLng>,
    {
        if same_geometry(old, new, extractor) {
            trace!(len = new.len(), "list change leaves geometry untouched");
            return false;
        }
        self.trigger(now);
        true
    }

    /// Handles a pan or zoom; always schedules
    pub fn viewport_changed(&mut self, now: Instant) {
        self.trigger(now);
    }

    /// Schedules a recompute, restarting the delay if one is already pending
    pub fn trigger(&mut self, now: Instant) {
        if self.timers.schedule(Recompute, self.delay, now) {
            trace!(delay = ?self.delay, "recompute delay restarted");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.timers.is_pending(&Recompute)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timers.deadline(&Recompute)
    }

    /// Returns true once the pending recompute is due, clearing it
    pub fn poll(&mut self, now: Instant) -> bool {
        !self.timers.poll(now).is_empty()
    }

    /// Drops any pending recompute
    pub fn cancel(&mut self) -> bool {
        self.timers.cancel(&Recompute)
    }
}
