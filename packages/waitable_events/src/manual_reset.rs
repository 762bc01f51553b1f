use monotime::{TimeDelta, TimePoint};

use crate::monitor::Monitor;
use crate::wait_result::EventWaitResult;

/// State guarded by the event's monitor.
///
/// The epoch counts signals delivered over the lifetime of the event. A waiter
/// records the epoch when it starts waiting and considers itself released once
/// the epoch moves, independently of the flag. This is what makes wake
/// delivery immune to a `reset()` racing in between: resetting clears the
/// flag but never rolls the epoch back, so a thread that was already blocked
/// when the signal fired cannot be tricked into re-blocking.
#[derive(Debug)]
struct ManualResetState {
    signaled: bool,
    signal_epoch: u64,
}

/// A waitable event where a signal persists until explicitly cleared.
///
/// [`signal`][Self::signal] releases every thread currently blocked in a wait
/// and leaves the event signaled, so all future waits pass immediately until
/// [`reset`][Self::reset] clears it. Waiting never mutates the event.
///
/// Created unsignaled. All methods take `&self`; share the event between
/// threads by reference or inside an `Arc`.
///
/// # Examples
///
/// ```rust
/// use std::thread;
///
/// use waitable_events::ManualResetWaitableEvent;
///
/// let shutdown = ManualResetWaitableEvent::new();
///
/// thread::scope(|scope| {
///     for _ in 0..4 {
///         scope.spawn(|| shutdown.wait());
///     }
///
///     shutdown.signal();
/// });
///
/// // The signal persists across any number of waits.
/// shutdown.wait();
/// assert!(shutdown.is_signaled());
/// ```
#[derive(Debug)]
pub struct ManualResetWaitableEvent {
    monitor: Monitor<ManualResetState>,
}

impl ManualResetWaitableEvent {
    /// Creates the event in the unsignaled state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            monitor: Monitor::new(ManualResetState {
                signaled: false,
                signal_epoch: 0,
            }),
        }
    }

    /// Signals the event, releasing every blocked waiter.
    ///
    /// The event stays signaled until [`reset`][Self::reset]; signaling an
    /// already-signaled event changes nothing observable.
    pub fn signal(&self) {
        let mut guard = self.monitor.enter();
        guard.signaled = true;
        guard.signal_epoch = guard.signal_epoch.wrapping_add(1);
        guard.signal_all();
    }

    /// Clears the signaled state.
    ///
    /// Threads released by an earlier [`signal`][Self::signal] but not yet
    /// resumed still complete their waits; the reset only affects waits that
    /// start afterwards.
    pub fn reset(&self) {
        self.monitor.enter().signaled = false;
    }

    /// Blocks until the event is signaled; returns immediately if it already
    /// is. Never clears the signaled state.
    pub fn wait(&self) {
        let mut guard = self.monitor.enter();
        let epoch_at_entry = guard.signal_epoch;

        // The epoch, not the flag, proves delivery: once a signal fires while
        // this thread is blocked, a concurrent reset() cannot make it
        // re-block.
        while !guard.signaled && guard.signal_epoch == epoch_at_entry {
            guard = guard.wait();
        }
    }

    /// As [`wait`][Self::wait], but gives up once `timeout` has elapsed.
    ///
    /// Returns [`EventWaitResult::Signaled`] if released by a signal (the
    /// event is *not* cleared) and [`EventWaitResult::TimedOut`] otherwise. A
    /// zero or negative timeout performs a single non-blocking check. The call
    /// never reports a timeout before `timeout` has elapsed, and returns soon
    /// after it elapses when no signal arrives.
    pub fn wait_with_timeout(&self, timeout: TimeDelta) -> EventWaitResult {
        let start = TimePoint::now();

        let mut guard = self.monitor.enter();
        let epoch_at_entry = guard.signal_epoch;

        while !guard.signaled && guard.signal_epoch == epoch_at_entry {
            let elapsed = TimePoint::now() - start;
            if elapsed >= timeout {
                return EventWaitResult::TimedOut;
            }

            // The condition variable may wake early or spuriously; the loop
            // re-checks the flag, the epoch and the deadline.
            let (reacquired, _) = guard.wait_timeout((timeout - elapsed).to_duration());
            guard = reacquired;
        }

        EventWaitResult::Signaled
    }

    /// Racy observation of the signaled state, for tests and diagnostics only.
    ///
    /// The value may be stale by the time the caller looks at it; never use it
    /// to make synchronization decisions.
    #[must_use]
    pub fn is_signaled(&self) -> bool {
        self.monitor.enter().signaled
    }
}

impl Default for ManualResetWaitableEvent {
    fn default() -> Self {
        Self::new()
    }
}
