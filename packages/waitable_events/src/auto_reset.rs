use monotime::{TimeDelta, TimePoint};

use crate::monitor::Monitor;
use crate::wait_result::EventWaitResult;

/// A waitable event where each signal is consumed by exactly one waiter.
///
/// [`signal`][Self::signal] sets the event; the first wait to observe the
/// signaled state claims it, atomically clearing the event again. If nobody is
/// waiting, the signaled state persists until the next wait claims it. At most
/// one waiter is released per signal, no matter how many are blocked; which
/// one is unspecified.
///
/// Created unsignaled. All methods take `&self`; share the event between
/// threads by reference or inside an `Arc`.
///
/// # Examples
///
/// ```rust
/// use waitable_events::AutoResetWaitableEvent;
///
/// let event = AutoResetWaitableEvent::new();
///
/// event.signal();
/// event.wait(); // Returns immediately and consumes the signal.
///
/// // The claim cleared the event, so a bounded wait now times out.
/// assert!(event.wait_with_timeout(monotime::TimeDelta::ZERO).timed_out());
/// ```
#[derive(Debug)]
pub struct AutoResetWaitableEvent {
    monitor: Monitor<bool>,
}

impl AutoResetWaitableEvent {
    /// Creates the event in the unsignaled state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            monitor: Monitor::new(false),
        }
    }

    /// Signals the event, waking at most one blocked waiter.
    ///
    /// If no thread is waiting, the signaled state persists until the next
    /// wait claims it. Signaling an already-signaled event leaves a single
    /// pending signal, not two.
    pub fn signal(&self) {
        let mut guard = self.monitor.enter();
        *guard = true;
        guard.signal();
    }

    /// Clears the signaled state, discarding any pending signal.
    ///
    /// Threads already blocked in a wait remain blocked.
    pub fn reset(&self) {
        *self.monitor.enter() = false;
    }

    /// Blocks until the event is signaled, then claims the signal.
    ///
    /// Exactly one wait (across all threads) claims a given signal; the claim
    /// clears the event atomically with observing it.
    pub fn wait(&self) {
        let mut guard = self.monitor.enter();
        while !*guard {
            guard = guard.wait();
        }
        *guard = false;
    }

    /// As [`wait`][Self::wait], but gives up once `timeout` has elapsed.
    ///
    /// Returns [`EventWaitResult::Signaled`] if a signal was claimed (the
    /// event is unsignaled again on return) and [`EventWaitResult::TimedOut`]
    /// otherwise. A zero or negative timeout performs a single non-blocking
    /// check. The call never reports a timeout before `timeout` has elapsed,
    /// and returns soon after it elapses when no signal arrives.
    pub fn wait_with_timeout(&self, timeout: TimeDelta) -> EventWaitResult {
        let start = TimePoint::now();

        let mut guard = self.monitor.enter();
        while !*guard {
            let elapsed = TimePoint::now() - start;
            if elapsed >= timeout {
                return EventWaitResult::TimedOut;
            }

            // The condition variable may wake early or spuriously; the loop
            // re-checks both the flag and the deadline.
            let (reacquired, _) = guard.wait_timeout((timeout - elapsed).to_duration());
            guard = reacquired;
        }

        *guard = false;
        EventWaitResult::Signaled
    }

    /// Racy observation of the signaled state, for tests and diagnostics only.
    ///
    /// The value may be stale by the time the caller looks at it; never use it
    /// to make synchronization decisions.
    #[must_use]
    pub fn is_signaled(&self) -> bool {
        *self.monitor.enter()
    }
}

impl Default for AutoResetWaitableEvent {
    fn default() -> Self {
        Self::new()
    }
}
