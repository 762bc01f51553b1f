use std::ops::{Deref, DerefMut};
use std::sync::{Condvar, Mutex, MutexGuard, WaitTimeoutResult};
use std::time::Duration;

// A poisoned lock means a thread panicked while holding it; the state it
// guards can no longer be trusted, so we give up rather than continue.
const ERR_POISONED_LOCK: &str = "monitor lock poisoned by a panic in another thread";

/// A mutex bundled with a condition variable, guarding a value of type `T`.
///
/// Entering the monitor yields a [`MonitorGuard`] that dereferences to the
/// guarded value and carries the wait/signal operations. The condition
/// variable can only be waited on or notified through a guard, so it is
/// impossible to use it without holding the lock - the classic
/// "wait without the mutex" mistake does not compile.
///
/// The lock is not reentrant: entering the monitor again from the thread that
/// already holds the guard deadlocks.
///
/// Poisoning is treated as a programming error and panics; this type follows
/// the convention that a panic while a lock is held leaves no state worth
/// recovering.
///
/// # Examples
///
/// ```rust
/// use std::thread;
///
/// use waitable_events::Monitor;
///
/// let work_ready = Monitor::new(false);
///
/// thread::scope(|scope| {
///     scope.spawn(|| {
///         let mut guard = work_ready.enter();
///         // The predicate must be re-checked in a loop: wakeups may be
///         // spurious.
///         while !*guard {
///             guard = guard.wait();
///         }
///     });
///
///     let mut guard = work_ready.enter();
///     *guard = true;
///     guard.signal();
/// });
/// ```
#[derive(Debug, Default)]
pub struct Monitor<T> {
    data: Mutex<T>,
    condvar: Condvar,
}

impl<T> Monitor<T> {
    /// Creates a monitor guarding the given value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            data: Mutex::new(value),
            condvar: Condvar::new(),
        }
    }

    /// Acquires the lock, blocking until it is available, and returns the
    /// guard. The lock is released when the guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a panic in another thread.
    pub fn enter(&self) -> MonitorGuard<'_, T> {
        MonitorGuard {
            monitor: self,
            inner: self.data.lock().expect(ERR_POISONED_LOCK),
        }
    }
}

/// Scoped access to a [`Monitor`]: proof that the calling thread holds the
/// lock, with the wait/signal operations that require it.
///
/// Dereferences to the guarded value.
#[must_use = "the monitor lock is released when the guard is dropped"]
#[derive(Debug)]
pub struct MonitorGuard<'a, T> {
    monitor: &'a Monitor<T>,
    inner: MutexGuard<'a, T>,
}

impl<'a, T> MonitorGuard<'a, T> {
    /// Atomically releases the lock and blocks the calling thread until
    /// notified, then reacquires the lock before returning the guard.
    ///
    /// May wake spuriously, without any corresponding
    /// [`signal`][Self::signal]; callers must re-check their predicate in a
    /// loop.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a panic in another thread.
    pub fn wait(self) -> Self {
        let Self { monitor, inner } = self;

        Self {
            monitor,
            inner: monitor.condvar.wait(inner).expect(ERR_POISONED_LOCK),
        }
    }

    /// As [`wait`][Self::wait], but blocks no longer than `timeout`.
    ///
    /// The returned [`WaitTimeoutResult`] says whether the timeout elapsed,
    /// but the wakeup may still be spurious or early; callers own the deadline
    /// arithmetic as well as the predicate re-check.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a panic in another thread.
    pub fn wait_timeout(self, timeout: Duration) -> (Self, WaitTimeoutResult) {
        let Self { monitor, inner } = self;

        let (inner, timeout_result) = monitor
            .condvar
            .wait_timeout(inner, timeout)
            .expect(ERR_POISONED_LOCK);

        (Self { monitor, inner }, timeout_result)
    }

    /// Wakes at most one thread currently blocked in [`wait`][Self::wait] or
    /// [`wait_timeout`][Self::wait_timeout] on this monitor.
    ///
    /// Has no effect if no thread is blocked; the wakeup is not queued for a
    /// future waiter.
    pub fn signal(&self) {
        self.monitor.condvar.notify_one();
    }

    /// Wakes every thread currently blocked in [`wait`][Self::wait] or
    /// [`wait_timeout`][Self::wait_timeout] on this monitor.
    pub fn signal_all(&self) {
        self.monitor.condvar.notify_all();
    }
}

impl<'a, T> Deref for MonitorGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<'a, T> DerefMut for MonitorGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::Duration;

    use monotime::{Stopwatch, TimeDelta};
    use testing::{sleep_for, with_watchdog};

    use super::*;

    #[test]
    fn guard_reads_and_writes_the_value() {
        let monitor = Monitor::new(10_u32);

        {
            let mut guard = monitor.enter();
            assert_eq!(*guard, 10);
            *guard = 20;
        }

        assert_eq!(*monitor.enter(), 20);
    }

    #[test]
    fn signal_wakes_a_waiter() {
        with_watchdog(|| {
            let monitor = Monitor::new(false);
            let woke = AtomicBool::new(false);

            thread::scope(|scope| {
                scope.spawn(|| {
                    let mut guard = monitor.enter();
                    while !*guard {
                        guard = guard.wait();
                    }
                    woke.store(true, Ordering::SeqCst);
                });

                // Give the waiter a chance to block first.
                sleep_for(TimeDelta::from_milliseconds(50));

                let mut guard = monitor.enter();
                *guard = true;
                guard.signal();
            });

            assert!(woke.load(Ordering::SeqCst));
        });
    }

    #[test]
    fn signal_all_wakes_every_waiter() {
        with_watchdog(|| {
            let monitor = Monitor::new(false);

            thread::scope(|scope| {
                for _ in 0..4 {
                    scope.spawn(|| {
                        let mut guard = monitor.enter();
                        while !*guard {
                            guard = guard.wait();
                        }
                    });
                }

                sleep_for(TimeDelta::from_milliseconds(50));

                let mut guard = monitor.enter();
                *guard = true;
                guard.signal_all();
            });
        });
    }

    #[test]
    fn wait_timeout_expires_without_a_signal() {
        let monitor = Monitor::new(());
        let stopwatch = Stopwatch::new();

        let mut guard = monitor.enter();
        // Loop in case of a spurious wakeup; nothing ever signals this monitor.
        while stopwatch.elapsed() < TimeDelta::from_milliseconds(20) {
            (guard, _) = guard.wait_timeout(Duration::from_millis(20));
        }

        assert!(stopwatch.elapsed() >= TimeDelta::from_milliseconds(20));
    }

    #[test]
    fn signal_without_a_waiter_is_not_queued() {
        let monitor = Monitor::new(());

        monitor.enter().signal();

        // The earlier notification must not terminate this wait.
        let guard = monitor.enter();
        let (_guard, timeout_result) = guard.wait_timeout(Duration::from_millis(20));

        assert!(timeout_result.timed_out());
    }

    #[test]
    fn send_sync() {
        static_assertions::assert_impl_all!(Monitor<u32>: Send, Sync);
    }
}
