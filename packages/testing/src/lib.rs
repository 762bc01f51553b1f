//! Private helpers for testing and examples in this workspace.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use monotime::TimeDelta;
use rand::Rng;

/// Upper bound on how long a watchdog-wrapped test may run before the process
/// is taken down. Generous, because the concurrency tests deliberately sleep.
const WATCHDOG_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a test closure with a watchdog so a lost wakeup shows up as a test
/// failure instead of a hung build.
///
/// The closure runs on its own thread; if it has not produced a result within
/// the watchdog timeout, the wrapper panics. A panic inside the closure is
/// propagated unchanged.
///
/// # Panics
///
/// Panics if the closure exceeds the watchdog timeout.
///
/// # Example
///
/// ```rust
/// use testing::with_watchdog;
///
/// let result = with_watchdog(|| 2 + 2);
/// assert_eq!(result, 4);
/// ```
pub fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let (result_tx, result_rx) = mpsc::channel();

    let test_thread = thread::spawn(move || {
        // A send failure means the watchdog already gave up; nothing to do.
        drop(result_tx.send(test_fn()));
    });

    match result_rx.recv_timeout(WATCHDOG_TIMEOUT) {
        Ok(result) => {
            test_thread
                .join()
                .expect("test thread cannot panic after reporting its result");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("test exceeded the {WATCHDOG_TIMEOUT:?} watchdog timeout")
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => match test_thread.join() {
            Ok(()) => panic!("test thread exited without reporting a result"),
            Err(payload) => std::panic::resume_unwind(payload),
        },
    }
}

/// Blocks the current thread for the given delta. Negative and zero deltas
/// return immediately.
pub fn sleep_for(duration: TimeDelta) {
    thread::sleep(duration.to_duration());
}

/// Sleeps for a random 0-20 ms, to jitter thread interleavings in concurrency
/// tests.
pub fn epsilon_random_sleep() {
    let milliseconds = rand::rng().random_range(0..20_i64);
    sleep_for(TimeDelta::from_milliseconds(milliseconds));
}

#[cfg(test)]
mod tests {
    use monotime::Stopwatch;

    use super::*;

    #[test]
    fn watchdog_returns_the_closure_result() {
        assert_eq!(with_watchdog(|| "done"), "done");
    }

    #[test]
    fn watchdog_propagates_panics() {
        let result = std::panic::catch_unwind(|| {
            with_watchdog(|| panic!("inner failure"));
        });

        assert!(result.is_err());
    }

    #[test]
    fn sleep_for_covers_the_requested_delta() {
        let stopwatch = Stopwatch::new();

        sleep_for(TimeDelta::from_milliseconds(10));

        assert!(stopwatch.elapsed() >= TimeDelta::from_milliseconds(10));
    }

    #[test]
    fn sleep_for_negative_returns_immediately() {
        let stopwatch = Stopwatch::new();

        sleep_for(TimeDelta::from_milliseconds(-10));

        assert!(stopwatch.elapsed() < TimeDelta::from_milliseconds(10));
    }

    #[test]
    fn epsilon_random_sleep_is_short() {
        let stopwatch = Stopwatch::new();

        epsilon_random_sleep();

        // 0-20 ms requested; leave plenty of scheduling slack.
        assert!(stopwatch.elapsed() < TimeDelta::from_milliseconds(500));
    }
}
