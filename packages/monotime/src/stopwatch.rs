use crate::{TimeDelta, TimePoint};

/// Measures time elapsed from a starting point.
///
/// A new stopwatch is already measuring from the moment of its creation;
/// [`start`][Self::start] re-arms it. Purely informational - reading the
/// elapsed time has no synchronization role.
///
/// # Examples
///
/// ```rust
/// use monotime::{Stopwatch, TimeDelta};
///
/// let mut stopwatch = Stopwatch::new();
///
/// // Do some work...
/// std::thread::sleep(std::time::Duration::from_millis(5));
///
/// assert!(stopwatch.elapsed() >= TimeDelta::from_milliseconds(5));
///
/// // Re-arm to measure the next phase.
/// stopwatch.start();
/// assert!(stopwatch.elapsed() < TimeDelta::from_milliseconds(5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start_time: TimePoint,
}

impl Stopwatch {
    /// Creates a stopwatch measuring from the current moment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: TimePoint::now(),
        }
    }

    /// Re-records the starting point as the current moment.
    pub fn start(&mut self) {
        self.start_time = TimePoint::now();
    }

    /// The time elapsed since the most recent [`start`][Self::start] (or
    /// creation, whichever came last). May be read any number of times.
    #[must_use]
    pub fn elapsed(&self) -> TimeDelta {
        TimePoint::now() - self.start_time
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn elapsed_is_never_negative() {
        let stopwatch = Stopwatch::new();

        assert!(stopwatch.elapsed() >= TimeDelta::ZERO);
    }

    #[test]
    fn elapsed_grows() {
        let stopwatch = Stopwatch::new();

        let first = stopwatch.elapsed();
        std::thread::sleep(Duration::from_millis(1));
        let second = stopwatch.elapsed();

        assert!(second >= first);
    }

    #[test]
    fn elapsed_covers_a_sleep() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start();

        std::thread::sleep(Duration::from_millis(10));

        assert!(stopwatch.elapsed() >= TimeDelta::from_milliseconds(10));
    }

    #[test]
    fn start_re_arms() {
        let mut stopwatch = Stopwatch::new();

        std::thread::sleep(Duration::from_millis(5));
        stopwatch.start();

        assert!(stopwatch.elapsed() < TimeDelta::from_milliseconds(5));
    }
}
