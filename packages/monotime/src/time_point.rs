use std::ops::Sub;
use std::time::Instant;

use crate::TimeDelta;

/// A point on the monotonic clock.
///
/// Not tied to the wall clock: comparisons and subtraction are meaningful
/// between two points from the same process, but a point carries no calendar
/// interpretation. Subtracting two points yields a signed [`TimeDelta`], which
/// is negative when the right-hand side is the later point.
///
/// # Examples
///
/// ```rust
/// use monotime::{TimeDelta, TimePoint};
///
/// let earlier = TimePoint::now();
/// let later = TimePoint::now();
///
/// assert!(later - earlier >= TimeDelta::ZERO);
/// assert!(earlier - later <= TimeDelta::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimePoint {
    inner: Instant,
}

impl TimePoint {
    /// Reads the current point from the monotonic clock.
    #[must_use]
    pub fn now() -> Self {
        Self {
            inner: Instant::now(),
        }
    }
}

impl Sub for TimePoint {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        if self.inner >= rhs.inner {
            TimeDelta::from(self.inner.duration_since(rhs.inner))
        } else {
            -TimeDelta::from(rhs.inner.duration_since(self.inner))
        }
    }
}

impl From<Instant> for TimePoint {
    fn from(inner: Instant) -> Self {
        Self { inner }
    }
}

impl From<TimePoint> for Instant {
    fn from(point: TimePoint) -> Self {
        point.inner
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn now_is_monotonic() {
        let first = TimePoint::now();
        let second = TimePoint::now();

        assert!(second >= first);
    }

    #[test]
    fn subtraction_is_signed() {
        let first = TimePoint::now();
        std::thread::sleep(Duration::from_millis(1));
        let second = TimePoint::now();

        assert!(second - first > TimeDelta::ZERO);
        assert!(first - second < TimeDelta::ZERO);
        assert_eq!(first - first, TimeDelta::ZERO);
    }

    #[test]
    fn forward_and_backward_deltas_mirror() {
        let first = TimePoint::now();
        std::thread::sleep(Duration::from_millis(1));
        let second = TimePoint::now();

        assert_eq!(second - first, -(first - second));
    }

    #[test]
    fn instant_round_trip() {
        let instant = Instant::now();
        let point = TimePoint::from(instant);

        assert_eq!(Instant::from(point), instant);
    }

    #[test]
    fn thread_safe_value_type() {
        static_assertions::assert_impl_all!(TimePoint: Send, Sync, Copy);
    }
}
