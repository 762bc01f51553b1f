use std::ops::{Add, Neg, Sub};
use std::time::Duration;

const NANOS_PER_MICROSECOND: i64 = 1_000;
const NANOS_PER_MILLISECOND: i64 = 1_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A signed duration with nanosecond resolution.
///
/// Unlike [`std::time::Duration`], a `TimeDelta` can be negative, which is what
/// subtraction of two [`TimePoint`][crate::TimePoint] values naturally produces
/// and what remaining-timeout arithmetic needs ("the deadline was 3 ms ago").
///
/// All arithmetic saturates at [`TimeDelta::MIN`] and [`TimeDelta::MAX`], so
/// the two extremes behave as "infinitely far in the past/future" sentinels:
/// adding anything to `MAX` still yields `MAX`.
///
/// # Examples
///
/// ```rust
/// use monotime::TimeDelta;
///
/// let delta = TimeDelta::from_seconds(1);
/// assert_eq!(delta, TimeDelta::from_milliseconds(1000));
/// assert_eq!(delta.as_milliseconds(), 1000);
///
/// let negative = TimeDelta::ZERO - delta;
/// assert!(negative < TimeDelta::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeDelta {
    nanoseconds: i64,
}

impl TimeDelta {
    /// A delta of zero length.
    pub const ZERO: Self = Self::from_nanoseconds(0);

    /// The most negative representable delta; a sentinel for "infinitely long
    /// ago". Saturating arithmetic never moves past it.
    pub const MIN: Self = Self::from_nanoseconds(i64::MIN);

    /// The most positive representable delta; a sentinel for "effectively
    /// forever" (nearly 300 years). Saturating arithmetic never moves past it.
    pub const MAX: Self = Self::from_nanoseconds(i64::MAX);

    /// Creates a delta from a whole number of nanoseconds.
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self { nanoseconds }
    }

    /// Creates a delta from a whole number of microseconds, saturating on
    /// overflow.
    #[must_use]
    pub const fn from_microseconds(microseconds: i64) -> Self {
        Self::from_nanoseconds(microseconds.saturating_mul(NANOS_PER_MICROSECOND))
    }

    /// Creates a delta from a whole number of milliseconds, saturating on
    /// overflow.
    #[must_use]
    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self::from_nanoseconds(milliseconds.saturating_mul(NANOS_PER_MILLISECOND))
    }

    /// Creates a delta from a whole number of seconds, saturating on overflow.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::from_nanoseconds(seconds.saturating_mul(NANOS_PER_SECOND))
    }

    /// The length of the delta in nanoseconds.
    #[must_use]
    pub const fn as_nanoseconds(self) -> i64 {
        self.nanoseconds
    }

    /// The length of the delta in whole microseconds, truncated toward zero.
    #[must_use]
    #[expect(clippy::integer_division, reason = "truncation toward zero is the accessor contract")]
    pub const fn as_microseconds(self) -> i64 {
        self.nanoseconds / NANOS_PER_MICROSECOND
    }

    /// The length of the delta in whole milliseconds, truncated toward zero.
    #[must_use]
    #[expect(clippy::integer_division, reason = "truncation toward zero is the accessor contract")]
    pub const fn as_milliseconds(self) -> i64 {
        self.nanoseconds / NANOS_PER_MILLISECOND
    }

    /// The length of the delta in whole seconds, truncated toward zero.
    #[must_use]
    #[expect(clippy::integer_division, reason = "truncation toward zero is the accessor contract")]
    pub const fn as_seconds(self) -> i64 {
        self.nanoseconds / NANOS_PER_SECOND
    }

    /// Converts the delta to an unsigned [`Duration`], clamping negative deltas
    /// to [`Duration::ZERO`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    ///
    /// use monotime::TimeDelta;
    ///
    /// assert_eq!(
    ///     TimeDelta::from_milliseconds(5).to_duration(),
    ///     Duration::from_millis(5)
    /// );
    /// assert_eq!(
    ///     TimeDelta::from_milliseconds(-5).to_duration(),
    ///     Duration::ZERO
    /// );
    /// ```
    #[must_use]
    pub const fn to_duration(self) -> Duration {
        if self.nanoseconds <= 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(self.nanoseconds.unsigned_abs())
        }
    }
}

impl Add for TimeDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_nanoseconds(self.nanoseconds.saturating_add(rhs.nanoseconds))
    }
}

impl Sub for TimeDelta {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_nanoseconds(self.nanoseconds.saturating_sub(rhs.nanoseconds))
    }
}

impl Neg for TimeDelta {
    type Output = Self;

    fn neg(self) -> Self {
        // -MIN does not exist in i64; it saturates to MAX, preserving the
        // sentinel interpretation.
        Self::from_nanoseconds(self.nanoseconds.saturating_neg())
    }
}

impl From<Duration> for TimeDelta {
    /// Converts from an unsigned [`Duration`], saturating at
    /// [`TimeDelta::MAX`].
    fn from(duration: Duration) -> Self {
        Self::from_nanoseconds(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn ordering() {
        assert!(TimeDelta::MIN < TimeDelta::ZERO);
        assert!(TimeDelta::MAX > TimeDelta::ZERO);

        assert!(TimeDelta::ZERO > TimeDelta::from_milliseconds(-100));
        assert!(TimeDelta::ZERO < TimeDelta::from_milliseconds(100));
    }

    #[test]
    fn unit_equivalences() {
        assert_eq!(TimeDelta::from_milliseconds(1000), TimeDelta::from_seconds(1));
        assert_eq!(TimeDelta::from_microseconds(1000), TimeDelta::from_milliseconds(1));
        assert_eq!(TimeDelta::from_nanoseconds(1000), TimeDelta::from_microseconds(1));
    }

    #[test]
    fn accessors_truncate_toward_zero() {
        assert_eq!(TimeDelta::from_milliseconds(1500).as_seconds(), 1);
        assert_eq!(TimeDelta::from_milliseconds(-1500).as_seconds(), -1);
        assert_eq!(TimeDelta::from_microseconds(2500).as_milliseconds(), 2);
        assert_eq!(TimeDelta::from_seconds(3).as_milliseconds(), 3000);
    }

    #[test]
    fn arithmetic_saturates_at_sentinels() {
        assert_eq!(TimeDelta::MAX + TimeDelta::from_seconds(1), TimeDelta::MAX);
        assert_eq!(TimeDelta::MIN - TimeDelta::from_seconds(1), TimeDelta::MIN);
        assert_eq!(-TimeDelta::MIN, TimeDelta::MAX);
    }

    #[test]
    fn add_sub_neg() {
        let a = TimeDelta::from_milliseconds(30);
        let b = TimeDelta::from_milliseconds(10);

        assert_eq!(a + b, TimeDelta::from_milliseconds(40));
        assert_eq!(a - b, TimeDelta::from_milliseconds(20));
        assert_eq!(b - a, TimeDelta::from_milliseconds(-20));
        assert_eq!(-b, TimeDelta::from_milliseconds(-10));
    }

    #[test]
    fn duration_round_trips() {
        let delta = TimeDelta::from(Duration::from_millis(250));
        assert_eq!(delta, TimeDelta::from_milliseconds(250));
        assert_eq!(delta.to_duration(), Duration::from_millis(250));
    }

    #[test]
    fn negative_to_duration_clamps_to_zero() {
        assert_eq!(TimeDelta::from_seconds(-1).to_duration(), Duration::ZERO);
        assert_eq!(TimeDelta::MIN.to_duration(), Duration::ZERO);
        assert_eq!(TimeDelta::ZERO.to_duration(), Duration::ZERO);
    }

    #[test]
    fn oversized_duration_saturates() {
        assert_eq!(TimeDelta::from(Duration::MAX), TimeDelta::MAX);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(TimeDelta::default(), TimeDelta::ZERO);
    }

    #[test]
    fn thread_safe_value_type() {
        static_assertions::assert_impl_all!(TimeDelta: Send, Sync, Copy);
    }
}
