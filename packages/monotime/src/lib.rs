//! Monotonic time value types for expressing and measuring timeouts.
//!
//! This package provides three small value types:
//!
//! - [`TimeDelta`] - a signed duration with nanosecond resolution and saturating
//!   arithmetic, so [`TimeDelta::MIN`] and [`TimeDelta::MAX`] act as sentinels
//!   that never overflow.
//! - [`TimePoint`] - an opaque instant on the monotonic clock; subtracting two
//!   points yields a signed [`TimeDelta`].
//! - [`Stopwatch`] - measures elapsed time from a starting point.
//!
//! The types exist to express "wait for at most this long" and "how long did
//! that take" without tying callers to the wall clock, which may jump backward
//! or forward under clock synchronization.
//!
//! # Basic usage
//!
//! ```rust
//! use monotime::{Stopwatch, TimeDelta};
//!
//! let stopwatch = Stopwatch::new();
//!
//! // Do some work...
//! std::thread::sleep(std::time::Duration::from_millis(10));
//!
//! let elapsed = stopwatch.elapsed();
//! assert!(elapsed >= TimeDelta::from_milliseconds(10));
//! ```
//!
//! # Timeout arithmetic
//!
//! ```rust
//! use monotime::{TimeDelta, TimePoint};
//!
//! let timeout = TimeDelta::from_milliseconds(100);
//! let start = TimePoint::now();
//!
//! let elapsed = TimePoint::now() - start;
//! let remaining = timeout - elapsed;
//! assert!(remaining <= timeout);
//! ```

mod stopwatch;
mod time_delta;
mod time_point;

pub use stopwatch::Stopwatch;
pub use time_delta::TimeDelta;
pub use time_point::TimePoint;
