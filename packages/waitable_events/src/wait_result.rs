/// The outcome of a bounded wait on a waitable event.
///
/// Timing out is not an error; it is the normal way a bounded wait reports
/// that no signal arrived in time, so this is a plain enum rather than a
/// `Result`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use = "a timed-out wait usually changes what the caller does next"]
pub enum EventWaitResult {
    /// The event was signaled within the timeout.
    Signaled,

    /// The timeout elapsed without the event being signaled.
    TimedOut,
}

impl EventWaitResult {
    /// Whether the wait ended because the timeout elapsed.
    #[must_use]
    pub const fn timed_out(self) -> bool {
        matches!(self, Self::TimedOut)
    }
}
