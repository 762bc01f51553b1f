//! Waitable events for cross-thread signaling.
//!
//! This package provides two blocking signaling primitives built on a
//! mutex + condition-variable [`Monitor`]:
//!
//! - [`AutoResetWaitableEvent`] - each signal wakes at most one waiter and is
//!   consumed by the waiter that observes it.
//! - [`ManualResetWaitableEvent`] - a signal persists until explicitly
//!   cleared, releasing all current waiters and letting all future waits pass
//!   immediately.
//!
//! All waiting is real thread-level blocking that yields the CPU; there is no
//! async integration. Timeouts are expressed as [`monotime::TimeDelta`]
//! values, and a bounded wait reports its outcome as an [`EventWaitResult`].
//!
//! Signaling establishes a happens-before relationship: memory writes made by
//! the signaling thread before the signal are visible to any thread whose wait
//! completes because of it, so the events are usable for general cross-thread
//! handoff, not just as a boolean flag.
//!
//! # Handing work to another thread
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//!
//! use waitable_events::AutoResetWaitableEvent;
//!
//! let ready = Arc::new(AutoResetWaitableEvent::new());
//!
//! let worker = thread::spawn({
//!     let ready = Arc::clone(&ready);
//!     move || {
//!         // Blocks until the main thread signals, then consumes the signal.
//!         ready.wait();
//!     }
//! });
//!
//! ready.signal();
//! worker.join().unwrap();
//! ```
//!
//! # Releasing many threads at once
//!
//! ```rust
//! use std::thread;
//!
//! use waitable_events::ManualResetWaitableEvent;
//!
//! let start_gate = ManualResetWaitableEvent::new();
//!
//! thread::scope(|scope| {
//!     for _ in 0..4 {
//!         scope.spawn(|| start_gate.wait());
//!     }
//!
//!     // One signal releases every waiter, current and future.
//!     start_gate.signal();
//! });
//! ```

mod auto_reset;
mod manual_reset;
mod monitor;
mod wait_result;

pub use auto_reset::AutoResetWaitableEvent;
pub use manual_reset::ManualResetWaitableEvent;
pub use monitor::{Monitor, MonitorGuard};
pub use wait_result::EventWaitResult;
