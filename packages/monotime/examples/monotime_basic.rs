//! Demonstrates the basic usage of the `monotime` value types.

use std::thread;

use monotime::{Stopwatch, TimeDelta, TimePoint};

fn main() {
    // Timeout arithmetic with a signed delta.
    let timeout = TimeDelta::from_milliseconds(100);
    let start = TimePoint::now();

    thread::sleep(TimeDelta::from_milliseconds(20).to_duration());

    let elapsed = TimePoint::now() - start;
    let remaining = timeout - elapsed;
    println!("elapsed {} ms, {} ms of the timeout remain", elapsed.as_milliseconds(), remaining.as_milliseconds());

    // A stopwatch measures from its creation (or the latest re-arm).
    let mut stopwatch = Stopwatch::new();
    thread::sleep(TimeDelta::from_milliseconds(10).to_duration());
    println!("first phase took {} ms", stopwatch.elapsed().as_milliseconds());

    stopwatch.start();
    println!("freshly re-armed: {} ns", stopwatch.elapsed().as_nanoseconds());
}
