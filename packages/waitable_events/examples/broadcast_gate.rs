//! Uses a manual-reset event as a start gate: worker threads block until the
//! gate opens, then all of them run.

use std::thread;

use monotime::Stopwatch;
use waitable_events::ManualResetWaitableEvent;

fn main() {
    let start_gate = ManualResetWaitableEvent::new();

    thread::scope(|scope| {
        for worker in 0..4 {
            scope.spawn({
                let start_gate = &start_gate;
                move || {
                    let stopwatch = Stopwatch::new();
                    start_gate.wait();
                    println!(
                        "worker {worker} released after {} ms",
                        stopwatch.elapsed().as_milliseconds()
                    );
                }
            });
        }

        // Let the workers reach the gate, then open it for all of them at
        // once. Workers spawned after this point would pass straight through.
        thread::sleep(std::time::Duration::from_millis(100));
        start_gate.signal();
    });

    println!("gate still open: {}", start_gate.is_signaled());
}
