//! Uses an auto-reset event to hand work items to a single worker thread, one
//! at a time, with a bounded wait for each acknowledgment.

use std::sync::Mutex;
use std::thread;

use monotime::TimeDelta;
use waitable_events::AutoResetWaitableEvent;

fn main() {
    let work_ready = AutoResetWaitableEvent::new();
    let work_done = AutoResetWaitableEvent::new();
    let mailbox = Mutex::new(None::<String>);

    thread::scope(|scope| {
        scope.spawn(|| {
            loop {
                // Each signal releases exactly one wait, so every work item is
                // processed exactly once.
                work_ready.wait();

                let Some(item) = mailbox.lock().expect("mailbox lock").take() else {
                    // An empty mailbox is the shutdown request.
                    work_done.signal();
                    return;
                };

                println!("worker: processing {item}");
                work_done.signal();
            }
        });

        for n in 1..=3 {
            *mailbox.lock().expect("mailbox lock") = Some(format!("item #{n}"));
            work_ready.signal();

            if work_done.wait_with_timeout(TimeDelta::from_seconds(5)).timed_out() {
                eprintln!("worker did not acknowledge item #{n} in time");
                return;
            }
        }

        // Shut down: signal with nothing in the mailbox.
        work_ready.signal();
        work_done.wait();
        println!("worker finished");
    });
}
