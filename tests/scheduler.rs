// tests/scheduler.rs
//
// Timer lifecycle with simulated time. Instants are fabricated by offsetting
// a base instant, so no test actually sleeps.

use std::time::{Duration, Instant};

use dairyscan::scheduler::Scheduler;

const INTERVAL: Duration = Duration::from_secs(600);

#[test]
fn fires_immediately_on_start() {
    let mut sched = Scheduler::new(INTERVAL);
    let t0 = Instant::now();

    assert!(!sched.due(t0), "inactive scheduler must not fire");
    sched.start();
    assert!(sched.due(t0), "first tick fires immediately");
}

#[test]
fn fires_once_per_interval() {
    let mut sched = Scheduler::new(INTERVAL);
    let t0 = Instant::now();
    sched.start();
    sched.mark(t0);

    assert!(!sched.due(t0 + Duration::from_secs(1)));
    assert!(!sched.due(t0 + INTERVAL - Duration::from_secs(1)));
    assert!(sched.due(t0 + INTERVAL));
    assert!(sched.due(t0 + INTERVAL * 3));
}

#[test]
fn stop_prevents_further_ticks() {
    // Mount syncs once; unmount before the next tick must prevent any
    // further sync even as time advances.
    let mut sched = Scheduler::new(INTERVAL);
    let t0 = Instant::now();
    let mut sync_calls = 0;

    sched.start();
    if sched.due(t0) {
        sync_calls += 1;
        sched.mark(t0);
    }
    assert_eq!(sync_calls, 1);

    sched.stop();
    for mins in [1u64, 10, 60, 600] {
        if sched.due(t0 + Duration::from_secs(mins * 60)) {
            sync_calls += 1;
        }
    }
    assert_eq!(sync_calls, 1, "no sync after teardown");
}

#[test]
fn manual_refresh_resets_the_clock() {
    let mut sched = Scheduler::new(INTERVAL);
    let t0 = Instant::now();
    sched.start();
    sched.mark(t0);

    // Manual refresh halfway through the window…
    let half = t0 + INTERVAL / 2;
    sched.mark(half);

    // …pushes the next timer tick out by a full interval from there.
    assert!(!sched.due(t0 + INTERVAL));
    assert!(sched.due(half + INTERVAL));
}

#[test]
fn restart_fires_immediately_again() {
    let mut sched = Scheduler::new(INTERVAL);
    let t0 = Instant::now();
    sched.start();
    sched.mark(t0);
    sched.stop();

    sched.start();
    assert!(sched.due(t0 + Duration::from_secs(1)));
}

#[test]
fn time_to_next_counts_down() {
    let mut sched = Scheduler::new(INTERVAL);
    let t0 = Instant::now();

    assert_eq!(sched.time_to_next(t0), Duration::ZERO); // inactive
    sched.start();
    assert_eq!(sched.time_to_next(t0), Duration::ZERO); // due now
    sched.mark(t0);
    assert_eq!(sched.time_to_next(t0 + Duration::from_secs(60)), Duration::from_secs(540));
    assert_eq!(sched.time_to_next(t0 + INTERVAL * 2), Duration::ZERO);
}
