use std::{
    string::ToString,
    sync::{
        Arc, Barrier, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    vec::Vec,
};

use super::*;

struct NoHighResolution;

impl TimerCapability for NoHighResolution {
    fn has_high_resolution_timer(&self) -> bool {
        false
    }
}

#[test]
fn selection_follows_capability() {
    assert_eq!(
        SystemClock::select(&NoHighResolution).source(),
        ClockSource::WallClock
    );
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    assert_eq!(
        SystemClock::select(&HostTimers).source(),
        ClockSource::HighResolution
    );
}

#[test]
fn high_resolution_is_non_decreasing() {
    let clock = SystemClock::high_resolution();
    let mut previous = clock.now_ms();
    assert!(previous >= 0.0);
    for _ in 0..10_000 {
        let next = clock.now_ms();
        assert!(next >= previous, "{next} < {previous}");
        previous = next;
    }
}

#[test]
fn wall_clock_reads_epoch_milliseconds() {
    // 2020-09-13T12:26:40Z; anything earlier means the source is wrong
    assert!(SystemClock::wall_clock().now_ms() > 1.6e12);
}

struct CountingHost {
    probes: AtomicUsize,
}

impl TimerCapability for CountingHost {
    fn has_high_resolution_timer(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        HostTimers.has_high_resolution_timer()
    }
}

#[test]
fn racing_first_use_selects_once() {
    const THREADS: usize = 8;
    let cell = OnceLock::new();
    let host = CountingHost {
        probes: AtomicUsize::new(0),
    };
    let barrier = Barrier::new(THREADS);

    let bound: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    let clock: &SystemClock = cell.get_or_init(|| SystemClock::select(&host));
                    core::ptr::from_ref(clock) as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(bound.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(host.probes.load(Ordering::SeqCst), 1);
}

#[test]
fn global_binding_is_stable() {
    assert!(core::ptr::eq(global(), global()));
    assert_eq!(source(), global().source());
}

#[test]
fn global_now_never_goes_backwards_when_monotonic() {
    let first = now();
    let second = now();
    if source().is_monotonic() {
        assert!(second >= first);
    }
}

#[test]
fn manual_clock_is_shared_between_clones() {
    let clock = ManualClock::new(5.0);
    let shared = Arc::new(clock.clone());
    assert_eq!(clock.advance(1.5), 6.5);
    assert_eq!(shared.now_ms(), 6.5);
    clock.set(-3.0);
    assert_eq!(shared.now_ms(), -3.0);
}

#[test]
fn manual_clock_advances_atomically() {
    let clock = ManualClock::default();
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let clock = clock.clone();
            thread::spawn(move || {
                for _ in 0..1_000 {
                    clock.advance(1.0);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(clock.now_ms(), 4_000.0);
}

#[test]
fn stopwatch_measures_through_references() {
    let clock = ManualClock::new(100.0);
    let mut watch = Stopwatch::start(&clock);
    clock.advance(25.0);
    assert_eq!(watch.elapsed_ms(), 25.0);
    assert_eq!(watch.lap(), 25.0);
    assert_eq!(watch.elapsed_ms(), 0.0);
    assert_eq!(watch.clock().now_ms(), 125.0);
}

#[test]
fn source_names_are_stable() {
    assert_eq!(ClockSource::HighResolution.to_string(), "high_resolution");
    assert_eq!(ClockSource::WallClock.as_str(), "wall_clock");
    assert!(!ClockSource::WallClock.is_monotonic());
}
