//! Best-effort millisecond timestamps for timing measurements.
//!
//! The process-wide clock picks its source once, on first use: the
//! high-resolution monotonic timer when the host has one, otherwise the wall
//! clock. Values are milliseconds since an opaque origin and are only
//! comparable within one process run.
//!
//! ```rust
//! let start = numlit::clock::now();
//! let end = numlit::clock::now();
//! if numlit::clock::source() == numlit::clock::ClockSource::HighResolution {
//!     assert!(end >= start);
//! }
//! ```
//!
//! Consumers that need determinism take a [`Clock`] instead of calling
//! [`now`], and tests hand them a [`ManualClock`].

mod manual;
mod stopwatch;
mod system;

#[cfg(test)]
mod tests;

use std::sync::{Arc, OnceLock};

pub use manual::ManualClock;
pub use stopwatch::Stopwatch;
pub use system::{ClockSource, HostTimers, SystemClock, TimerCapability};

/// A source of millisecond timestamps.
pub trait Clock: Send + Sync {
    /// Milliseconds since this clock's origin.
    fn now_ms(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

static GLOBAL: OnceLock<SystemClock> = OnceLock::new();

/// The process-wide clock, bound on first call.
///
/// Concurrent first calls race on a guarded initializer and all observe the
/// same binding.
pub fn global() -> &'static SystemClock {
    GLOBAL.get_or_init(|| SystemClock::select(&HostTimers))
}

/// Milliseconds since the process clock's origin.
#[must_use]
pub fn now() -> f64 {
    global().now_ms()
}

/// The source the process clock is bound to.
#[must_use]
pub fn source() -> ClockSource {
    global().source()
}
