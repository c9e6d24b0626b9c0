use core::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use super::Clock;

/// Which time source a [`SystemClock`] is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClockSource {
    /// Monotonic, high-resolution timer; readings never decrease.
    HighResolution,
    /// Wall clock; readings regress if the system time is set backwards.
    WallClock,
}

impl ClockSource {
    /// Stable lower-case name, as used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighResolution => "high_resolution",
            Self::WallClock => "wall_clock",
        }
    }

    /// Whether readings from this source are guaranteed non-decreasing.
    #[must_use]
    pub const fn is_monotonic(self) -> bool {
        matches!(self, Self::HighResolution)
    }
}

impl fmt::Display for ClockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host capability check consulted when a [`SystemClock`] is selected.
pub trait TimerCapability {
    /// Whether the host exposes a high-resolution monotonic timer.
    fn has_high_resolution_timer(&self) -> bool;
}

/// The capabilities of the compilation target.
///
/// `std::time::Instant` is unsupported on `wasm32-unknown-unknown`; every
/// other target has it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTimers;

impl TimerCapability for HostTimers {
    fn has_high_resolution_timer(&self) -> bool {
        !cfg!(all(target_arch = "wasm32", target_os = "unknown"))
    }
}

/// A clock bound once, at construction, to the best available source.
#[derive(Debug)]
pub struct SystemClock {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    HighResolution(Monotonic),
    WallClock,
}

impl SystemClock {
    /// Bind to the high-resolution timer if `capability` reports one,
    /// otherwise to the wall clock. The choice is permanent.
    pub fn select<T: TimerCapability + ?Sized>(capability: &T) -> Self {
        let clock = if capability.has_high_resolution_timer() {
            Self::high_resolution()
        } else {
            Self::wall_clock()
        };
        tracing::debug!(source = clock.source().as_str(), "bound clock source");
        clock
    }

    /// A clock on the high-resolution timer, with its origin at this call.
    #[must_use]
    pub fn high_resolution() -> Self {
        Self {
            inner: Inner::HighResolution(Monotonic::new()),
        }
    }

    /// A clock on the wall clock, with its origin at the Unix epoch.
    #[must_use]
    pub const fn wall_clock() -> Self {
        Self {
            inner: Inner::WallClock,
        }
    }

    /// The bound source.
    #[must_use]
    pub const fn source(&self) -> ClockSource {
        match self.inner {
            Inner::HighResolution(_) => ClockSource::HighResolution,
            Inner::WallClock => ClockSource::WallClock,
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        match &self.inner {
            Inner::HighResolution(monotonic) => monotonic.elapsed_ms(),
            Inner::WallClock => wall_clock_ms(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn wall_clock_ms() -> f64 {
    // before the epoch reads as 0 rather than failing
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as f64
}

#[cfg(not(feature = "tsc"))]
#[derive(Debug)]
struct Monotonic {
    origin: std::time::Instant,
}

#[cfg(not(feature = "tsc"))]
impl Monotonic {
    fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}

#[cfg(feature = "tsc")]
#[derive(Debug)]
struct Monotonic {
    clock: quanta::Clock,
    origin: quanta::Instant,
}

#[cfg(feature = "tsc")]
impl Monotonic {
    fn new() -> Self {
        let clock = quanta::Clock::new();
        let origin = clock.now();
        Self { clock, origin }
    }

    fn elapsed_ms(&self) -> f64 {
        self.clock.now().duration_since(self.origin).as_secs_f64() * 1_000.0
    }
}
