use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use super::Clock;

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and pass
/// another to the code under test.
///
/// ```rust
/// use numlit::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new(10.0);
/// let handle = clock.clone();
/// clock.advance(2.5);
/// assert_eq!(handle.now_ms(), 12.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    /// A clock reading `start_ms`.
    #[must_use]
    pub fn new(start_ms: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(start_ms.to_bits())),
        }
    }

    /// Set the reading.
    pub fn set(&self, ms: f64) {
        self.bits.store(ms.to_bits(), Ordering::Release);
    }

    /// Move the reading forward (or back, for negative `ms`) and return the
    /// new reading.
    pub fn advance(&self, ms: f64) -> f64 {
        let step = |bits: u64| Some((f64::from_bits(bits) + ms).to_bits());
        // the closure never returns None, so both arms carry the old bits
        let previous = match self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, step)
        {
            Ok(bits) | Err(bits) => bits,
        };
        f64::from_bits(previous) + ms
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}
