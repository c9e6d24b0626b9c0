use super::Clock;

/// Elapsed-time measurement over any [`Clock`].
///
/// ```rust
/// use numlit::clock::{ManualClock, Stopwatch};
///
/// let clock = ManualClock::new(0.0);
/// let mut watch = Stopwatch::start(clock.clone());
/// clock.advance(40.0);
/// assert_eq!(watch.lap(), 40.0);
/// clock.advance(2.0);
/// assert_eq!(watch.elapsed_ms(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Stopwatch<C> {
    clock: C,
    started_ms: f64,
}

impl<C: Clock> Stopwatch<C> {
    /// Start measuring from the clock's current reading.
    pub fn start(clock: C) -> Self {
        let started_ms = clock.now_ms();
        Self { clock, started_ms }
    }

    /// Milliseconds since the start (or the last lap).
    pub fn elapsed_ms(&self) -> f64 {
        self.clock.now_ms() - self.started_ms
    }

    /// Return the elapsed milliseconds and restart from now.
    pub fn lap(&mut self) -> f64 {
        let now = self.clock.now_ms();
        let elapsed = now - self.started_ms;
        self.started_ms = now;
        elapsed
    }

    /// The underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
