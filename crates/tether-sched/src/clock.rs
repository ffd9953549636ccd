//! Throttled publication of the simulation clock.

use tether_core::time::SimTime;

/// Decides, once per step, whether the current simulation time should be
/// published to external consumers.
///
/// A non-positive frequency means publish every step. Otherwise a time is
/// published only when at least `1 / frequency_hz` simulated seconds have
/// elapsed since the last publication. There is no buffering or catch-up:
/// a missed window is simply skipped.
///
/// # Examples
///
/// ```
/// use tether_core::SimTime;
/// use tether_sched::ClockPublisher;
///
/// let mut clock = ClockPublisher::new(2.0, SimTime::ZERO);
/// assert_eq!(clock.on_step(SimTime::new(0.25)), None);
/// assert_eq!(clock.on_step(SimTime::new(0.5)), Some(SimTime::new(0.5)));
/// ```
#[derive(Debug)]
pub struct ClockPublisher {
    frequency_hz: f64,
    last_published: SimTime,
}

impl ClockPublisher {
    /// Create a publisher. `now` seeds the last-published timestamp so the
    /// first window is measured from startup, matching the step loop it
    /// runs in.
    pub fn new(frequency_hz: f64, now: SimTime) -> Self {
        Self {
            frequency_hz,
            last_published: now,
        }
    }

    /// The configured publication frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Evaluate one step. Returns `Some(now)` when the clock should be
    /// published this step, updating the throttle state; `None` otherwise.
    pub fn on_step(&mut self, now: SimTime) -> Option<SimTime> {
        if self.frequency_hz > 0.0
            && (now - self.last_published).seconds() < 1.0 / self.frequency_hz
        {
            return None;
        }
        self.last_published = now;
        Some(now)
    }
}
