//! Simulation time scalars and effect-window durations.
//!
//! [`SimTime`] is the simulation's internal monotonic clock, distinct from
//! wall-clock time. Comparisons are exact — callers needing tolerance apply
//! it themselves. [`SimDuration`] bounds an effect window; a negative value
//! is the *indefinite* sentinel (the effect never auto-expires).

use std::fmt;
use std::ops::{Add, Sub};

/// A point on the simulation clock, in seconds since simulation start.
///
/// Monotonically non-decreasing as observed from the stepping thread.
/// Exact comparison semantics: no epsilon is applied anywhere in Tether.
///
/// # Examples
///
/// ```
/// use tether_core::{SimDuration, SimTime};
///
/// let start = SimTime::new(2.0);
/// let end = start + SimDuration::new(0.5);
/// assert_eq!(end, SimTime::new(2.5));
/// assert!(start < end);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct SimTime(f64);

impl SimTime {
    /// Time zero: the instant the simulation started.
    pub const ZERO: SimTime = SimTime(0.0);

    /// Construct from seconds since simulation start.
    pub fn new(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Seconds since simulation start.
    pub fn seconds(self) -> f64 {
        self.0
    }

    /// The later of two instants.
    ///
    /// Used to clamp a requested effect start time so a job cannot
    /// retroactively start before it was created.
    pub fn max(self, other: SimTime) -> SimTime {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<f64> for SimTime {
    fn from(seconds: f64) -> Self {
        Self(seconds)
    }
}

impl Add<SimDuration> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: SimDuration) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl Sub<SimTime> for SimTime {
    type Output = SimDuration;

    fn sub(self, rhs: SimTime) -> SimDuration {
        SimDuration(self.0 - rhs.0)
    }
}

/// Length of an effect window, in simulation seconds.
///
/// `duration >= 0` means the effect is active for exactly
/// `[start, start + duration]`, both endpoints inclusive. `duration < 0`
/// is the **indefinite** sentinel: the effect never auto-expires and is
/// only removed by explicit cancellation.
///
/// # Examples
///
/// ```
/// use tether_core::SimDuration;
///
/// assert!(!SimDuration::new(0.0).is_indefinite());
/// assert!(SimDuration::new(-1.0).is_indefinite());
/// assert!(SimDuration::INDEFINITE.is_indefinite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct SimDuration(f64);

impl SimDuration {
    /// The canonical indefinite sentinel. Any negative duration behaves
    /// identically.
    pub const INDEFINITE: SimDuration = SimDuration(-1.0);

    /// A zero-length window: active for exactly one instant.
    pub const ZERO: SimDuration = SimDuration(0.0);

    /// Construct from seconds. Negative values mean indefinite.
    pub fn new(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Window length in seconds. Negative when indefinite.
    pub fn seconds(self) -> f64 {
        self.0
    }

    /// Whether this duration never expires.
    pub fn is_indefinite(self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for SimDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_indefinite() {
            write!(f, "indefinite")
        } else {
            write!(f, "{}s", self.0)
        }
    }
}

impl From<f64> for SimDuration {
    fn from(seconds: f64) -> Self {
        Self(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_exact() {
        assert!(SimTime::new(1.0) < SimTime::new(1.0 + f64::EPSILON));
        assert_eq!(SimTime::new(3.25), SimTime::new(3.25));
    }

    #[test]
    fn add_duration_produces_window_end() {
        let end = SimTime::new(10.0) + SimDuration::new(2.5);
        assert_eq!(end, SimTime::new(12.5));
    }

    #[test]
    fn sub_times_produces_duration() {
        let dt = SimTime::new(4.0) - SimTime::new(1.5);
        assert_eq!(dt, SimDuration::new(2.5));
    }

    #[test]
    fn max_clamps_to_later_instant() {
        let now = SimTime::new(5.0);
        assert_eq!(SimTime::new(2.0).max(now), now);
        assert_eq!(SimTime::new(8.0).max(now), SimTime::new(8.0));
    }

    #[test]
    fn negative_duration_is_indefinite() {
        assert!(SimDuration::new(-0.001).is_indefinite());
        assert!(!SimDuration::ZERO.is_indefinite());
        assert!(!SimDuration::new(7.0).is_indefinite());
    }

    #[test]
    fn display_forms() {
        assert_eq!(SimTime::new(1.5).to_string(), "1.5s");
        assert_eq!(SimDuration::new(0.25).to_string(), "0.25s");
        assert_eq!(SimDuration::INDEFINITE.to_string(), "indefinite");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn max_never_earlier_than_either(a in -1e6f64..1e6, b in -1e6f64..1e6) {
                let m = SimTime::new(a).max(SimTime::new(b));
                prop_assert!(m >= SimTime::new(a));
                prop_assert!(m >= SimTime::new(b));
            }

            #[test]
            fn add_then_sub_roundtrips(t in -1e6f64..1e6, d in 0f64..1e6) {
                let end = SimTime::new(t) + SimDuration::new(d);
                let back = end - SimTime::new(t);
                prop_assert!((back.seconds() - d).abs() < 1e-9);
            }
        }
    }
}
