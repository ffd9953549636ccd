//! Bridge configuration and validation.

use std::error::Error;
use std::fmt;

/// Configuration for [`Bridge`](crate::Bridge).
///
/// Controls the command worker pool, the request channel capacity, and
/// clock-publication throttling.
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Number of command worker threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[2, 16]`).
    pub worker_count: Option<usize>,
    /// Capacity of the bounded request channel. A full channel surfaces
    /// back-pressure to submitters as
    /// [`SubmitError::ChannelFull`](crate::SubmitError::ChannelFull).
    /// Default: 64.
    pub request_queue_capacity: usize,
    /// Clock publication frequency in Hz. Non-positive means publish
    /// every step. Default: 0 (every step).
    pub clock_frequency_hz: f64,
    /// Capacity of the bounded clock telemetry channel. Publications are
    /// dropped, never blocked on, when the consumer lags. Default: 16.
    pub clock_queue_capacity: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            request_queue_capacity: 64,
            clock_frequency_hz: 0.0,
            clock_queue_capacity: 16,
        }
    }
}

impl BridgeConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`; zero workers would leave
    /// submitted commands unserviced forever.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }

    /// Check structural invariants at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_queue_capacity == 0 {
            return Err(ConfigError::RequestQueueZero);
        }
        if self.clock_queue_capacity == 0 {
            return Err(ConfigError::ClockQueueZero);
        }
        if self.clock_frequency_hz.is_nan() || self.clock_frequency_hz.is_infinite() {
            return Err(ConfigError::InvalidClockFrequency {
                value: self.clock_frequency_hz,
            });
        }
        Ok(())
    }
}

/// Errors detected during [`BridgeConfig::validate`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Request channel capacity is zero.
    RequestQueueZero,
    /// Clock channel capacity is zero.
    ClockQueueZero,
    /// Clock frequency is NaN or infinite.
    InvalidClockFrequency {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestQueueZero => write!(f, "request queue capacity must be at least 1"),
            Self::ClockQueueZero => write!(f, "clock queue capacity must be at least 1"),
            Self::InvalidClockFrequency { value } => {
                write!(f, "clock frequency is not finite: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert_eq!(BridgeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_capacities_rejected() {
        let config = BridgeConfig {
            request_queue_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::RequestQueueZero));

        let config = BridgeConfig {
            clock_queue_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ClockQueueZero));
    }

    #[test]
    fn non_finite_frequency_rejected() {
        let config = BridgeConfig {
            clock_frequency_hz: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidClockFrequency { .. })
        ));
    }

    #[test]
    fn negative_frequency_is_valid_and_means_every_step() {
        let config = BridgeConfig {
            clock_frequency_hz: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn explicit_worker_count_clamped() {
        let config = BridgeConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        assert_eq!(config.resolved_worker_count(), 1);

        let config = BridgeConfig {
            worker_count: Some(1000),
            ..Default::default()
        };
        assert_eq!(config.resolved_worker_count(), 64);
    }

    #[test]
    fn auto_worker_count_in_range() {
        let n = BridgeConfig::default().resolved_worker_count();
        assert!((2..=16).contains(&n));
    }
}
