//! Request and response types for the external command surface.
//!
//! The transport layer decodes whatever wire format it speaks into a
//! [`Request`] and receives a [`Response`] with a boolean success flag and
//! a human-readable status string. Serialization formats are out of scope
//! for this crate.

use glam::DVec3;

use crate::error::CommandError;
use crate::math::Wrench;
use crate::time::{SimDuration, SimTime};

/// An external command submitted to the bridge.
///
/// Each variant corresponds to one synchronous operation on the command
/// facade. Requests carry raw caller input; target resolution and frame
/// transformation happen inside the facade.
///
/// # Examples
///
/// ```
/// use tether_core::{Request, SimDuration, SimTime};
///
/// let req = Request::ApplyJointEffort {
///     joint_name: "shoulder_pan".into(),
///     effort: 2.5,
///     start_time: SimTime::ZERO,
///     duration: SimDuration::new(0.5),
/// };
/// assert!(matches!(req, Request::ApplyJointEffort { .. }));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    /// Schedule a scalar effort on a named joint's first actuation axis.
    ApplyJointEffort {
        /// The target joint name; all models are scanned, first match wins.
        joint_name: String,
        /// Effort to apply, in the joint's native units.
        effort: f64,
        /// Requested activation time; clamped to the current simulation
        /// time at acceptance.
        start_time: SimTime,
        /// Active window length; negative means indefinite.
        duration: SimDuration,
    },
    /// Schedule a force/torque pair on a named body.
    ApplyBodyWrench {
        /// The target body name.
        body_name: String,
        /// Frame the wrench is expressed in. Empty, `"world"` or `"map"`
        /// mean the wrench is used as-is; any other name must resolve to
        /// a live entity or the request is rejected.
        reference_frame: String,
        /// Point of application, as an offset in the reference frame.
        reference_point: DVec3,
        /// The force/torque pair in the reference frame.
        wrench: Wrench,
        /// Requested activation time; clamped to the current simulation
        /// time at acceptance.
        start_time: SimTime,
        /// Active window length; negative means indefinite.
        duration: SimDuration,
    },
    /// Cancel all pending and active effort jobs targeting a joint.
    ClearJointForces {
        /// The target joint name.
        joint_name: String,
    },
    /// Cancel all pending and active wrench jobs targeting a body.
    ClearBodyWrenches {
        /// The target body name.
        body_name: String,
    },
    /// Teleport a model's joints to the given positions, bypassing
    /// dynamics. Pauses the simulation for the write and restores the
    /// prior pause state afterwards.
    SetModelConfiguration {
        /// The target model name.
        model_name: String,
        /// Joint names to write; duplicates resolve last-wins.
        joint_names: Vec<String>,
        /// Positions, parallel to `joint_names`.
        joint_positions: Vec<f64>,
    },
}

impl Request {
    /// Short operation name for logging.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::ApplyJointEffort { .. } => "ApplyJointEffort",
            Self::ApplyBodyWrench { .. } => "ApplyBodyWrench",
            Self::ClearJointForces { .. } => "ClearJointForces",
            Self::ClearBodyWrenches { .. } => "ClearBodyWrenches",
            Self::SetModelConfiguration { .. } => "SetModelConfiguration",
        }
    }
}

/// Outcome of one command, returned synchronously to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Whether the command was accepted.
    pub success: bool,
    /// Human-readable status; on failure, the rejection reason.
    pub status: String,
}

impl Response {
    /// A successful response with the given status text.
    pub fn ok(status: impl Into<String>) -> Self {
        Self {
            success: true,
            status: status.into(),
        }
    }

    /// A failed response with the given status text.
    pub fn failure(status: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.into(),
        }
    }
}

impl From<Result<String, CommandError>> for Response {
    fn from(result: Result<String, CommandError>) -> Self {
        match result {
            Ok(status) => Response::ok(status),
            Err(err) => Response::failure(err.to_string()),
        }
    }
}
