//! Error types for the Tether command surface.
//!
//! Every failure here is returned synchronously to the caller with no state
//! mutated. Failures that occur *after* a job was accepted (a target
//! destroyed mid-window) are never surfaced as errors; the scheduler
//! silently expires the job on its next pass.

use std::error::Error;
use std::fmt;

/// Rejection reasons for external commands.
///
/// Carried back to the transport layer inside a failed
/// [`Response`](crate::Response); the `Display` form is the
/// human-readable status string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// No joint with the requested name exists in any model.
    JointNotFound {
        /// The requested joint name.
        name: String,
    },
    /// No body with the requested name exists in the world.
    BodyNotFound {
        /// The requested body name.
        name: String,
    },
    /// No model with the requested name exists in the world.
    ModelNotFound {
        /// The requested model name.
        name: String,
    },
    /// A non-empty, non-world reference frame did not resolve to a live
    /// entity.
    FrameNotFound {
        /// The requested reference frame name.
        name: String,
    },
    /// `joint_names` and `joint_positions` have different lengths.
    LengthMismatch {
        /// Number of joint names supplied.
        names: usize,
        /// Number of joint positions supplied.
        positions: usize,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JointNotFound { name } => {
                write!(f, "ApplyJointEffort: joint [{name}] not found")
            }
            Self::BodyNotFound { name } => {
                write!(f, "ApplyBodyWrench: body [{name}] does not exist")
            }
            Self::ModelNotFound { name } => {
                write!(f, "SetModelConfiguration: model [{name}] does not exist")
            }
            Self::FrameNotFound { name } => {
                write!(f, "ApplyBodyWrench: reference frame [{name}] not found")
            }
            Self::LengthMismatch { names, positions } => write!(
                f,
                "SetModelConfiguration: joint name and position lists have \
                 different lengths ({names} vs {positions})"
            ),
        }
    }
}

impl Error for CommandError {}
