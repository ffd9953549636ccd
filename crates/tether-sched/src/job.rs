//! Scheduled effect jobs and their time-window state machine.

use glam::DVec3;

use tether_core::time::{SimDuration, SimTime};
use tether_world::{BodyRef, JointRef};

use crate::registry::ApplyOutcome;

/// Where a job sits relative to its activation window at a given instant.
///
/// `Pending` (`now < start`) → `Active` (`start ≤ now ≤ start+duration`,
/// or any `now ≥ start` when the duration is indefinite) → `Expired`
/// (`now > start+duration`, only reachable for non-negative durations).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobState {
    /// The window has not opened yet; keep the job, apply nothing.
    Pending,
    /// Inside the window; apply the effect this step.
    Active,
    /// The window has closed; drop the job.
    Expired,
}

/// One scheduled, time-bounded physical effect.
///
/// The tagged variant pairs each payload with the weak handle to its
/// target; payload vectors are already expressed in the target's own
/// frame (frame transformation happens before job creation, in the
/// command facade). Jobs are anonymous once created: cancellation matches
/// on the target name only.
#[derive(Clone, Debug)]
pub enum EffectJob {
    /// A scalar effort on a joint's first actuation axis.
    JointEffort {
        /// Weak handle to the target joint.
        joint: JointRef,
        /// Effort to write each active step.
        effort: f64,
        /// Window open, clamped at creation to the sim time of creation.
        start_time: SimTime,
        /// Window length; negative means indefinite.
        duration: SimDuration,
    },
    /// A force/torque pair on a body, in the body frame.
    BodyWrench {
        /// Weak handle to the target body.
        body: BodyRef,
        /// Force to write each active step, body frame.
        force: DVec3,
        /// Torque to write each active step, body frame.
        torque: DVec3,
        /// Window open, clamped at creation to the sim time of creation.
        start_time: SimTime,
        /// Window length; negative means indefinite.
        duration: SimDuration,
    },
}

impl EffectJob {
    /// Build a joint-effort job.
    ///
    /// `now` is the simulation time at creation; `start_time` is clamped
    /// to it so a job cannot retroactively start in the past.
    pub fn joint_effort(
        joint: JointRef,
        effort: f64,
        start_time: SimTime,
        duration: SimDuration,
        now: SimTime,
    ) -> Self {
        Self::JointEffort {
            joint,
            effort,
            start_time: start_time.max(now),
            duration,
        }
    }

    /// Build a body-wrench job. Force and torque must already be in the
    /// target body's frame.
    ///
    /// `now` is the simulation time at creation; `start_time` is clamped
    /// to it so a job cannot retroactively start in the past.
    pub fn body_wrench(
        body: BodyRef,
        force: DVec3,
        torque: DVec3,
        start_time: SimTime,
        duration: SimDuration,
        now: SimTime,
    ) -> Self {
        Self::BodyWrench {
            body,
            force,
            torque,
            start_time: start_time.max(now),
            duration,
        }
    }

    /// The stable name of this job's target, used for cancellation
    /// matching and logging.
    pub fn target_name(&self) -> &str {
        match self {
            Self::JointEffort { joint, .. } => joint.name(),
            Self::BodyWrench { body, .. } => body.name(),
        }
    }

    /// Window open time.
    pub fn start_time(&self) -> SimTime {
        match self {
            Self::JointEffort { start_time, .. } | Self::BodyWrench { start_time, .. } => {
                *start_time
            }
        }
    }

    /// Window length.
    pub fn duration(&self) -> SimDuration {
        match self {
            Self::JointEffort { duration, .. } | Self::BodyWrench { duration, .. } => *duration,
        }
    }

    /// Whether this job's target still exists.
    ///
    /// A job whose target was destroyed is expired unconditionally,
    /// whatever its time window says; the registry checks this before
    /// evaluating [`state_at`](Self::state_at).
    pub fn target_is_live(&self) -> bool {
        match self {
            Self::JointEffort { joint, .. } => joint.is_live(),
            Self::BodyWrench { body, .. } => body.is_live(),
        }
    }

    /// Evaluate the time-window state machine at a single instant.
    ///
    /// Purely temporal: target liveness is a separate check
    /// ([`target_is_live`](Self::target_is_live)). Callers evaluate this
    /// once per scheduler pass per job, against the one `now` snapshot
    /// taken at the start of the pass. Endpoints are inclusive: a job is
    /// Active at exactly `start` and at exactly `start + duration`.
    pub fn state_at(&self, now: SimTime) -> JobState {
        let start = self.start_time();
        if now < start {
            return JobState::Pending;
        }
        let duration = self.duration();
        if duration.is_indefinite() || now <= start + duration {
            JobState::Active
        } else {
            JobState::Expired
        }
    }

    /// Resolve the target and perform the physics write for one step.
    ///
    /// Joint efforts go to the first actuation axis (axis 0); wrenches
    /// write force then torque. Returns
    /// [`TargetVanished`](ApplyOutcome::TargetVanished) when the weak
    /// handle no longer upgrades — the target was destroyed after the job
    /// was accepted — which the registry treats as immediate expiry.
    pub fn apply(&self) -> ApplyOutcome {
        match self {
            Self::JointEffort { joint, effort, .. } => match joint.resolve() {
                Some(target) => {
                    target.set_effort(0, *effort);
                    ApplyOutcome::Applied
                }
                None => ApplyOutcome::TargetVanished,
            },
            Self::BodyWrench {
                body,
                force,
                torque,
                ..
            } => match body.resolve() {
                Some(target) => {
                    target.set_force(*force);
                    target.set_torque(*torque);
                    ApplyOutcome::Applied
                }
                None => ApplyOutcome::TargetVanished,
            },
        }
    }
}
