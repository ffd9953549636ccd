//! Synchronous command handlers invoked by the worker pool.

use std::sync::Arc;

use glam::DVec3;
use indexmap::IndexMap;

use tether_core::error::CommandError;
use tether_core::math::Wrench;
use tether_core::request::{Request, Response};
use tether_core::time::{SimDuration, SimTime};
use tether_sched::{EffectJob, JobRegistry};
use tether_world::{BodyRef, JointRef, World};

/// Reference frame names that mean "use the wrench as-is, no rotation".
const INERTIAL_FRAMES: [&str; 3] = ["", "world", "map"];

/// Translates external commands into job insertions, cancellations, and
/// direct model writes.
///
/// Each handler runs to completion on whichever worker thread received
/// the request, resolves target names to live object references, and
/// returns synchronously. Nothing here ever blocks on the stepping
/// thread; registry inserts hold the coarse lock only for the append.
pub struct CommandFacade {
    world: Arc<dyn World>,
    efforts: Arc<JobRegistry>,
    wrenches: Arc<JobRegistry>,
}

impl CommandFacade {
    /// Create a facade over the given world and job registries.
    pub fn new(
        world: Arc<dyn World>,
        efforts: Arc<JobRegistry>,
        wrenches: Arc<JobRegistry>,
    ) -> Self {
        Self {
            world,
            efforts,
            wrenches,
        }
    }

    /// Route a decoded request to its handler and fold the outcome into
    /// a transport-level [`Response`].
    pub fn dispatch(&self, request: Request) -> Response {
        match request {
            Request::ApplyJointEffort {
                joint_name,
                effort,
                start_time,
                duration,
            } => self
                .apply_joint_effort(&joint_name, effort, start_time, duration)
                .into(),
            Request::ApplyBodyWrench {
                body_name,
                reference_frame,
                reference_point,
                wrench,
                start_time,
                duration,
            } => self
                .apply_body_wrench(
                    &body_name,
                    &reference_frame,
                    reference_point,
                    wrench,
                    start_time,
                    duration,
                )
                .into(),
            Request::ClearJointForces { joint_name } => {
                Response::ok(self.clear_joint_forces(&joint_name))
            }
            Request::ClearBodyWrenches { body_name } => {
                Response::ok(self.clear_body_wrenches(&body_name))
            }
            Request::SetModelConfiguration {
                model_name,
                joint_names,
                joint_positions,
            } => self
                .set_model_configuration(&model_name, &joint_names, &joint_positions)
                .into(),
        }
    }

    /// Schedule a scalar effort on a named joint.
    ///
    /// Scans all models in world iteration order; the first joint with a
    /// matching name wins (the tie-break among duplicate names across
    /// models is unspecified). The start time is clamped to the current
    /// simulation time.
    pub fn apply_joint_effort(
        &self,
        joint_name: &str,
        effort: f64,
        start_time: SimTime,
        duration: SimDuration,
    ) -> Result<String, CommandError> {
        for model in self.world.models() {
            if let Some(joint) = model.joint_by_name(joint_name) {
                let now = self.world.sim_time();
                self.efforts.insert(EffectJob::joint_effort(
                    JointRef::new(&joint),
                    effort,
                    start_time,
                    duration,
                    now,
                ));
                log::info!(
                    "scheduled effort {effort} on joint [{joint_name}] for {duration}"
                );
                return Ok(format!("ApplyJointEffort: effort set on joint [{joint_name}]"));
            }
        }
        Err(CommandError::JointNotFound {
            name: joint_name.to_string(),
        })
    }

    /// Schedule a force/torque pair on a named body.
    ///
    /// The wrench is always shifted to the reference point first, in the
    /// reference frame. If `reference_frame` resolves to a live entity
    /// the wrench is then rotated into the body frame; the well-known
    /// inertial names (empty, `"world"`, `"map"`) skip the rotation; any
    /// other unresolvable name rejects the request with no job created.
    pub fn apply_body_wrench(
        &self,
        body_name: &str,
        reference_frame: &str,
        reference_point: DVec3,
        wrench: Wrench,
        start_time: SimTime,
        duration: SimDuration,
    ) -> Result<String, CommandError> {
        let body = self
            .world
            .body_by_name(body_name)
            .ok_or_else(|| CommandError::BodyNotFound {
                name: body_name.to_string(),
            })?;

        // Shift at the reference point, in the reference frame, before
        // any rotation. Order matters.
        let shifted = wrench.shifted_by(reference_point);

        let target = match self.world.frame_pose(reference_frame) {
            Some(frame_pose) => {
                let target_to_reference = frame_pose.relative_to(&body.world_pose());
                let out = shifted.transformed(&target_to_reference);
                log::info!(
                    "wrench in frame [{reference_frame}] applied to [{body_name}] as \
                     force {:?}, torque {:?}",
                    out.force,
                    out.torque
                );
                out
            }
            None if INERTIAL_FRAMES.contains(&reference_frame) => {
                log::debug!(
                    "reference frame is inertial, applying wrench to [{body_name}] as-is"
                );
                shifted
            }
            None => {
                return Err(CommandError::FrameNotFound {
                    name: reference_frame.to_string(),
                })
            }
        };

        let now = self.world.sim_time();
        self.wrenches.insert(EffectJob::body_wrench(
            BodyRef::new(&body),
            target.force,
            target.torque,
            start_time,
            duration,
            now,
        ));
        Ok(format!("ApplyBodyWrench: wrench set on body [{body_name}]"))
    }

    /// Cancel all effort jobs targeting a joint. Always succeeds;
    /// cancellation takes effect at the next scheduler pass.
    pub fn clear_joint_forces(&self, joint_name: &str) -> String {
        let removed = self.efforts.remove_matching(joint_name);
        if removed == 0 {
            log::warn!("no applied forces on [{joint_name}]");
        } else {
            log::info!("deleted {removed} scheduled force(s) on [{joint_name}]");
        }
        format!("ClearJointForces: cleared {removed} job(s) on [{joint_name}]")
    }

    /// Cancel all wrench jobs targeting a body. Always succeeds;
    /// cancellation takes effect at the next scheduler pass.
    pub fn clear_body_wrenches(&self, body_name: &str) -> String {
        let removed = self.wrenches.remove_matching(body_name);
        if removed == 0 {
            log::warn!("no applied wrenches on [{body_name}]");
        } else {
            log::info!("deleted {removed} scheduled wrench(es) on [{body_name}]");
        }
        format!("ClearBodyWrenches: cleared {removed} job(s) on [{body_name}]")
    }

    /// Teleport a model's joints to the given positions.
    ///
    /// Pauses the simulation for the write and restores the prior pause
    /// state afterwards. The pause window is globally observable;
    /// concurrent effects applied mid-configuration are a known,
    /// documented race rather than an error. Duplicate joint names
    /// resolve last-wins.
    pub fn set_model_configuration(
        &self,
        model_name: &str,
        joint_names: &[String],
        joint_positions: &[f64],
    ) -> Result<String, CommandError> {
        let model =
            self.world
                .model_by_name(model_name)
                .ok_or_else(|| CommandError::ModelNotFound {
                    name: model_name.to_string(),
                })?;

        if joint_names.len() != joint_positions.len() {
            return Err(CommandError::LengthMismatch {
                names: joint_names.len(),
                positions: joint_positions.len(),
            });
        }

        let mut positions = IndexMap::with_capacity(joint_names.len());
        for (name, position) in joint_names.iter().zip(joint_positions) {
            positions.insert(name.clone(), *position);
        }

        let was_paused = self.world.is_paused();
        if !was_paused {
            self.world.set_paused(true);
        }
        model.set_joint_positions(&positions);
        self.world.set_paused(was_paused);

        log::info!(
            "wrote {} joint position(s) on model [{model_name}]",
            positions.len()
        );
        Ok(format!("SetModelConfiguration: model [{model_name}] configured"))
    }
}
