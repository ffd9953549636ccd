//! The interface Tether consumes from the simulation engine.
//!
//! All write capabilities take `&self`: physics engines serialize writes
//! internally, and Tether's own contract guarantees effect writes only
//! happen on the stepping thread during a scheduler pass.

use std::sync::Arc;

use glam::DVec3;
use indexmap::IndexMap;

use tether_core::math::Pose;
use tether_core::time::SimTime;

/// A live joint exposed by the simulation.
pub trait Joint: Send + Sync {
    /// Stable identifying name, unique within its model.
    fn name(&self) -> &str;

    /// Write a scalar effort (force or torque, per joint type) to one
    /// actuation axis. Scheduled effort jobs always write axis 0.
    fn set_effort(&self, axis: u32, effort: f64);
}

/// A live rigid body (link) exposed by the simulation.
pub trait Body: Send + Sync {
    /// Stable identifying name, unique within the world (scoped name).
    fn name(&self) -> &str;

    /// Current pose of the body frame in world coordinates.
    fn world_pose(&self) -> Pose;

    /// Write a force, in the body frame, for the current step.
    fn set_force(&self, force: DVec3);

    /// Write a torque, in the body frame, for the current step.
    fn set_torque(&self, torque: DVec3);
}

/// A live model: a named collection of joints and bodies.
pub trait Model: Send + Sync {
    /// Stable identifying name, unique within the world.
    fn name(&self) -> &str;

    /// Look up a joint by name within this model.
    fn joint_by_name(&self, name: &str) -> Option<Arc<dyn Joint>>;

    /// Write joint positions directly, bypassing dynamics — a teleport,
    /// not a physical motion. The caller pauses the simulation around
    /// this write. Unknown joint names are ignored by the engine.
    fn set_joint_positions(&self, positions: &IndexMap<String, f64>);
}

/// The simulation world: time source, object registry, pause control.
///
/// Object lookups return owning `Arc`s so callers can downgrade to the
/// weak handles jobs carry; the simulation remains the owner of object
/// lifetimes and may drop entities at any step boundary.
pub trait World: Send + Sync {
    /// Current simulation time. Monotonically non-decreasing as observed
    /// from the stepping thread.
    fn sim_time(&self) -> SimTime;

    /// All models, in a stable iteration order.
    fn models(&self) -> Vec<Arc<dyn Model>>;

    /// Look up a model by name.
    fn model_by_name(&self, name: &str) -> Option<Arc<dyn Model>>;

    /// Look up a body by (scoped) name.
    fn body_by_name(&self, name: &str) -> Option<Arc<dyn Body>>;

    /// World pose of any named entity usable as a wrench reference frame.
    ///
    /// Returns `None` when no live entity has that name. The well-known
    /// names `""`, `"world"` and `"map"` are handled by the caller before
    /// this is consulted.
    fn frame_pose(&self, name: &str) -> Option<Pose>;

    /// Whether the simulation is currently paused.
    fn is_paused(&self) -> bool;

    /// Pause or resume the simulation.
    fn set_paused(&self, paused: bool);
}
