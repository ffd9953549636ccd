//! Test utilities and mock types for Tether development.
//!
//! Provides an in-memory [`MockWorld`] implementing the
//! [`World`](tether_world::World) collaborator traits, with recording
//! joints and bodies so tests can assert exactly which physics writes a
//! scheduler pass performed, and destruction helpers for exercising the
//! target-vanished path.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex};

use glam::DVec3;
use indexmap::IndexMap;

use tether_core::math::Pose;
use tether_core::time::SimTime;
use tether_world::{Body, Joint, Model, World};

/// Mock joint recording every effort write.
pub struct MockJoint {
    name: String,
    efforts: Mutex<Vec<(u32, f64)>>,
}

impl MockJoint {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            efforts: Mutex::new(Vec::new()),
        })
    }

    /// Every `(axis, effort)` pair written so far, in order.
    pub fn applied_efforts(&self) -> Vec<(u32, f64)> {
        self.efforts.lock().unwrap().clone()
    }
}

impl Joint for MockJoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_effort(&self, axis: u32, effort: f64) {
        self.efforts.lock().unwrap().push((axis, effort));
    }
}

/// Mock body recording every force and torque write.
pub struct MockBody {
    name: String,
    pose: Mutex<Pose>,
    forces: Mutex<Vec<DVec3>>,
    torques: Mutex<Vec<DVec3>>,
}

impl MockBody {
    pub fn new(name: &str) -> Arc<Self> {
        Self::with_pose(name, Pose::IDENTITY)
    }

    pub fn with_pose(name: &str, pose: Pose) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            pose: Mutex::new(pose),
            forces: Mutex::new(Vec::new()),
            torques: Mutex::new(Vec::new()),
        })
    }

    pub fn set_pose(&self, pose: Pose) {
        *self.pose.lock().unwrap() = pose;
    }

    pub fn applied_forces(&self) -> Vec<DVec3> {
        self.forces.lock().unwrap().clone()
    }

    pub fn applied_torques(&self) -> Vec<DVec3> {
        self.torques.lock().unwrap().clone()
    }

    pub fn last_force(&self) -> Option<DVec3> {
        self.forces.lock().unwrap().last().copied()
    }

    pub fn last_torque(&self) -> Option<DVec3> {
        self.torques.lock().unwrap().last().copied()
    }
}

impl Body for MockBody {
    fn name(&self) -> &str {
        &self.name
    }

    fn world_pose(&self) -> Pose {
        *self.pose.lock().unwrap()
    }

    fn set_force(&self, force: DVec3) {
        self.forces.lock().unwrap().push(force);
    }

    fn set_torque(&self, torque: DVec3) {
        self.torques.lock().unwrap().push(torque);
    }
}

/// Mock model holding named joints and recording configuration writes.
pub struct MockModel {
    name: String,
    joints: Mutex<IndexMap<String, Arc<MockJoint>>>,
    configurations: Mutex<Vec<IndexMap<String, f64>>>,
}

impl MockModel {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            joints: Mutex::new(IndexMap::new()),
            configurations: Mutex::new(Vec::new()),
        })
    }

    pub fn add_joint(&self, joint: Arc<MockJoint>) {
        self.joints
            .lock()
            .unwrap()
            .insert(joint.name().to_string(), joint);
    }

    /// Drop a joint so outstanding weak handles stop resolving.
    pub fn remove_joint(&self, name: &str) -> bool {
        self.joints.lock().unwrap().shift_remove(name).is_some()
    }

    /// Every position map written via `set_joint_positions`, in order.
    pub fn configurations(&self) -> Vec<IndexMap<String, f64>> {
        self.configurations.lock().unwrap().clone()
    }
}

impl Model for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn joint_by_name(&self, name: &str) -> Option<Arc<dyn Joint>> {
        self.joints
            .lock()
            .unwrap()
            .get(name)
            .map(|j| Arc::clone(j) as Arc<dyn Joint>)
    }

    fn set_joint_positions(&self, positions: &IndexMap<String, f64>) {
        self.configurations.lock().unwrap().push(positions.clone());
    }
}

/// In-memory world with settable time, pause bookkeeping, and named
/// models, bodies, and free-standing frames.
pub struct MockWorld {
    time: Mutex<SimTime>,
    paused: Mutex<bool>,
    pause_log: Mutex<Vec<bool>>,
    models: Mutex<IndexMap<String, Arc<MockModel>>>,
    bodies: Mutex<IndexMap<String, Arc<MockBody>>>,
    frames: Mutex<IndexMap<String, Pose>>,
}

impl MockWorld {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            time: Mutex::new(SimTime::ZERO),
            paused: Mutex::new(false),
            pause_log: Mutex::new(Vec::new()),
            models: Mutex::new(IndexMap::new()),
            bodies: Mutex::new(IndexMap::new()),
            frames: Mutex::new(IndexMap::new()),
        })
    }

    pub fn set_time(&self, time: SimTime) {
        *self.time.lock().unwrap() = time;
    }

    pub fn add_model(&self, model: Arc<MockModel>) {
        self.models
            .lock()
            .unwrap()
            .insert(model.name().to_string(), model);
    }

    pub fn add_body(&self, body: Arc<MockBody>) {
        self.bodies
            .lock()
            .unwrap()
            .insert(body.name().to_string(), body);
    }

    /// Drop a body so outstanding weak handles stop resolving.
    pub fn remove_body(&self, name: &str) -> bool {
        self.bodies.lock().unwrap().shift_remove(name).is_some()
    }

    /// Register a free-standing named frame (e.g. a sensor mount) usable
    /// as a wrench reference frame.
    pub fn set_frame_pose(&self, name: &str, pose: Pose) {
        self.frames.lock().unwrap().insert(name.to_string(), pose);
    }

    /// Every `set_paused` call observed, in order.
    pub fn pause_log(&self) -> Vec<bool> {
        self.pause_log.lock().unwrap().clone()
    }
}

impl World for MockWorld {
    fn sim_time(&self) -> SimTime {
        *self.time.lock().unwrap()
    }

    fn models(&self) -> Vec<Arc<dyn Model>> {
        self.models
            .lock()
            .unwrap()
            .values()
            .map(|m| Arc::clone(m) as Arc<dyn Model>)
            .collect()
    }

    fn model_by_name(&self, name: &str) -> Option<Arc<dyn Model>> {
        self.models
            .lock()
            .unwrap()
            .get(name)
            .map(|m| Arc::clone(m) as Arc<dyn Model>)
    }

    fn body_by_name(&self, name: &str) -> Option<Arc<dyn Body>> {
        self.bodies
            .lock()
            .unwrap()
            .get(name)
            .map(|b| Arc::clone(b) as Arc<dyn Body>)
    }

    fn frame_pose(&self, name: &str) -> Option<Pose> {
        if let Some(pose) = self.frames.lock().unwrap().get(name) {
            return Some(*pose);
        }
        self.bodies
            .lock()
            .unwrap()
            .get(name)
            .map(|b| b.world_pose())
    }

    fn is_paused(&self) -> bool {
        *self.paused.lock().unwrap()
    }

    fn set_paused(&self, paused: bool) {
        *self.paused.lock().unwrap() = paused;
        self.pause_log.lock().unwrap().push(paused);
    }
}
