//! The once-per-step scheduler pass.

use std::sync::Arc;

use tether_world::World;

use crate::registry::JobRegistry;

/// Drives the per-step apply/expiry pass over both job kinds.
///
/// [`run_pass`](EffectScheduler::run_pass) must be invoked exactly once
/// per simulation step, on the stepping thread — the only thread permitted
/// to write physics state, so effect writes stay serialized with the
/// physics solve. Joint-effort and body-wrench jobs live in independent
/// registries with independent locks; the two passes run back to back in
/// unspecified order, each against its own single `now` snapshot.
pub struct EffectScheduler {
    world: Arc<dyn World>,
    efforts: Arc<JobRegistry>,
    wrenches: Arc<JobRegistry>,
}

impl EffectScheduler {
    /// Create a scheduler over the given world and job registries.
    pub fn new(world: Arc<dyn World>, efforts: Arc<JobRegistry>, wrenches: Arc<JobRegistry>) -> Self {
        Self {
            world,
            efforts,
            wrenches,
        }
    }

    /// Run one scheduler pass per job kind.
    ///
    /// Each pass snapshots the simulation clock once, so every job of one
    /// kind observes the same instant. Never blocks on I/O.
    pub fn run_pass(&self) {
        let now = self.world.sim_time();
        let dropped = self.efforts.apply_and_prune(now, |job| job.apply());
        if dropped > 0 {
            log::debug!("pruned {dropped} joint effort job(s) at {now}");
        }

        let now = self.world.sim_time();
        let dropped = self.wrenches.apply_and_prune(now, |job| job.apply());
        if dropped > 0 {
            log::debug!("pruned {dropped} body wrench job(s) at {now}");
        }
    }
}
