//! Thread-safe registry of scheduled effect jobs.
//!
//! One coarse mutex guards the whole job list — not per-job locking. The
//! bridge keeps one registry per job kind (joint efforts, body wrenches)
//! so the two kinds never contend with each other, while each kind keeps
//! strict exclusive-pass semantics: at most one
//! [`apply_and_prune`](JobRegistry::apply_and_prune) pass executes against
//! a registry at any instant, and inserts or cancellations from command
//! worker threads interleave between passes, never during one.

use std::sync::Mutex;

use tether_core::time::SimTime;

use crate::job::{EffectJob, JobState};

/// What `apply_fn` reports for an Active job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The effect was written; keep the job for future passes.
    Applied,
    /// The target no longer resolves; expire the job immediately.
    TargetVanished,
}

/// An unordered multiset of anonymous [`EffectJob`]s.
///
/// Jobs have no externally visible key; cancellation matches on target
/// name. The registry transfers exclusive ownership of the list to one
/// scheduler pass at a time.
#[derive(Default)]
pub struct JobRegistry {
    jobs: Mutex<Vec<EffectJob>>,
}

impl JobRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a job. Callable from any thread; the lock is held for the
    /// duration of the append only.
    pub fn insert(&self, job: EffectJob) {
        self.jobs.lock().unwrap().push(job);
    }

    /// Remove every job whose target name equals `name`.
    ///
    /// Callable from any thread. When this returns, no matching job
    /// remains; jobs inserted strictly after the call began may be
    /// missed. Returns how many jobs were removed.
    pub fn remove_matching(&self, name: &str) -> usize {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|job| job.target_name() != name);
        before - jobs.len()
    }

    /// One exclusive scheduler pass: drop jobs whose target no longer
    /// exists, then decide each survivor's state against the single `now`
    /// snapshot, apply Active jobs, drop Expired ones.
    ///
    /// Target destruction expires a job unconditionally, in every window
    /// state — a Pending job whose target vanished never activates.
    ///
    /// `apply_fn` performs the physics write for an Active job and may
    /// report [`ApplyOutcome::TargetVanished`] to expire it immediately.
    /// The registry lock is held for the whole pass, so `apply_fn` must
    /// not call back into this registry; the write capabilities on
    /// simulation objects never do.
    ///
    /// Returns the number of jobs dropped (expired plus vanished).
    pub fn apply_and_prune<F>(&self, now: SimTime, mut apply_fn: F) -> usize
    where
        F: FnMut(&EffectJob) -> ApplyOutcome,
    {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|job| {
            if !job.target_is_live() {
                log::error!(
                    "target [{}] does not exist, dropping scheduled effect",
                    job.target_name()
                );
                return false;
            }
            match job.state_at(now) {
                JobState::Pending => true,
                JobState::Active => match apply_fn(job) {
                    ApplyOutcome::Applied => true,
                    ApplyOutcome::TargetVanished => {
                        log::error!(
                            "target [{}] does not exist, dropping scheduled effect",
                            job.target_name()
                        );
                        false
                    }
                },
                JobState::Expired => false,
            }
        });
        before - jobs.len()
    }

    /// Number of jobs currently scheduled.
    pub fn len(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    /// Whether no jobs are scheduled.
    pub fn is_empty(&self) -> bool {
        self.jobs.lock().unwrap().is_empty()
    }
}
