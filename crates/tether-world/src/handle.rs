//! Weak target handles carried by scheduled jobs.
//!
//! A job must never own its target: the simulation owns object lifetimes
//! and may destroy a joint or body while a job targeting it is still
//! scheduled. Handles pair a stable name (for cancellation matching and
//! logging) with a `Weak` reference whose upgrade doubles as the cheap
//! liveness check performed on every apply.

use std::sync::{Arc, Weak};

use crate::traits::{Body, Joint};

/// Non-owning handle to a joint, held by scheduled effort jobs.
#[derive(Clone)]
pub struct JointRef {
    name: String,
    joint: Weak<dyn Joint>,
}

impl JointRef {
    /// Create a handle from a live joint.
    pub fn new(joint: &Arc<dyn Joint>) -> Self {
        Self {
            name: joint.name().to_string(),
            joint: Arc::downgrade(joint),
        }
    }

    /// The stable name this handle was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upgrade to the live joint, or `None` if it was destroyed.
    pub fn resolve(&self) -> Option<Arc<dyn Joint>> {
        self.joint.upgrade()
    }

    /// Whether the target still exists, without taking a strong reference.
    pub fn is_live(&self) -> bool {
        self.joint.strong_count() > 0
    }
}

impl std::fmt::Debug for JointRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointRef")
            .field("name", &self.name)
            .field("live", &(self.joint.strong_count() > 0))
            .finish()
    }
}

/// Non-owning handle to a body, held by scheduled wrench jobs.
#[derive(Clone)]
pub struct BodyRef {
    name: String,
    body: Weak<dyn Body>,
}

impl BodyRef {
    /// Create a handle from a live body.
    pub fn new(body: &Arc<dyn Body>) -> Self {
        Self {
            name: body.name().to_string(),
            body: Arc::downgrade(body),
        }
    }

    /// The stable (scoped) name this handle was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upgrade to the live body, or `None` if it was destroyed.
    pub fn resolve(&self) -> Option<Arc<dyn Body>> {
        self.body.upgrade()
    }

    /// Whether the target still exists, without taking a strong reference.
    pub fn is_live(&self) -> bool {
        self.body.strong_count() > 0
    }
}

impl std::fmt::Debug for BodyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyRef")
            .field("name", &self.name)
            .field("live", &(self.body.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(&'static str);

    impl Joint for Stub {
        fn name(&self) -> &str {
            self.0
        }
        fn set_effort(&self, _axis: u32, _effort: f64) {}
    }

    #[test]
    fn resolve_succeeds_while_target_lives() {
        let joint: Arc<dyn Joint> = Arc::new(Stub("elbow"));
        let handle = JointRef::new(&joint);
        assert_eq!(handle.name(), "elbow");
        assert!(handle.is_live());
        assert!(handle.resolve().is_some());
    }

    #[test]
    fn resolve_fails_after_target_dropped() {
        let joint: Arc<dyn Joint> = Arc::new(Stub("elbow"));
        let handle = JointRef::new(&joint);
        drop(joint);
        assert!(!handle.is_live());
        assert!(handle.resolve().is_none());
        // The name survives for cancellation matching and logs.
        assert_eq!(handle.name(), "elbow");
    }
}
