//! Tether: a timed-effect scheduler and command bridge for physics
//! simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tether sub-crates. For most users, adding `tether` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use tether::prelude::*;
//!
//! // The engine integration implements the `World` traits; tests use the
//! // in-memory mock world.
//! use tether_test_utils::{MockJoint, MockModel, MockWorld};
//!
//! let world = MockWorld::new();
//! let model = MockModel::new("robot");
//! let joint = MockJoint::new("elbow");
//! model.add_joint(Arc::clone(&joint));
//! world.add_model(model);
//!
//! // Spawn the bridge: worker pool, job registries, clock throttle.
//! let mut bridge = Bridge::new(
//!     Arc::clone(&world) as Arc<dyn World>,
//!     BridgeConfig::default(),
//! )
//! .unwrap();
//!
//! // A transport thread submits a command through a cloneable handle.
//! let response = bridge
//!     .handle()
//!     .submit(Request::ApplyJointEffort {
//!         joint_name: "elbow".into(),
//!         effort: 2.5,
//!         start_time: SimTime::ZERO,
//!         duration: SimDuration::new(0.5),
//!     })
//!     .unwrap();
//! assert!(response.success);
//!
//! // The stepping thread drives the per-step pass.
//! bridge.on_step();
//! assert_eq!(joint.applied_efforts(), vec![(0, 2.5)]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tether-core` | Time, pose and wrench math, requests, errors |
//! | [`world`] | `tether-world` | Simulation collaborator traits and target handles |
//! | [`sched`] | `tether-sched` | Effect jobs, registries, the step pass, clock throttle |
//! | [`bridge`] | `tether-bridge` | Command facade, worker pool, submission handles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`tether-core`).
///
/// Simulation time, rigid-body pose and wrench math, the external
/// request/response surface, and the command error taxonomy.
pub use tether_core as types;

/// Simulation collaborator traits (`tether-world`).
///
/// The narrow interface Tether consumes from the simulation engine
/// ([`world::World`], [`world::Model`], [`world::Joint`],
/// [`world::Body`]) and the weak target handles built over it.
pub use tether_world as world;

/// The scheduler core (`tether-sched`).
///
/// [`sched::EffectJob`] value types, the [`sched::JobRegistry`] they live
/// in, the once-per-step [`sched::EffectScheduler`] pass, and the
/// [`sched::ClockPublisher`] throttle.
pub use tether_sched as sched;

/// The command bridge (`tether-bridge`).
///
/// [`bridge::Bridge`] owns the worker pool and registries;
/// [`bridge::BridgeHandle`] is the cloneable submission surface handed to
/// transport layers.
pub use tether_bridge as bridge;

/// Common imports for typical Tether usage.
///
/// ```rust
/// use tether::prelude::*;
/// ```
pub mod prelude {
    pub use tether_bridge::{Bridge, BridgeConfig, BridgeHandle, SubmitError};
    pub use tether_core::{
        CommandError, Pose, Request, Response, SimDuration, SimTime, Wrench,
    };
    pub use tether_world::{Body, Joint, Model, World};
}
