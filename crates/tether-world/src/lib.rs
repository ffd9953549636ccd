//! Simulation-collaborator traits and target handles.
//!
//! The simulation engine (stepping, physics integration, scene graph) is an
//! external collaborator. This crate pins down the narrow interface Tether
//! consumes from it: a monotonic sim-time source, name-resolvable live
//! objects with write capabilities, and pause/resume hooks. The engine
//! integration implements these traits; everything else in Tether is
//! engine-agnostic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;
pub mod traits;

pub use handle::{BodyRef, JointRef};
pub use traits::{Body, Joint, Model, World};
