//! Core types for the Tether simulation command bridge.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! simulation time, rigid-pose and wrench math, the external command
//! request/response surface, and the error taxonomy shared across the
//! Tether workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod math;
pub mod request;
pub mod time;

pub use error::CommandError;
pub use math::{Pose, Wrench};
pub use request::{Request, Response};
pub use time::{SimDuration, SimTime};
