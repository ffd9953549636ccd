//! Timed-effect job scheduler for the Tether simulation bridge.
//!
//! The core of Tether: value types for scheduled physical-effect jobs, the
//! thread-safe registry holding them, the once-per-step apply/expiry pass,
//! and the clock-publication throttle. Everything here runs either on the
//! simulation's stepping thread (the pass, the throttle) or on command
//! worker threads (inserts and cancellations), with one coarse lock per
//! job kind as the only synchronization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod job;
pub mod registry;
pub mod scheduler;

pub use clock::ClockPublisher;
pub use job::{EffectJob, JobState};
pub use registry::{ApplyOutcome, JobRegistry};
pub use scheduler::EffectScheduler;
