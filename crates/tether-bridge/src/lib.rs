//! Command facade, worker pool, and step hook for the Tether bridge.
//!
//! Ties the scheduler core to its two execution contexts: an
//! arbitrary-sized worker pool servicing external commands over a bounded
//! channel, and the simulation's stepping thread driving the per-step
//! scheduler pass and throttled clock publication via
//! [`Bridge::on_step`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod facade;
mod worker;

pub use bridge::{Bridge, BridgeHandle, SubmitError};
pub use config::{BridgeConfig, ConfigError};
pub use facade::CommandFacade;
