//! Adbridge Core - shared vocabulary for the adbridge ad plugin.
//!
//! This crate defines the types exchanged between the embedding host and
//! the plugin: ad kinds, the normalized outcome value, the capability
//! flags, and the trait seams the host implements (`HostContext`,
//! `ConsoleMarker`). It has no async machinery and no dependency on the
//! external SDK boundary.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod host;
mod outcome;

pub use host::{ConsoleMarker, HostContext, NoopConsoleMarker};
pub use outcome::{AdKind, AdOutcome, ErrorReason, PluginCapabilities};
