//! Shared test doubles for the adbridge ad plugin.
//!
//! Provides a scriptable [`MockSdk`] standing in for the external
//! advertising SDK, a recording [`MockHost`] for the host context, and an
//! in-memory [`MemoryConsoleMarker`]. All doubles use interior mutability
//! behind `&self` so they can live inside an `Arc` next to the plugin.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod mocks;

pub use mocks::{MemoryConsoleMarker, MockHost, MockSdk, ShowScript};

/// Initialize test tracing from `RUST_LOG`, once per process.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
