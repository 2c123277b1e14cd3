//! Adbridge Plugin - a reliable, promise-style facade over a callback-driven
//! advertising SDK.
//!
//! The external SDK communicates through one global callback, settles its
//! show-ad promise unreliably, and is known to hang outright on developer
//! environments. The host, on the other hand, expects four well-behaved
//! async operations: initialize, show a full-screen ad, show a rewarded ad,
//! show a banner. This crate is the reconciliation layer between the two:
//!
//! - the **event translator** turns the SDK's raw named events into flag
//!   updates on the session, synchronously and infallibly;
//! - the **initialization handshake** loads the SDK and suspends until the
//!   ready event arrives, exactly once;
//! - the **ad request coordinator** races the SDK's own settlement against
//!   a deadline, first writer wins, and normalizes the result into an
//!   [`AdOutcome`](adbridge_core::AdOutcome);
//! - the **pause/mute bridge** mirrors pause events onto the host and
//!   forces both flags back to safe values on every request exit path, so
//!   a misbehaving SDK can never leave the host frozen.
//!
//! # Example
//!
//! ```rust,ignore
//! let plugin = AdsPlugin::new(sdk, PluginConfig::for_game("my-game"));
//! plugin.initialize(host).await?;
//! let outcome = plugin.show_rewarded_ad().await?;
//! if outcome.did_show_ad {
//!     grant_reward();
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod bridge;
mod config;
mod coordinator;
mod error;
mod plugin;
mod session;
mod translator;

pub use config::{ConfigError, ConfigResult, PluginConfig, TimeoutsSection};
pub use error::{PluginError, PluginResult};
pub use plugin::AdsPlugin;
