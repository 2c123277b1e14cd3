//! Adbridge SDK - boundary types for the external advertising SDK.
//!
//! The real SDK is third-party code loaded at runtime. It communicates
//! through exactly one channel: a configuration object handed over before
//! its code loads, carrying the game id and a single event callback. This
//! crate models that channel as injected values (`SdkConfig`, `EventSink`)
//! and the loaded handle as an async trait (`AdSdk`), so the plugin never
//! touches process-wide state and tests can substitute a scripted double.
//!
//! The SDK is treated as untrusted and partially reliable: its show-ad
//! promise is known to hang, and its event stream can emit names this crate
//! has never heard of. Classification therefore never fails - unrecognized
//! names become [`SdkEvent::Unknown`] and are ignored upstream.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod event;
mod sdk;

pub use error::{AD_REQUESTED_TOO_SOON, SdkError, SdkResult};
pub use event::SdkEvent;
pub use sdk::{AdSdk, EventSink, SdkAdKind, SdkConfig, ShowOptions};
