//! The `AdSdk` trait and the configuration channel handed to the SDK.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SdkResult;

/// The single callback through which the SDK reports every lifecycle
/// event, invoked synchronously with the raw event name.
pub type EventSink = Arc<dyn Fn(&str) + Send + Sync>;

/// The ad kinds the SDK itself understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdkAdKind {
    /// Persistent display unit (banners).
    Display,
    /// Full-screen interstitial.
    Interstitial,
    /// Rewarded video.
    Rewarded,
}

/// Placement options for a show-ad request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowOptions {
    /// DOM container the SDK should render a persistent ad into.
    pub container_id: Option<String>,
}

impl ShowOptions {
    /// Options targeting a specific container.
    #[must_use]
    pub fn in_container(container_id: impl Into<String>) -> Self {
        Self {
            container_id: Some(container_id.into()),
        }
    }
}

/// Configuration the SDK consumes before its code loads.
///
/// The real SDK reads a global mutable object; modeling it as a value
/// injected through [`AdSdk::load`] keeps the only input/output channel
/// explicit and testable.
#[derive(Clone)]
pub struct SdkConfig {
    /// Publisher-assigned game identifier.
    pub game_id: String,
    /// The one event callback the SDK will invoke.
    pub sink: EventSink,
}

impl SdkConfig {
    /// Build a config for `game_id` delivering events to `sink`.
    pub fn new(game_id: impl Into<String>, sink: EventSink) -> Self {
        Self {
            game_id: game_id.into(),
            sink,
        }
    }
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("game_id", &self.game_id)
            .field("sink", &"<event sink>")
            .finish()
    }
}

/// Handle to the external advertising SDK.
///
/// Implementations wrap the real third-party runtime; tests use a scripted
/// double. The handle is assumed single-request for interstitial and
/// rewarded kinds - callers must not overlap them.
#[async_trait]
pub trait AdSdk: Send + Sync {
    /// Register the event sink and load the SDK's code.
    ///
    /// Resolution means the code was fetched and evaluated; readiness to
    /// serve ads is signaled separately through an `SDK_READY` event on
    /// the sink. A load that never completes is a fatal startup condition
    /// and is surfaced here, not worked around.
    async fn load(&self, config: SdkConfig) -> SdkResult<()>;

    /// Ask the SDK to show an ad of `kind`.
    ///
    /// Settlement of the returned future is unreliable: the SDK is known
    /// to hang without resolving on some environments. Callers own the
    /// deadline.
    async fn show_ad(&self, kind: SdkAdKind, options: Option<ShowOptions>) -> SdkResult<()>;

    /// Open the SDK's built-in debug console. Must be invoked at most once
    /// per installation; repeated invocation corrupts the SDK's UI.
    fn open_console(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_debug_does_not_leak_sink() {
        let sink: EventSink = Arc::new(|_| {});
        let config = SdkConfig::new("game-123", sink);
        let rendered = format!("{config:?}");
        assert!(rendered.contains("game-123"));
        assert!(rendered.contains("<event sink>"));
    }

    #[test]
    fn show_options_for_container() {
        let options = ShowOptions::in_container("banner-slot");
        assert_eq!(options.container_id.as_deref(), Some("banner-slot"));
        assert_eq!(ShowOptions::default().container_id, None);
    }
}
