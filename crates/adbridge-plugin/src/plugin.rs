//! The public plugin surface consumed by the host.

use std::sync::Arc;

use tracing::{debug, info, warn};

use adbridge_core::{
    AdKind, AdOutcome, ConsoleMarker, HostContext, NoopConsoleMarker, PluginCapabilities,
};
use adbridge_sdk::{AdSdk, EventSink, SdkAdKind, SdkConfig, ShowOptions};

use crate::bridge::PauseMuteBridge;
use crate::config::PluginConfig;
use crate::error::{PluginError, PluginResult};
use crate::session::SessionState;
use crate::translator;

/// Promise-style facade over the callback-driven ad SDK.
///
/// One instance exists per page load. [`initialize`](Self::initialize) may
/// be called exactly once; the show operations may then be called freely,
/// one full-screen/rewarded request at a time.
pub struct AdsPlugin<S: AdSdk> {
    pub(crate) sdk: Arc<S>,
    pub(crate) config: PluginConfig,
    pub(crate) session: Arc<SessionState>,
    pub(crate) bridge: Arc<PauseMuteBridge>,
    console: Arc<dyn ConsoleMarker>,
}

impl<S: AdSdk + 'static> AdsPlugin<S> {
    /// Create a plugin over `sdk` with the given configuration.
    ///
    /// The default console marker never opens the debug console; wire a
    /// persisted one with [`with_console_marker`](Self::with_console_marker)
    /// when `config.debug` is in play.
    #[must_use]
    pub fn new(sdk: Arc<S>, config: PluginConfig) -> Self {
        Self {
            sdk,
            config,
            session: Arc::new(SessionState::default()),
            bridge: Arc::new(PauseMuteBridge::default()),
            console: Arc::new(NoopConsoleMarker),
        }
    }

    /// Replace the console marker with a persisted implementation.
    #[must_use]
    pub fn with_console_marker(mut self, marker: Arc<dyn ConsoleMarker>) -> Self {
        self.console = marker;
        self
    }

    /// Capability flags declared to the host: pause and mute are managed
    /// only through explicit [`HostContext`] calls, never inferred.
    #[must_use]
    pub fn capabilities(&self) -> PluginCapabilities {
        PluginCapabilities::default()
    }

    /// Load the SDK and suspend until it reports ready.
    ///
    /// Registers the event sink, hands the SDK its configuration, then
    /// waits for the `SDK_READY` event with no timeout: an unresponsive
    /// load is a fatal startup condition and surfaces from the load
    /// itself. On success, opens the SDK debug console at most once across
    /// the installation's lifetime when the debug flag is set.
    ///
    /// # Errors
    ///
    /// [`PluginError::DuplicateInitialization`] on a second call (before
    /// any side effect), or the SDK's own load failure.
    pub async fn initialize(&self, host: Arc<dyn HostContext>) -> PluginResult<()> {
        if !self.session.claim_initialization() {
            return Err(PluginError::DuplicateInitialization);
        }

        self.bridge.attach(host);
        let ready = self.session.arm_ready();

        let sink: EventSink = {
            let session = Arc::clone(&self.session);
            let bridge = Arc::clone(&self.bridge);
            Arc::new(move |raw: &str| translator::dispatch(&session, &bridge, raw))
        };
        self.sdk
            .load(SdkConfig::new(self.config.game_id.clone(), sink))
            .await?;

        ready.await.map_err(|_| PluginError::ReadySignalLost)?;
        info!(game_id = %self.config.game_id, "ad sdk ready");

        if self.config.debug && !self.console.already_opened() {
            self.sdk.open_console();
            self.console.mark_opened();
            debug!("opened sdk debug console");
        }

        Ok(())
    }

    /// Show a full-screen interstitial.
    ///
    /// `did_show_ad` reports whether an impression was observed for this
    /// request.
    ///
    /// # Errors
    ///
    /// Unclassified SDK faults propagate; the two known failure modes are
    /// returned as structured outcomes instead.
    pub async fn show_full_screen_ad(&self) -> PluginResult<AdOutcome> {
        match self.request_ad(AdKind::FullScreen).await? {
            Some(outcome) => Ok(outcome),
            None => Ok(AdOutcome::shown(self.session.impression_seen())),
        }
    }

    /// Show a rewarded video.
    ///
    /// `did_show_ad` reports whether the reward-completion signal fired,
    /// not whether an impression was seen: a rewarded ad can render and
    /// still be skipped, and the host must not grant the reward then.
    ///
    /// # Errors
    ///
    /// Unclassified SDK faults propagate; the two known failure modes are
    /// returned as structured outcomes instead.
    pub async fn show_rewarded_ad(&self) -> PluginResult<AdOutcome> {
        match self.request_ad(AdKind::Rewarded).await? {
            Some(outcome) => Ok(outcome),
            None => Ok(AdOutcome::shown(self.session.reward.received())),
        }
    }

    /// Show a persistent banner in the given container.
    ///
    /// Fire-and-forget: banners have no outcome, no settle window, and no
    /// pause/impression lifecycle. A failed banner request is logged and
    /// otherwise dropped.
    pub fn show_banner_ad(&self, container_id: &str) {
        let sdk = Arc::clone(&self.sdk);
        let options = ShowOptions::in_container(container_id);
        tokio::spawn(async move {
            if let Err(error) = sdk.show_ad(SdkAdKind::Display, Some(options)).await {
                warn!(%error, "banner ad request failed");
            }
        });
    }

    /// Whether the host is currently asked to pause. Exposed for the
    /// embedder's own diagnostics.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.bridge.is_paused()
    }

    /// Whether the host is currently asked to mute.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.bridge.is_muted()
    }
}
