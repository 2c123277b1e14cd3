//! The ad request coordinator: one settlement per request, first writer
//! wins.
//!
//! Three independent signals can conclude a request: the SDK's own promise
//! settling, an impression event, and the settle-window deadline. The
//! coordinator reconciles them with a single `tokio::select!` race; the
//! losing branch is dropped and never observed, so double resolution is
//! impossible by construction. The pause/mute reset runs before *any*
//! result leaves this module, including the propagating-fault path.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use adbridge_core::{AdKind, AdOutcome, ErrorReason};
use adbridge_sdk::{AdSdk, SdkAdKind, SdkResult};

use crate::error::PluginError;
use crate::plugin::AdsPlugin;
use crate::session::SessionState;

/// One in-flight full-screen or rewarded request. Exists from issue to
/// settlement, then is consumed; the SDK is assumed single-request, so at
/// most one of these is alive at a time.
struct AdRequest {
    kind: AdKind,
    started_at: DateTime<Utc>,
}

impl AdRequest {
    fn begin(kind: AdKind) -> Self {
        debug!(kind = ?kind, "ad request started");
        Self {
            kind,
            started_at: Utc::now(),
        }
    }

    fn settle(self, resolution: &str) {
        let completed_at = Utc::now();
        #[allow(clippy::cast_sign_loss)]
        #[allow(clippy::arithmetic_side_effects)]
        let duration_ms = (completed_at - self.started_at).num_milliseconds().max(0) as u64;
        debug!(
            kind = ?self.kind,
            resolution,
            duration_ms,
            "ad request settled"
        );
    }
}

/// Which signal won the race.
enum Settlement {
    Sdk(SdkResult<()>),
    Deadline,
}

/// Completes once the settle window elapses with no impression seen.
///
/// If an impression *has* been seen by then, the SDK got far enough that
/// its promise can be trusted to settle on its own; resolving here too
/// would race a second outcome against it, so this branch pends forever
/// instead.
async fn deadline_guard(window: std::time::Duration, session: &SessionState) {
    tokio::time::sleep(window).await;
    if session.impression_seen() {
        std::future::pending::<()>().await;
    }
}

fn sdk_kind(kind: AdKind) -> SdkAdKind {
    match kind {
        AdKind::FullScreen => SdkAdKind::Interstitial,
        AdKind::Rewarded => SdkAdKind::Rewarded,
        AdKind::Banner => SdkAdKind::Display,
    }
}

impl<S: AdSdk> AdsPlugin<S> {
    /// Drive one full-screen or rewarded request end-to-end.
    ///
    /// Returns `Ok(None)` when the SDK settled cleanly: the caller derives
    /// the outcome from the kind-specific flags. Returns `Ok(Some(..))`
    /// for the two classified failure paths (time constraint, silent
    /// timeout). Any other SDK fault propagates - after the pause/mute
    /// reset has run.
    pub(crate) async fn request_ad(&self, kind: AdKind) -> Result<Option<AdOutcome>, PluginError> {
        self.session.begin_request(kind);
        let request = AdRequest::begin(kind);
        let window = self.config.ad_settle_window();

        let settlement = tokio::select! {
            result = self.sdk.show_ad(sdk_kind(kind), None) => Settlement::Sdk(result),
            () = deadline_guard(window, &self.session) => Settlement::Deadline,
        };

        // Unconditional: the SDK sometimes emits a pause without the
        // matching start, and a host left paused is unrecoverable.
        self.bridge.force_resume();

        match settlement {
            Settlement::Sdk(Ok(())) => {
                request.settle("sdk-settled");
                Ok(None)
            },
            Settlement::Sdk(Err(error)) if error.is_time_constraint() => {
                request.settle("time-constraint");
                Ok(Some(AdOutcome::failed(ErrorReason::TimeConstraint)))
            },
            Settlement::Sdk(Err(error)) => {
                request.settle("sdk-fault");
                Err(PluginError::Sdk(error))
            },
            Settlement::Deadline => {
                warn!(
                    kind = ?kind,
                    window_secs = window.as_secs(),
                    "sdk never settled and no impression fired; giving up"
                );
                request.settle("deadline");
                Ok(Some(AdOutcome::failed(ErrorReason::Unknown)))
            },
        }
    }
}
