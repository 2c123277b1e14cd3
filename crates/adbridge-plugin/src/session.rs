//! Per-session state shared between the translator and the request paths.
//!
//! One `SessionState` exists per plugin instance and lives for the page's
//! lifetime. Each flag has a single writer (the event translator); the
//! coordinator and public operations only read, so no flag is ever
//! contended for writes.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::oneshot;
use tracing::{debug, trace};

use adbridge_core::AdKind;

/// Records whether the reward-completion event fired during the lifetime
/// of the most recent rewarded-ad request.
#[derive(Debug, Default)]
pub(crate) struct RewardTracker {
    received: AtomicBool,
}

impl RewardTracker {
    /// Forget any reward from a previous request.
    pub(crate) fn reset(&self) {
        self.received.store(false, Ordering::SeqCst);
    }

    /// The user watched a rewarded ad to completion.
    pub(crate) fn record(&self) {
        self.received.store(true, Ordering::SeqCst);
    }

    /// Whether a reward was earned since the last reset.
    pub(crate) fn received(&self) -> bool {
        self.received.load(Ordering::SeqCst)
    }
}

/// Mutable session state.
///
/// Holds the initialization latch, the pending ready-handshake sender, and
/// the per-request flags. The ready sender is armed once by `initialize`
/// and consumed exactly once by the first `SDK_READY` event.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    initialized: AtomicBool,
    ready: Mutex<Option<oneshot::Sender<()>>>,
    impression_seen: AtomicBool,
    pub(crate) reward: RewardTracker,
}

impl SessionState {
    /// Claim the one-time right to initialize this session.
    ///
    /// Returns `false` if the session was already claimed. Runs before any
    /// other initialization side effect.
    pub(crate) fn claim_initialization(&self) -> bool {
        !self.initialized.swap(true, Ordering::SeqCst)
    }

    /// Arm the ready handshake, returning the receiver `initialize` will
    /// suspend on.
    pub(crate) fn arm_ready(&self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut slot) = self.ready.lock() {
            *slot = Some(tx);
        }
        rx
    }

    /// Resolve the pending ready handshake, exactly once.
    ///
    /// Later ready events find the slot empty and are no-ops.
    pub(crate) fn resolve_ready(&self) {
        let sender = self.ready.lock().ok().and_then(|mut slot| slot.take());
        match sender {
            Some(tx) => {
                debug!("sdk ready");
                // The receiver outlives us inside initialize; if it was
                // dropped the handshake already failed and there is
                // nothing left to notify.
                let _ = tx.send(());
            },
            None => trace!("duplicate sdk ready ignored"),
        }
    }

    /// An ad unit began rendering for the outstanding request.
    pub(crate) fn mark_impression(&self) {
        self.impression_seen.store(true, Ordering::SeqCst);
    }

    /// Whether an impression fired since the current request began.
    pub(crate) fn impression_seen(&self) -> bool {
        self.impression_seen.load(Ordering::SeqCst)
    }

    /// Clear stale flags before issuing a new request.
    ///
    /// The reward flag only resets for rewarded requests; a full-screen
    /// request must not erase a reward the host has not yet consumed.
    pub(crate) fn begin_request(&self, kind: AdKind) {
        self.impression_seen.store(false, Ordering::SeqCst);
        if kind == AdKind::Rewarded {
            self.reward.reset();
        }
    }
}
