//! Pause/mute state bridge between SDK events and the host.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::debug;

use adbridge_core::HostContext;

/// Mirrors SDK-reported pause/start events onto the host's pause and mute
/// flags, and forces both back to a safe state whenever an ad request
/// concludes.
///
/// The SDK sometimes emits a pause without the matching start, especially
/// on the timeout and failure paths. A host left permanently paused is the
/// worst failure mode this plugin can produce, so [`force_resume`] runs
/// unconditionally on every request exit path. All transitions are
/// idempotent.
///
/// [`force_resume`]: PauseMuteBridge::force_resume
#[derive(Debug, Default)]
pub(crate) struct PauseMuteBridge {
    host: OnceLock<Arc<dyn HostContext>>,
    paused: AtomicBool,
    muted: AtomicBool,
}

impl PauseMuteBridge {
    /// Attach the host context. Later attaches are ignored; the session
    /// initializes once.
    pub(crate) fn attach(&self, host: Arc<dyn HostContext>) {
        let _ = self.host.set(host);
    }

    /// An ad is taking over: pause and mute.
    pub(crate) fn suspend(&self) {
        self.apply(true, true);
    }

    /// The ad is gone: unpause and unmute.
    pub(crate) fn resume(&self) {
        self.apply(false, false);
    }

    /// Unconditional safe-state reset, run on every request exit path.
    pub(crate) fn force_resume(&self) {
        if self.paused.load(Ordering::SeqCst) || self.muted.load(Ordering::SeqCst) {
            debug!("clearing pause/mute left over from ad request");
        }
        self.apply(false, false);
    }

    /// Whether the host is currently asked to pause.
    pub(crate) fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Whether the host is currently asked to mute.
    pub(crate) fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    fn apply(&self, paused: bool, muted: bool) {
        self.paused.store(paused, Ordering::SeqCst);
        self.muted.store(muted, Ordering::SeqCst);
        if let Some(host) = self.host.get() {
            host.set_needs_pause(paused);
            host.set_needs_mute(muted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Default)]
    struct CountingHost {
        pause_calls: AtomicUsize,
        mute_calls: AtomicUsize,
    }

    impl HostContext for CountingHost {
        fn set_needs_pause(&self, _paused: bool) {
            self.pause_calls.fetch_add(1, Ordering::SeqCst);
        }

        fn set_needs_mute(&self, _muted: bool) {
            self.mute_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn suspend_and_resume_mirror_to_host() {
        let bridge = PauseMuteBridge::default();
        let host = Arc::new(CountingHost::default());
        bridge.attach(Arc::clone(&host) as Arc<dyn HostContext>);

        bridge.suspend();
        assert!(bridge.is_paused());
        assert!(bridge.is_muted());

        bridge.resume();
        assert!(!bridge.is_paused());
        assert!(!bridge.is_muted());

        assert_eq!(host.pause_calls.load(Ordering::SeqCst), 2);
        assert_eq!(host.mute_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn force_resume_is_idempotent() {
        let bridge = PauseMuteBridge::default();
        bridge.suspend();
        bridge.force_resume();
        bridge.force_resume();
        assert!(!bridge.is_paused());
        assert!(!bridge.is_muted());
    }

    #[test]
    fn unattached_bridge_still_tracks_flags() {
        // Events can arrive before attach in pathological orderings; the
        // bridge must not panic.
        let bridge = PauseMuteBridge::default();
        bridge.suspend();
        assert!(bridge.is_paused());
        bridge.force_resume();
        assert!(!bridge.is_paused());
    }
}
