//! The event translator: the single point where the SDK's protocol is
//! decoded.
//!
//! Invoked synchronously by the SDK for every named event. It never
//! suspends and never fails; every other component derives its state from
//! the flags this dispatch sets, which keeps them pure reactions to
//! already-normalized state. Because the sink runs to completion before
//! any awaiting code resumes, flag reads after a resume are consistent
//! with all events delivered up to that point.

use tracing::trace;

use adbridge_sdk::SdkEvent;

use crate::bridge::PauseMuteBridge;
use crate::session::SessionState;

/// Classify and apply one raw SDK event.
pub(crate) fn dispatch(session: &SessionState, bridge: &PauseMuteBridge, raw: &str) {
    let event = SdkEvent::classify(raw);
    trace!(event = %event.name(), "sdk event");

    match event {
        SdkEvent::Ready => session.resolve_ready(),
        SdkEvent::GamePause => bridge.suspend(),
        SdkEvent::GameStart => bridge.resume(),
        SdkEvent::RewardedWatchComplete => session.reward.record(),
        SdkEvent::Impression => session.mark_impression(),
        SdkEvent::Unknown(name) => {
            trace!(event = %name, "ignoring unknown sdk event");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_and_start_drive_the_bridge() {
        let session = SessionState::default();
        let bridge = PauseMuteBridge::default();

        dispatch(&session, &bridge, "SDK_GAME_PAUSE");
        assert!(bridge.is_paused());
        assert!(bridge.is_muted());

        dispatch(&session, &bridge, "SDK_GAME_START");
        assert!(!bridge.is_paused());
        assert!(!bridge.is_muted());
    }

    #[test]
    fn reward_and_impression_set_session_flags() {
        let session = SessionState::default();
        let bridge = PauseMuteBridge::default();

        dispatch(&session, &bridge, "SDK_REWARDED_WATCH_COMPLETE");
        assert!(session.reward.received());

        dispatch(&session, &bridge, "IMPRESSION");
        assert!(session.impression_seen());
    }

    #[test]
    fn unknown_events_change_nothing() {
        let session = SessionState::default();
        let bridge = PauseMuteBridge::default();

        dispatch(&session, &bridge, "SDK_BID_RESOLVED");
        dispatch(&session, &bridge, "");

        assert!(!session.impression_seen());
        assert!(!session.reward.received());
        assert!(!bridge.is_paused());
    }

    #[tokio::test]
    async fn ready_resolves_the_armed_handshake() {
        let session = SessionState::default();
        let bridge = PauseMuteBridge::default();
        let rx = session.arm_ready();

        dispatch(&session, &bridge, "SDK_READY");
        dispatch(&session, &bridge, "SDK_READY");

        rx.await.unwrap();
    }
}
