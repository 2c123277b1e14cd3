//! Host-facing value types for ad requests.
//!
//! These types are the shared vocabulary between the embedding host and the
//! plugin. They mirror the host's ad-orchestration contract exactly, so the
//! serialized shape is part of the public interface and covered by tests.

use serde::{Deserialize, Serialize};

/// The kind of ad a host can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdKind {
    /// A full-screen interstitial shown between gameplay moments.
    FullScreen,
    /// A rewarded video the user opts into watching for a reward.
    Rewarded,
    /// A persistent banner rendered into a host-provided container.
    Banner,
}

/// Why an ad request concluded without an ad being shown.
///
/// Absence of a reason (`AdOutcome::error_reason == None`) is the success
/// case; there is no `None` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorReason {
    /// The SDK refused the request because the previous ad finished too
    /// recently. Expected, recovered locally, never surfaced as an error.
    TimeConstraint,
    /// The SDK went silent: no impression and no settlement within the
    /// settle window. Known SDK defect class on developer environments.
    Unknown,
}

/// The normalized result of a single full-screen or rewarded ad request.
///
/// Produced fresh for every request and immutable once returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdOutcome {
    /// Whether an ad was shown (full-screen: an impression was observed;
    /// rewarded: the reward-completion signal fired).
    pub did_show_ad: bool,
    /// Failure classification, `None` on success.
    pub error_reason: Option<ErrorReason>,
}

impl AdOutcome {
    /// A request that concluded normally; `did_show_ad` comes from the
    /// kind-specific flag the caller derives it from.
    #[must_use]
    pub fn shown(did_show_ad: bool) -> Self {
        Self {
            did_show_ad,
            error_reason: None,
        }
    }

    /// A request that concluded on one of the two classified failure paths.
    #[must_use]
    pub fn failed(reason: ErrorReason) -> Self {
        Self {
            did_show_ad: false,
            error_reason: Some(reason),
        }
    }
}

/// Capability flags the plugin declares to the host.
///
/// Both are `true` for this plugin: pause and mute state are managed only
/// through explicit `HostContext` calls, never inferred by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginCapabilities {
    /// The host must wait for explicit `set_needs_pause` calls.
    pub explicit_pause: bool,
    /// The host must wait for explicit `set_needs_mute` calls.
    pub explicit_mute: bool,
}

impl Default for PluginCapabilities {
    fn default() -> Self {
        Self {
            explicit_pause: true,
            explicit_mute: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_reason_json_format() {
        assert_eq!(
            serde_json::to_string(&ErrorReason::TimeConstraint).unwrap(),
            "\"time-constraint\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorReason::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn outcome_success_shape() {
        let outcome = AdOutcome::shown(true);
        assert!(outcome.did_show_ad);
        assert!(outcome.error_reason.is_none());

        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"did_show_ad":true,"error_reason":null}"#);
    }

    #[test]
    fn outcome_failure_never_shows() {
        let outcome = AdOutcome::failed(ErrorReason::TimeConstraint);
        assert!(!outcome.did_show_ad);
        assert_eq!(outcome.error_reason, Some(ErrorReason::TimeConstraint));
    }

    #[test]
    fn outcome_round_trip() {
        for outcome in [
            AdOutcome::shown(false),
            AdOutcome::shown(true),
            AdOutcome::failed(ErrorReason::Unknown),
        ] {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: AdOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, back);
        }
    }

    #[test]
    fn capabilities_default_to_explicit() {
        let caps = PluginCapabilities::default();
        assert!(caps.explicit_pause);
        assert!(caps.explicit_mute);
    }
}
