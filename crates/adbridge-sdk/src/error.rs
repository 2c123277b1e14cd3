//! Error types for the external SDK boundary.

use thiserror::Error;

/// The literal rejection value the SDK uses when an ad is requested too
/// soon after the previous one finished. This is the only rejection the
/// adapter classifies; everything else is an unclassified SDK fault.
pub const AD_REQUESTED_TOO_SOON: &str = "AdRequestedTooSoon";

/// Errors surfaced by the external SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The SDK rejected a show-ad request with the given raw value.
    #[error("ad request rejected by sdk: {0}")]
    Rejected(String),

    /// The SDK's code failed to load or initialize.
    #[error("sdk failed to load: {0}")]
    LoadFailed(String),

    /// The SDK handle is not available (load never completed).
    #[error("sdk handle unavailable")]
    Unavailable,
}

impl SdkError {
    /// Whether this is the known "requested too soon" rejection, the one
    /// failure mode the plugin absorbs into a structured outcome.
    #[must_use]
    pub fn is_time_constraint(&self) -> bool {
        matches!(self, Self::Rejected(raw) if raw == AD_REQUESTED_TOO_SOON)
    }

    /// The sentinel rejection itself.
    #[must_use]
    pub fn requested_too_soon() -> Self {
        Self::Rejected(AD_REQUESTED_TOO_SOON.to_string())
    }
}

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_time_constraint() {
        assert!(SdkError::requested_too_soon().is_time_constraint());
    }

    #[test]
    fn other_rejections_are_not_time_constraint() {
        assert!(!SdkError::Rejected("AdBlockerDetected".into()).is_time_constraint());
        assert!(!SdkError::Unavailable.is_time_constraint());
        assert!(!SdkError::LoadFailed("script 404".into()).is_time_constraint());
    }

    #[test]
    fn error_display() {
        let err = SdkError::requested_too_soon();
        assert_eq!(
            err.to_string(),
            "ad request rejected by sdk: AdRequestedTooSoon"
        );
    }
}
