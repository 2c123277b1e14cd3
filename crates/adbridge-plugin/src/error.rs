//! Error types for plugin operations.
//!
//! Only genuinely unrecoverable conditions live here. The two classified
//! ad-request failure modes (`time-constraint`, `unknown`) are not errors;
//! they are absorbed into [`AdOutcome`](adbridge_core::AdOutcome) and never
//! thrown to the host.

use adbridge_sdk::SdkError;
use thiserror::Error;

/// Errors surfaced to the host by plugin operations.
#[derive(Debug, Error)]
pub enum PluginError {
    /// `initialize` was called a second time on the same session.
    #[error("plugin already initialized")]
    DuplicateInitialization,

    /// The ready handshake channel closed without a ready signal. Cannot
    /// happen while the session holds the sender; kept typed rather than
    /// unwrapped.
    #[error("sdk ready signal lost")]
    ReadySignalLost,

    /// An unclassified SDK fault. Propagated to the host's own error
    /// boundary; the pause/mute reset has already run by the time this
    /// escapes.
    #[error("sdk fault: {0}")]
    Sdk(#[from] SdkError),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            PluginError::DuplicateInitialization.to_string(),
            "plugin already initialized"
        );
        let err = PluginError::from(SdkError::Unavailable);
        assert_eq!(err.to_string(), "sdk fault: sdk handle unavailable");
    }

    #[test]
    fn sdk_faults_keep_their_classification() {
        let err = PluginError::from(SdkError::requested_too_soon());
        assert!(matches!(err, PluginError::Sdk(ref e) if e.is_time_constraint()));
    }
}
