//! Classification of the SDK's named lifecycle events.

/// A lifecycle event emitted by the external SDK through its single
/// registered callback.
///
/// The raw protocol is a string name. Classifying it into a sum type at
/// the boundary gives the translator an exhaustive match instead of
/// scattered string comparisons, and makes "ignore what you don't know"
/// an explicit variant rather than a fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkEvent {
    /// The SDK finished loading and is ready to serve requests.
    Ready,
    /// An ad is taking over; gameplay must pause and mute.
    GamePause,
    /// The ad is gone; gameplay may resume.
    GameStart,
    /// The user watched a rewarded ad to completion.
    RewardedWatchComplete,
    /// An ad unit began rendering to the user.
    Impression,
    /// Any event name this adapter does not recognize. Carried for
    /// tracing, otherwise ignored - the SDK adds names over time and an
    /// unknown one must never be an error.
    Unknown(String),
}

impl SdkEvent {
    /// Classify a raw event name from the SDK callback.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            "SDK_READY" => Self::Ready,
            "SDK_GAME_PAUSE" => Self::GamePause,
            "SDK_GAME_START" => Self::GameStart,
            "SDK_REWARDED_WATCH_COMPLETE" => Self::RewardedWatchComplete,
            "IMPRESSION" => Self::Impression,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The raw protocol name for known events, or the carried name for
    /// unknown ones. Used in log records.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ready => "SDK_READY",
            Self::GamePause => "SDK_GAME_PAUSE",
            Self::GameStart => "SDK_GAME_START",
            Self::RewardedWatchComplete => "SDK_REWARDED_WATCH_COMPLETE",
            Self::Impression => "IMPRESSION",
            Self::Unknown(name) => name,
        }
    }
}
