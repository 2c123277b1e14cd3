//! Trait seams implemented by the embedding host.

use std::fmt;

/// The host-side surface the plugin drives.
///
/// The plugin never infers anything about the host; pause and mute state
/// travel exclusively through these two calls. Implementations must be
/// cheap and non-blocking: they are invoked synchronously from the SDK
/// event callback.
pub trait HostContext: Send + Sync + fmt::Debug {
    /// Tell the host whether gameplay should be paused.
    fn set_needs_pause(&self, paused: bool);

    /// Tell the host whether audio should be muted.
    fn set_needs_mute(&self, muted: bool);
}

/// Persisted once-only gate for the SDK's debug console.
///
/// Opening the SDK console more than once across a page's lifetime corrupts
/// the SDK's own UI, so the "already opened" bit must survive reloads. The
/// persistence itself is a thin I/O concern owned by the embedder; the
/// plugin only consults and sets the flag.
pub trait ConsoleMarker: Send + Sync {
    /// Whether the console has already been opened on this installation.
    fn already_opened(&self) -> bool;

    /// Record that the console has been opened.
    fn mark_opened(&self);
}

/// `ConsoleMarker` that never allows the console to open.
///
/// The right default for release builds, where the debug flag is off and
/// no persistence is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConsoleMarker;

impl ConsoleMarker for NoopConsoleMarker {
    fn already_opened(&self) -> bool {
        true
    }

    fn mark_opened(&self) {}
}
