//! Mock implementations for testing.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use adbridge_core::{ConsoleMarker, HostContext};
use adbridge_sdk::{AdSdk, EventSink, SdkAdKind, SdkConfig, SdkError, SdkResult, ShowOptions};

/// How the mock SDK handles one `show_ad` call.
#[derive(Debug, Clone)]
pub enum ShowScript {
    /// Settle cleanly right away.
    Resolve,
    /// Emit the given raw events through the sink, then settle cleanly.
    EmitThenResolve(Vec<&'static str>),
    /// Emit the given raw events, wait, then settle cleanly.
    EmitThenResolveAfter(Vec<&'static str>, Duration),
    /// Reject with the "requested too soon" sentinel.
    RejectTooSoon,
    /// Reject with an arbitrary raw value.
    Reject(String),
    /// Hang forever without settling, emitting nothing.
    NeverSettle,
    /// Emit the given raw events, then hang forever.
    EmitThenNeverSettle(Vec<&'static str>),
}

/// Scriptable stand-in for the external advertising SDK.
///
/// Uses `std::sync::Mutex` internally so builder methods work without a
/// tokio runtime. By default, `load` succeeds and immediately emits
/// `SDK_READY`; `show_ad` settles cleanly when the script queue is empty.
pub struct MockSdk {
    /// The sink registered at load time.
    sink: Mutex<Option<EventSink>>,
    /// Game id the SDK was configured with.
    game_id: Mutex<Option<String>>,
    /// Queued per-call show scripts.
    scripts: Mutex<VecDeque<ShowScript>>,
    /// Every `show_ad` call, in order.
    show_calls: Mutex<Vec<(SdkAdKind, Option<ShowOptions>)>>,
    /// Number of `load` calls observed.
    load_calls: AtomicUsize,
    /// Number of `open_console` calls observed.
    console_opens: AtomicUsize,
    /// Emit `SDK_READY` as soon as load completes.
    auto_ready: bool,
    /// Fail `load` with this message instead of succeeding.
    load_failure: Option<String>,
}

impl Default for MockSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSdk {
    /// A mock that loads successfully and reports ready immediately.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Mutex::new(None),
            game_id: Mutex::new(None),
            scripts: Mutex::new(VecDeque::new()),
            show_calls: Mutex::new(Vec::new()),
            load_calls: AtomicUsize::new(0),
            console_opens: AtomicUsize::new(0),
            auto_ready: true,
            load_failure: None,
        }
    }

    /// Don't emit `SDK_READY` on load; the test drives it via [`emit`].
    ///
    /// [`emit`]: Self::emit
    #[must_use]
    pub fn with_manual_ready(mut self) -> Self {
        self.auto_ready = false;
        self
    }

    /// Make `load` fail with the given message.
    #[must_use]
    pub fn with_load_failure(mut self, message: impl Into<String>) -> Self {
        self.load_failure = Some(message.into());
        self
    }

    /// Queue a script for the next unscripted `show_ad` call.
    #[must_use]
    pub fn with_show_script(self, script: ShowScript) -> Self {
        self.queue_script(script);
        self
    }

    /// Queue a script after construction.
    pub fn queue_script(&self, script: ShowScript) {
        if let Ok(mut guard) = self.scripts.lock() {
            guard.push_back(script);
        }
    }

    /// Deliver a raw event through the registered sink, synchronously.
    ///
    /// Does nothing if no sink has been registered yet.
    pub fn emit(&self, raw: &str) {
        let sink = self.sink.lock().ok().and_then(|guard| guard.clone());
        if let Some(sink) = sink {
            sink(raw);
        }
    }

    /// Whether a sink has been registered.
    #[must_use]
    pub fn sink_registered(&self) -> bool {
        self.sink
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// The game id handed over at load time.
    #[must_use]
    pub fn configured_game_id(&self) -> Option<String> {
        self.game_id.lock().ok().and_then(|guard| guard.clone())
    }

    /// Every `show_ad` call observed so far.
    #[must_use]
    pub fn show_calls(&self) -> Vec<(SdkAdKind, Option<ShowOptions>)> {
        self.show_calls
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of `load` calls observed.
    #[must_use]
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    /// Number of `open_console` calls observed.
    #[must_use]
    pub fn console_opens(&self) -> usize {
        self.console_opens.load(Ordering::SeqCst)
    }

    fn emit_all(&self, events: &[&'static str]) {
        for raw in events {
            self.emit(raw);
        }
    }
}

impl fmt::Debug for MockSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSdk")
            .field("auto_ready", &self.auto_ready)
            .field("load_calls", &self.load_calls())
            .field("console_opens", &self.console_opens())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AdSdk for MockSdk {
    async fn load(&self, config: SdkConfig) -> SdkResult<()> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.load_failure {
            return Err(SdkError::LoadFailed(message.clone()));
        }

        if let Ok(mut guard) = self.game_id.lock() {
            *guard = Some(config.game_id.clone());
        }
        if let Ok(mut guard) = self.sink.lock() {
            *guard = Some(config.sink);
        }

        if self.auto_ready {
            self.emit("SDK_READY");
        }
        Ok(())
    }

    async fn show_ad(&self, kind: SdkAdKind, options: Option<ShowOptions>) -> SdkResult<()> {
        if let Ok(mut guard) = self.show_calls.lock() {
            guard.push((kind, options));
        }

        let script = self
            .scripts
            .lock()
            .ok()
            .and_then(|mut guard| guard.pop_front())
            .unwrap_or(ShowScript::Resolve);

        match script {
            ShowScript::Resolve => Ok(()),
            ShowScript::EmitThenResolve(events) => {
                self.emit_all(&events);
                Ok(())
            },
            ShowScript::EmitThenResolveAfter(events, delay) => {
                self.emit_all(&events);
                tokio::time::sleep(delay).await;
                Ok(())
            },
            ShowScript::RejectTooSoon => Err(SdkError::requested_too_soon()),
            ShowScript::Reject(raw) => Err(SdkError::Rejected(raw)),
            ShowScript::NeverSettle => {
                std::future::pending::<()>().await;
                Ok(())
            },
            ShowScript::EmitThenNeverSettle(events) => {
                self.emit_all(&events);
                std::future::pending::<()>().await;
                Ok(())
            },
        }
    }

    fn open_console(&self) {
        self.console_opens.fetch_add(1, Ordering::SeqCst);
    }
}

/// Recording implementation of [`HostContext`].
#[derive(Debug, Default)]
pub struct MockHost {
    paused: AtomicBool,
    muted: AtomicBool,
    pause_calls: Mutex<Vec<bool>>,
    mute_calls: Mutex<Vec<bool>>,
}

impl MockHost {
    /// A host with pause and mute both off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The host's current pause flag.
    #[must_use]
    pub fn needs_pause(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// The host's current mute flag.
    #[must_use]
    pub fn needs_mute(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    /// Every `set_needs_pause` value received, in order.
    #[must_use]
    pub fn pause_history(&self) -> Vec<bool> {
        self.pause_calls
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Every `set_needs_mute` value received, in order.
    #[must_use]
    pub fn mute_history(&self) -> Vec<bool> {
        self.mute_calls
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl HostContext for MockHost {
    fn set_needs_pause(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
        if let Ok(mut guard) = self.pause_calls.lock() {
            guard.push(paused);
        }
    }

    fn set_needs_mute(&self, muted: bool) {
        self.muted.store(muted, Ordering::SeqCst);
        if let Ok(mut guard) = self.mute_calls.lock() {
            guard.push(muted);
        }
    }
}

/// In-memory [`ConsoleMarker`].
#[derive(Debug, Default)]
pub struct MemoryConsoleMarker {
    opened: AtomicBool,
}

impl MemoryConsoleMarker {
    /// A marker that has never been opened.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsoleMarker for MemoryConsoleMarker {
    fn already_opened(&self) -> bool {
        self.opened.load(Ordering::SeqCst)
    }

    fn mark_opened(&self) {
        self.opened.store(true, Ordering::SeqCst);
    }
}
