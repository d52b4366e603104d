//! Crash-report event type and platform tag.

use crate::model::{ExceptionChain, Thread};

/// Platform tag carried by an event.
///
/// Enumerates platforms the display layer treats specially, wrapping unknown
/// tags in `Other`. An absent tag resolves to `Platform::default()`, which
/// is `Other("other")`-equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Native code (C/C++/Rust, minidumps).
    Native,
    /// Apple platforms.
    Cocoa,
    /// JVM-based platforms.
    Java,
    /// Browser and Node.
    Javascript,
    /// CPython.
    Python,
    /// Unknown or unlisted platform tag.
    Other(String),
}

impl Platform {
    /// Parse a platform tag from an event document.
    ///
    /// Recognizes the platforms with display-relevant behavior, wrapping
    /// everything else in `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "native" => Self::Native,
            "cocoa" => Self::Cocoa,
            "java" => Self::Java,
            "javascript" | "node" => Self::Javascript,
            "python" => Self::Python,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Native => "native",
            Self::Cocoa => "cocoa",
            Self::Java => "java",
            Self::Javascript => "javascript",
            Self::Python => "python",
            Self::Other(s) => s,
        }
    }
}

impl Default for Platform {
    /// Events without a platform tag display as "other".
    fn default() -> Self {
        Self::Other("other".to_string())
    }
}

/// Single crash-report unit.
///
/// Owns the ordered thread list and the optional exception chain; immutable
/// once constructed by the ingestion boundary. The engine holds at most a
/// transient reference to one of its threads while resolving a display.
#[derive(Debug, Clone, Default)]
pub struct Event {
    threads: Vec<Thread>,
    exception: Option<ExceptionChain>,
    platform: Option<Platform>,
    /// Per-event override of the process-wide newest-first preference.
    newest_first_override: Option<bool>,
}

impl Event {
    /// Create an event from its threads in report order.
    pub fn new(threads: Vec<Thread>) -> Self {
        Self {
            threads,
            ..Self::default()
        }
    }

    /// Threads in report order.
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    /// Exception chain, when the event carries one.
    pub fn exception(&self) -> Option<&ExceptionChain> {
        self.exception.as_ref()
    }

    /// Platform tag, defaulting to "other" when absent.
    pub fn platform(&self) -> Platform {
        self.platform.clone().unwrap_or_default()
    }

    /// Per-event newest-first override, when set.
    pub fn newest_first_override(&self) -> Option<bool> {
        self.newest_first_override
    }

    /// Whether the event carries more than one thread.
    ///
    /// Several capability flags only scan thread-level data in the
    /// multi-thread case; see `crate::view_state::capabilities`.
    pub fn has_multiple_threads(&self) -> bool {
        self.threads.len() > 1
    }

    /// Attach an exception chain (builder pattern).
    pub fn with_exception(mut self, exception: ExceptionChain) -> Self {
        self.exception = Some(exception);
        self
    }

    /// Attach a platform tag (builder pattern).
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Override the newest-first preference for this event (builder pattern).
    pub fn with_newest_first(mut self, newest_first: bool) -> Self {
        self.newest_first_override = Some(newest_first);
        self
    }
}
