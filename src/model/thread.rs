//! Thread types for crash-report events.

use std::fmt;

use crate::model::Stacktrace;

/// Numeric identifier correlating a thread with exception values.
///
/// Thread ids come from the reporting runtime and are opaque to the engine;
/// equality is the only operation the resolution logic relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadId(i64);

impl ThreadId {
    /// Create a thread id from its raw numeric value.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ThreadId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Single execution thread captured in a crash report.
///
/// A thread optionally carries two stacktrace variants: `stacktrace` holds
/// the original (symbolicated) frames, `raw_stacktrace` the
/// minified/alternate frames. At most one of {exception, stacktrace,
/// raw_stacktrace} acts as the source of truth at display time; precedence
/// is decided by the resolvers in `crate::view_state`, never stored here.
#[derive(Debug, Clone, Default)]
pub struct Thread {
    /// Identifier correlating this thread to exception values.
    id: Option<ThreadId>,
    /// Human-readable thread name, when the runtime provides one.
    name: Option<String>,
    /// Was this thread active at crash time.
    current: bool,
    /// Did this thread crash.
    crashed: bool,
    /// Original frames.
    stacktrace: Option<Stacktrace>,
    /// Minified/alternate frames.
    raw_stacktrace: Option<Stacktrace>,
}

impl Thread {
    /// Create an empty thread with the given id.
    ///
    /// Use the `with_*` builders to attach flags and stacktraces.
    pub fn new(id: impl Into<Option<ThreadId>>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Identifier, absent for anonymous threads.
    pub fn id(&self) -> Option<ThreadId> {
        self.id
    }

    /// Thread name, when present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this thread was active at crash time.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Whether this thread crashed.
    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    /// Original stacktrace, when present.
    pub fn stacktrace(&self) -> Option<&Stacktrace> {
        self.stacktrace.as_ref()
    }

    /// Minified/alternate stacktrace, when present.
    pub fn raw_stacktrace(&self) -> Option<&Stacktrace> {
        self.raw_stacktrace.as_ref()
    }

    /// Attach a name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark whether this thread was active at crash time (builder pattern).
    pub fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    /// Mark whether this thread crashed (builder pattern).
    pub fn with_crashed(mut self, crashed: bool) -> Self {
        self.crashed = crashed;
        self
    }

    /// Attach the original stacktrace (builder pattern).
    pub fn with_stacktrace(mut self, stacktrace: Stacktrace) -> Self {
        self.stacktrace = Some(stacktrace);
        self
    }

    /// Attach the minified/alternate stacktrace (builder pattern).
    pub fn with_raw_stacktrace(mut self, stacktrace: Stacktrace) -> Self {
        self.raw_stacktrace = Some(stacktrace);
        self
    }
}
