//! Exception chain types.

use crate::model::{Stacktrace, ThreadId};

/// Single exception value within a cause chain.
///
/// Each value optionally correlates to a thread via `thread_id`; the
/// exception resolver uses that correlation to decide whether the chain
/// belongs to the active thread.
#[derive(Debug, Clone, Default)]
pub struct ExceptionValue {
    /// Exception type name (e.g. "SIGSEGV", "ValueError").
    exception_type: Option<String>,
    /// Exception message.
    value: Option<String>,
    /// Thread this value was raised on.
    thread_id: Option<ThreadId>,
    /// Original frames.
    stacktrace: Option<Stacktrace>,
    /// Minified/alternate frames.
    raw_stacktrace: Option<Stacktrace>,
}

impl ExceptionValue {
    /// Create an empty exception value correlated to the given thread.
    pub fn new(thread_id: impl Into<Option<ThreadId>>) -> Self {
        Self {
            thread_id: thread_id.into(),
            ..Self::default()
        }
    }

    /// Exception type name, when present.
    pub fn exception_type(&self) -> Option<&str> {
        self.exception_type.as_deref()
    }

    /// Exception message, when present.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Thread this value correlates to.
    pub fn thread_id(&self) -> Option<ThreadId> {
        self.thread_id
    }

    /// Original stacktrace, when present.
    pub fn stacktrace(&self) -> Option<&Stacktrace> {
        self.stacktrace.as_ref()
    }

    /// Minified/alternate stacktrace, when present.
    pub fn raw_stacktrace(&self) -> Option<&Stacktrace> {
        self.raw_stacktrace.as_ref()
    }

    /// Attach the exception type name (builder pattern).
    pub fn with_exception_type(mut self, exception_type: impl Into<String>) -> Self {
        self.exception_type = Some(exception_type.into());
        self
    }

    /// Attach the exception message (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
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

/// Ordered cause chain of exception values.
///
/// Chain order is meaningful: when more than one value could correlate to
/// the same thread, the first match in chain order wins.
#[derive(Debug, Clone, Default)]
pub struct ExceptionChain {
    values: Vec<ExceptionValue>,
}

impl ExceptionChain {
    /// Create a chain from values in cause order.
    pub fn new(values: Vec<ExceptionValue>) -> Self {
        Self { values }
    }

    /// Values in cause order.
    pub fn values(&self) -> &[ExceptionValue] {
        &self.values
    }

    /// Whether the chain holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
