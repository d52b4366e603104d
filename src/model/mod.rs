//! Domain model types (pure).
//!
//! All types in this module are plain data consumed read-only by the
//! resolution engine. The ingestion boundary (`crate::parser`) constructs
//! them; the engine never mutates them.

pub mod event;
pub mod exception;
pub mod span;
pub mod stacktrace;
pub mod thread;

// Re-export for convenience
pub use event::{Event, Platform};
pub use exception::{ExceptionChain, ExceptionValue};
pub use span::{Span, SpanExample};
pub use stacktrace::{Frame, Stacktrace};
pub use thread::{Thread, ThreadId};
