//! Exception and stacktrace resolvers.
//!
//! Both resolvers are total: absence at any stage yields `None`, never a
//! fault. Exception data takes precedence over thread-level stacktraces, so
//! `thread_stacktrace` is only consulted once `thread_exception` comes back
//! empty.

use crate::model::{Event, ExceptionChain, Stacktrace, Thread};

/// Which data source ended up backing the display.
///
/// `NotFound` is the caller-visible empty-state signal ("stack trace not
/// found"); it carries no fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The active thread correlates to the event's exception chain.
    Exception,
    /// The active thread's own stacktrace backs the display.
    Stacktrace,
    /// Neither source is available.
    NotFound,
}

impl DataSource {
    /// Canonical string form for logs and machine output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exception => "exception",
            Self::Stacktrace => "stacktrace",
            Self::NotFound => "not-found",
        }
    }
}

/// Resolve the exception chain belonging to the active thread.
///
/// The chain belongs to the thread iff some value's `thread_id` equals the
/// thread's id; the first match in chain order decides. `None` when no
/// thread is active, the thread is anonymous, the event carries no chain,
/// or nothing correlates.
pub fn thread_exception<'a>(
    event: &'a Event,
    active_thread: Option<&Thread>,
) -> Option<&'a ExceptionChain> {
    let thread_id = active_thread?.id()?;
    let exception = event.exception()?;
    exception
        .values()
        .iter()
        .find(|value| value.thread_id() == Some(thread_id))
        .map(|_| exception)
}

/// Resolve the active thread's own stacktrace.
///
/// With `prefer_minified` set, the raw (minified/alternate) variant wins
/// when present; otherwise the original stacktrace is returned. `None` when
/// no thread is active or the thread carries neither variant.
pub fn thread_stacktrace(
    prefer_minified: bool,
    active_thread: Option<&Thread>,
) -> Option<&Stacktrace> {
    let thread = active_thread?;
    if prefer_minified {
        if let Some(raw) = thread.raw_stacktrace() {
            return Some(raw);
        }
    }
    thread.stacktrace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExceptionValue, Frame, ThreadId};

    fn trace(frame_count: usize) -> Stacktrace {
        Stacktrace::new(vec![Frame::default(); frame_count], false)
    }

    #[test]
    fn no_active_thread_resolves_no_exception() {
        let event = Event::new(vec![]).with_exception(ExceptionChain::new(vec![
            ExceptionValue::new(ThreadId::new(0)),
        ]));
        assert!(thread_exception(&event, None).is_none());
    }

    #[test]
    fn event_without_chain_resolves_no_exception() {
        let thread = Thread::new(ThreadId::new(0));
        let event = Event::new(vec![thread.clone()]);
        assert!(thread_exception(&event, Some(&thread)).is_none());
    }

    #[test]
    fn anonymous_thread_resolves_no_exception() {
        let thread = Thread::new(None);
        let event = Event::new(vec![thread.clone()]).with_exception(ExceptionChain::new(vec![
            ExceptionValue::new(ThreadId::new(0)),
        ]));
        assert!(thread_exception(&event, Some(&thread)).is_none());
    }

    #[test]
    fn chain_resolves_when_some_value_correlates() {
        let thread = Thread::new(ThreadId::new(7));
        let event = Event::new(vec![thread.clone()]).with_exception(ExceptionChain::new(vec![
            ExceptionValue::new(ThreadId::new(1)),
            ExceptionValue::new(ThreadId::new(7)),
        ]));
        let chain = thread_exception(&event, Some(&thread)).expect("value correlates");
        assert_eq!(chain.values().len(), 2, "the whole chain is returned");
    }

    #[test]
    fn uncorrelated_chain_resolves_nothing() {
        let thread = Thread::new(ThreadId::new(7));
        let event = Event::new(vec![thread.clone()]).with_exception(ExceptionChain::new(vec![
            ExceptionValue::new(ThreadId::new(1)),
        ]));
        assert!(thread_exception(&event, Some(&thread)).is_none());
    }

    #[test]
    fn stacktrace_resolver_handles_absent_thread() {
        assert!(thread_stacktrace(false, None).is_none());
        assert!(thread_stacktrace(true, None).is_none());
    }

    #[test]
    fn original_stacktrace_returned_by_default() {
        let thread = Thread::new(ThreadId::new(0))
            .with_stacktrace(trace(2))
            .with_raw_stacktrace(trace(3));
        let resolved = thread_stacktrace(false, Some(&thread)).expect("original present");
        assert_eq!(resolved.frames().len(), 2);
    }

    #[test]
    fn minified_preference_picks_raw_variant() {
        let thread = Thread::new(ThreadId::new(0))
            .with_stacktrace(trace(2))
            .with_raw_stacktrace(trace(3));
        let resolved = thread_stacktrace(true, Some(&thread)).expect("raw present");
        assert_eq!(resolved.frames().len(), 3);
    }

    #[test]
    fn minified_preference_falls_back_to_original() {
        let thread = Thread::new(ThreadId::new(0)).with_stacktrace(trace(2));
        let resolved = thread_stacktrace(true, Some(&thread)).expect("original present");
        assert_eq!(resolved.frames().len(), 2);
    }

    #[test]
    fn thread_without_stacktraces_resolves_nothing() {
        let thread = Thread::new(ThreadId::new(0));
        assert!(thread_stacktrace(false, Some(&thread)).is_none());
        assert!(thread_stacktrace(true, Some(&thread)).is_none());
    }
}
