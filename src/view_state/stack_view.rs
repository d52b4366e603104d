//! Resolved stack view mode.

use crate::model::{Event, Thread};
use crate::view_state::resolve::{thread_exception, thread_stacktrace};

/// How the frame list should be rendered.
///
/// Computed on every resolution, never stored. The automatic decision only
/// ever yields `AppOnly` or `Full`; `Raw` is entered exclusively through the
/// caller's explicit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackView {
    /// Only in-app frames.
    AppOnly,
    /// Every frame.
    Full,
    /// Unprocessed frames, as reported.
    Raw,
}

impl StackView {
    /// Canonical string form for logs and machine output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppOnly => "app-only",
            Self::Full => "full",
            Self::Raw => "raw",
        }
    }

    /// Compute the default view for a thread.
    ///
    /// With a resolved exception, the chain decides: any value whose
    /// stacktrace reports system frames starts the view app-only, otherwise
    /// full. Without an exception the thread's own original stacktrace is
    /// consulted the same way. A thread with no data at all defaults to
    /// `Full` (there is nothing to filter).
    pub fn intended(event: &Event, thread: &Thread) -> Self {
        if let Some(exception) = thread_exception(event, Some(thread)) {
            let has_system_frames = exception
                .values()
                .iter()
                .any(|value| value.stacktrace().is_some_and(|st| st.has_system_frames()));
            return if has_system_frames {
                Self::AppOnly
            } else {
                Self::Full
            };
        }

        match thread_stacktrace(false, Some(thread)) {
            Some(stacktrace) if stacktrace.has_system_frames() => Self::AppOnly,
            _ => Self::Full,
        }
    }

    /// Apply the caller's explicit toggles over the computed default.
    ///
    /// Precedence: raw > explicit full request > computed default.
    pub fn with_toggles(self, raw: bool, full_stack_trace: bool) -> Self {
        if raw {
            Self::Raw
        } else if full_stack_trace {
            Self::Full
        } else {
            self
        }
    }
}
