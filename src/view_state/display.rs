//! Top-level display resolution.
//!
//! `resolve_display` is the engine's single entry point: a pure function
//! from (event, selection handle, toggles, process default) to the resolved
//! display. Callers re-invoke it on every selection or toggle change and
//! discard any previously returned value; nothing is cached inside.

use tracing::debug;

use crate::model::{Event, Platform, ThreadId};
use crate::state::ThreadSelection;
use crate::view_state::capabilities::Capabilities;
use crate::view_state::resolve::{thread_exception, thread_stacktrace, DataSource};
use crate::view_state::stack_view::StackView;

/// Caller-driven display toggles.
///
/// These override the computed defaults; they never participate in the
/// automatic decision tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayToggles {
    /// Show unprocessed frames. Wins over everything.
    pub raw: bool,
    /// Force the full frame list over the app-only heuristic.
    pub full_stack_trace: bool,
    /// Prefer the minified/alternate stacktrace variant.
    pub minified: bool,
}

/// The engine's final result for one (event, selection, toggles) input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDisplay {
    /// Identifier of the active thread, absent for an empty thread list or
    /// an anonymous thread.
    pub active_thread_id: Option<ThreadId>,
    /// Which data source backs the display.
    pub source: DataSource,
    /// Resolved view mode; absent when no thread is active.
    pub stack_view: Option<StackView>,
    /// Aggregate display capability flags.
    pub capabilities: Capabilities,
    /// Chronological ordering to render with (event override, else the
    /// process-wide default).
    pub newest_first: bool,
    /// Platform tag, "other" when the event carries none.
    pub platform: Platform,
}

impl ResolvedDisplay {
    /// Whether the caller should render the empty state.
    pub fn stack_trace_not_found(&self) -> bool {
        self.source == DataSource::NotFound
    }
}

/// Resolve what to display for `event` under `selection` and `toggles`.
///
/// Total over its input: an empty thread list resolves to the not-found
/// empty state with all capabilities false. Repeated calls on identical
/// input return identical values.
pub fn resolve_display(
    event: &Event,
    selection: &ThreadSelection,
    toggles: &DisplayToggles,
    newest_first_default: bool,
) -> ResolvedDisplay {
    let active_thread = selection.resolve(event.threads());
    let exception = thread_exception(event, active_thread);

    let source = if exception.is_some() {
        DataSource::Exception
    } else if thread_stacktrace(toggles.minified, active_thread).is_some() {
        DataSource::Stacktrace
    } else {
        DataSource::NotFound
    };

    let stack_view = active_thread.map(|thread| {
        StackView::intended(event, thread).with_toggles(toggles.raw, toggles.full_stack_trace)
    });

    let capabilities = Capabilities::aggregate(
        exception,
        active_thread,
        event.has_multiple_threads(),
    );

    let newest_first = event
        .newest_first_override()
        .unwrap_or(newest_first_default);

    let resolved = ResolvedDisplay {
        active_thread_id: active_thread.and_then(|thread| thread.id()),
        source,
        stack_view,
        capabilities,
        newest_first,
        platform: event.platform(),
    };

    debug!(
        thread_id = ?resolved.active_thread_id,
        source = resolved.source.as_str(),
        stack_view = ?resolved.stack_view.map(|view| view.as_str()),
        "Resolved display"
    );

    resolved
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
