//! Aggregate display capability flags.

use crate::model::{ExceptionChain, ExceptionValue, Thread};
use crate::view_state::scan::FrameScan;

/// Which display options the event's data can support.
///
/// Each flag is the OR of a frame predicate over (a) every value in the
/// resolved exception chain and (b) the active thread's own data. Branch
/// (b) only participates when the event carries more than one thread —
/// with a single thread the exception chain already covers its data — with
/// one exception: `newest_first_eligible` always scans the active thread,
/// matching the shipped behavior (see DESIGN.md).
///
/// Flags are recomputed from scratch whenever the active thread or its
/// resolved exception changes; nothing is cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// A minified/alternate stacktrace variant exists.
    pub minified_exists: bool,
    /// Some frame's raw function name differs from its display name.
    pub verbose_function_names_exist: bool,
    /// Some frame carries an absolute file path.
    pub absolute_paths_exist: bool,
    /// Some frame carries an absolute instruction address.
    pub absolute_addresses_exist: bool,
    /// Some frame is in-app.
    pub app_only_frames_exist: bool,
    /// More than one frame present, so ordering is worth toggling.
    pub newest_first_eligible: bool,
}

impl Capabilities {
    /// Aggregate flags for the active thread and its resolved exception.
    ///
    /// `exception` must be the chain already resolved for the active thread
    /// (or `None`); `multiple_threads` is whether the event carries more
    /// than one thread.
    pub fn aggregate(
        exception: Option<&ExceptionChain>,
        active_thread: Option<&Thread>,
        multiple_threads: bool,
    ) -> Self {
        // The active thread's own frames, scanned twice: once behind the
        // multi-thread gate, once ungated for the ordering flag.
        let thread_frames = active_thread
            .and_then(|thread| thread.stacktrace())
            .map(|st| st.frames());
        let thread_scan = FrameScan::over(thread_frames);
        let gated_scan = FrameScan::over(thread_frames.filter(|_| multiple_threads));

        Self {
            minified_exists: chain_any(exception, |value| value.raw_stacktrace().is_some())
                || (multiple_threads
                    && active_thread.is_some_and(|thread| thread.raw_stacktrace().is_some())),
            verbose_function_names_exist: chain_frames(exception, |scan| {
                scan.has_mismatched_names()
            }) || gated_scan.has_mismatched_names(),
            absolute_paths_exist: chain_frames(exception, |scan| scan.has_absolute_paths())
                || gated_scan.has_absolute_paths(),
            absolute_addresses_exist: chain_frames(exception, |scan| {
                scan.has_absolute_addresses()
            }) || gated_scan.has_absolute_addresses(),
            app_only_frames_exist: chain_frames(exception, |scan| scan.has_in_app_frames())
                || gated_scan.has_in_app_frames(),
            // Not gated on thread count: the active thread's frame count
            // always feeds the ordering toggle.
            newest_first_eligible: chain_frames(exception, |scan| scan.has_multiple_frames())
                || thread_scan.has_multiple_frames(),
        }
    }

    /// All-false flag set, the result for an event with no data to scan.
    pub fn none() -> Self {
        Self::default()
    }
}

/// OR of `pred` over every value in the resolved chain; `false` when no
/// chain resolved.
fn chain_any(
    exception: Option<&ExceptionChain>,
    pred: impl Fn(&ExceptionValue) -> bool,
) -> bool {
    exception.is_some_and(|chain| chain.values().iter().any(|value| pred(value)))
}

/// OR of a frame-scan predicate over every value's original stacktrace.
fn chain_frames(
    exception: Option<&ExceptionChain>,
    pred: impl Fn(&FrameScan<'_>) -> bool,
) -> bool {
    chain_any(exception, |value| {
        value
            .stacktrace()
            .is_some_and(|st| pred(&FrameScan::new(st.frames())))
    })
}
