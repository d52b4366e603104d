//! Which thread is currently being viewed.

use crate::model::{Thread, ThreadId};

/// Which thread is currently being viewed.
///
/// # States
/// - `Best`: apply the default priority policy (`find_best_thread`)
/// - `Pinned(id)`: the caller explicitly picked a thread
///
/// # Invariant
/// The active thread is always a member of the event's thread list: a
/// `Pinned` id with no matching thread falls back to the default policy
/// rather than resolving to nothing.
///
/// The handle is replaced wholesale on each selection change; no partial
/// mutation, no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadSelection {
    /// Use the default best-thread policy.
    #[default]
    Best,

    /// Pinned to a specific thread by id.
    Pinned(ThreadId),
}

impl ThreadSelection {
    /// Create a pinned selection.
    pub fn pinned(id: impl Into<ThreadId>) -> Self {
        Self::Pinned(id.into())
    }

    /// Resolve the active thread within `threads`.
    ///
    /// Returns `None` only when the list is empty. A pinned id that no
    /// longer matches any thread falls back to the default policy.
    pub fn resolve<'a>(&self, threads: &'a [Thread]) -> Option<&'a Thread> {
        match self {
            Self::Best => find_best_thread(threads),
            Self::Pinned(id) => threads
                .iter()
                .find(|thread| thread.id() == Some(*id))
                .or_else(|| find_best_thread(threads)),
        }
    }
}

/// Pick the thread to display by default.
///
/// Priority policy, first match wins, scanning threads in list order within
/// each tier:
/// 1. a thread marked crashed
/// 2. a thread marked current (active at crash time)
/// 3. the first thread in list order
///
/// Total over non-empty input; `None` only for an empty list. Ties among
/// multiple crashed threads resolve by list order.
pub fn find_best_thread(threads: &[Thread]) -> Option<&Thread> {
    threads
        .iter()
        .find(|thread| thread.is_crashed())
        .or_else(|| threads.iter().find(|thread| thread.is_current()))
        .or_else(|| threads.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(id: i64) -> Thread {
        Thread::new(ThreadId::new(id))
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(find_best_thread(&[]).is_none());
    }

    #[test]
    fn crashed_thread_wins_regardless_of_position() {
        let threads = vec![
            thread(0).with_current(true),
            thread(1),
            thread(2).with_crashed(true),
        ];
        let best = find_best_thread(&threads).expect("non-empty list");
        assert_eq!(best.id(), Some(ThreadId::new(2)));
    }

    #[test]
    fn crashed_beats_current() {
        let threads = vec![thread(0).with_current(true), thread(1).with_crashed(true)];
        let best = find_best_thread(&threads).expect("non-empty list");
        assert_eq!(best.id(), Some(ThreadId::new(1)));
    }

    #[test]
    fn current_thread_wins_when_none_crashed() {
        let threads = vec![thread(0), thread(1).with_current(true), thread(2)];
        let best = find_best_thread(&threads).expect("non-empty list");
        assert_eq!(best.id(), Some(ThreadId::new(1)));
    }

    #[test]
    fn falls_back_to_first_thread_in_list_order() {
        let threads = vec![thread(5), thread(6)];
        let best = find_best_thread(&threads).expect("non-empty list");
        assert_eq!(best.id(), Some(ThreadId::new(5)));
    }

    #[test]
    fn multiple_crashed_threads_resolve_by_list_order() {
        let threads = vec![
            thread(3),
            thread(9).with_crashed(true),
            thread(1).with_crashed(true),
        ];
        let best = find_best_thread(&threads).expect("non-empty list");
        assert_eq!(best.id(), Some(ThreadId::new(9)), "first crashed wins");
    }

    #[test]
    fn selection_defaults_to_best_policy() {
        let threads = vec![thread(0), thread(1).with_crashed(true)];
        let active = ThreadSelection::default()
            .resolve(&threads)
            .expect("non-empty list");
        assert_eq!(active.id(), Some(ThreadId::new(1)));
    }

    #[test]
    fn pinned_selection_resolves_matching_thread() {
        let threads = vec![thread(0).with_crashed(true), thread(1)];
        let active = ThreadSelection::pinned(1)
            .resolve(&threads)
            .expect("non-empty list");
        assert_eq!(active.id(), Some(ThreadId::new(1)));
    }

    #[test]
    fn pinned_selection_missing_id_falls_back_to_best() {
        let threads = vec![thread(0), thread(1).with_crashed(true)];
        let active = ThreadSelection::pinned(99)
            .resolve(&threads)
            .expect("non-empty list");
        assert_eq!(active.id(), Some(ThreadId::new(1)));
    }

    #[test]
    fn pinned_selection_on_empty_list_resolves_nothing() {
        assert!(ThreadSelection::pinned(0).resolve(&[]).is_none());
    }

    #[test]
    fn anonymous_threads_never_match_a_pin() {
        let threads = vec![Thread::new(None), Thread::new(None).with_crashed(true)];
        let active = ThreadSelection::pinned(0)
            .resolve(&threads)
            .expect("non-empty list");
        // No id matches, so the crashed thread wins via fallback.
        assert!(active.is_crashed());
    }
}
