//! Property-based tests for scanner and selector invariants.
//!
//! Tests validate:
//! 1. Frame-scanner predicates are monotone under list concatenation
//! 2. Best-thread selection is total and deterministic
//! 3. Display resolution is idempotent over identical input

use crashlens::model::{Event, Frame, Stacktrace, Thread, ThreadId};
use crashlens::state::{find_best_thread, ThreadSelection};
use crashlens::view_state::{resolve_display, DisplayToggles, FrameScan};
use proptest::prelude::*;

fn arb_frame() -> impl Strategy<Value = Frame> {
    (
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of("/[a-z/]{1,12}"),
        proptest::option::of("0x[0-9a-f]{4,8}"),
        any::<bool>(),
    )
        .prop_map(
            |(function, raw_function, filename, instruction_addr, in_app)| Frame {
                function,
                raw_function,
                filename,
                instruction_addr,
                in_app,
            },
        )
}

fn arb_frames() -> impl Strategy<Value = Vec<Frame>> {
    prop::collection::vec(arb_frame(), 0..6)
}

fn arb_thread() -> impl Strategy<Value = Thread> {
    (
        proptest::option::of(0i64..16),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of((arb_frames(), any::<bool>())),
        proptest::option::of((arb_frames(), any::<bool>())),
    )
        .prop_map(|(id, current, crashed, stacktrace, raw_stacktrace)| {
            let mut thread = Thread::new(id.map(ThreadId::new))
                .with_current(current)
                .with_crashed(crashed);
            if let Some((frames, has_system_frames)) = stacktrace {
                thread = thread.with_stacktrace(Stacktrace::new(frames, has_system_frames));
            }
            if let Some((frames, has_system_frames)) = raw_stacktrace {
                thread = thread.with_raw_stacktrace(Stacktrace::new(frames, has_system_frames));
            }
            thread
        })
}

fn arb_threads() -> impl Strategy<Value = Vec<Thread>> {
    prop::collection::vec(arb_thread(), 0..6)
}

// ===== Property 1: Scanner Monotonicity =====

proptest! {
    #[test]
    fn scan_predicates_distribute_over_concatenation(
        a in arb_frames(),
        b in arb_frames(),
    ) {
        let concatenated: Vec<Frame> = a.iter().chain(b.iter()).cloned().collect();
        let whole = FrameScan::new(&concatenated);
        let left = FrameScan::new(&a);
        let right = FrameScan::new(&b);

        prop_assert_eq!(
            whole.has_mismatched_names(),
            left.has_mismatched_names() || right.has_mismatched_names()
        );
        prop_assert_eq!(
            whole.has_absolute_paths(),
            left.has_absolute_paths() || right.has_absolute_paths()
        );
        prop_assert_eq!(
            whole.has_absolute_addresses(),
            left.has_absolute_addresses() || right.has_absolute_addresses()
        );
        prop_assert_eq!(
            whole.has_in_app_frames(),
            left.has_in_app_frames() || right.has_in_app_frames()
        );
    }

    #[test]
    fn multiple_frames_is_monotone_under_concatenation(
        a in arb_frames(),
        b in arb_frames(),
    ) {
        let concatenated: Vec<Frame> = a.iter().chain(b.iter()).cloned().collect();
        let whole = FrameScan::new(&concatenated);

        // Not OR-distributive (two singletons concatenate to a pair), but
        // never loses the flag.
        if FrameScan::new(&a).has_multiple_frames() || FrameScan::new(&b).has_multiple_frames() {
            prop_assert!(whole.has_multiple_frames());
        }
        prop_assert_eq!(whole.has_multiple_frames(), concatenated.len() > 1);
    }
}

// ===== Property 2: Selector Totality & Determinism =====

proptest! {
    #[test]
    fn selector_is_total_over_non_empty_lists(threads in arb_threads()) {
        let best = find_best_thread(&threads);
        prop_assert_eq!(best.is_none(), threads.is_empty());
    }

    #[test]
    fn selector_is_deterministic(threads in arb_threads()) {
        let first = find_best_thread(&threads).map(|t| t as *const Thread);
        let second = find_best_thread(&threads).map(|t| t as *const Thread);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn selected_thread_is_a_member_of_the_list(threads in arb_threads()) {
        if let Some(best) = find_best_thread(&threads) {
            let member = threads
                .iter()
                .any(|t| std::ptr::eq(t, best));
            prop_assert!(member);
        }
    }

    #[test]
    fn crashed_threads_always_beat_the_rest(threads in arb_threads()) {
        if threads.iter().any(|t| t.is_crashed()) {
            let best = find_best_thread(&threads).expect("non-empty");
            prop_assert!(best.is_crashed());
        }
    }

    #[test]
    fn unique_crashed_thread_wins_anywhere(
        quiet in prop::collection::vec(
            (proptest::option::of(0i64..16), any::<bool>()),
            0..6,
        ),
        position_seed in any::<prop::sample::Index>(),
    ) {
        let mut threads: Vec<Thread> = quiet
            .into_iter()
            .map(|(id, current)| {
                Thread::new(id.map(ThreadId::new)).with_current(current)
            })
            .collect();
        let position = position_seed.index(threads.len() + 1);
        threads.insert(position, Thread::new(ThreadId::new(99)).with_crashed(true));

        let best = find_best_thread(&threads).expect("non-empty");
        prop_assert_eq!(best.id(), Some(ThreadId::new(99)));
    }
}

// ===== Property 3: Resolution Idempotence =====

proptest! {
    #[test]
    fn resolution_is_idempotent(
        threads in arb_threads(),
        raw in any::<bool>(),
        full in any::<bool>(),
        minified in any::<bool>(),
        newest_first in any::<bool>(),
    ) {
        let event = Event::new(threads);
        let toggles = DisplayToggles {
            raw,
            full_stack_trace: full,
            minified,
        };

        let first = resolve_display(&event, &ThreadSelection::Best, &toggles, newest_first);
        let second = resolve_display(&event, &ThreadSelection::Best, &toggles, newest_first);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_event_always_resolves_empty_state(
        raw in any::<bool>(),
        full in any::<bool>(),
        minified in any::<bool>(),
    ) {
        let event = Event::new(vec![]);
        let toggles = DisplayToggles {
            raw,
            full_stack_trace: full,
            minified,
        };

        let resolved = resolve_display(&event, &ThreadSelection::Best, &toggles, true);
        prop_assert!(resolved.stack_trace_not_found());
        prop_assert_eq!(resolved.active_thread_id, None);
    }
}
