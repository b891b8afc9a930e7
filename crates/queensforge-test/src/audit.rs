//! Trace invariant checks.

use queensforge_core::{conflict_count, Step, Trace};

/// Asserts that every pair of consecutive steps differs by exactly one
/// queen added or removed.
pub fn assert_single_step_edits(trace: &Trace) {
    for (i, pair) in trace.steps().windows(2).enumerate() {
        let (before, after) = (&pair[0], &pair[1]);
        let diff = before.len().abs_diff(after.len());
        assert_eq!(diff, 1, "steps {} and {} differ by {} queens", i, i + 1, diff);

        let (shorter, longer) = if before.len() < after.len() {
            (before, after)
        } else {
            (after, before)
        };
        assert_eq!(
            shorter.positions(),
            &longer.positions()[..shorter.len()],
            "steps {} and {} are not a single push/pop apart",
            i,
            i + 1
        );
    }
}

/// Number of transitions where a queen was removed.
pub fn removal_count(trace: &Trace) -> usize {
    trace
        .steps()
        .windows(2)
        .filter(|pair| pair[1].len() < pair[0].len())
        .count()
}

/// Largest number of queens in any step.
pub fn max_step_len(trace: &Trace) -> usize {
    trace.iter().map(Step::len).max().unwrap_or(0)
}

/// Asserts that conflicts never increase inside a restart segment.
pub fn assert_non_increasing_segments(trace: &Trace) {
    for (s, segment) in trace.segments().enumerate() {
        for pair in segment.windows(2) {
            let before = conflict_count(pair[0].positions());
            let after = conflict_count(pair[1].positions());
            assert!(
                after <= before,
                "segment {}: conflicts rose from {} to {}",
                s,
                before,
                after
            );
        }
    }
}
