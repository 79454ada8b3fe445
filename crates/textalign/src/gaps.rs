#![forbid(unsafe_code)]

//! Word-gap discovery and space distribution for justification.
//!
//! A *gap* is the byte offset where a run of one or more spaces begins.
//! Justification widens gaps: the total extra space a line needs is split
//! over its gaps as evenly as possible, earlier gaps taking the remainder.

use crate::scan::{AnsiScanner, Scan};
use smallvec::SmallVec;

/// Ordered byte offsets at which space runs begin. Lines rarely hold more
/// than a handful of words, so the offsets live inline.
pub type GapOffsets = SmallVec<[usize; 8]>;

/// Find the byte offsets where a new space run begins in `line`, using
/// the default ANSI-aware scanner.
#[must_use]
pub fn find_gaps(line: &str) -> GapOffsets {
    find_gaps_with(line, &AnsiScanner)
}

/// Find the byte offsets where a new space run begins in `line`.
///
/// The line is walked one semantic unit at a time through the scanner, so
/// formatting bytes are skipped whole: they are never spaces themselves
/// and never terminate a space run. An offset is recorded when a space is
/// seen and the previous unit was not a space.
#[must_use]
pub fn find_gaps_with<S: Scan + ?Sized>(line: &str, scanner: &S) -> GapOffsets {
    let mut gaps = GapOffsets::new();
    let mut last_was_space = false;
    let mut offset = 0;
    while let Some(unit) = scanner.next_unit(line, offset) {
        if unit.ch == ' ' {
            if !last_was_space {
                gaps.push(unit.start);
                last_was_space = true;
            }
        } else {
            last_was_space = false;
        }
        offset = unit.next;
    }
    gaps
}

/// Split `extra` spaces as evenly as possible over `gap_count` gaps.
///
/// Each gap receives `extra / gap_count`; the first `extra % gap_count`
/// gaps, in scan order, receive one more. The result always sums to
/// exactly `extra`. `gap_count` must be non-zero; callers guard the
/// zero-gap case and leave such lines untouched.
#[must_use]
pub fn distribute(gap_count: usize, extra: usize) -> Vec<usize> {
    debug_assert!(gap_count > 0, "distribute requires at least one gap");
    let base = extra / gap_count;
    let rem = extra % gap_count;
    (0..gap_count)
        .map(|i| if i < rem { base + 1 } else { base })
        .collect()
}
