//! Shared sampling helpers used across the game generators.
//!
//! Both rejection loops in the crate (missing grid cells, arithmetic
//! distractors) go through `sample_distinct` or follow its pattern: a
//! bounded number of random draws, then a deterministic fallback scan.
//! Termination never rests on the expected-value argument alone.

use rand::Rng;

/// Cap on random draws per needed value before falling back to a scan.
///
/// Callers keep the draw space at least twice the requested count, so the
/// acceptance chance per draw stays >= 1/2 and 16 tries per value is far
/// beyond what rejection needs in practice.
pub const MAX_DRAWS_PER_VALUE: usize = 16;

/// Sample `count` distinct integers uniformly from `lo..=hi`.
///
/// Values come back in sampled order, not sorted. Falls back to filling
/// from `lo` upward if the draw budget is ever exhausted, so the function
/// always returns exactly `count` values as long as the range holds them.
pub fn sample_distinct<R: Rng>(rng: &mut R, count: usize, lo: u32, hi: u32) -> Vec<u32> {
    let span = (hi - lo + 1) as usize;
    debug_assert!(count <= span, "requested {} values from a span of {}", count, span);

    let mut picked: Vec<u32> = Vec::with_capacity(count);
    let mut draws = 0usize;
    while picked.len() < count && draws < count * MAX_DRAWS_PER_VALUE {
        draws += 1;
        let candidate = rng.gen_range(lo..=hi);
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }

    // Deterministic fallback: scan the range for anything not yet taken.
    if picked.len() < count {
        for candidate in lo..=hi {
            if picked.len() == count {
                break;
            }
            if !picked.contains(&candidate) {
                picked.push(candidate);
            }
        }
    }

    picked
}

/// Fisher-Yates shuffle.
pub fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
