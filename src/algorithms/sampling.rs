//! Random sampling of bounded values and pairwise-distinct sizes.
//!
//! ## Purpose
//!
//! This module draws the raw material for a sequence set: bounded uniform
//! floating-point values and sequence lengths that have not been used yet.
//!
//! ## Design notes
//!
//! * **Injected randomness**: Every function takes `&mut R: Rng`, so callers
//!   own the generator and can seed it for reproducible output.
//! * **Half-magnitude span**: The value range is mapped through its halves so
//!   the span subtraction stays representable even when the bounds sit near
//!   the floating-point extremes.
//! * **Rejection sampling**: Distinct sizes are drawn by retrying until an
//!   unused size comes up. The caller pre-checks that a free size exists, so
//!   the loop terminates by pigeonhole.
//!
//! ## Invariants
//!
//! * Sampled sizes lie in `[min_size, max_size]` and are absent from `taken`
//!   on entry, present on return.
//! * Sampled values lie in `[min_value, max_value]` up to floating-point
//!   rounding at extreme magnitudes.
//!
//! ## Non-goals
//!
//! * No validation of the bounds: an inverted value range produces whatever
//!   the arithmetic yields, and an inverted size range must be rejected by
//!   the caller before sampling.

// External dependencies
use num_traits::Float;
use rand::Rng;
use std::collections::HashSet;

// ============================================================================
// Value Sampling
// ============================================================================

/// Draw one value uniformly from `[min_value, max_value]`.
///
/// The unit draw is scaled over half the range and doubled afterwards, which
/// keeps the intermediate span finite even for bounds near the representable
/// extremes. Rounding may push the result marginally outside the bounds at
/// those extremes; that excursion is accepted.
pub fn sample_value<T, R>(rng: &mut R, min_value: T, max_value: T) -> T
where
    T: Float,
    R: Rng + ?Sized,
{
    let two = T::one() + T::one();
    let half_min = min_value / two;
    let half_max = max_value / two;

    let unit = T::from(rng.gen::<f64>()).unwrap();
    (unit * (half_max - half_min) + half_min) * two
}

// ============================================================================
// Size Sampling
// ============================================================================

/// Draw a sequence size from `[min_size, max_size]` that is not yet in
/// `taken`, recording it before returning.
///
/// The caller must guarantee that at least one size in the range is free;
/// under that precondition every retry has a nonzero success probability and
/// the loop terminates.
pub fn sample_distinct_size<R>(
    rng: &mut R,
    min_size: i64,
    max_size: i64,
    taken: &mut HashSet<i64>,
) -> i64
where
    R: Rng + ?Sized,
{
    loop {
        let candidate = rng.gen_range(min_size..=max_size);
        if taken.insert(candidate) {
            return candidate;
        }
    }
}
