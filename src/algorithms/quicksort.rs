//! In-place partition-exchange sort with a tolerant comparator.
//!
//! ## Purpose
//!
//! This module sorts one sequence in place for a requested direction using a
//! single-pivot, two-pointer exchange partition.
//!
//! ## Design notes
//!
//! * **Pivot rule**: The pivot is always the last element of the current
//!   range. There is no randomization or median-of-three, which keeps the
//!   output reproducible at the cost of a quadratic worst case on adversarial
//!   orders.
//! * **Four-way scan**: Each step classifies both cursors against the pivot;
//!   elements that compare equal to the pivot advance past it without a swap.
//! * **Direction**: Descending order falls out of the inverted comparator,
//!   not of a second code path.
//!
//! ## Key concepts
//!
//! * **Partition point**: After the scan, the left cursor is the pivot's
//!   final position; the ranges on either side are sorted recursively.
//!
//! ## Invariants
//!
//! * Ranges of length <= 1 are already sorted.
//! * The multiset of values is preserved; only swaps mutate the slice.
//!
//! ## Non-goals
//!
//! * No stability guarantee: values within the comparator's tolerance of the
//!   pivot may end up on either side of it.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::math::ordering::{tolerant_compare, SortDirection};
use crate::math::ulp::UlpFloat;

// ============================================================================
// Sorting
// ============================================================================

/// Sort `data` in place in the requested direction.
pub fn sort<T: UlpFloat>(data: &mut [T], direction: SortDirection) {
    if data.len() < 2 {
        return;
    }

    let pivot_index = partition(data, direction);
    sort(&mut data[..pivot_index], direction);
    sort(&mut data[pivot_index + 1..], direction);
}

/// Partition `data` around its last element and return the pivot's final
/// position.
///
/// Two cursors scan inward. A left element ordered after the pivot and a
/// right element ordered before it are out of place on both sides and get
/// swapped; a single out-of-place side retreats the opposite cursor; when
/// neither side is strictly out of place both cursors advance.
fn partition<T: UlpFloat>(data: &mut [T], direction: SortDirection) -> usize {
    let end = data.len() - 1;
    let pivot = data[end];

    // Signed cursors: the right cursor may step below the range start when
    // every element is ordered after the pivot.
    let mut left: isize = 0;
    let mut right: isize = end as isize - 1;

    while left <= right {
        let l = left as usize;
        let r = right as usize;
        let left_after = tolerant_compare(data[l], pivot, direction) == Ordering::Greater;
        let right_before = tolerant_compare(data[r], pivot, direction) == Ordering::Less;

        if left_after && right_before {
            data.swap(l, r);
            left += 1;
            right -= 1;
        } else if left_after {
            right -= 1;
        } else if right_before {
            left += 1;
        } else {
            left += 1;
            right -= 1;
        }
    }

    let pivot_index = left as usize;
    data.swap(pivot_index, end);
    pivot_index
}
