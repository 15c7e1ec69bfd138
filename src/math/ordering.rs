//! Direction-aware, tolerance-based comparison of floating-point values.
//!
//! ## Purpose
//!
//! This module provides the comparison relation the partition sort is built
//! on: two values whose difference is within the smaller of their ULP
//! magnitudes compare as equal, and the relation can be inverted so the same
//! partitioning code sorts in either direction.
//!
//! ## Design notes
//!
//! * **Relaxed equality**: The equality window scales with the operands, so
//!   nearby representable values collapse to `Equal` while values of very
//!   different magnitude never do.
//! * **Direction as data**: The sort direction is an explicit enum consumed
//!   by one parameterized function, not a captured closure.
//!
//! ## Invariants
//!
//! * `tolerant_compare(a, b, d) == Equal` implies
//!   `tolerant_compare(b, a, d) == Equal`.
//! * Flipping the direction swaps `Less` and `Greater` and preserves `Equal`.
//!
//! ## Non-goals
//!
//! * The relaxed equality is not transitive over chains of nearly-equal
//!   values. The partition sort only compares operands against a single
//!   pivot within one pass, which stays inside the safe usage.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::math::ulp::UlpFloat;

// ============================================================================
// Sort Direction
// ============================================================================

/// Requested ordering for one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,

    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Direction assigned to the sequence at `index`: even indices sort
    /// ascending, odd indices descending.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

// ============================================================================
// Tolerant Comparison
// ============================================================================

/// Compare `a` against `b` for the given direction.
///
/// The equality tolerance is `min(ulp(a), ulp(b))`; differences within it
/// yield `Equal` regardless of direction. Outside the tolerance, `Ascending`
/// orders naturally while `Descending` inverts the relation, so a single
/// partitioning routine serves both directions.
pub fn tolerant_compare<T: UlpFloat>(a: T, b: T, direction: SortDirection) -> Ordering {
    let tolerance = a.ulp().min(b.ulp());
    if (a - b).abs() <= tolerance {
        return Ordering::Equal;
    }

    let after = match direction {
        SortDirection::Ascending => a > b,
        SortDirection::Descending => a < b,
    };

    if after { Ordering::Greater } else { Ordering::Less }
}
