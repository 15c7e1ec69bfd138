//! Output types for sequence generation and sorting.
//!
//! ## Purpose
//!
//! This module defines the `SequenceSet` struct returned by a pipeline run:
//! the ordered collection of generated, sorted sequences.
//!
//! ## Design notes
//!
//! * **Owned**: The caller owns the result outright; nothing inside the
//!   pipeline aliases it after return.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * Sequence lengths are pairwise distinct and lie in the configured size
//!   range.
//! * Even-indexed sequences are sorted ascending, odd-indexed descending,
//!   under the tolerant comparison.
//!
//! ## Non-goals
//!
//! * This module does not perform generation or sorting; it only stores
//!   results.
//! * This module does not provide serialization logic.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::slice::Iter;
use num_traits::Float;

// Internal dependencies
use crate::math::ordering::SortDirection;

// ============================================================================
// Result Structure
// ============================================================================

/// Ordered collection of generated, sorted sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSet<T> {
    /// The sequences, indexed 0..n-1. The sequence at an even index is
    /// sorted ascending, at an odd index descending.
    pub sequences: Vec<Vec<T>>,
}

impl<T: Float> SequenceSet<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of sequences in the set.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Check whether the set contains no sequences.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Lengths of the sequences, in set order.
    pub fn lengths(&self) -> Vec<usize> {
        self.sequences.iter().map(Vec::len).collect()
    }

    /// Iterate over the sequences in set order.
    pub fn iter(&self) -> Iter<'_, Vec<T>> {
        self.sequences.iter()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SequenceSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Sequences: {}", self.len())?;
        writeln!(f)?;

        writeln!(f, "Sequences:")?;
        writeln!(
            f,
            "{:>8} {:>8} {:>12} {:>13} {:>13}",
            "Index", "Length", "Order", "First", "Last"
        )?;
        writeln!(f, "{:-<width$}", "", width = 58)?;

        for (index, sequence) in self.sequences.iter().enumerate() {
            let order = match SortDirection::for_index(index) {
                SortDirection::Ascending => "ascending",
                SortDirection::Descending => "descending",
            };

            write!(f, "{:>8} {:>8} {:>12}", index, sequence.len(), order)?;
            match (sequence.first(), sequence.last()) {
                (Some(first), Some(last)) => {
                    writeln!(f, " {:>13.6} {:>13.6}", first, last)?;
                }
                _ => {
                    writeln!(f, " {:>13} {:>13}", "-", "-")?;
                }
            }
        }

        Ok(())
    }
}
