#![cfg(feature = "dev")]
//! Tests for the in-place partition-exchange sort.
//!
//! These tests verify the quicksort used on generated sequences, including:
//! - Ascending and descending order
//! - Canonical edge shapes (empty, single, sorted, reversed, equal)
//! - Agreement with the standard library sort on distinct values
//! - Idempotence of re-sorting
//!
//! ## Test Organization
//!
//! 1. **Basic Sorting** - small arrays in both directions
//! 2. **Edge Cases** - empty, single, duplicates, all equal
//! 3. **Oracle Agreement** - standard-library comparison at scale
//! 4. **Idempotence** - re-sorting sorted data

use altsort::internals::algorithms::quicksort::sort;
use altsort::internals::math::ordering::SortDirection;

// ============================================================================
// Helper Functions
// ============================================================================

/// Deterministic pseudo-shuffled values: multiples of `step` modulo a prime,
/// pairwise distinct for fewer than `modulus` elements.
fn scrambled(n: usize, step: usize, modulus: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * step) % modulus) as f64).collect()
}

fn std_sorted(data: &[f64]) -> Vec<f64> {
    let mut expected = data.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    expected
}

// ============================================================================
// Basic Sorting Tests
// ============================================================================

/// Test basic ascending sort.
///
/// Verifies a small unsorted array ends up ascending.
#[test]
fn test_sort_ascending_basic() {
    let mut data = vec![3.0, 1.0, 2.0];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![1.0, 2.0, 3.0]);
}

/// Test basic descending sort.
///
/// Verifies the inverted comparator produces descending order.
#[test]
fn test_sort_descending_basic() {
    let mut data = vec![3.0, 1.0, 2.0];
    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, vec![3.0, 2.0, 1.0]);
}

/// Test sorting already sorted input.
///
/// Verifies sorted data is preserved.
#[test]
fn test_sort_already_sorted() {
    let mut data = vec![1.0, 2.0, 3.0, 4.0];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
}

/// Test sorting reversed input.
///
/// Verifies the adversarial-pivot shape still sorts correctly.
#[test]
fn test_sort_reversed_input() {
    let mut data = vec![5.0, 4.0, 3.0, 2.0, 1.0];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
}

/// Test sorting negative and mixed-sign values.
///
/// Verifies ordering across zero.
#[test]
fn test_sort_mixed_signs() {
    let mut data = vec![-1.5, 2.0, -3.0, 0.0];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![-3.0, -1.5, 0.0, 2.0]);

    let mut data = vec![-1.5, 2.0, -3.0, 0.0];
    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, vec![2.0, 0.0, -1.5, -3.0]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test sorting an empty slice.
///
/// Verifies the base case does nothing.
#[test]
fn test_sort_empty() {
    let mut data: Vec<f64> = vec![];
    sort(&mut data, SortDirection::Ascending);
    assert!(data.is_empty());
}

/// Test sorting a single element.
///
/// Verifies the base case for length one.
#[test]
fn test_sort_single() {
    let mut data = vec![42.0];
    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, vec![42.0]);
}

/// Test sorting two elements.
///
/// Verifies the minimal partition both ways.
#[test]
fn test_sort_two_elements() {
    let mut data = vec![2.0, 1.0];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![1.0, 2.0]);

    let mut data = vec![1.0, 2.0];
    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, vec![2.0, 1.0]);
}

/// Test sorting with duplicate values.
///
/// Verifies equal-to-pivot handling keeps the multiset intact.
#[test]
fn test_sort_duplicates() {
    let mut data = vec![2.0, 1.0, 2.0, 1.0];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![1.0, 1.0, 2.0, 2.0]);
}

/// Test sorting all-equal values.
///
/// Verifies the everything-equals-pivot scan terminates unchanged.
#[test]
fn test_sort_all_equal() {
    let mut data = vec![5.0; 8];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![5.0; 8]);

    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, vec![5.0; 8]);
}

// ============================================================================
// Oracle Agreement Tests
// ============================================================================

/// Test agreement with the standard sort on distinct values.
///
/// Verifies ascending output equals the standard library's order.
#[test]
fn test_sort_matches_standard_sort() {
    let original = scrambled(50, 41, 101);
    let expected = std_sorted(&original);

    let mut data = original;
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, expected);
}

/// Test descending agreement with the standard sort.
///
/// Verifies descending output equals the reversed standard order.
#[test]
fn test_sort_descending_matches_reversed_standard_sort() {
    let original = scrambled(50, 41, 101);
    let mut expected = std_sorted(&original);
    expected.reverse();

    let mut data = original;
    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, expected);
}

/// Test agreement at a larger size.
///
/// Verifies correctness on a few hundred elements.
#[test]
fn test_sort_larger_array() {
    let original = scrambled(200, 73, 211);
    let expected = std_sorted(&original);

    let mut data = original;
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, expected);
}

/// Test fractional values.
///
/// Verifies ordering is not integer-specific.
#[test]
fn test_sort_fractional_values() {
    let mut data = vec![0.3, 0.1, 0.25, 0.2, 0.15];
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, vec![0.1, 0.15, 0.2, 0.25, 0.3]);
}

// ============================================================================
// Idempotence Tests
// ============================================================================

/// Test that re-sorting sorted data is a no-op.
///
/// Verifies idempotence in both directions.
#[test]
fn test_sort_idempotent() {
    let mut data = scrambled(30, 41, 101);
    sort(&mut data, SortDirection::Ascending);
    let once = data.clone();
    sort(&mut data, SortDirection::Ascending);
    assert_eq!(data, once, "Re-sorting ascending should change nothing");

    let mut data = scrambled(30, 41, 101);
    sort(&mut data, SortDirection::Descending);
    let once = data.clone();
    sort(&mut data, SortDirection::Descending);
    assert_eq!(data, once, "Re-sorting descending should change nothing");
}
