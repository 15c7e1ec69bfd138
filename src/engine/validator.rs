//! Input validation for pipeline configuration and requests.
//!
//! ## Purpose
//!
//! This module provides the validation functions for pipeline configuration
//! and per-run requests: the non-negative minimum size, the feasibility of a
//! requested sequence count, and builder hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Deterministic**: Feasibility is decided arithmetically before any
//!   random draw, never by a retry-until-timeout loop.
//! * **Wide arithmetic**: The distinct-size count is computed in `i128` so
//!   extreme `i64` bounds cannot overflow the subtraction.
//!
//! ## Key concepts
//!
//! * **Feasibility**: `n` pairwise-distinct sizes exist in
//!   `[min_size, max_size]` exactly when `n <= max_size - min_size + 1`.
//!   An inverted range has a negative count and rejects every request,
//!   including `n = 0`.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.
//! * This module does not validate the value range: an inverted value range
//!   is accepted and flows through the sampling arithmetic unchanged.

// Internal dependencies
use crate::primitives::errors::AltsortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pipeline configuration and requests.
///
/// Provides static methods returning `Result<(), AltsortError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the minimum sequence size.
    pub fn validate_min_size(min_size: i64) -> Result<(), AltsortError> {
        if min_size < 0 {
            return Err(AltsortError::InvalidConfiguration { min_size });
        }
        Ok(())
    }

    /// Validate that `requested` pairwise-distinct sizes fit in
    /// `[min_size, max_size]`.
    pub fn validate_feasibility(
        requested: usize,
        min_size: i64,
        max_size: i64,
    ) -> Result<(), AltsortError> {
        let available = (max_size as i128) - (min_size as i128) + 1;
        if (requested as i128) > available {
            return Err(AltsortError::InfeasibleSizeRange {
                requested,
                available: available.clamp(0, usize::MAX as i128) as usize,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), AltsortError> {
        if let Some(parameter) = duplicate_param {
            return Err(AltsortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
