//! Execution engine for sequence generation and sorting.
//!
//! ## Purpose
//!
//! This module orchestrates a pipeline run: feasibility check, random
//! generation of the sequence set, and the alternating-direction sort pass.
//!
//! ## Design notes
//!
//! * **Owned randomness**: The executor builds one generator per run, seeded
//!   when a seed is configured, and threads it through the sampling
//!   functions. There is no process-global generator.
//! * **Check before draw**: Feasibility is rejected before the first random
//!   draw, so an infeasible request never produces a partial result.
//! * **Single-threaded**: A run is pure computation plus the generator; each
//!   run owns its result exclusively.
//!
//! ## Invariants
//!
//! * Generated sequence lengths are pairwise distinct and lie in
//!   `[min_size, max_size]`.
//! * The sequence at index `i` is sorted ascending for even `i`, descending
//!   for odd `i`.
//! * With a fixed seed, repeated runs produce identical output.
//!
//! ## Non-goals
//!
//! * This module does not validate the builder configuration (handled by
//!   the API layer).
//! * This module does not format results (handled by `output`).

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

// Internal dependencies
use crate::algorithms::quicksort::sort;
use crate::algorithms::sampling::{sample_distinct_size, sample_value};
use crate::engine::output::SequenceSet;
use crate::engine::validator::Validator;
use crate::math::ordering::SortDirection;
use crate::math::ulp::UlpFloat;
use crate::primitives::errors::AltsortError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig<T> {
    /// Minimum sequence length (inclusive). Non-negative once validated.
    pub min_size: i64,

    /// Maximum sequence length (inclusive).
    pub max_size: i64,

    /// Lower bound of generated values.
    pub min_value: T,

    /// Upper bound of generated values.
    pub max_value: T,

    /// Seed for reproducible generation. `None` seeds from entropy.
    pub seed: Option<u64>,
}

// ============================================================================
// Executor
// ============================================================================

/// Execution engine for sequence generation and sorting.
pub struct SequenceExecutor;

impl SequenceExecutor {
    /// Generate `count` sequences per `config` and sort each in its
    /// index-assigned direction.
    pub fn run_with_config<T: UlpFloat>(
        count: usize,
        config: &PipelineConfig<T>,
    ) -> Result<SequenceSet<T>, AltsortError> {
        Validator::validate_feasibility(count, config.min_size, config.max_size)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut sequences = Self::generate(count, config, &mut rng);

        for (index, sequence) in sequences.iter_mut().enumerate() {
            sort(sequence, SortDirection::for_index(index));
        }

        Ok(SequenceSet { sequences })
    }

    /// Generate `count` raw sequences with pairwise-distinct lengths.
    ///
    /// For each sequence in order: rejection-sample an unused length from
    /// the size range, then fill with bounded values. The caller must have
    /// established feasibility, which guarantees every length draw finds a
    /// free size.
    pub fn generate<T: Float, R: Rng + ?Sized>(
        count: usize,
        config: &PipelineConfig<T>,
        rng: &mut R,
    ) -> Vec<Vec<T>> {
        let mut taken = HashSet::with_capacity(count);
        let mut sequences = Vec::with_capacity(count);

        for _ in 0..count {
            let size = sample_distinct_size(rng, config.min_size, config.max_size, &mut taken);

            let mut values = Vec::with_capacity(size as usize);
            for _ in 0..size {
                values.push(sample_value(rng, config.min_value, config.max_value));
            }
            sequences.push(values);
        }

        sequences
    }
}
