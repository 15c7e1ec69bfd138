//! High-level API for sequence generation and sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the size and value ranges and produces the
//! pipeline that generates and sorts sequence sets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated once, when `build()` is
//!   called; runs validate only the per-run request.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Create an [`AltsortBuilder`], chain setters,
//!   call `.build()` to obtain an [`AltsortPipeline`], then call `.run(n)`
//!   as often as needed.
//! * **Defaults**: `min_size = 1`, `max_size = 100`, and the full positive
//!   value range when bounds are omitted.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{PipelineConfig, SequenceExecutor};
use crate::engine::validator::Validator;
use crate::math::ulp::UlpFloat;

// Publicly re-exported types
pub use crate::engine::output::SequenceSet;
pub use crate::math::ordering::SortDirection;
pub use crate::primitives::errors::AltsortError;

// ============================================================================
// Defaults
// ============================================================================

/// Default minimum sequence length.
const DEFAULT_MIN_SIZE: i64 = 1;

/// Default maximum sequence length.
const DEFAULT_MAX_SIZE: i64 = 100;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring sequence generation.
#[derive(Debug, Clone)]
pub struct AltsortBuilder<T> {
    /// Minimum sequence length (inclusive).
    pub min_size: Option<i64>,

    /// Maximum sequence length (inclusive).
    pub max_size: Option<i64>,

    /// Lower bound of generated values.
    pub min_value: Option<T>,

    /// Upper bound of generated values.
    pub max_value: Option<T>,

    /// Seed for reproducible generation.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for AltsortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> AltsortBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            min_size: None,
            max_size: None,
            min_value: None,
            max_value: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the minimum sequence length (inclusive).
    pub fn min_size(mut self, min_size: i64) -> Self {
        if self.min_size.is_some() {
            self.duplicate_param = Some("min_size");
        }
        self.min_size = Some(min_size);
        self
    }

    /// Set the maximum sequence length (inclusive).
    pub fn max_size(mut self, max_size: i64) -> Self {
        if self.max_size.is_some() {
            self.duplicate_param = Some("max_size");
        }
        self.max_size = Some(max_size);
        self
    }

    /// Set the lower bound of generated values.
    pub fn min_value(mut self, min_value: T) -> Self {
        if self.min_value.is_some() {
            self.duplicate_param = Some("min_value");
        }
        self.min_value = Some(min_value);
        self
    }

    /// Set the upper bound of generated values.
    pub fn max_value(mut self, max_value: T) -> Self {
        if self.max_value.is_some() {
            self.duplicate_param = Some("max_value");
        }
        self.max_value = Some(max_value);
        self
    }

    /// Set the seed for reproducible generation.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the pipeline.
    ///
    /// Applies defaults for omitted parameters and rejects a negative
    /// `min_size`. An inverted size or value range is accepted here; an
    /// inverted size range makes every subsequent `run` infeasible, and an
    /// inverted value range flows through the sampling arithmetic unchanged.
    pub fn build(self) -> Result<AltsortPipeline<T>, AltsortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let min_size = self.min_size.unwrap_or(DEFAULT_MIN_SIZE);
        Validator::validate_min_size(min_size)?;

        Ok(AltsortPipeline {
            config: PipelineConfig {
                min_size,
                max_size: self.max_size.unwrap_or(DEFAULT_MAX_SIZE),
                min_value: self.min_value.unwrap_or_else(T::min_positive_value),
                max_value: self.max_value.unwrap_or_else(T::max_value),
                seed: self.seed,
            },
        })
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Configured pipeline for generating and sorting sequence sets.
#[derive(Debug, Clone)]
pub struct AltsortPipeline<T> {
    config: PipelineConfig<T>,
}

impl<T: UlpFloat> AltsortPipeline<T> {
    /// Generate `count` sequences with pairwise-distinct lengths and sort
    /// each one, ascending at even indices and descending at odd indices.
    ///
    /// Fails with [`AltsortError::InfeasibleSizeRange`] before any random
    /// draw when the size range cannot supply `count` distinct lengths.
    /// Repeated calls are independent; with a configured seed they produce
    /// identical results.
    pub fn run(&self, count: usize) -> Result<SequenceSet<T>, AltsortError> {
        SequenceExecutor::run_with_config(count, &self.config)
    }
}
