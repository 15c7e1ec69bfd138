//! # altsort — alternating-direction sorting of random sequence sets
//!
//! Generates a collection of numeric sequences with pairwise-distinct random
//! lengths, fills each with bounded random floating-point values, and sorts
//! every sequence in place with a tolerance-aware quicksort, alternating
//! between ascending and descending order by sequence index.
//!
//! ## How it works
//!
//! * Sequence lengths are drawn uniformly from a configurable integer range
//!   and are guaranteed pairwise distinct; a request that cannot be satisfied
//!   is rejected up front, before any random draw.
//! * Values are drawn uniformly from a configurable range using a
//!   half-magnitude mapping that stays finite even when the bounds sit near
//!   the floating-point extremes.
//! * The sort comparator treats two values as equal when their difference is
//!   within the smaller of their unit-in-last-place magnitudes, and inverts
//!   itself for descending sequences so one partition routine serves both
//!   directions.
//!
//! ## Quick Start
//!
//! ```rust
//! use altsort::prelude::*;
//!
//! // Build the pipeline
//! let pipeline = Altsort::new()
//!     .min_size(2)        // Shortest sequence length
//!     .max_size(5)        // Longest sequence length
//!     .min_value(0.0)     // Smallest generated value
//!     .max_value(1.0)     // Largest generated value
//!     .seed(42)           // Reproducible output
//!     .build()?;
//!
//! // Generate and sort three sequences
//! let result = pipeline.run(3)?;
//!
//! assert_eq!(result.len(), 3);
//! // Lengths are pairwise distinct and drawn from 2..=5
//! // Sequence 0 is ascending, sequence 1 descending, sequence 2 ascending
//! # Result::<(), AltsortError>::Ok(())
//! ```
//!
//! ### Defaults
//!
//! Every parameter is optional. Omitted bounds fall back to lengths in
//! `1..=100` and values spanning the full positive range of the float type:
//!
//! ```rust
//! use altsort::prelude::*;
//!
//! let result = Altsort::<f64>::new().build()?.run(4)?;
//!
//! assert_eq!(result.len(), 4);
//! # Result::<(), AltsortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `run` returns a `Result<SequenceSet<T>, AltsortError>`; the `?` operator
//! is idiomatic, but results can also be handled explicitly:
//!
//! ```rust
//! use altsort::prelude::*;
//!
//! let pipeline = Altsort::<f64>::new().min_size(1).max_size(3).build()?;
//!
//! // Only 3 distinct lengths exist in 1..=3, so 5 sequences are infeasible
//! match pipeline.run(5) {
//!     Ok(result) => println!("{}", result),
//!     Err(e) => eprintln!("generation failed: {}", e),
//! }
//! # Result::<(), AltsortError>::Ok(())
//! ```

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - ULP extraction and tolerant comparison.
mod math;

// Layer 3: Algorithms - sampling and the partition-exchange sort.
mod algorithms;

// Layer 4: Engine - orchestration, validation, and output types.
mod engine;

// High-level fluent API for sequence generation and sorting.
mod api;

// Standard altsort prelude.
pub mod prelude {
    pub use crate::api::{
        AltsortBuilder as Altsort, AltsortError, AltsortPipeline, SequenceSet, SortDirection,
        SortDirection::Ascending, SortDirection::Descending,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
